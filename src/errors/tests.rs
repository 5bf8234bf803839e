//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use std::path::PathBuf;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::ReadSource {
            message: "No such file or directory".to_string(),
        },
        PathBuf::from("missing.txt"),
    );

    assert_eq!(error.get_error_name(), "ReadSource");
    assert_eq!(error.get_path(), &PathBuf::from("missing.txt"));
}

#[test]
fn test_error_names() {
    let cases = [
        (
            ErrorImpl::ReadTemplate {
                message: "denied".to_string(),
            },
            "ReadTemplate",
        ),
        (
            ErrorImpl::ParseTemplate {
                message: "expected value".to_string(),
            },
            "ParseTemplate",
        ),
        (
            ErrorImpl::UnknownCategory {
                name: "comments".to_string(),
            },
            "UnknownCategory",
        ),
        (
            ErrorImpl::RenderReport {
                message: "io".to_string(),
            },
            "RenderReport",
        ),
    ];

    for (error_impl, name) in cases {
        let error = Error::new(error_impl, PathBuf::from("template.json"));
        assert_eq!(error.get_error_name(), name);
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::ReadTemplate {
            message: "denied".to_string(),
        },
        PathBuf::from("template.json"),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_error_tip_lists_categories() {
    let error = Error::new(
        ErrorImpl::UnknownCategory {
            name: "comments".to_string(),
        },
        PathBuf::from("template.json"),
    );

    let tip = error.get_tip().to_string();
    assert!(tip.starts_with("`comments` is not a token category"));
    assert!(tip.contains("multilineComment"));
    assert!(tip.contains("lineComment"));
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnknownCategory {
            name: "comments".to_string(),
        },
        PathBuf::from("template.json"),
    );

    assert_eq!(
        error.to_string(),
        "unknown token category \"comments\" (template.json)"
    );
}
