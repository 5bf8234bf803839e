use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

/// A failure in the glue around the scanner: reading input or loading a
/// report template. Lexical errors are never raised; they are counted.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    path: PathBuf,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, path: PathBuf) -> Self {
        Error {
            internal_error: error_impl,
            path,
        }
    }

    pub fn get_path(&self) -> &PathBuf {
        &self.path
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ReadSource { .. } => "ReadSource",
            ErrorImpl::ReadTemplate { .. } => "ReadTemplate",
            ErrorImpl::ParseTemplate { .. } => "ParseTemplate",
            ErrorImpl::UnknownCategory { .. } => "UnknownCategory",
            ErrorImpl::RenderReport { .. } => "RenderReport",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ReadSource { .. } => ErrorTip::Suggestion(String::from(
                "Check that the file exists and is valid UTF-8",
            )),
            ErrorImpl::ReadTemplate { .. } => ErrorTip::None,
            ErrorImpl::ParseTemplate { message } => ErrorTip::Suggestion(format!(
                "Templates are JSON objects mapping category names to labels: {}",
                message
            )),
            ErrorImpl::UnknownCategory { name } => ErrorTip::Suggestion(format!(
                "`{}` is not a token category, expected one of: {}",
                name,
                crate::category_names().join(", ")
            )),
            ErrorImpl::RenderReport { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.internal_error, self.path.to_string_lossy())
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("failed to read source: {message}")]
    ReadSource { message: String },
    #[error("failed to read report template: {message}")]
    ReadTemplate { message: String },
    #[error("invalid report template: {message}")]
    ParseTemplate { message: String },
    #[error("unknown token category {name:?}")]
    UnknownCategory { name: String },
    #[error("failed to render report: {message}")]
    RenderReport { message: String },
}
