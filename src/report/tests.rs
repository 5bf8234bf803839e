//! Unit tests for result accumulation and report rendering.

use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

use super::{
    counts::Counts,
    report::{format_json, format_report, render, ReportFormat},
    template::{Locale, ReportTemplate},
};
use crate::{errors::errors::ErrorImpl, lexer::tokens::Category};

fn sample_counts() -> Counts {
    let mut counts = Counts::new();
    counts.increment(Category::Keyword);
    counts.increment(Category::Identifier);
    counts.increment(Category::Identifier);
    counts.increment(Category::Error);
    counts
}

#[test]
fn test_counts_start_at_zero() {
    let counts = Counts::new();
    assert!(counts.is_empty());
    assert_eq!(counts.total(), 0);
    assert!(counts.iter().all(|(_, count)| count == 0));
}

#[test]
fn test_counts_increment() {
    let counts = sample_counts();
    assert_eq!(counts.get(Category::Keyword), 1);
    assert_eq!(counts.get(Category::Identifier), 2);
    assert_eq!(counts.get(Category::Error), 1);
    assert_eq!(counts.get(Category::Brace), 0);
    assert_eq!(counts.total(), 4);
}

#[test]
fn test_counts_iterate_in_report_order() {
    let order: Vec<Category> = Counts::new().iter().map(|(category, _)| category).collect();
    assert_eq!(order, Category::iter().collect::<Vec<_>>());
    assert_eq!(order.first(), Some(&Category::Keyword));
    assert_eq!(order.last(), Some(&Category::Error));
    assert_eq!(order.len(), 16);
}

#[test]
fn test_counts_merge() {
    let mut total = sample_counts();
    total += &sample_counts();
    assert_eq!(total.get(Category::Identifier), 4);
    assert_eq!(total.total(), 8);
}

#[test]
fn test_category_names() {
    assert_eq!(Category::MultilineComment.to_string(), "multilineComment");
    assert_eq!(Category::ArithmeticOperator.to_string(), "arithmeticOperator");
    assert_eq!("lineComment".parse::<Category>().unwrap(), Category::LineComment);
    assert!("comments".parse::<Category>().is_err());
}

#[test]
fn test_format_report_english() {
    let report = format_report(&sample_counts(), &ReportTemplate::default());
    let expected = "\
Keywords : 1
Identifiers : 2
Relational operators : 0
Logical operators : 0
Arithmetic operators : 0
Assignments : 0
Integers : 0
Decimal numbers : 0
Increments : 0
Decrements : 0
Strings : 0
Comments : 0
Line comments : 0
Parentheses : 0
Braces : 0
Errors : 1
";
    assert_eq!(report, expected);
}

#[test]
fn test_format_report_spanish() {
    let template = ReportTemplate::for_locale(Locale::Es);
    let report = format_report(&sample_counts(), &template);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines.len(), 16);
    assert_eq!(lines[0], "Palabras reservadas : 1");
    assert_eq!(lines[1], "Identificadores : 2");
    assert_eq!(lines[15], "Errores : 1");
}

#[test]
fn test_template_overrides() {
    let template = ReportTemplate::default()
        .with_overrides(r#"{"keyword": "Reserved words", "error": "Invalid"}"#)
        .unwrap();

    assert_eq!(template.label(Category::Keyword), "Reserved words");
    assert_eq!(template.label(Category::Error), "Invalid");
    assert_eq!(template.label(Category::Brace), "Braces");
}

#[test]
fn test_template_rejects_unknown_category() {
    let error = ReportTemplate::default()
        .with_overrides(r#"{"comments": "Comments"}"#)
        .unwrap_err();

    assert_eq!(
        error,
        ErrorImpl::UnknownCategory {
            name: "comments".to_string()
        }
    );
}

#[test]
fn test_template_rejects_malformed_json() {
    let error = ReportTemplate::default()
        .with_overrides("[\"keyword\"]")
        .unwrap_err();

    assert!(matches!(error, ErrorImpl::ParseTemplate { .. }));
}

#[test]
fn test_locale_parse() {
    assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
    assert_eq!("es".parse::<Locale>().unwrap(), Locale::Es);
    assert!("fr".parse::<Locale>().is_err());
}

#[test]
fn test_format_json() {
    let json = format_json(&sample_counts()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["keyword"], 1);
    assert_eq!(value["identifier"], 2);
    assert_eq!(value["multilineComment"], 0);
    assert_eq!(value["error"], 1);
    assert_eq!(value.as_object().unwrap().len(), 16);
}

#[test]
fn test_render_dispatches_on_format() {
    let counts = sample_counts();
    let template = ReportTemplate::default();

    assert_eq!(
        render(&counts, &template, ReportFormat::Text).unwrap(),
        format_report(&counts, &template)
    );
    assert_eq!(
        render(&counts, &template, ReportFormat::Json).unwrap(),
        format_json(&counts).unwrap()
    );
    assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
}
