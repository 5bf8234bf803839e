#![allow(clippy::module_inception)]

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use strum::IntoEnumIterator;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Category,
    report::{
        counts::Counts,
        template::{Locale, ReportTemplate},
    },
};

pub mod errors;
pub mod lexer;
pub mod report;

pub use lexer::lexer::tokenize;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

pub fn category_names() -> Vec<String> {
    Category::iter().map(|category| category.to_string()).collect()
}

/// Reads a whole source text from `path`, or from stdin when the path is `-`.
pub fn read_source(path: &Path) -> Result<String, Error> {
    let read = if path == Path::new(STDIN_PATH) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        fs::read_to_string(path)
    };

    read.map_err(|e| {
        Error::new(
            ErrorImpl::ReadSource {
                message: e.to_string(),
            },
            path.to_path_buf(),
        )
    })
}

/// Builds the report template for `locale`, with labels from the JSON file
/// at `overrides` taking precedence.
pub fn load_template(locale: Locale, overrides: Option<&Path>) -> Result<ReportTemplate, Error> {
    let template = ReportTemplate::for_locale(locale);

    let Some(path) = overrides else {
        return Ok(template);
    };

    debug!("Loading report template from {:?}", path);

    let json = fs::read_to_string(path).map_err(|e| {
        Error::new(
            ErrorImpl::ReadTemplate {
                message: e.to_string(),
            },
            path.to_path_buf(),
        )
    })?;

    template
        .with_overrides(&json)
        .map_err(|e| Error::new(e, path.to_path_buf()))
}

/// Reads and scans one source.
pub fn analyze_file(path: &Path) -> Result<Counts, Error> {
    let source = read_source(path)?;
    debug!("Read {} bytes from {:?}", source.len(), path);
    Ok(tokenize(&source))
}

/// Scans each source and returns the per-source counts alongside their sum.
pub fn analyze_files(paths: &[PathBuf]) -> Result<(Vec<(PathBuf, Counts)>, Counts), Error> {
    let mut results = Vec::with_capacity(paths.len());
    let mut total = Counts::new();

    for path in paths {
        let counts = analyze_file(path)?;
        total += &counts;
        results.push((path.clone(), counts));
    }

    Ok((results, total))
}
