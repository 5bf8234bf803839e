use std::{collections::HashMap, str::FromStr};

use strum::EnumString;

use crate::{errors::errors::ErrorImpl, lexer::tokens::Category};

const ENGLISH: &[(Category, &str)] = &[
    (Category::Keyword, "Keywords"),
    (Category::Identifier, "Identifiers"),
    (Category::RelationalOperator, "Relational operators"),
    (Category::LogicalOperator, "Logical operators"),
    (Category::ArithmeticOperator, "Arithmetic operators"),
    (Category::Assignment, "Assignments"),
    (Category::Integer, "Integers"),
    (Category::Decimal, "Decimal numbers"),
    (Category::Increment, "Increments"),
    (Category::Decrement, "Decrements"),
    (Category::String, "Strings"),
    (Category::MultilineComment, "Comments"),
    (Category::LineComment, "Line comments"),
    (Category::Parenthesis, "Parentheses"),
    (Category::Brace, "Braces"),
    (Category::Error, "Errors"),
];

const SPANISH: &[(Category, &str)] = &[
    (Category::Keyword, "Palabras reservadas"),
    (Category::Identifier, "Identificadores"),
    (Category::RelationalOperator, "Operadores Relacionales"),
    (Category::LogicalOperator, "Operadores Lógicos"),
    (Category::ArithmeticOperator, "Operadores Aritméticos"),
    (Category::Assignment, "Asignaciones"),
    (Category::Integer, "Números Enteros"),
    (Category::Decimal, "Números Decimales"),
    (Category::Increment, "Incremento"),
    (Category::Decrement, "Decremento"),
    (Category::String, "Cadena de caracteres"),
    (Category::MultilineComment, "Comentario"),
    (Category::LineComment, "Comentario de Linea"),
    (Category::Parenthesis, "Paréntesis"),
    (Category::Brace, "Llaves"),
    (Category::Error, "Errores"),
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

/// Human-readable labels for each category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTemplate {
    labels: HashMap<Category, String>,
}

impl Default for ReportTemplate {
    fn default() -> Self {
        ReportTemplate::for_locale(Locale::default())
    }
}

impl ReportTemplate {
    pub fn for_locale(locale: Locale) -> Self {
        let table = match locale {
            Locale::En => ENGLISH,
            Locale::Es => SPANISH,
        };

        ReportTemplate {
            labels: table
                .iter()
                .map(|(category, label)| (*category, label.to_string()))
                .collect(),
        }
    }

    pub fn label(&self, category: Category) -> &str {
        self.labels
            .get(&category)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn set_label(&mut self, category: Category, label: impl Into<String>) {
        self.labels.insert(category, label.into());
    }

    /// Replaces labels with the ones named in a JSON object such as
    /// `{"keyword": "Reserved words"}`. Categories left out keep their label.
    pub fn with_overrides(mut self, json: &str) -> Result<Self, ErrorImpl> {
        let overrides: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| ErrorImpl::ParseTemplate {
                message: e.to_string(),
            })?;

        for (name, label) in overrides {
            let category = Category::from_str(&name)
                .map_err(|_| ErrorImpl::UnknownCategory { name: name.clone() })?;
            self.set_label(category, label);
        }

        Ok(self)
    }
}
