use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashSet;
use strum::{Display, EnumCount, EnumIter, EnumString};

use super::{chars::is_whitespace, states::State};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("break");
        set.insert("case");
        set.insert("catch");
        set.insert("class");
        set.insert("const");
        set.insert("continue");
        set.insert("debugger");
        set.insert("default");
        set.insert("delete");
        set.insert("do");
        set.insert("else");
        set.insert("export");
        set.insert("extends");
        set.insert("false");
        set.insert("finally");
        set.insert("for");
        set.insert("function");
        set.insert("if");
        set.insert("import");
        set.insert("in");
        set.insert("instanceof");
        set.insert("let");
        set.insert("new");
        set.insert("null");
        set.insert("return");
        set.insert("super");
        set.insert("switch");
        set.insert("this");
        set.insert("throw");
        set.insert("true");
        set.insert("try");
        set.insert("typeof");
        set.insert("var");
        set.insert("void");
        set.insert("while");
        set.insert("with");
        set.insert("yield");
        set
    };
}

/// Token categories, declared in report order.
#[derive(
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Clone,
    Copy,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    Serialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Keyword,
    Identifier,
    RelationalOperator,
    LogicalOperator,
    ArithmeticOperator,
    Assignment,
    Integer,
    Decimal,
    Increment,
    Decrement,
    String,
    MultilineComment,
    LineComment,
    Parenthesis,
    Brace,
    Error,
}

impl Category {
    pub fn index(self) -> usize {
        self as usize
    }
}

pub fn is_keyword(lexeme: &str) -> bool {
    RESERVED_LOOKUP.contains(lexeme)
}

/// Maps a completed lexeme and the state the automaton stopped in to its
/// category. Returns `None` for blank lexemes, which are never counted.
pub fn classify(lexeme: &str, state: State) -> Option<Category> {
    if lexeme.trim_matches(is_whitespace).is_empty() {
        return None;
    }

    if !state.is_accepting() {
        return Some(Category::Error);
    }

    let category = match state {
        State::Identifier => {
            if is_keyword(lexeme) {
                Category::Keyword
            } else {
                Category::Identifier
            }
        }
        State::Integer => Category::Integer,
        State::Decimal => Category::Decimal,
        State::String => Category::String,
        State::Increment => Category::Increment,
        State::Decrement => Category::Decrement,
        State::MultilineClosed => Category::MultilineComment,
        State::LineComment => Category::LineComment,
        State::Plus | State::Minus | State::Star | State::Slash | State::Percent => {
            Category::ArithmeticOperator
        }
        State::Not | State::AndAnd | State::OrOr => Category::LogicalOperator,
        State::Relational | State::RelationalEqual => Category::RelationalOperator,
        State::Assignment => Category::Assignment,
        State::Brace => Category::Brace,
        State::Parenthesis => Category::Parenthesis,
        _ => Category::Error,
    };

    Some(category)
}
