use std::fmt::Display;

use strum::EnumIter;

use super::chars::{is_digit, is_letter, is_special, is_whitespace};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, EnumIter)]
pub enum State {
    Start,

    Identifier,
    Integer,
    DecimalPoint, // 12.
    Decimal,

    StringOpen,    // "
    StringContent, // "abc
    String,        // "abc"

    Plus,      // +
    Minus,     // -
    Star,      // *
    Slash,     // /
    Percent,   // %
    Increment, // ++
    Decrement, // --

    LineComment,      // //...
    MultilineComment, // /*...
    MultilineStar,    // /*...*
    MultilineClosed,  // /*...*/

    Not,    // !
    And,    // &
    AndAnd, // &&
    Or,     // |
    OrOr,   // ||

    Assignment,      // =
    Relational,      // < >
    RelationalEqual, // == != <= >=

    Brace,       // { }
    Parenthesis, // ( )

    Error,
}

/// States a lexeme may end in and still be classified as a valid token.
pub const ACCEPTING_STATES: &[State] = &[
    State::Identifier,
    State::Integer,
    State::Decimal,
    State::String,
    State::Plus,
    State::Minus,
    State::Star,
    State::Slash,
    State::Percent,
    State::Increment,
    State::Decrement,
    State::LineComment,
    State::MultilineClosed,
    State::Not,
    State::AndAnd,
    State::OrOr,
    State::Assignment,
    State::Relational,
    State::RelationalEqual,
    State::Brace,
    State::Parenthesis,
];

impl State {
    pub fn is_accepting(self) -> bool {
        ACCEPTING_STATES.contains(&self)
    }

    /// Whether whitespace `c` belongs to the current lexeme instead of
    /// ending it. Only comments span whitespace: a line comment runs until
    /// the end of the line, a multiline comment until its closing `*/`.
    pub fn absorbs(self, c: char) -> bool {
        match self {
            State::LineComment => c == ' ' || c == '\t',
            State::MultilineComment | State::MultilineStar => is_whitespace(c),
            _ => false,
        }
    }

    /// Whether `c` ends the lexeme being built in this state.
    pub fn is_boundary(self, c: char) -> bool {
        is_whitespace(c) && !self.absorbs(c)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The transition function of the automaton.
///
/// Whitespace that the state does not absorb returns to [`State::Start`];
/// the scanner treats such characters as lexeme boundaries and never feeds
/// them here, but the function stays total so it can be checked over every
/// state and character class.
pub fn transition(state: State, c: char) -> State {
    if state == State::Error {
        return State::Error;
    }

    if is_whitespace(c) && !state.absorbs(c) {
        return State::Start;
    }

    match state {
        State::Start => from_start(c),

        State::Identifier => match c {
            '_' => State::Identifier,
            c if is_special(c) => State::Error,
            _ => State::Identifier,
        },

        State::Integer => match c {
            '.' => State::DecimalPoint,
            c if is_letter(c) || is_special(c) => State::Error,
            _ => State::Integer,
        },

        State::DecimalPoint | State::Decimal => match c {
            c if is_digit(c) => State::Decimal,
            _ => State::Error,
        },

        State::StringOpen | State::StringContent | State::String => match c {
            '"' => State::String,
            _ => State::StringContent,
        },

        State::Minus => match c {
            c if is_digit(c) => State::Integer,
            '-' => State::Decrement,
            _ => State::Error,
        },

        State::Plus => pair(c, '+', State::Increment),
        State::And => pair(c, '&', State::AndAnd),
        State::Or => pair(c, '|', State::OrOr),
        State::Not | State::Assignment | State::Relational => pair(c, '=', State::RelationalEqual),

        State::Slash => match c {
            '*' => State::MultilineComment,
            '/' => State::LineComment,
            _ => State::Error,
        },

        State::MultilineComment => match c {
            '*' => State::MultilineStar,
            _ => State::MultilineComment,
        },

        State::MultilineStar => match c {
            '*' => State::MultilineStar,
            '/' => State::MultilineClosed,
            _ => State::MultilineComment,
        },

        State::LineComment => State::LineComment,

        State::Star
        | State::Percent
        | State::Increment
        | State::Decrement
        | State::AndAnd
        | State::OrOr
        | State::RelationalEqual
        | State::MultilineClosed
        | State::Brace
        | State::Parenthesis => State::Error,

        State::Error => State::Error,
    }
}

fn from_start(c: char) -> State {
    match c {
        c if is_letter(c) || c == '_' => State::Identifier,
        c if is_digit(c) => State::Integer,
        '"' => State::StringOpen,
        '-' => State::Minus,
        '+' => State::Plus,
        '/' => State::Slash,
        '*' => State::Star,
        '%' => State::Percent,
        '!' => State::Not,
        '&' => State::And,
        '|' => State::Or,
        '=' => State::Assignment,
        '{' | '}' => State::Brace,
        '(' | ')' => State::Parenthesis,
        '<' | '>' => State::Relational,
        _ => State::Error,
    }
}

// An operator may only be followed by its exact pairing character.
fn pair(c: char, expected: char, combined: State) -> State {
    if c == expected {
        combined
    } else {
        State::Error
    }
}
