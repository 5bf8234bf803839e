use tracing::{debug, trace};

use crate::report::counts::Counts;

use super::{
    states::{transition, State},
    tokens::{classify, Category},
};

/// Scanner state between two characters: the automaton state, the lexeme
/// read since the last boundary and the tallies so far.
///
/// Each step consumes the lexer and returns the next one, so a text can be
/// fed in arbitrary chunks and resumed from the value alone.
#[derive(Debug, Clone)]
pub struct Lexer {
    state: State,
    lexeme: String,
    counts: Counts,
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer {
            state: State::Start,
            lexeme: String::new(),
            counts: Counts::new(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn counts(&self) -> &Counts {
        &self.counts
    }

    pub fn step(self, c: char) -> Lexer {
        let Lexer {
            state,
            mut lexeme,
            mut counts,
        } = self;

        if state.is_boundary(c) {
            commit(&lexeme, state, &mut counts);
            lexeme.clear();
            return Lexer {
                state: State::Start,
                lexeme,
                counts,
            };
        }

        lexeme.push(c);
        Lexer {
            state: transition(state, c),
            lexeme,
            counts,
        }
    }

    pub fn feed(self, chunk: &str) -> Lexer {
        chunk.chars().fold(self, Lexer::step)
    }

    /// Commits whatever lexeme is still open and returns the tallies.
    pub fn finish(self) -> Counts {
        let Lexer {
            state,
            lexeme,
            mut counts,
        } = self;

        commit(&lexeme, state, &mut counts);
        counts
    }
}

fn commit(lexeme: &str, state: State, counts: &mut Counts) {
    if let Some(category) = classify(lexeme, state) {
        trace!(lexeme, %state, %category, "lexeme committed");
        counts.increment(category);
    }
}

/// Scans `source` once and returns how many lexemes fell in each category.
pub fn tokenize(source: &str) -> Counts {
    let counts = Lexer::new().feed(source).finish();

    debug!(
        chars = source.len(),
        lexemes = counts.total(),
        errors = counts.get(Category::Error),
        "scan finished"
    );

    counts
}
