//! ASCII character predicates used by the automaton.

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Space, tab and newline. Carriage returns and other control characters
/// are ordinary special characters.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Anything that is neither a letter nor a digit, including non-ASCII input.
pub fn is_special(c: char) -> bool {
    !is_letter(c) && !is_digit(c)
}
