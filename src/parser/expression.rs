use compact_str::CompactString;

/// An expression parsed from a token window: a single literal or name, or
/// exactly three words forming a binary operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(i64),
    Variable(CompactString),
    Binary {
        /// Raw operator lexeme. Membership in the supported operator set
        /// is resolved at evaluation time, not here.
        operator: CompactString,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

/// A word made of ASCII digits only.
pub fn is_number(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

/// A word made of word characters only (letters, digits, underscore).
pub fn is_name(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
