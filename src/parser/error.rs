use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParserErrorKind {
    #[error("Expected an expression of one or three tokens but found {0}.")]
    MalformedExpression(usize),
    #[error("Numeric literal `{0}` does not fit in an integer.")]
    NumberOutOfRange(CompactString),
    #[error("Expected `let <name> = <expression>`.")]
    MalformedBinding,
    #[error("Expected `func <name>(<parameters>) {{ <statement> }}` on a single line.")]
    MalformedFunction,
    #[error("Expected `return <expression>`.")]
    MalformedReturn,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("[line {line}] {kind}")]
pub struct ParserError {
    #[source]
    pub kind: ParserErrorKind,
    pub line: u32,
}

impl ParserError {
    pub fn code(&self) -> &'static str {
        match self.kind {
            ParserErrorKind::MalformedExpression(_) => "P001",
            ParserErrorKind::NumberOutOfRange(_) => "P002",
            ParserErrorKind::MalformedBinding => "P003",
            ParserErrorKind::MalformedFunction => "P004",
            ParserErrorKind::MalformedReturn => "P005",
        }
    }
}
