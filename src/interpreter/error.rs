use compact_str::CompactString;
use thiserror::Error;

use super::value::Value;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeErrorKind {
    #[error("Undefined variable `{0}`.")]
    UndefinedVariable(CompactString),
    #[error("Undefined function `{0}`.")]
    UndefinedFunction(CompactString),
    #[error("Unknown operator `{0}`.")]
    UnknownOperator(CompactString),
    #[error("Function calls are not implemented; `{0}` cannot be invoked.")]
    NotImplemented(CompactString),
    #[error("Expected a number but found {0}.")]
    NonNumeric(Value),
    #[error("Division by zero.")]
    DivisionByZero,
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("[line {line}] {kind}")]
pub struct RuntimeError {
    #[source]
    pub kind: RuntimeErrorKind,
    pub line: u32,
}

impl RuntimeError {
    pub fn code(&self) -> &'static str {
        match self.kind {
            RuntimeErrorKind::UndefinedVariable(_) => "RT001",
            RuntimeErrorKind::UndefinedFunction(_) => "RT002",
            RuntimeErrorKind::UnknownOperator(_) => "RT003",
            RuntimeErrorKind::NotImplemented(_) => "RT004",
            RuntimeErrorKind::NonNumeric(_) => "RT005",
            RuntimeErrorKind::DivisionByZero => "RT006",
        }
    }
}
