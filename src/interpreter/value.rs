use std::rc::Rc;

use compact_str::CompactString;

use crate::parser::statement::{FunctionDecl, Statement};

use super::error::RuntimeErrorKind;

/// A declared function, stored in the environment as a value. Functions
/// are never invoked; call sites fail at evaluation time instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: CompactString,
    pub parameters: Vec<CompactString>,
    pub body: Vec<Statement>,
}

impl Function {
    pub fn from_declaration(declaration: &FunctionDecl) -> Self {
        Self {
            name: declaration.name.clone(),
            parameters: declaration.parameters.clone(),
            body: declaration.body.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(i64),
    Function(Rc<Function>),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{v}"),
            Value::Function(_) => write!(f, "<function>"),
        }
    }
}

impl Value {
    pub fn as_number(&self) -> Result<i64, RuntimeErrorKind> {
        match self {
            Value::Number(v) => Ok(*v),
            v => Err(RuntimeErrorKind::NonNumeric(v.clone())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Resolves a raw operator lexeme. Anything outside the supported
    /// set is unknown; the parser stores lexemes untouched so the check
    /// happens here, at evaluation time.
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn apply(&self, lhs: i64, rhs: i64) -> Result<i64, RuntimeErrorKind> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0 {
                    Err(RuntimeErrorKind::DivisionByZero)
                } else {
                    Ok(lhs.wrapping_div(rhs))
                }
            }
        }
    }
}
