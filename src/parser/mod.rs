pub mod error;
pub mod expression;
pub mod formatter;
pub mod statement;

use crate::lexer::{tokenize, Line};
use compact_str::CompactString;
use error::{ParserError, ParserErrorKind};
use expression::{is_name, is_number, Expression};
use statement::{
    ExpressionStatement, FunctionDecl, Program, ReturnStatement, Statement, VariableDecl,
};

pub struct Parser {
    lines: Vec<Line>,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self {
            lines: tokenize(source),
        }
    }

    /// Parses every tokenized line into one statement.
    pub fn parse(&self) -> Result<Program, ParserError> {
        let mut statements = Vec::new();
        for line in &self.lines {
            statements.push(Self::parse_statement(&line.words, line.number)?);
        }
        Ok(Program::new(statements))
    }
}

// Statement dispatch on the first word of a line
impl Parser {
    fn parse_statement(words: &[CompactString], line: u32) -> Result<Statement, ParserError> {
        let Some(first) = words.first() else {
            return Err(ParserError {
                kind: ParserErrorKind::MalformedExpression(0),
                line,
            });
        };
        match first.as_str() {
            "let" => Self::parse_binding(words, line),
            "func" => Self::parse_function(words, line),
            "return" => Self::parse_return(words, line),
            _ => {
                let expression =
                    Self::parse_expression(words).map_err(|kind| ParserError { kind, line })?;
                Ok(Statement::Expression(ExpressionStatement {
                    expression,
                    line,
                }))
            }
        }
    }

    /// `let <name> = <expr...>`. Only the token count is validated; the
    /// `=` itself is never checked.
    fn parse_binding(words: &[CompactString], line: u32) -> Result<Statement, ParserError> {
        if words.len() < 4 {
            return Err(ParserError {
                kind: ParserErrorKind::MalformedBinding,
                line,
            });
        }
        let initializer =
            Self::parse_expression(&words[3..]).map_err(|kind| ParserError { kind, line })?;
        Ok(Statement::VariableDecl(VariableDecl {
            name: words[1].clone(),
            initializer,
            line,
        }))
    }

    fn parse_return(words: &[CompactString], line: u32) -> Result<Statement, ParserError> {
        if words.len() < 2 {
            return Err(ParserError {
                kind: ParserErrorKind::MalformedReturn,
                line,
            });
        }
        let value =
            Self::parse_expression(&words[1..]).map_err(|kind| ParserError { kind, line })?;
        Ok(Statement::Return(ReturnStatement { value, line }))
    }

    /// `func <name>(<params>) { <statement> }`, all on one declaration
    /// line. The words after `func` are rejoined so a parameter list
    /// glued to the name (`add(a, b)`) and a spaced one (`add (a,b)`)
    /// parse the same way.
    fn parse_function(words: &[CompactString], line: u32) -> Result<Statement, ParserError> {
        let malformed = || ParserError {
            kind: ParserErrorKind::MalformedFunction,
            line,
        };
        if words.len() < 2 {
            return Err(malformed());
        }
        let text = words[1..].join(" ");
        let open = text.find('(').ok_or_else(malformed)?;
        let close = text
            .find(')')
            .filter(|close| *close > open)
            .ok_or_else(malformed)?;

        let name = text[..open].trim();
        if !is_name(name) {
            return Err(malformed());
        }
        let parameters: Vec<CompactString> = text[open + 1..close]
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(CompactString::from)
            .collect();

        let body = Self::parse_body(text[close + 1..].trim(), line)?;

        Ok(Statement::FunctionDecl(FunctionDecl {
            name: name.into(),
            parameters,
            body,
            line,
        }))
    }

    /// Function bodies are restricted to at most one statement between
    /// braces on the declaration line. A body spanning further source
    /// lines has no delimiter in this grammar and is rejected rather
    /// than guessed at.
    fn parse_body(text: &str, line: u32) -> Result<Vec<Statement>, ParserError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let interior = text
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or(ParserError {
                kind: ParserErrorKind::MalformedFunction,
                line,
            })?
            .trim();
        if interior.is_empty() {
            return Ok(Vec::new());
        }
        let words: Vec<CompactString> = interior
            .split_whitespace()
            .map(CompactString::from)
            .collect();
        Ok(vec![Self::parse_statement(&words, line)?])
    }
}

// Window-based expression parsing
impl Parser {
    /// Parses one expression window: a single literal or name, or exactly
    /// three words forming `<operand> <operator> <operand>`. Operands are
    /// parsed recursively as standalone single-token windows, so there is
    /// no operator precedence and no parenthesis handling. Any other
    /// arity is malformed.
    pub fn parse_expression(window: &[CompactString]) -> Result<Expression, ParserErrorKind> {
        match window {
            [word] => {
                if is_number(word) {
                    word.parse::<i64>()
                        .map(Expression::Number)
                        .map_err(|_| ParserErrorKind::NumberOutOfRange(word.clone()))
                } else if is_name(word) {
                    Ok(Expression::Variable(word.clone()))
                } else {
                    Err(ParserErrorKind::MalformedExpression(1))
                }
            }
            [left, operator, right] => {
                let left = Self::parse_expression(std::slice::from_ref(left))?;
                let right = Self::parse_expression(std::slice::from_ref(right))?;
                Ok(Expression::Binary {
                    operator: operator.clone(),
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
            _ => Err(ParserErrorKind::MalformedExpression(window.len())),
        }
    }
}
