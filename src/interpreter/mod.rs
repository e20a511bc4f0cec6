pub mod environment;
pub mod error;
pub mod formatter;
pub mod value;

use std::rc::Rc;

use thiserror::Error;

use crate::parser::{
    error::ParserError,
    expression::Expression,
    statement::{ExpressionStatement, FunctionDecl, Program, ReturnStatement, Statement, VariableDecl},
    Parser,
};
use environment::Environment;
use error::{RuntimeError, RuntimeErrorKind};
use value::{BinaryOperator, Function, Value};

/// Per-statement outcome. Declarations produce a new environment
/// snapshot, bare expressions produce the line's value and leave the
/// environment untouched, and `return` raises the non-local return
/// signal.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgramState {
    Run(Environment),
    Value(Value),
    Return(Value),
}

/// Result of evaluating a statement sequence: either the fold ran to the
/// end and produced a final environment, or a `return` stopped it early
/// with a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Finished(Environment),
    Returned(Value),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterpretError {
    #[error(transparent)]
    Parser(#[from] ParserError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Tokenizes, parses and runs one program against an empty environment.
pub fn interpret(source: &str) -> Result<Completion, InterpretError> {
    let program = Parser::new(source).parse()?;
    Ok(TreeWalkInterpreter::new().run(&program)?)
}

#[derive(Debug, Default)]
pub struct TreeWalkInterpreter;

impl TreeWalkInterpreter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn run(&self, program: &Program) -> Result<Completion, RuntimeError> {
        self.run_sequence(program.statements(), Environment::new())
    }

    /// Folds statement evaluation left-to-right, threading environment
    /// snapshots forward. A `return` signal stops the fold immediately
    /// and becomes the sequence's result.
    pub fn run_sequence(
        &self,
        statements: &[Statement],
        environment: Environment,
    ) -> Result<Completion, RuntimeError> {
        let mut environment = environment;
        for statement in statements {
            match self.interpret_statement(statement, &environment)? {
                ProgramState::Run(next) => environment = next,
                ProgramState::Value(_) => {}
                ProgramState::Return(value) => return Ok(Completion::Returned(value)),
            }
        }
        Ok(Completion::Finished(environment))
    }

    pub fn interpret_statement(
        &self,
        statement: &Statement,
        environment: &Environment,
    ) -> Result<ProgramState, RuntimeError> {
        match statement {
            Statement::VariableDecl(decl) => {
                self.interpret_variable_declaration(decl, environment)
            }
            Statement::FunctionDecl(decl) => {
                self.interpret_function_declaration(decl, environment)
            }
            Statement::Return(stmt) => self.interpret_return_statement(stmt, environment),
            Statement::Expression(stmt) => self.interpret_expression_statement(stmt, environment),
        }
    }

    fn interpret_variable_declaration(
        &self,
        decl: &VariableDecl,
        environment: &Environment,
    ) -> Result<ProgramState, RuntimeError> {
        let value = self
            .evaluate(&decl.initializer, environment)
            .map_err(|kind| RuntimeError {
                kind,
                line: decl.line,
            })?;
        Ok(ProgramState::Run(environment.define(&decl.name, value)))
    }

    fn interpret_function_declaration(
        &self,
        decl: &FunctionDecl,
        environment: &Environment,
    ) -> Result<ProgramState, RuntimeError> {
        let function = Function::from_declaration(decl);
        Ok(ProgramState::Run(
            environment.define(&decl.name, Value::Function(Rc::new(function))),
        ))
    }

    fn interpret_return_statement(
        &self,
        stmt: &ReturnStatement,
        environment: &Environment,
    ) -> Result<ProgramState, RuntimeError> {
        let value = self
            .evaluate(&stmt.value, environment)
            .map_err(|kind| RuntimeError {
                kind,
                line: stmt.line,
            })?;
        Ok(ProgramState::Return(value))
    }

    /// A bare name on its own line is a call-site placeholder. The name
    /// must resolve, and the call itself always fails: invocation has no
    /// semantics in this language.
    fn interpret_expression_statement(
        &self,
        stmt: &ExpressionStatement,
        environment: &Environment,
    ) -> Result<ProgramState, RuntimeError> {
        let line = stmt.line;
        match &stmt.expression {
            Expression::Variable(name) => {
                if environment.access(name).is_none() {
                    return Err(RuntimeError {
                        kind: RuntimeErrorKind::UndefinedFunction(name.clone()),
                        line,
                    });
                }
                Err(RuntimeError {
                    kind: RuntimeErrorKind::NotImplemented(name.clone()),
                    line,
                })
            }
            expression => {
                let value = self
                    .evaluate(expression, environment)
                    .map_err(|kind| RuntimeError { kind, line })?;
                Ok(ProgramState::Value(value))
            }
        }
    }

    /// Both operands are evaluated before the operator lexeme is
    /// resolved, so an undefined operand wins over an unknown operator.
    pub fn evaluate(
        &self,
        expression: &Expression,
        environment: &Environment,
    ) -> Result<Value, RuntimeErrorKind> {
        match expression {
            Expression::Number(value) => Ok(Value::Number(*value)),
            Expression::Variable(name) => environment
                .access(name)
                .cloned()
                .ok_or_else(|| RuntimeErrorKind::UndefinedVariable(name.clone())),
            Expression::Binary {
                operator,
                left,
                right,
            } => {
                let lhs = self.evaluate(left, environment)?.as_number()?;
                let rhs = self.evaluate(right, environment)?.as_number()?;
                let operator = BinaryOperator::from_lexeme(operator)
                    .ok_or_else(|| RuntimeErrorKind::UnknownOperator(operator.clone()))?;
                operator.apply(lhs, rhs).map(Value::Number)
            }
        }
    }
}
