use super::{error::ParserError, expression::Expression, statement::Statement};
use crate::lexer::LineBreaks;
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::fmt::Write;

const WRITE_FMT_MSG: &'static str =
    "Encountered an error while attempting to write format string to buffer.";
const ARIADNE_MSG: &'static str = "Ariadne produces valid utf-8 strings";
const ARIADNE_WRITE_MSG: &'static str = "Write into buffer should not fail.";

pub trait StatementFormatter {
    fn format(&self, statement: &Statement) -> String;
    fn format_error(&self, error: &ParserError) -> String;
}

pub struct DebugFormatter;

impl StatementFormatter for DebugFormatter {
    fn format(&self, statement: &Statement) -> String {
        format!("{statement:?}")
    }

    fn format_error(&self, error: &ParserError) -> String {
        format!("{error:?}")
    }
}

pub struct SExpressionFormatter;

impl SExpressionFormatter {
    fn format_expression(expression: &Expression) -> String {
        match expression {
            Expression::Number(value) => format!("{value}"),
            Expression::Variable(name) => format!("{name}"),
            Expression::Binary {
                operator,
                left,
                right,
            } => {
                format!(
                    "({operator} {} {})",
                    Self::format_expression(left),
                    Self::format_expression(right)
                )
            }
        }
    }

    fn format_statement(statement: &Statement) -> String {
        match statement {
            Statement::VariableDecl(decl) => {
                format!(
                    "(let {} {})",
                    decl.name,
                    Self::format_expression(&decl.initializer)
                )
            }
            Statement::FunctionDecl(decl) => {
                let mut buffer = format!("(func {} (", decl.name);
                for (index, parameter) in decl.parameters.iter().enumerate() {
                    if index > 0 {
                        buffer.push(' ');
                    }
                    write!(buffer, "{parameter}").expect(WRITE_FMT_MSG);
                }
                buffer.push(')');
                for statement in &decl.body {
                    write!(buffer, " {}", Self::format_statement(statement))
                        .expect(WRITE_FMT_MSG);
                }
                buffer.push(')');
                buffer
            }
            Statement::Return(stmt) => {
                format!("(return {})", Self::format_expression(&stmt.value))
            }
            Statement::Expression(stmt) => Self::format_expression(&stmt.expression),
        }
    }
}

impl StatementFormatter for SExpressionFormatter {
    fn format(&self, statement: &Statement) -> String {
        Self::format_statement(statement)
    }

    fn format_error(&self, error: &ParserError) -> String {
        format!("{error}")
    }
}

/// Renders parse errors as labelled reports against the original source.
pub struct PrettyFormatter<'src> {
    text: &'src str,
    path: &'src str,
    line_breaks: LineBreaks,
}

impl<'src> PrettyFormatter<'src> {
    pub fn new(text: &'src str, path: &'src str) -> Self {
        Self {
            text,
            path,
            line_breaks: LineBreaks::new(text),
        }
    }
}

impl StatementFormatter for PrettyFormatter<'_> {
    fn format(&self, statement: &Statement) -> String {
        SExpressionFormatter.format(statement)
    }

    fn format_error(&self, error: &ParserError) -> String {
        let span = self.line_breaks.get_span(error.line);
        let mut buffer = Vec::new();
        Report::build(ReportKind::Error, (self.path, span.clone()))
            .with_code(error.code())
            .with_message(error.kind.to_string())
            .with_label(
                Label::new((self.path, span))
                    .with_message("This line does not parse.")
                    .with_color(Color::BrightRed),
            )
            .finish()
            .write((self.path, Source::from(self.text)), &mut buffer)
            .expect(ARIADNE_WRITE_MSG);
        String::from_utf8(buffer).expect(ARIADNE_MSG)
    }
}
