use super::{
    environment::Environment,
    error::{RuntimeError, RuntimeErrorKind},
    value::Value,
};
use crate::lexer::LineBreaks;
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::fmt::Write;

const WRITE_FMT_MSG: &'static str =
    "Encountered an error while attempting to write format string to buffer.";
const ARIADNE_MSG: &'static str = "Ariadne produces valid utf-8 strings";
const ARIADNE_WRITE_MSG: &'static str = "Write into buffer should not fail.";

pub trait ValueFormatter {
    fn format(&self, value: &Value) -> String;
    fn format_environment(&self, environment: &Environment) -> String;
    fn format_error(&self, error: &RuntimeError) -> String;
}

pub struct DebugFormatter;

impl ValueFormatter for DebugFormatter {
    fn format(&self, value: &Value) -> String {
        format!("{value:?}")
    }

    fn format_environment(&self, environment: &Environment) -> String {
        format!("{environment:?}")
    }

    fn format_error(&self, error: &RuntimeError) -> String {
        format!("{error:?}")
    }
}

pub struct BasicFormatter;

impl BasicFormatter {
    fn format_verbose(value: &Value) -> String {
        match value {
            Value::Number(v) => format!("Number({v})"),
            Value::Function(function) => format!("Function({})", function.name),
        }
    }
}

impl ValueFormatter for BasicFormatter {
    fn format(&self, value: &Value) -> String {
        format!("{value}")
    }

    /// Bindings sorted by name so output is deterministic.
    fn format_environment(&self, environment: &Environment) -> String {
        let mut bindings: Vec<_> = environment.iter().collect();
        bindings.sort_by(|(left, _), (right, _)| left.cmp(right));
        let mut buffer = String::new();
        for (name, value) in bindings {
            writeln!(buffer, "{name} = {value}").expect(WRITE_FMT_MSG);
        }
        buffer
    }

    fn format_error(&self, error: &RuntimeError) -> String {
        format!("{error}")
    }
}

/// Renders runtime errors as labelled reports against the original
/// source.
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

impl ValueFormatter for PrettyFormatter<'_> {
    fn format(&self, value: &Value) -> String {
        BasicFormatter.format(value)
    }

    fn format_environment(&self, environment: &Environment) -> String {
        BasicFormatter.format_environment(environment)
    }

    fn format_error(&self, error: &RuntimeError) -> String {
        let label = match &error.kind {
            RuntimeErrorKind::UndefinedVariable(name) => {
                format!("`{name}` is not bound here")
            }
            RuntimeErrorKind::UndefinedFunction(name) => {
                format!("no function named `{name}` is in scope")
            }
            RuntimeErrorKind::UnknownOperator(operator) => {
                format!("`{operator}` is not one of `+ - * /`")
            }
            RuntimeErrorKind::NotImplemented(name) => {
                format!("`{name}` is declared but calls have no semantics")
            }
            RuntimeErrorKind::NonNumeric(value) => {
                format!(
                    "found {} where a number was needed",
                    BasicFormatter::format_verbose(value)
                )
            }
            RuntimeErrorKind::DivisionByZero => "the divisor evaluates to zero".to_string(),
        };

        let span = self.line_breaks.get_span(error.line);
        let mut buffer = Vec::new();
        Report::build(ReportKind::Error, (self.path, span.clone()))
            .with_code(error.code())
            .with_message(error.kind.to_string())
            .with_label(
                Label::new((self.path, span))
                    .with_message(label)
                    .with_color(Color::BrightRed),
            )
            .finish()
            .write((self.path, Source::from(self.text)), &mut buffer)
            .expect(ARIADNE_WRITE_MSG);
        String::from_utf8(buffer).expect(ARIADNE_MSG)
    }
}
