use super::Line;
use std::fmt::Write;

const WRITE_FMT_MSG: &'static str =
    "Encountered an error while attempting to write format string to buffer.";

/// Interface for creating new token formatters.
pub trait TokenFormatter {
    /// Formats one tokenized line into a string.
    fn format(&self, line: &Line) -> String;
}

pub struct DebugFormatter;

impl TokenFormatter for DebugFormatter {
    fn format(&self, line: &Line) -> String {
        format!("{line:?}")
    }
}

pub struct BasicFormatter;

impl TokenFormatter for BasicFormatter {
    fn format(&self, line: &Line) -> String {
        let mut buffer = format!("[line {}]", line.number);
        for word in &line.words {
            write!(buffer, " {word}").expect(WRITE_FMT_MSG);
        }
        buffer
    }
}
