pub mod formatter;

use compact_str::CompactString;
use std::{ops::Range, rc::Rc};

/// One non-blank source line split into whitespace-delimited words.
///
/// `number` is the 1-based line in the original source so later stages can
/// attribute errors to the line they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: u32,
    pub words: Vec<CompactString>,
}

/// Splits source text into per-line word sequences.
///
/// Each line is trimmed and blank lines are discarded. There are no error
/// conditions here: a malformed line simply produces a word sequence that
/// the parser rejects.
pub fn tokenize(source: &str) -> Vec<Line> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, text)| {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(Line {
                number: (index + 1) as u32,
                words: trimmed
                    .split_whitespace()
                    .map(CompactString::from)
                    .collect(),
            })
        })
        .collect()
}

/// Byte ranges of each source line, used to map a line number back to a
/// span when rendering diagnostics.
#[derive(Debug, Clone)]
pub struct LineBreaks {
    ranges: Rc<[Range<usize>]>,
}

impl LineBreaks {
    pub fn new(text: &str) -> Self {
        let mut ranges = Vec::new();
        let mut cursor = 0usize;
        for segment in text.split_inclusive('\n') {
            let end = cursor + segment.len();
            let label_end = cursor + segment.trim_end_matches(['\n', '\r']).len();
            ranges.push(cursor..label_end);
            cursor = end;
        }
        if ranges.is_empty() {
            ranges.push(0..0);
        }
        Self {
            ranges: ranges.into(),
        }
    }

    pub fn get_max_line(&self) -> u32 {
        self.ranges.len() as u32
    }

    /// Byte range of the given 1-based line, clamped to the last line.
    pub fn get_span(&self, line: u32) -> Range<usize> {
        let index = (line.max(1) as usize - 1).min(self.ranges.len() - 1);
        self.ranges[index].clone()
    }
}
