use proptest::prelude::*;

use rill::lexer::{tokenize, LineBreaks};

#[test]
fn empty_source_has_no_lines() {
    assert!(tokenize("").is_empty());
}

#[test]
fn blank_and_whitespace_lines_are_discarded() {
    let lines = tokenize("\n   \n\t\nlet x = 1\n\n");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].number, 4);
    assert_eq!(lines[0].words, vec!["let", "x", "=", "1"]);
}

#[test]
fn runs_of_whitespace_collapse_into_single_splits() {
    let lines = tokenize("let   x\t=    10");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].words, vec!["let", "x", "=", "10"]);
}

#[test]
fn leading_and_trailing_whitespace_is_trimmed() {
    let lines = tokenize("   return x   ");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].words, vec!["return", "x"]);
}

#[test]
fn line_numbers_are_one_based_and_skip_blanks() {
    let lines = tokenize("let a = 1\n\nlet b = 2");
    let numbers: Vec<u32> = lines.iter().map(|line| line.number).collect();
    assert_eq!(numbers, vec![1, 3]);
}

#[test]
fn malformed_lines_still_tokenize() {
    // the tokenizer has no error conditions; rejection is the parser's job
    let lines = tokenize("let = = =");
    assert_eq!(lines[0].words, vec!["let", "=", "=", "="]);
}

#[test]
fn line_breaks_span_covers_each_line() {
    let source = "let a = 1\nlet b = 2\n";
    let breaks = LineBreaks::new(source);
    assert_eq!(breaks.get_max_line(), 2);
    assert_eq!(&source[breaks.get_span(1)], "let a = 1");
    assert_eq!(&source[breaks.get_span(2)], "let b = 2");
}

#[test]
fn line_breaks_clamp_out_of_range_lines() {
    let breaks = LineBreaks::new("let a = 1");
    assert_eq!(breaks.get_span(99), breaks.get_span(1));
}

// Property-based tests

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_+*/=-]{1,8}"
}

fn padding_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

proptest! {
    #[test]
    fn tokenized_words_match_the_source_words(
        rows in prop::collection::vec(prop::collection::vec(word_strategy(), 1..6), 0..8),
        pad in padding_strategy(),
    ) {
        let source = rows
            .iter()
            .map(|words| format!("{pad}{}{pad}", words.join("  ")))
            .collect::<Vec<_>>()
            .join("\n\n");
        let lines = tokenize(&source);
        prop_assert_eq!(lines.len(), rows.len());
        for (line, words) in lines.iter().zip(rows.iter()) {
            prop_assert_eq!(&line.words, words);
        }
    }

    #[test]
    fn no_tokenized_word_contains_whitespace(source in "\\PC*") {
        for line in tokenize(&source) {
            prop_assert!(!line.words.is_empty());
            for word in &line.words {
                prop_assert!(!word.chars().any(char::is_whitespace));
            }
        }
    }
}
