//! Composed single-pass drivers.
//!
//! This module wires the outer context scanner and the inner integer
//! classifier into the two user-facing operations: classifying every
//! integer literal in a source text, and stripping comments from it. Both
//! are strictly single-threaded, one pass, O(n) in input length, with at
//! most one bounded reprocess step per character.

use crate::context::{Action, ContextScanner, LexState};
use crate::cursor::Cursor;
use crate::number::{DelimiterSet, IntClassifier};
use crate::sink::TokenSink;

/// Runs the outer automaton over the whole source, applying `apply` to
/// every action. Handles the one-slot replay for a buffered slash and the
/// end-of-input flush. Returns the final context state.
fn drive<F: FnMut(Action)>(source: &str, mut apply: F) -> LexState {
    let mut scanner = ContextScanner::new();
    let mut cursor = Cursor::new(source);

    while !cursor.is_at_end() {
        let c = cursor.current_char();
        cursor.advance();
        match scanner.step(c) {
            Action::FlushSlash => {
                // The buffered '/' was ordinary code; reprocess c after it.
                // The second step cannot yield FlushSlash again, so the
                // replay is bounded by one step per character.
                apply(Action::Forward('/'));
                apply(scanner.step(c));
            },
            action => apply(action),
        }
    }

    if let Some(slash) = scanner.flush() {
        apply(Action::Forward(slash));
    }
    scanner.state()
}

/// Classifies every integer literal in `source`, emitting one record per
/// maximal token to `sink` in input order.
///
/// Comment content never reaches the classifier; string and character
/// literal content is skipped over untouched. Returns the final context
/// state so callers can detect an unterminated comment or literal at end
/// of input (the scan itself accepts those silently).
///
/// # Example
///
/// ```
/// use cscan_lex::{classify, DelimiterSet, TokenRecord};
///
/// let mut records: Vec<TokenRecord> = Vec::new();
/// classify("x = 0x1F + 08; /* 99 */", &DelimiterSet::new(), &mut records);
/// let lines: Vec<String> = records.iter().map(|r| r.to_string()).collect();
/// assert_eq!(lines, vec!["0x1F\tint", "08\tERROR"]);
/// ```
pub fn classify<S: TokenSink>(
    source: &str,
    delimiters: &DelimiterSet,
    sink: &mut S,
) -> LexState {
    let mut classifier = IntClassifier::new(*delimiters);

    let state = drive(source, |action| match action {
        Action::Forward(c) => {
            if let Some(record) = classifier.feed(c) {
                sink.emit(record);
            }
        },
        // Leaving code context finalizes the pending lexeme; literal and
        // comment content itself never reaches the classifier.
        Action::Suppress | Action::Copy(_) => {
            if let Some(record) = classifier.finish() {
                sink.emit(record);
            }
        },
        Action::FlushSlash => {},
    });

    if let Some(record) = classifier.finish() {
        sink.emit(record);
    }
    state
}

/// Strips comments from `source`, returning the cleaned text.
///
/// Line comments drop everything up to the terminating newline, which is
/// preserved. Block comment bodies are removed and replaced by nothing.
/// String and character literal bodies pass through verbatim, escapes
/// included. The operation is idempotent.
///
/// # Example
///
/// ```
/// use cscan_lex::strip_comments;
///
/// let source = "int a; // count\nchar *s = \"/* kept */\";";
/// assert_eq!(strip_comments(source), "int a; \nchar *s = \"/* kept */\";");
/// ```
pub fn strip_comments(source: &str) -> String {
    strip_comments_with_state(source).0
}

/// Like [`strip_comments`], but also returns the final context state so
/// callers can detect an unterminated comment or literal at end of input.
pub fn strip_comments_with_state(source: &str) -> (String, LexState) {
    let mut out = String::with_capacity(source.len());
    let state = drive(source, |action| match action {
        Action::Forward(c) | Action::Copy(c) => out.push(c),
        Action::Suppress | Action::FlushSlash => {},
    });
    (out, state)
}
