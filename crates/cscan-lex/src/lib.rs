//! cscan-lex - Lexical scanner for C-like source text
//!
//! This crate provides a single-pass scanner that separates live code from
//! comments and string/character literals, and classifies the integer
//! literals found in live code by their inferred C type.
//!
//! # Overview
//!
//! The scan composes two independent state machines:
//!
//! - The **context scanner** tracks whether the current position is
//!   ordinary code, inside a line or block comment, or inside a string or
//!   character literal. Comment content is discarded; literal content is
//!   copied through verbatim.
//! - The **integer classifier** consumes a maximal run of candidate
//!   characters while in code context and finalizes it at the first
//!   delimiter into either the literal's type (`int`, `unsigned long`,
//!   `long long`, ...) or an error.
//!
//! The two machines communicate only through the per-character
//! [`Action`](context::Action) contract, so the context scanner is equally
//! usable on its own for comment stripping.
//!
//! # Example Usage
//!
//! ```
//! use cscan_lex::{classify, strip_comments, DelimiterSet, TokenRecord};
//!
//! let source = "int n = 123u; /* 456 */ // 789\nlong m = 0x1F;";
//!
//! // Classify integer literals.
//! let mut records: Vec<TokenRecord> = Vec::new();
//! classify(source, &DelimiterSet::new(), &mut records);
//! let lines: Vec<String> = records.iter().map(|r| r.to_string()).collect();
//! assert_eq!(lines, vec!["123u\tunsigned int", "0x1F\tint"]);
//!
//! // Or just strip comments.
//! assert_eq!(strip_comments(source), "int n = 123u;  \nlong m = 0x1F;");
//! ```
//!
//! # Module Structure
//!
//! - [`context`] - The outer lexical-context automaton
//! - [`number`] - The inner numeric-grammar automaton
//! - [`token`] - Classification results and token records
//! - [`sink`] - Record sinks and report formatting
//! - [`scan`] - The composed single-pass drivers
//! - [`cursor`] - Character cursor for source traversal
//!
//! # Error Model
//!
//! Malformed literals are representable results, not control-flow
//! failures: each one is reported as a per-token
//! [`ErrorKind`](token::ErrorKind) and the scan continues. The crate never
//! panics on any input.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod context;
pub mod cursor;
pub mod number;
pub mod scan;
pub mod sink;
pub mod token;

// Re-export main types for convenience
pub use context::{Action, ContextScanner, LexState};
pub use cursor::Cursor;
pub use number::{DelimiterSet, IntClassifier, NumberState};
pub use scan::{classify, strip_comments, strip_comments_with_state};
pub use sink::{write_report, TokenSink};
pub use token::{Classification, ErrorKind, IntKind, TokenRecord};
