//! Integer literal classification.
//!
//! This module implements the inner automaton that recognizes C integer
//! literals (decimal, octal, hexadecimal, with `u`/`l` suffixes) inside
//! live code. It operates a maximal-munch accumulator: a digit opens a
//! pending lexeme, subsequent characters extend it, and the first delimiter
//! finalizes it into a [`TokenRecord`].

use crate::token::{Classification, ErrorKind, IntKind, TokenRecord};

/// Progress of the numeric-grammar automaton for the current token.
///
/// `Invalid` is sticky: once entered it is exited only by finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberState {
    /// No literal in progress.
    Idle,
    /// A leading `0` has been read; octal, hex prefix, or a bare zero.
    ZeroPrefix,
    /// Inside an octal digit run.
    Octal,
    /// Inside a decimal digit run.
    Decimal,
    /// `0x`/`0X` read, no hex digit yet.
    HexPrefix,
    /// Inside a hexadecimal digit run.
    Hex,
    /// Suffix so far: `u`.
    SuffixU,
    /// Suffix so far: `l`.
    SuffixL,
    /// Suffix so far: `ll`.
    SuffixLl,
    /// Suffix so far: `ul`.
    SuffixUl,
    /// Suffix so far: `lu`.
    SuffixLu,
    /// Suffix so far: `ull` or `llu`.
    SuffixUll,
    /// The lexeme is malformed; absorbs everything up to the next delimiter.
    Invalid,
}

/// The characters that terminate a numeric token.
///
/// Always contains whitespace and the C operator/punctuation characters.
/// Whether `.` terminates a token is an explicit configuration choice: by
/// default it does not, so a `.` folds into the pending lexeme and marks it
/// malformed (`1.5` is reported as one erroneous lexeme rather than two
/// integers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DelimiterSet {
    dot_terminates: bool,
}

/// Operator and punctuation characters that always delimit a token.
const OPERATOR_DELIMITERS: &str = "+-*/%=(){}[];,<>&|^!~?#:";

impl DelimiterSet {
    /// Creates the default delimiter set (`.` does not terminate).
    pub const fn new() -> Self {
        Self {
            dot_terminates: false,
        }
    }

    /// Sets whether `.` terminates a numeric token.
    pub const fn with_dot_terminator(mut self, dot_terminates: bool) -> Self {
        self.dot_terminates = dot_terminates;
        self
    }

    /// Returns true if `c` cannot extend any token and forces finalization.
    pub fn contains(&self, c: char) -> bool {
        c.is_whitespace()
            || OPERATOR_DELIMITERS.contains(c)
            || (self.dot_terminates && c == '.')
    }
}

/// The integer-literal classifier.
///
/// Receives characters only while the outer scanner is in code context.
/// All accumulator state (the pending lexeme and the suffix flags) is owned
/// by the instance and reset on every finalization.
///
/// # Example
///
/// ```
/// use cscan_lex::number::{DelimiterSet, IntClassifier};
///
/// let mut classifier = IntClassifier::new(DelimiterSet::new());
/// for c in "42u;".chars() {
///     if let Some(record) = classifier.feed(c) {
///         assert_eq!(record.to_string(), "42u\tunsigned int");
///     }
/// }
/// ```
#[derive(Debug)]
pub struct IntClassifier {
    state: NumberState,
    lexeme: String,
    has_u: bool,
    l_count: u8,
    saw_digit: bool,
    error: Option<ErrorKind>,
    delimiters: DelimiterSet,
}

impl IntClassifier {
    /// Creates an idle classifier with the given delimiter set.
    pub fn new(delimiters: DelimiterSet) -> Self {
        Self {
            state: NumberState::Idle,
            lexeme: String::new(),
            has_u: false,
            l_count: 0,
            saw_digit: false,
            error: None,
            delimiters,
        }
    }

    /// Returns the current automaton state.
    pub fn state(&self) -> NumberState {
        self.state
    }

    /// Consumes one live-code character.
    ///
    /// Returns a finalized record when `c` is a delimiter that terminates a
    /// pending lexeme. The delimiter itself never becomes part of any
    /// lexeme and produces no record of its own.
    pub fn feed(&mut self, c: char) -> Option<TokenRecord> {
        // Sticky error: absorb everything up to the next delimiter.
        if self.state == NumberState::Invalid {
            if self.delimiters.contains(c) {
                return self.finish();
            }
            self.lexeme.push(c);
            return None;
        }

        if self.state != NumberState::Idle && self.delimiters.contains(c) {
            return self.finish();
        }

        match self.state {
            NumberState::Idle => match c {
                '0' => self.push(c, NumberState::ZeroPrefix),
                '1'..='9' => {
                    self.push(c, NumberState::Decimal);
                    self.saw_digit = true;
                },
                // Anything else is not a literal start and is ignored.
                _ => {},
            },
            NumberState::ZeroPrefix => match c {
                'x' | 'X' => self.push(c, NumberState::HexPrefix),
                '0'..='7' => {
                    self.push(c, NumberState::Octal);
                    self.saw_digit = true;
                },
                '8' | '9' => self.poison(c, ErrorKind::InvalidOctalDigit),
                'u' | 'U' => self.suffix_u(c),
                'l' | 'L' => self.suffix_l(c),
                _ => self.poison(c, Self::tail_kind(c)),
            },
            NumberState::Octal => match c {
                '0'..='7' => {
                    self.lexeme.push(c);
                    self.saw_digit = true;
                },
                '8' | '9' => self.poison(c, ErrorKind::InvalidOctalDigit),
                'u' | 'U' => self.suffix_u(c),
                'l' | 'L' => self.suffix_l(c),
                _ => self.poison(c, Self::tail_kind(c)),
            },
            NumberState::Decimal => match c {
                '0'..='9' => {
                    self.lexeme.push(c);
                    self.saw_digit = true;
                },
                'u' | 'U' => self.suffix_u(c),
                'l' | 'L' => self.suffix_l(c),
                _ => self.poison(c, Self::tail_kind(c)),
            },
            NumberState::HexPrefix => {
                if c.is_ascii_hexdigit() {
                    self.push(c, NumberState::Hex);
                    self.saw_digit = true;
                } else {
                    // The 0x prefix itself is malformed, whatever follows.
                    self.poison(c, ErrorKind::EmptyHexLiteral);
                }
            },
            NumberState::Hex => {
                // Hex digits a-f extend the run before any letter can be
                // considered a suffix candidate.
                if c.is_ascii_hexdigit() {
                    self.lexeme.push(c);
                    self.saw_digit = true;
                } else {
                    match c {
                        'u' | 'U' => self.suffix_u(c),
                        'l' | 'L' => self.suffix_l(c),
                        _ => self.poison(c, Self::tail_kind(c)),
                    }
                }
            },
            NumberState::SuffixU => match c {
                'l' | 'L' => {
                    self.l_count = 1;
                    self.push(c, NumberState::SuffixUl);
                },
                _ => self.poison(c, Self::tail_kind(c)),
            },
            NumberState::SuffixL => match c {
                'l' | 'L' => {
                    self.l_count = 2;
                    self.push(c, NumberState::SuffixLl);
                },
                'u' | 'U' => {
                    self.has_u = true;
                    self.push(c, NumberState::SuffixLu);
                },
                _ => self.poison(c, Self::tail_kind(c)),
            },
            NumberState::SuffixLl => match c {
                'u' | 'U' if !self.has_u => {
                    self.has_u = true;
                    self.push(c, NumberState::SuffixUll);
                },
                _ => self.poison(c, Self::tail_kind(c)),
            },
            NumberState::SuffixUl => match c {
                'l' | 'L' => {
                    self.l_count = 2;
                    self.push(c, NumberState::SuffixUll);
                },
                _ => self.poison(c, Self::tail_kind(c)),
            },
            // The two Ls of a long long suffix are contiguous, so nothing
            // extends `lu`.
            NumberState::SuffixLu => self.poison(c, Self::tail_kind(c)),
            NumberState::SuffixUll => self.poison(c, Self::tail_kind(c)),
            // Handled by the sticky-error branch above.
            NumberState::Invalid => {},
        }

        None
    }

    /// Finalizes the pending lexeme, if any.
    ///
    /// Called on a delimiter, on a transition out of code context, and at
    /// end of input. Resets the accumulator either way.
    pub fn finish(&mut self) -> Option<TokenRecord> {
        if self.lexeme.is_empty() {
            self.reset();
            return None;
        }

        // "0x" with no digits is only detectable at finalization.
        if self.state == NumberState::HexPrefix && !self.saw_digit {
            self.state = NumberState::Invalid;
            self.error.get_or_insert(ErrorKind::EmptyHexLiteral);
        }

        let classification = if self.state == NumberState::Invalid {
            Classification::Error(self.error.unwrap_or(ErrorKind::MalformedTail))
        } else {
            Classification::Typed(IntKind::from_suffix(self.has_u, self.l_count))
        };
        let record = TokenRecord {
            lexeme: std::mem::take(&mut self.lexeme),
            classification,
        };
        self.reset();
        Some(record)
    }

    fn push(&mut self, c: char, next: NumberState) {
        self.lexeme.push(c);
        self.state = next;
    }

    fn suffix_u(&mut self, c: char) {
        self.has_u = true;
        self.push(c, NumberState::SuffixU);
    }

    fn suffix_l(&mut self, c: char) {
        self.l_count = 1;
        self.push(c, NumberState::SuffixL);
    }

    fn poison(&mut self, c: char, kind: ErrorKind) {
        self.lexeme.push(c);
        self.state = NumberState::Invalid;
        self.error.get_or_insert(kind);
    }

    /// Picks the error kind for a character that cannot extend the token:
    /// letters are failed suffixes, everything else is a malformed tail.
    fn tail_kind(c: char) -> ErrorKind {
        if c.is_ascii_alphabetic() {
            ErrorKind::InvalidSuffix
        } else {
            ErrorKind::MalformedTail
        }
    }

    fn reset(&mut self) {
        self.state = NumberState::Idle;
        self.lexeme.clear();
        self.has_u = false;
        self.l_count = 0;
        self.saw_digit = false;
        self.error = None;
    }
}
