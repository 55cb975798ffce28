//! Lexical context tracking.
//!
//! This module implements the outer automaton that distinguishes live code
//! from comments and string/character literals. It consumes one character
//! at a time and reports, per character, whether that character belongs to
//! live code, is comment content to be discarded, or is literal content to
//! be copied through verbatim.

/// The lexical context at the current scan position.
///
/// Exactly one state is active at any time; transitions happen only on the
/// next input character. The `*Escape` states always return to their parent
/// literal state after exactly one character, regardless of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexState {
    /// Ordinary code.
    Code,
    /// A `/` has been read in code; the next character decides whether a
    /// comment starts or the slash was an ordinary operator.
    Slash,
    /// Inside a `//` comment, up to the end of the line.
    LineComment,
    /// Inside a `/* ... */` comment.
    BlockComment,
    /// A `*` has been read inside a block comment (tentative close).
    BlockCommentStar,
    /// Inside a `"..."` literal.
    StringLiteral,
    /// A `\` has been read inside a string literal.
    StringEscape,
    /// Inside a `'...'` literal.
    CharLiteral,
    /// A `\` has been read inside a character literal.
    CharEscape,
}

/// What to do with the character just consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The character is live code: it reaches the classifier and any
    /// code-reconstruction output.
    Forward(char),
    /// The character is comment content (or a slash still being
    /// disambiguated) and is discarded.
    Suppress,
    /// The character is string/char literal content: it is passed through
    /// untouched to any code-reconstruction output but never reaches the
    /// classifier.
    Copy(char),
    /// The buffered `/` turned out to be ordinary code. The caller must
    /// handle that `/` as forwarded code, then feed the current character
    /// again; the scanner is already back in [`LexState::Code`]. This is
    /// the single bounded reprocess step of the scan.
    FlushSlash,
}

/// The outer lexical-context automaton.
///
/// # Example
///
/// ```
/// use cscan_lex::context::{Action, ContextScanner, LexState};
///
/// let mut scanner = ContextScanner::new();
/// assert_eq!(scanner.step('a'), Action::Forward('a'));
/// assert_eq!(scanner.step('/'), Action::Suppress);
/// assert_eq!(scanner.step('/'), Action::Suppress);
/// assert_eq!(scanner.state(), LexState::LineComment);
/// ```
#[derive(Debug)]
pub struct ContextScanner {
    state: LexState,
}

impl ContextScanner {
    /// Creates a scanner in the `Code` state.
    pub fn new() -> Self {
        Self {
            state: LexState::Code,
        }
    }

    /// Returns the current context state.
    pub fn state(&self) -> LexState {
        self.state
    }

    /// Returns true if the scanner is in ordinary code (no pending slash,
    /// comment, or literal).
    pub fn in_code(&self) -> bool {
        self.state == LexState::Code
    }

    /// Consumes one character and returns the action for it.
    pub fn step(&mut self, c: char) -> Action {
        match self.state {
            LexState::Code => match c {
                '/' => {
                    self.state = LexState::Slash;
                    Action::Suppress
                },
                '"' => {
                    self.state = LexState::StringLiteral;
                    Action::Copy(c)
                },
                '\'' => {
                    self.state = LexState::CharLiteral;
                    Action::Copy(c)
                },
                _ => Action::Forward(c),
            },
            LexState::Slash => match c {
                '*' => {
                    self.state = LexState::BlockComment;
                    Action::Suppress
                },
                '/' => {
                    self.state = LexState::LineComment;
                    Action::Suppress
                },
                _ => {
                    // The slash was a division operator after all.
                    self.state = LexState::Code;
                    Action::FlushSlash
                },
            },
            LexState::LineComment => match c {
                '\n' | '\r' => {
                    self.state = LexState::Code;
                    Action::Forward(c)
                },
                _ => Action::Suppress,
            },
            LexState::BlockComment => {
                if c == '*' {
                    self.state = LexState::BlockCommentStar;
                }
                Action::Suppress
            },
            LexState::BlockCommentStar => {
                match c {
                    '/' => self.state = LexState::Code,
                    // A run of stars keeps the tentative close alive.
                    '*' => {},
                    _ => self.state = LexState::BlockComment,
                }
                Action::Suppress
            },
            LexState::StringLiteral => match c {
                '\\' => {
                    self.state = LexState::StringEscape;
                    Action::Copy(c)
                },
                '"' => {
                    self.state = LexState::Code;
                    Action::Copy(c)
                },
                _ => Action::Copy(c),
            },
            LexState::StringEscape => {
                self.state = LexState::StringLiteral;
                Action::Copy(c)
            },
            LexState::CharLiteral => match c {
                '\\' => {
                    self.state = LexState::CharEscape;
                    Action::Copy(c)
                },
                '\'' => {
                    self.state = LexState::Code;
                    Action::Copy(c)
                },
                _ => Action::Copy(c),
            },
            LexState::CharEscape => {
                self.state = LexState::CharLiteral;
                Action::Copy(c)
            },
        }
    }

    /// Flushes the buffered `/` at end of input, if any.
    ///
    /// A `/` immediately followed by end-of-input is ordinary code and must
    /// be emitted verbatim.
    pub fn flush(&mut self) -> Option<char> {
        if self.state == LexState::Slash {
            self.state = LexState::Code;
            Some('/')
        } else {
            None
        }
    }
}

impl Default for ContextScanner {
    fn default() -> Self {
        Self::new()
    }
}
