//! Token classification results.
//!
//! This module defines the data model for finalized integer-literal tokens:
//! the inferred C type, the error kinds for malformed literals, and the
//! `(lexeme, classification)` record emitted per token.

use std::fmt;

use thiserror::Error;

/// The C integer type inferred for a valid literal.
///
/// The type is selected purely by the suffix combination (`u` presence and
/// `l` count); the literal's value plays no role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntKind {
    /// `int` (no suffix).
    Int,
    /// `unsigned int` (`u` suffix).
    UnsignedInt,
    /// `long` (`l` suffix).
    Long,
    /// `unsigned long` (`ul` or `lu` suffix).
    UnsignedLong,
    /// `long long` (`ll` suffix).
    LongLong,
    /// `unsigned long long` (`ull` or `llu` suffix).
    UnsignedLongLong,
}

impl IntKind {
    /// Selects the type from the accumulated suffix flags.
    ///
    /// `l_count` greater than two never reaches this function; the
    /// classifier enters its error state on the third `l`.
    pub fn from_suffix(has_u: bool, l_count: u8) -> Self {
        match (has_u, l_count) {
            (false, 0) => Self::Int,
            (false, 1) => Self::Long,
            (false, _) => Self::LongLong,
            (true, 0) => Self::UnsignedInt,
            (true, 1) => Self::UnsignedLong,
            (true, _) => Self::UnsignedLongLong,
        }
    }

    /// Returns the C spelling of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::UnsignedInt => "unsigned int",
            Self::Long => "long",
            Self::UnsignedLong => "unsigned long",
            Self::LongLong => "long long",
            Self::UnsignedLongLong => "unsigned long long",
        }
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reason a literal was rejected.
///
/// All of these are per-token, non-fatal results; scanning continues after
/// each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// `8` or `9` appeared after a leading `0` with no `x`/`X`.
    #[error("digit 8 or 9 in an octal literal")]
    InvalidOctalDigit,

    /// `0x`/`0X` followed immediately by a non-hex-digit or a delimiter.
    #[error("hexadecimal prefix with no digits")]
    EmptyHexLiteral,

    /// Suffix letters outside the valid `u`/`l` combinations, or a letter
    /// that cannot start a suffix immediately after the digit run.
    #[error("invalid integer suffix")]
    InvalidSuffix,

    /// A non-delimiter character that cannot extend the literal in any way.
    #[error("malformed trailing characters")]
    MalformedTail,
}

/// Result of finalizing a pending lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The lexeme is a well-formed integer literal of the given type.
    Typed(IntKind),
    /// The lexeme is malformed; the kind records the first cause.
    Error(ErrorKind),
}

/// A finalized `(lexeme, classification)` pair.
///
/// Records are emitted in completion order, which equals construction order
/// in the input. The `Display` impl produces the report line format:
/// `<lexeme>\t<type-name-or-ERROR>`.
///
/// # Example
///
/// ```
/// use cscan_lex::token::{Classification, IntKind, TokenRecord};
///
/// let record = TokenRecord {
///     lexeme: "123u".to_string(),
///     classification: Classification::Typed(IntKind::UnsignedInt),
/// };
/// assert_eq!(record.to_string(), "123u\tunsigned int");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    /// The exact character run consumed for this token.
    pub lexeme: String,
    /// The inferred type or the error.
    pub classification: Classification,
}

impl TokenRecord {
    /// Returns true if the record carries an error classification.
    pub fn is_error(&self) -> bool {
        matches!(self.classification, Classification::Error(_))
    }
}

impl fmt::Display for TokenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.classification {
            Classification::Typed(kind) => write!(f, "{}\t{}", self.lexeme, kind),
            Classification::Error(_) => write!(f, "{}\tERROR", self.lexeme),
        }
    }
}
