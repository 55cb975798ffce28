//! Token record sinks.
//!
//! Finalized `(lexeme, classification)` records are handed to a
//! [`TokenSink`] in completion order, which equals construction order in
//! the input.

use std::io;

use crate::token::TokenRecord;

/// Receives finalized token records, one per maximal token.
pub trait TokenSink {
    /// Accepts one finalized record.
    fn emit(&mut self, record: TokenRecord);
}

impl TokenSink for Vec<TokenRecord> {
    fn emit(&mut self, record: TokenRecord) {
        self.push(record);
    }
}

/// Writes records as report lines, one `<lexeme>\t<type-or-ERROR>` per line.
pub fn write_report<W: io::Write>(records: &[TokenRecord], mut writer: W) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Classification, ErrorKind, IntKind};

    fn sample() -> Vec<TokenRecord> {
        vec![
            TokenRecord {
                lexeme: "123u".to_string(),
                classification: Classification::Typed(IntKind::UnsignedInt),
            },
            TokenRecord {
                lexeme: "0xG".to_string(),
                classification: Classification::Error(ErrorKind::EmptyHexLiteral),
            },
        ]
    }

    #[test]
    fn test_vec_sink_preserves_order() {
        let mut sink: Vec<TokenRecord> = Vec::new();
        for record in sample() {
            sink.emit(record);
        }
        assert_eq!(sink[0].lexeme, "123u");
        assert_eq!(sink[1].lexeme, "0xG");
    }

    #[test]
    fn test_write_report_format() {
        let mut out = Vec::new();
        write_report(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "123u\tunsigned int\n0xG\tERROR\n");
    }
}
