//! The classify command: scan a C source file and report the type of every
//! integer literal found in live code.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use cscan_lex::{classify, write_report, DelimiterSet, LexState, TokenRecord};

use crate::error::{CscanError, Result};

/// Arguments for the classify command.
#[derive(Debug)]
pub struct ClassifyArgs {
    /// Input source file.
    pub input: PathBuf,
    /// Report destination; stdout when absent.
    pub report: Option<PathBuf>,
    /// Treat `.` as a token delimiter.
    pub dot_delimiter: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

/// Runs the classify command.
pub fn run_classify(args: ClassifyArgs) -> Result<()> {
    validate_input(&args)?;

    let source = fs::read_to_string(&args.input)?;
    debug!("read {} bytes from {}", source.len(), args.input.display());

    let delimiters = DelimiterSet::new().with_dot_terminator(args.dot_delimiter);
    let mut records: Vec<TokenRecord> = Vec::new();
    let final_state = classify(&source, &delimiters, &mut records);
    warn_unterminated(final_state);

    let errors = records.iter().filter(|r| r.is_error()).count();
    if args.verbose {
        info!(
            "classified {} literal(s), {} erroneous",
            records.len(),
            errors
        );
    }

    match &args.report {
        Some(path) => {
            let file = fs::File::create(path).map_err(|e| {
                CscanError::FileOperation(format!(
                    "cannot create report file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            write_report(&records, file)?;
            info!("report written to {}", path.display());
        },
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write_report(&records, &mut lock)?;
            lock.flush()?;
        },
    }

    Ok(())
}

fn validate_input(args: &ClassifyArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(CscanError::Validation(format!(
            "Input path does not exist: {}",
            args.input.display()
        )));
    }
    if !args.input.is_file() {
        return Err(CscanError::Validation(format!(
            "Input path is not a file: {}",
            args.input.display()
        )));
    }
    Ok(())
}

/// Logs a warning when the scan ended inside an unterminated construct.
/// The scan result itself is still accepted.
pub(crate) fn warn_unterminated(state: LexState) {
    match state {
        LexState::Code => {},
        LexState::BlockComment | LexState::BlockCommentStar => {
            warn!("unterminated block comment at end of input");
        },
        LexState::StringLiteral | LexState::StringEscape => {
            warn!("unterminated string literal at end of input");
        },
        LexState::CharLiteral | LexState::CharEscape => {
            warn!("unterminated character literal at end of input");
        },
        // A lone trailing slash is flushed by the scanner; line comments
        // may legally end with the input.
        LexState::Slash | LexState::LineComment => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_classify_to_report_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.c");
        let report = temp_dir.path().join("report.txt");
        fs::write(&input, "int a = 42; long b = 08; /* 7 */").unwrap();

        run_classify(ClassifyArgs {
            input,
            report: Some(report.clone()),
            dot_delimiter: false,
            verbose: false,
        })
        .unwrap();

        let text = fs::read_to_string(&report).unwrap();
        assert_eq!(text, "42\tint\n08\tERROR\n");
    }

    #[test]
    fn test_classify_missing_input() {
        let result = run_classify(ClassifyArgs {
            input: PathBuf::from("/nonexistent/input.c"),
            report: None,
            dot_delimiter: false,
            verbose: false,
        });
        assert!(matches!(result, Err(CscanError::Validation(_))));
    }

    #[test]
    fn test_classify_directory_input_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = run_classify(ClassifyArgs {
            input: temp_dir.path().to_path_buf(),
            report: None,
            dot_delimiter: false,
            verbose: false,
        });
        assert!(matches!(result, Err(CscanError::Validation(_))));
    }

    #[test]
    fn test_classify_dot_delimiter_flag() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.c");
        let report = temp_dir.path().join("report.txt");
        fs::write(&input, "x = 1.5;").unwrap();

        run_classify(ClassifyArgs {
            input,
            report: Some(report.clone()),
            dot_delimiter: true,
            verbose: false,
        })
        .unwrap();

        let text = fs::read_to_string(&report).unwrap();
        assert_eq!(text, "1\tint\n5\tint\n");
    }
}
