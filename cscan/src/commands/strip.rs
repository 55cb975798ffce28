//! The strip command: remove comments from a C source file while leaving
//! string and character literals untouched.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use cscan_lex::strip_comments_with_state;

use crate::commands::classify::warn_unterminated;
use crate::error::{CscanError, Result};

/// Arguments for the strip command.
#[derive(Debug)]
pub struct StripArgs {
    /// Input source file.
    pub input: PathBuf,
    /// Output file; stdout when absent and not in place.
    pub output: Option<PathBuf>,
    /// Overwrite the input file in place.
    pub in_place: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

/// Runs the strip command.
pub fn run_strip(args: StripArgs) -> Result<()> {
    validate(&args)?;

    let source = fs::read_to_string(&args.input)?;
    debug!("read {} bytes from {}", source.len(), args.input.display());

    let (stripped, final_state) = strip_comments_with_state(&source);
    warn_unterminated(final_state);

    if args.verbose {
        info!(
            "removed {} byte(s) of comment text",
            source.len() - stripped.len()
        );
    }

    if args.in_place {
        overwrite_in_place(&args.input, &stripped)?;
        info!("rewrote {} in place", args.input.display());
    } else if let Some(path) = &args.output {
        fs::write(path, &stripped).map_err(|e| {
            CscanError::FileOperation(format!("cannot write {}: {}", path.display(), e))
        })?;
        info!("stripped output written to {}", path.display());
    } else {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(stripped.as_bytes())?;
        lock.flush()?;
    }

    Ok(())
}

fn validate(args: &StripArgs) -> Result<()> {
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
    if args.in_place && args.output.is_some() {
        return Err(CscanError::Validation(
            "--in-place and --output are mutually exclusive".to_string(),
        ));
    }
    Ok(())
}

/// Writes the stripped text to a sibling temp file, then renames it over
/// the input. The rename keeps the overwrite atomic on the same filesystem.
fn overwrite_in_place(input: &Path, stripped: &str) -> Result<()> {
    let file_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            CscanError::Validation(format!("Invalid file path: {}", input.display()))
        })?;

    let mut temp_path = input.to_path_buf();
    temp_path.set_file_name(format!("{}.tmp", file_name));

    fs::write(&temp_path, stripped).map_err(|e| {
        CscanError::FileOperation(format!("cannot write {}: {}", temp_path.display(), e))
    })?;
    fs::rename(&temp_path, input).map_err(|e| {
        CscanError::FileOperation(format!(
            "cannot replace {}: {}",
            input.display(),
            e
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_strip_to_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.c");
        let output = temp_dir.path().join("output.c");
        fs::write(&input, "int a; /* gone */ int b; // also\n").unwrap();

        run_strip(StripArgs {
            input,
            output: Some(output.clone()),
            in_place: false,
            verbose: false,
        })
        .unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text, "int a;  int b; \n");
    }

    #[test]
    fn test_strip_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.c");
        fs::write(&input, "x; /* c */ y;").unwrap();

        run_strip(StripArgs {
            input: input.clone(),
            output: None,
            in_place: true,
            verbose: false,
        })
        .unwrap();

        let text = fs::read_to_string(&input).unwrap();
        assert_eq!(text, "x;  y;");
        // The temp file must not be left behind.
        assert!(!temp_dir.path().join("input.c.tmp").exists());
    }

    #[test]
    fn test_strip_in_place_and_output_conflict() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.c");
        fs::write(&input, "x;").unwrap();

        let result = run_strip(StripArgs {
            input,
            output: Some(temp_dir.path().join("out.c")),
            in_place: true,
            verbose: false,
        });
        assert!(matches!(result, Err(CscanError::Validation(_))));
    }

    #[test]
    fn test_strip_missing_input() {
        let result = run_strip(StripArgs {
            input: PathBuf::from("/nonexistent/input.c"),
            output: None,
            in_place: false,
            verbose: false,
        });
        assert!(matches!(result, Err(CscanError::Validation(_))));
    }

    #[test]
    fn test_strip_preserves_string_literals() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.c");
        let output = temp_dir.path().join("output.c");
        fs::write(&input, "char *s = \"/* keep */\";").unwrap();

        run_strip(StripArgs {
            input,
            output: Some(output.clone()),
            in_place: false,
            verbose: false,
        })
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "char *s = \"/* keep */\";"
        );
    }
}
