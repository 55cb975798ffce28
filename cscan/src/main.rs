//! cscan CLI - scanner for C integer literals and comments.
//!
//! This is the main entry point for the cscan CLI application.
//! It uses clap for argument parsing and dispatches to the appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    classify::{run_classify, ClassifyArgs},
    strip::{run_strip, StripArgs},
};
use config::Config;
use error::{CscanError, Result};

/// cscan - a scanner for C-like source text
///
/// cscan classifies the integer literals in a source file by their C type
/// and strips comments while leaving string and character literals intact.
#[derive(Parser, Debug)]
#[command(name = "cscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Classify C integer literals and strip comments", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CSCAN_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CSCAN_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the cscan CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify integer literals in a source file
    ///
    /// Scans live code (comments and string/character literals are skipped)
    /// and writes one `<lexeme>\t<type-or-ERROR>` line per literal, in
    /// input order.
    Classify(ClassifyCommand),

    /// Strip comments from a source file
    ///
    /// Removes line and block comment bodies while passing string and
    /// character literal content through verbatim.
    Strip(StripCommand),
}

/// Arguments for the classify subcommand.
#[derive(Parser, Debug)]
struct ClassifyCommand {
    /// Input source file
    input: PathBuf,

    /// Report file (stdout if omitted)
    #[arg(short = 'o', long)]
    report: Option<PathBuf>,

    /// Treat '.' as a token delimiter
    #[arg(long)]
    dot_delimiter: bool,
}

/// Arguments for the strip subcommand.
#[derive(Parser, Debug)]
struct StripCommand {
    /// Input source file
    input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Overwrite the input file in place
    #[arg(short, long)]
    in_place: bool,
}

/// Main entry point for the cscan CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, cli.verbose || config.verbose, config)
}

/// Initialize the logging system.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CscanError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Classify(args) => execute_classify(args, verbose, config),
        Commands::Strip(args) => execute_strip(args, verbose, config),
    }
}

/// Execute the classify command.
fn execute_classify(args: ClassifyCommand, verbose: bool, config: Config) -> Result<()> {
    let classify_args = ClassifyArgs {
        input: args.input,
        report: args.report,
        dot_delimiter: args.dot_delimiter || config.classify.dot_delimiter,
        verbose,
    };
    run_classify(classify_args)
}

/// Execute the strip command.
fn execute_strip(args: StripCommand, verbose: bool, config: Config) -> Result<()> {
    let strip_args = StripArgs {
        input: args.input,
        output: args.output,
        in_place: args.in_place || config.strip.in_place,
        verbose,
    };
    run_strip(strip_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_classify() {
        let cli = Cli::parse_from(["cscan", "classify", "input.c"]);
        assert!(matches!(cli.command, Commands::Classify(_)));
    }

    #[test]
    fn test_cli_parse_classify_with_report() {
        let cli = Cli::parse_from(["cscan", "classify", "input.c", "-o", "report.txt"]);
        if let Commands::Classify(args) = cli.command {
            assert_eq!(args.report, Some(PathBuf::from("report.txt")));
        } else {
            panic!("Expected Classify command");
        }
    }

    #[test]
    fn test_cli_parse_classify_dot_delimiter() {
        let cli = Cli::parse_from(["cscan", "classify", "input.c", "--dot-delimiter"]);
        if let Commands::Classify(args) = cli.command {
            assert!(args.dot_delimiter);
        } else {
            panic!("Expected Classify command");
        }
    }

    #[test]
    fn test_cli_parse_strip() {
        let cli = Cli::parse_from(["cscan", "strip", "input.c"]);
        assert!(matches!(cli.command, Commands::Strip(_)));
    }

    #[test]
    fn test_cli_parse_strip_in_place() {
        let cli = Cli::parse_from(["cscan", "strip", "input.c", "--in-place"]);
        if let Commands::Strip(args) = cli.command {
            assert!(args.in_place);
        } else {
            panic!("Expected Strip command");
        }
    }

    #[test]
    fn test_cli_parse_strip_with_output() {
        let cli = Cli::parse_from(["cscan", "strip", "input.c", "-o", "clean.c"]);
        if let Commands::Strip(args) = cli.command {
            assert_eq!(args.output, Some(PathBuf::from("clean.c")));
        } else {
            panic!("Expected Strip command");
        }
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["cscan", "--verbose", "strip", "input.c"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["cscan", "--config", "/path/cscan.toml", "strip", "input.c"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/cscan.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["cscan", "--no-color", "classify", "input.c"]);
        assert!(cli.no_color);
    }
}
