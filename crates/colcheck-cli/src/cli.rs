//! CLI argument definitions for colcheck.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colcheck_ingest::Delimiter;
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "colcheck",
    version,
    about = "Compare the column headers of two CSV or Excel files",
    long_about = "Compare the column headers of a new data extract against a model file.\n\n\
                  Reports whether both files have the same columns, whether the order\n\
                  matches, and which columns were added or removed. Paths not given\n\
                  as options are prompted for interactively."
)]
pub struct Cli {
    /// Model (old base) file whose columns define the expected schema.
    #[arg(long = "model", value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// New base file to check against the model.
    #[arg(long = "new", value_name = "PATH")]
    pub new: Option<PathBuf>,

    /// CSV field delimiter (default: comma). Use `tab` for tab-separated files.
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<Delimiter>,

    /// Stop prompting after this many invalid paths (default: keep asking).
    #[arg(long = "max-attempts", value_name = "N")]
    pub max_attempts: Option<u32>,

    /// Report format. With `json`, prompts go to stderr so stdout holds
    /// only the JSON document.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// Exit with status 1 when the columns or their order differ.
    #[arg(long = "fail-on-mismatch")]
    pub fail_on_mismatch: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix each log line with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,
}

/// CLI report format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_non_interactive_run() {
        let cli = Cli::try_parse_from([
            "colcheck",
            "--model",
            "old.csv",
            "--new",
            "new.xlsx",
            "-d",
            ";",
            "--max-attempts",
            "3",
            "--format",
            "json",
            "--fail-on-mismatch",
        ])
        .unwrap();
        assert_eq!(cli.model, Some(PathBuf::from("old.csv")));
        assert_eq!(cli.new, Some(PathBuf::from("new.xlsx")));
        assert_eq!(cli.delimiter, Some(Delimiter::SEMICOLON));
        assert_eq!(cli.max_attempts, Some(3));
        assert!(matches!(cli.format, ReportFormatArg::Json));
        assert!(cli.fail_on_mismatch);
    }

    #[test]
    fn test_defaults_are_interactive() {
        let cli = Cli::try_parse_from(["colcheck"]).unwrap();
        assert!(cli.model.is_none());
        assert!(cli.new.is_none());
        assert!(cli.delimiter.is_none());
        assert!(cli.max_attempts.is_none());
        assert!(matches!(cli.format, ReportFormatArg::Text));
        assert!(!cli.log_timestamps);
    }

    #[test]
    fn test_parses_logging_flags() {
        let cli = Cli::try_parse_from([
            "colcheck",
            "-vv",
            "--log-format",
            "compact",
            "--log-file",
            "colcheck.log",
            "--log-timestamps",
        ])
        .unwrap();
        assert!(cli.verbosity.is_present());
        assert!(matches!(cli.log_format, LogFormatArg::Compact));
        assert_eq!(cli.log_file, Some(PathBuf::from("colcheck.log")));
        assert!(cli.log_timestamps);
    }

    #[test]
    fn test_rejects_multi_character_delimiter() {
        assert!(Cli::try_parse_from(["colcheck", "-d", ";;"]).is_err());
    }
}
