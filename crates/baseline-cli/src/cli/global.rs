//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`,
//! `-D`, etc. are available on any invocation without repetition.

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for DEBUG (`-v`), twice for TRACE (`-vv`).  Conflicts
    /// with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Debug level (detailed diagnostics)
    -vv     - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// How results are rendered.
    #[arg(
        long = "format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub format: OutputFormat,

    /// Property overrides, the highest-priority configuration channel
    /// after explicit command flags.
    ///
    /// Repeatable; later occurrences of the same key win.
    #[arg(
        short = 'D',
        long = "define",
        global = true,
        value_name = "KEY=VALUE",
        value_parser = parse_define,
        action = clap::ArgAction::Append,
        help = "Set a property override (repeatable)"
    )]
    pub define: Vec<(String, String)>,

    /// Mirror log events into a JSON file in addition to stderr.
    #[arg(
        long = "log-file",
        global = true,
        value_name = "FILE",
        help = "Write JSON logs to a file"
    )]
    pub log_file: Option<PathBuf>,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Human-readable with colors.
    Human,
    /// Plain text without colors.
    Plain,
    /// JSON output.
    Json,
}

/// Split a `-D KEY=VALUE` pair.  The value may be empty; the key may not.
fn parse_define(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_splits_on_first_equals() {
        let (key, value) = parse_define("baseline.buildCache.url=https://c/?a=b").unwrap();
        assert_eq!(key, "baseline.buildCache.url");
        assert_eq!(value, "https://c/?a=b");
    }

    #[test]
    fn define_allows_empty_value() {
        let (key, value) = parse_define("os.name=").unwrap();
        assert_eq!(key, "os.name");
        assert_eq!(value, "");
    }

    #[test]
    fn define_trims_the_key() {
        let (key, value) = parse_define(" os.name =Linux").unwrap();
        assert_eq!(key, "os.name");
        assert_eq!(value, "Linux");
    }

    #[test]
    fn define_without_separator_is_rejected() {
        assert!(parse_define("os.name").is_err());
    }

    #[test]
    fn define_with_empty_key_is_rejected() {
        assert!(parse_define("=value").is_err());
    }
}
