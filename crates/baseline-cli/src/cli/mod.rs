//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use baseline_core::domain::{LicenseKind, LineEnding, OperatingSystem};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "baseline",
    bin_name = "baseline",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4d0} Standardized project configuration",
    long_about = "Baseline applies one set of project standards everywhere: \
                  license headers, publication naming, build-environment \
                  checks, and build-cache resolution.",
    after_help = "EXAMPLES:\n\
        \x20 baseline header --license apache --project mylib --description 'an internal library'\n\
        \x20 baseline publish --name mylib --origin java --origin kotlin\n\
        \x20 baseline check -D java.version=17\n\
        \x20 baseline completions bash > /usr/share/bash-completion/completions/baseline",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a license header.
    #[command(
        about = "Render a license header",
        after_help = "EXAMPLES:\n\
            \x20 baseline header --license mit --project mylib --description 'an internal library'\n\
            \x20 baseline header --license apache --project charted --emoji \u{1f4e6} --year 2024\n\
            \x20 baseline header --project mylib --output src/header.txt"
    )]
    Header(HeaderArgs),

    /// Compute a publication plan.
    #[command(
        visible_alias = "pub",
        about = "Compute a publication plan",
        after_help = "EXAMPLES:\n\
            \x20 baseline publish --name mylib --origin java\n\
            \x20 baseline publish --name mylib --origin java --origin kotlin\n\
            \x20 baseline publish --name mylib --origin java --repository-url s3://mine/maven --format json"
    )]
    Publish(PublishArgs),

    /// Validate the build environment.
    #[command(
        about = "Check the build environment",
        after_help = "EXAMPLES:\n\
            \x20 baseline check\n\
            \x20 baseline check --min-java 21\n\
            \x20 baseline check -D os.name=Linux -D os.arch=amd64 -D java.version=17"
    )]
    Check(CheckArgs),

    /// Resolve the build-cache plan.  Driven entirely by
    /// `-D baseline.buildCache.*` overrides and the `CI` environment
    /// variable.
    #[command(
        about = "Resolve build-cache settings",
        after_help = "EXAMPLES:\n\
            \x20 baseline cache -D baseline.buildCache.url=https://cache.internal/\n\
            \x20 baseline cache -D baseline.buildCache.dir=/var/cache/baseline --format json"
    )]
    Cache,

    /// Print a toolchain download URI.
    #[command(
        about = "Print a toolchain download URI",
        after_help = "EXAMPLES:\n\
            \x20 baseline toolchain --java-version 17\n\
            \x20 baseline toolchain --java-version 21 --os macos"
    )]
    Toolchain(ToolchainArgs),

    /// Manage the Baseline configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 baseline config show\n\
            \x20 baseline config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 baseline completions bash > ~/.local/share/bash-completion/completions/baseline\n\
            \x20 baseline completions zsh  > ~/.zfunc/_baseline\n\
            \x20 baseline completions fish > ~/.config/fish/completions/baseline.fish"
    )]
    Completions(CompletionsArgs),
}

// ── header ────────────────────────────────────────────────────────────────────

/// Arguments for `baseline header`.
#[derive(Debug, Args)]
pub struct HeaderArgs {
    /// License kind.  Falls back to the configured default, then Apache 2.0.
    #[arg(
        short = 'l',
        long = "license",
        value_name = "LICENSE",
        value_enum,
        help = "License kind"
    )]
    pub license: Option<License>,

    /// Project name substituted into the header.
    #[arg(
        short = 'p',
        long = "project",
        value_name = "NAME",
        help = "Project name"
    )]
    pub project: String,

    /// Project description.  Falls back to the configured default, then empty.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Project description"
    )]
    pub description: Option<String>,

    /// Emoji prefix.  Omitted from the header entirely when blank.
    #[arg(long = "emoji", value_name = "EMOJI", help = "Emoji prefix")]
    pub emoji: Option<String>,

    /// Copyright year.  Defaults to the current calendar year.
    #[arg(long = "year", value_name = "YEAR", help = "Copyright year")]
    pub year: Option<String>,

    /// Write the header to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (default: stdout)"
    )]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file without asking.
    #[arg(long = "force", help = "Overwrite existing output file")]
    pub force: bool,

    /// Line terminator.  Defaults to the convention of the running host.
    #[arg(
        long = "line-ending",
        value_enum,
        value_name = "STYLE",
        help = "Line terminator style"
    )]
    pub line_ending: Option<LineEndingStyle>,
}

// ── publish ───────────────────────────────────────────────────────────────────

/// Arguments for `baseline publish`.
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Publication name shared by every origin.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Publication name")]
    pub name: String,

    /// Declaring origin, e.g. `java` or `kotlin`.  Repeatable; requests
    /// reconcile in the order given.
    #[arg(
        long = "origin",
        value_name = "ORIGIN",
        required = true,
        action = clap::ArgAction::Append,
        help = "Declaring origin (repeatable)"
    )]
    pub origins: Vec<String>,

    /// Target repository.  Falls back to the configured default, then the
    /// built-in target.
    #[arg(
        long = "repository-url",
        value_name = "URL",
        help = "Publish repository URL"
    )]
    pub repository_url: Option<String>,

    /// Project root searched for `gradle/publishing.properties`.
    #[arg(
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Project root directory"
    )]
    pub root: PathBuf,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `baseline check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Project root probed for `.editorconfig`.
    #[arg(
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Project root directory"
    )]
    pub root: PathBuf,

    /// Active runtime version.  Shorthand for `-D java.version=<V>`.
    #[arg(
        long = "java-version",
        value_name = "VERSION",
        help = "Active Java version"
    )]
    pub java_version: Option<String>,

    /// Lowest acceptable Java major version.  Falls back to the configured
    /// default, then 17.
    #[arg(long = "min-java", value_name = "MAJOR", help = "Java version floor")]
    pub min_java: Option<u32>,
}

// ── toolchain ─────────────────────────────────────────────────────────────────

/// Arguments for `baseline toolchain`.
#[derive(Debug, Args)]
pub struct ToolchainArgs {
    /// Runtime version to query for.
    #[arg(
        long = "java-version",
        value_name = "VERSION",
        help = "Java version to resolve"
    )]
    pub java_version: String,

    /// OS family to query for.  Defaults to the running host.
    #[arg(long = "os", value_enum, value_name = "OS", help = "Target OS family")]
    pub os: Option<OsFamily>,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `baseline config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration.
    Show,
    /// Print the path to the active configuration file.
    Path,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `baseline completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported license kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum License {
    /// Also accepted as `apache2`.
    #[value(alias = "apache2")]
    Apache,
    Mit,
}

impl From<License> for LicenseKind {
    fn from(license: License) -> Self {
        match license {
            License::Apache => LicenseKind::Apache,
            License::Mit => LicenseKind::Mit,
        }
    }
}

impl std::fmt::Display for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Apache => write!(f, "apache"),
            Self::Mit => write!(f, "mit"),
        }
    }
}

/// Line terminator styles selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LineEndingStyle {
    Lf,
    Crlf,
}

impl From<LineEndingStyle> for LineEnding {
    fn from(style: LineEndingStyle) -> Self {
        match style {
            LineEndingStyle::Lf => LineEnding::Lf,
            LineEndingStyle::Crlf => LineEnding::CrLf,
        }
    }
}

/// OS families selectable from the command line.  `Unsupported` is a
/// detection result, not a choice, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OsFamily {
    Linux,
    /// Also accepted as `darwin`.
    #[value(alias = "darwin")]
    Macos,
    Windows,
}

impl From<OsFamily> for OperatingSystem {
    fn from(family: OsFamily) -> Self {
        match family {
            OsFamily::Linux => OperatingSystem::Linux,
            OsFamily::Macos => OperatingSystem::MacOs,
            OsFamily::Windows => OperatingSystem::Windows,
        }
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
            Self::Macos => write!(f, "macos"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
