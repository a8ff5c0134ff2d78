//! Implementation of the `baseline header` command.
//!
//! Responsibility: resolve header inputs (license kind, description, year,
//! emoji, line ending) from flags and config, call the core header service,
//! and deliver the rendered text. No substitution rules live here.

use std::io::IsTerminal as _;
use std::path::Path;

use chrono::Datelike as _;
use tracing::{debug, info, instrument};

use baseline_adapters::{BuiltinTemplates, LocalFilesystem};
use baseline_core::{
    application::{HeaderService, ports::Filesystem as _},
    domain::{LicenseKind, LicenseParameters, LineEnding, RenderedHeader},
};

use crate::{
    cli::{HeaderArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `baseline header` command.
///
/// Dispatch sequence:
/// 1. Resolve inputs: flag, then config file, then built-in fallback
/// 2. Render through `HeaderService`
/// 3. Deliver to `--output` (with overwrite guard) or stdout
#[instrument(skip_all, fields(project = %args.project))]
pub fn execute(
    args: HeaderArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve every input.
    let kind = resolve_kind(&args, &config)?;
    let params = resolve_params(&args, &config);
    let line_ending = args
        .line_ending
        .map(LineEnding::from)
        .unwrap_or_else(LineEnding::current);

    debug!(kind = %kind, line_ending = %line_ending, "Header inputs resolved");

    // 2. Render through the core service. The store is rebuilt per run, so
    //    a template override directory takes effect immediately.
    let service = HeaderService::new(Box::new(BuiltinTemplates::from_env()));
    let rendered = service
        .render_with_line_ending(kind, &params, line_ending)
        .map_err(CliError::Core)?;

    info!(kind = %kind, bytes = rendered.as_str().len(), "Header rendered");

    // 3. Deliver.
    match &args.output {
        Some(path) => write_header(path, &rendered, kind, &args, &global, &output),
        None => emit_header(&rendered, kind, &args, &output),
    }
}

// ── Input resolution ──────────────────────────────────────────────────────────

fn resolve_kind(args: &HeaderArgs, config: &AppConfig) -> CliResult<LicenseKind> {
    if let Some(license) = args.license {
        return Ok(license.into());
    }
    match &config.defaults.license {
        Some(raw) => raw
            .parse::<LicenseKind>()
            .map_err(|e| CliError::Core(e.into())),
        None => Ok(LicenseKind::Apache),
    }
}

fn resolve_params(args: &HeaderArgs, config: &AppConfig) -> LicenseParameters {
    let description = args
        .description
        .clone()
        .or_else(|| config.defaults.description.clone())
        .unwrap_or_default();
    let emoji = args
        .emoji
        .clone()
        .or_else(|| config.defaults.emoji.clone())
        .unwrap_or_default();
    let year = args
        .year
        .clone()
        .unwrap_or_else(|| chrono::Local::now().year().to_string());

    LicenseParameters::new(&args.project, description, year).with_emoji(emoji)
}

// ── Delivery ──────────────────────────────────────────────────────────────────

fn write_header(
    path: &Path,
    rendered: &RenderedHeader,
    kind: LicenseKind,
    args: &HeaderArgs,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    let filesystem = LocalFilesystem::new();

    if filesystem.exists(path) && !args.force {
        // Without a terminal on stdin there is nobody to ask.
        if global.quiet || !std::io::stdin().is_terminal() {
            return Err(CliError::OutputExists {
                path: path.to_path_buf(),
            });
        }
        if !confirm_overwrite(path)? {
            return Err(CliError::Cancelled);
        }
    }

    filesystem
        .write_file(path, rendered.as_str())
        .map_err(CliError::Core)?;

    info!(path = %path.display(), "Header written");

    if output.format() == OutputFormat::Json {
        let summary = serde_json::json!({
            "project": args.project,
            "license": kind,
            "path": path,
        });
        println!("{}", encode(&summary)?);
    } else {
        output.success(&format!("Header written to {}", path.display()))?;
    }
    Ok(())
}

fn emit_header(
    rendered: &RenderedHeader,
    kind: LicenseKind,
    args: &HeaderArgs,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let payload = serde_json::json!({
            "project": args.project,
            "license": kind,
            "header": rendered.as_str(),
        });
        println!("{}", encode(&payload)?);
    } else {
        // The rendered text already carries its terminator; print! keeps it
        // byte-exact for piping into other tools, even under --quiet.
        print!("{rendered}");
    }
    Ok(())
}

fn encode(value: &serde_json::Value) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::JsonEncode {
        what: "header result",
        source: e,
    })
}

// ── UI helpers ────────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn confirm_overwrite(path: &Path) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(format!("{} exists. Overwrite?", path.display()))
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm_overwrite(path: &Path) -> CliResult<bool> {
    use std::io::{self, Write};

    print!("{} exists. Overwrite? [y/N] ", path.display());
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
