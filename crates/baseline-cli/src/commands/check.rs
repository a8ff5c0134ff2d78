//! Implementation of the `baseline check` command.
//!
//! Responsibility: assemble the config source from `-D` defines and the
//! process environment, pick the version floor, and display the report.
//! The check order and bypass rules live in `baseline-core`.

use tracing::{info, instrument};

use baseline_adapters::{LocalFilesystem, ProcessConfigSource};
use baseline_core::{
    application::{EnvironmentReport, EnvironmentService},
    domain::{keys, RuntimeVersion},
};

use crate::{
    cli::{CheckArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `baseline check` command.
#[instrument(skip_all, fields(root = %args.root.display()))]
pub fn execute(
    args: CheckArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let defines = assemble_defines(&global, args.java_version.as_deref());
    let floor = resolve_floor(&args, &config);

    let service = EnvironmentService::new(
        Box::new(ProcessConfigSource::with_defines(defines)),
        Box::new(LocalFilesystem::new()),
    );

    let report = service.check(&args.root, floor).map_err(CliError::Core)?;

    info!(
        os = %report.os(),
        arch = %report.arch(),
        runtime = %report.runtime(),
        bypasses = report.has_bypasses(),
        "Environment check passed"
    );

    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| CliError::JsonEncode {
            what: "environment report",
            source: e,
        })?;
        println!("{json}");
        return Ok(());
    }

    render_report(&report, &output)
}

// ── Input assembly ────────────────────────────────────────────────────────────

/// Collect `-D` defines, appending the dedicated `--java-version` flag last
/// so it wins over a `-D java.version=…` duplicate.
fn assemble_defines(global: &GlobalArgs, java_version: Option<&str>) -> Vec<(String, String)> {
    let mut defines = global.define.clone();
    if let Some(version) = java_version {
        defines.push((keys::JAVA_VERSION_PROPERTY.to_string(), version.to_string()));
    }
    defines
}

/// Floor precedence: `--min-java` flag, then config file, then the
/// built-in floor.
fn resolve_floor(args: &CheckArgs, config: &AppConfig) -> RuntimeVersion {
    RuntimeVersion::new(
        args.min_java
            .or(config.check.min_java)
            .unwrap_or(keys::DEFAULT_JAVA_FLOOR),
    )
}

// ── Report rendering ──────────────────────────────────────────────────────────

fn render_report(report: &EnvironmentReport, output: &OutputManager) -> CliResult<()> {
    output.header("Environment check")?;

    if report.os_check_bypassed() {
        output.warning(&format!(
            "OS:           {} (unsupported, check bypassed)",
            report.os_raw()
        ))?;
    } else {
        output.success(&format!(
            "OS:           {} ({})",
            report.os(),
            report.os_raw()
        ))?;
    }

    output.success(&format!(
        "Architecture: {} ({})",
        report.arch(),
        report.arch_raw()
    ))?;

    if report.runtime_check_bypassed() {
        output.warning(&format!(
            "Java:         {} is below the floor of {} (check bypassed)",
            report.runtime(),
            report.floor()
        ))?;
    } else {
        output.success(&format!(
            "Java:         {} (floor {})",
            report.runtime(),
            report.floor()
        ))?;
    }

    match report.editorconfig() {
        Some(path) => output.success(&format!("Formatting:   {}", path.display()))?,
        None => output.info("Formatting:   no .editorconfig at the project root")?,
    }

    if report.has_bypasses() {
        output.print("")?;
        output.warning("Some checks were bypassed rather than passed.")?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn global_with_defines(defines: Vec<(String, String)>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            format: OutputFormat::Plain,
            define: defines,
            log_file: None,
        }
    }

    fn check_args(min_java: Option<u32>) -> CheckArgs {
        CheckArgs {
            root: PathBuf::from("."),
            java_version: None,
            min_java,
        }
    }

    // ── assemble_defines ──────────────────────────────────────────────────

    #[test]
    fn java_version_flag_lands_after_the_defines() {
        let global = global_with_defines(vec![(
            "java.version".to_string(),
            "11".to_string(),
        )]);
        let defines = assemble_defines(&global, Some("17"));
        // Later entries win when collected into the config source.
        assert_eq!(
            defines.last(),
            Some(&("java.version".to_string(), "17".to_string()))
        );
        assert_eq!(defines.len(), 2);
    }

    #[test]
    fn no_flag_leaves_defines_untouched() {
        let global = global_with_defines(vec![("os.name".to_string(), "Linux".to_string())]);
        let defines = assemble_defines(&global, None);
        assert_eq!(defines, vec![("os.name".to_string(), "Linux".to_string())]);
    }

    // ── resolve_floor ─────────────────────────────────────────────────────

    #[test]
    fn min_java_flag_wins_over_config() {
        let mut config = AppConfig::default();
        config.check.min_java = Some(21);
        let floor = resolve_floor(&check_args(Some(11)), &config);
        assert_eq!(floor, RuntimeVersion::new(11));
    }

    #[test]
    fn config_floor_wins_over_the_builtin() {
        let mut config = AppConfig::default();
        config.check.min_java = Some(21);
        let floor = resolve_floor(&check_args(None), &config);
        assert_eq!(floor, RuntimeVersion::new(21));
    }

    #[test]
    fn floor_defaults_to_seventeen() {
        let floor = resolve_floor(&check_args(None), &AppConfig::default());
        assert_eq!(floor, RuntimeVersion::new(keys::DEFAULT_JAVA_FLOOR));
        assert_eq!(floor.major(), 17);
    }
}
