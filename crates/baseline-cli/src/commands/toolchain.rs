//! Implementation of the `baseline toolchain` command.
//!
//! Responsibility: parse the requested version, pick the OS family, and
//! print the resolved JDK download URI. URI construction lives in
//! `baseline-core`.

use tracing::{info, instrument};

use baseline_core::domain::{download_uri, OperatingSystem, RuntimeVersion};

use crate::{
    cli::{OsFamily, OutputFormat, ToolchainArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `baseline toolchain` command.
#[instrument(skip_all, fields(java_version = %args.java_version))]
pub fn execute(args: ToolchainArgs, output: OutputManager) -> CliResult<()> {
    let version = args
        .java_version
        .parse::<RuntimeVersion>()
        .map_err(|e| CliError::Core(e.into()))?;
    let os = resolve_os(args.os);

    let uri = download_uri(version, os).map_err(|e| CliError::Core(e.into()))?;

    info!(version = version.major(), os = %os, "Toolchain URI resolved");

    if output.format() == OutputFormat::Json {
        let payload = serde_json::json!({
            "java_version": version,
            "os": os,
            "uri": uri,
        });
        let json = serde_json::to_string_pretty(&payload).map_err(|e| CliError::JsonEncode {
            what: "toolchain query",
            source: e,
        })?;
        println!("{json}");
    } else {
        // Bare URI on stdout so it pipes straight into curl or xargs.
        println!("{uri}");
    }

    Ok(())
}

/// `--os` wins; otherwise the family this process runs on.
fn resolve_os(flag: Option<OsFamily>) -> OperatingSystem {
    flag.map(OperatingSystem::from)
        .unwrap_or_else(OperatingSystem::current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_flag_overrides_host_detection() {
        assert_eq!(resolve_os(Some(OsFamily::Macos)), OperatingSystem::MacOs);
        assert_eq!(resolve_os(Some(OsFamily::Windows)), OperatingSystem::Windows);
    }

    #[test]
    fn missing_os_flag_uses_the_current_host() {
        assert_eq!(resolve_os(None), OperatingSystem::current());
    }
}
