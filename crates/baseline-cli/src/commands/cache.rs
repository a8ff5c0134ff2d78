//! Implementation of the `baseline cache` command.
//!
//! Responsibility: resolve the build-cache plan from `-D` defines and the
//! environment, and display it. Which settings exist and how they combine
//! is decided in `baseline-core`.
//!
//! The command takes no flags of its own: the cache is driven entirely by
//! `-D baseline.buildCache.*` defines plus the `CI` environment variable.

use tracing::{info, instrument};

use baseline_adapters::{LocalFilesystem, ProcessConfigSource};
use baseline_core::application::{BuildCachePlan, EnvironmentService};

use crate::{
    cli::{OutputFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `baseline cache` command.
#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let service = EnvironmentService::new(
        Box::new(ProcessConfigSource::with_defines(global.define)),
        Box::new(LocalFilesystem::new()),
    );

    let plan = service.build_cache_plan().map_err(CliError::Core)?;

    info!(configured = plan.is_some(), "Build-cache plan resolved");

    if output.format() == OutputFormat::Json {
        // `null` when nothing configures a cache, an object otherwise.
        let json = serde_json::to_string_pretty(&plan).map_err(|e| CliError::JsonEncode {
            what: "build-cache plan",
            source: e,
        })?;
        println!("{json}");
        return Ok(());
    }

    match plan {
        None => output.info(
            "Build cache is not configured. \
             Set -D baseline.buildCache.url or -D baseline.buildCache.dir to enable it.",
        )?,
        Some(plan) => render_plan(&plan, &output)?,
    }

    Ok(())
}

// ── Plan rendering ────────────────────────────────────────────────────────────

fn render_plan(plan: &BuildCachePlan, output: &OutputManager) -> CliResult<()> {
    output.header("Build cache plan")?;

    if let Some(remote) = plan.remote() {
        output.success(&format!("Remote: {}", remote.url()))?;
        output.print(&format!(
            "    push:        {}",
            if remote.push_enabled() {
                "enabled (CI host)"
            } else {
                "disabled (pull only)"
            }
        ))?;
        if remote.allow_insecure() {
            output.warning("    transport:   plain HTTP allowed")?;
        }
        match remote.credentials() {
            // The password stays out of terminal output.
            Some(credentials) => output.print(&format!(
                "    account:     {}",
                credentials.username()
            ))?,
            None => output.print("    account:     anonymous")?,
        }
    }

    if let Some(local) = plan.local() {
        output.success(&format!("Local:  {}", local.directory().display()))?;
        output.print(&format!(
            "    retention:   unused entries removed after {} days",
            local.remove_unused_entries_after_days()
        ))?;
    }

    Ok(())
}
