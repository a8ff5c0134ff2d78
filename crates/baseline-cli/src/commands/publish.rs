//! Implementation of the `baseline publish` command.
//!
//! Responsibility: turn the declared origins into publication requests,
//! resolve the repository URL, and display the plan the core service
//! assembles. Collision handling and credential resolution live in
//! `baseline-core`.

use tracing::{info, instrument};

use baseline_adapters::{LocalFilesystem, ProcessConfigSource};
use baseline_core::{application::PublishService, domain::PublicationRequest};

use crate::{
    cli::{OutputFormat, PublishArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `baseline publish` command.
#[instrument(skip_all, fields(name = %args.name, origins = args.origins.len()))]
pub fn execute(
    args: PublishArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let requests = build_requests(&args);
    let repository_url = args
        .repository_url
        .as_deref()
        .or(config.publish.repository_url.as_deref());

    let service = PublishService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ProcessConfigSource::with_defines(global.define)),
    );

    let plan = service
        .plan(&args.root, &requests, repository_url)
        .map_err(CliError::Core)?;

    info!(
        publications = plan.publications().len(),
        repository_url = %plan.repository_url(),
        "Publication plan ready"
    );

    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&plan).map_err(|e| CliError::JsonEncode {
            what: "publication plan",
            source: e,
        })?;
        println!("{json}");
        return Ok(());
    }

    output.header(&format!("Publication plan for '{}'", args.name))?;

    for publication in plan.publications() {
        let request = publication.request();
        let decision = publication.decision();
        if decision.is_rename() {
            output.warning(&format!(
                "'{}' was already declared; origin '{}' publishes as '{}'",
                request.name(),
                request.origin(),
                decision.resolved_name(),
            ))?;
        } else {
            output.success(&format!(
                "'{}' ({})",
                decision.resolved_name(),
                request.origin()
            ))?;
        }

        let artifacts = publication.artifacts();
        output.print(&format!(
            "    artifacts: {}, {}, {}",
            artifacts.component(),
            artifacts.sources_archive(),
            artifacts.docs_archive(),
        ))?;
    }

    output.print("")?;
    output.print(&format!("Repository: {}", plan.repository_url()))?;

    match plan.credentials() {
        Some(credentials) if credentials.is_complete() => {
            output.success(&format!(
                "Credentials resolved from the {}",
                credentials.source()
            ))?;
        }
        Some(credentials) => {
            output.warning(&format!(
                "Partial credentials from the {} (access or secret key missing)",
                credentials.source()
            ))?;
        }
        None => {
            output.info("No credentials resolved; the plan is anonymous")?;
        }
    }

    Ok(())
}

// ── Request assembly ──────────────────────────────────────────────────────────

/// One request per `--origin`, all sharing the declared publication name,
/// in declaration order. Order matters: reconciliation walks the requests
/// front to back.
fn build_requests(args: &PublishArgs) -> Vec<PublicationRequest> {
    args.origins
        .iter()
        .map(|origin| PublicationRequest::new(&args.name, origin))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
