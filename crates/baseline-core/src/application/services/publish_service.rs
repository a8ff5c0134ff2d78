//! Publication planning use case.
//!
//! Produces a declarative plan: the reconciled publication names, the
//! per-origin artifact sets, the repository target, and whatever
//! credentials the ambient configuration yields. Nothing here talks to a
//! registry; the plan is handed to the host build for execution.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::application::ports::{ConfigSource, Filesystem};
use crate::application::properties::Properties;
use crate::domain::{keys, reconcile, ArtifactSet, PublicationDecision, PublicationRequest};
use crate::error::BaselineResult;

/// Where a credential pair was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialSource {
    PropertiesFile,
    Environment,
}

impl CredentialSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PropertiesFile => "properties file",
            Self::Environment => "environment",
        }
    }
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials for the publish target. Either half may be absent when the
/// properties file defines only one key; consumers decide how strict to
/// be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishCredentials {
    access_key: Option<String>,
    secret_key: Option<String>,
    source: CredentialSource,
}

impl PublishCredentials {
    pub fn access_key(&self) -> Option<&str> {
        self.access_key.as_deref()
    }

    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_deref()
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }

    /// Both halves resolved.
    pub fn is_complete(&self) -> bool {
        self.access_key.is_some() && self.secret_key.is_some()
    }
}

/// One publication after reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedPublication {
    request: PublicationRequest,
    decision: PublicationDecision,
    artifacts: ArtifactSet,
}

impl PlannedPublication {
    pub fn request(&self) -> &PublicationRequest {
        &self.request
    }

    pub fn decision(&self) -> &PublicationDecision {
        &self.decision
    }

    pub fn artifacts(&self) -> &ArtifactSet {
        &self.artifacts
    }
}

/// Complete publication plan for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishPlan {
    publications: Vec<PlannedPublication>,
    repository_url: String,
    credentials: Option<PublishCredentials>,
}

impl PublishPlan {
    pub fn publications(&self) -> &[PlannedPublication] {
        &self.publications
    }

    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    pub fn credentials(&self) -> Option<&PublishCredentials> {
        self.credentials.as_ref()
    }

    /// Final names, in declaration order.
    pub fn resolved_names(&self) -> Vec<&str> {
        self.publications
            .iter()
            .map(|p| p.decision.resolved_name())
            .collect()
    }
}

/// Builds publication plans from declared requests plus ambient
/// configuration.
pub struct PublishService {
    filesystem: Box<dyn Filesystem>,
    config: Box<dyn ConfigSource>,
}

impl PublishService {
    pub fn new(filesystem: Box<dyn Filesystem>, config: Box<dyn ConfigSource>) -> Self {
        Self { filesystem, config }
    }

    /// Assemble the full plan.
    ///
    /// Requests are reconciled strictly in declaration order against one
    /// shared name set, so a later request can reuse a name an earlier
    /// collision vacated.
    #[instrument(skip_all, fields(root = %root.display(), requests = requests.len()))]
    pub fn plan(
        &self,
        root: &Path,
        requests: &[PublicationRequest],
        repository_url: Option<&str>,
    ) -> BaselineResult<PublishPlan> {
        let credentials = self.credentials(root)?;
        let repository_url = repository_url
            .unwrap_or(keys::DEFAULT_REPOSITORY_URL)
            .to_string();

        let mut declared = BTreeSet::new();
        let publications: Vec<PlannedPublication> = requests
            .iter()
            .map(|request| {
                let decision = reconcile(request, &mut declared);
                if let PublicationDecision::Rename { from, to } = &decision {
                    info!(%from, %to, origin = request.origin(), "Publication name collision resolved");
                }
                PlannedPublication {
                    artifacts: ArtifactSet::for_origin(request.origin()),
                    request: request.clone(),
                    decision,
                }
            })
            .collect();

        info!(
            publication_count = publications.len(),
            repository_url = %repository_url,
            has_credentials = credentials.is_some(),
            "Publication plan assembled"
        );

        Ok(PublishPlan {
            publications,
            repository_url,
            credentials,
        })
    }

    /// Resolve publish credentials.
    ///
    /// The properties file wins outright when present, even when it lacks
    /// one or both keys. Without a file, the environment pair applies
    /// only when both halves are non-blank; a lone or blank half resolves
    /// to nothing rather than an error.
    pub fn credentials(&self, root: &Path) -> BaselineResult<Option<PublishCredentials>> {
        let path = root.join(keys::PUBLISHING_PROPERTIES_PATH);
        if self.filesystem.exists(&path) {
            let contents = self.filesystem.read_to_string(&path)?;
            let props = Properties::parse(&contents);
            let access_key = props.get(keys::PUBLISHING_ACCESS_KEY).map(ToString::to_string);
            let secret_key = props.get(keys::PUBLISHING_SECRET_KEY).map(ToString::to_string);
            debug!(
                path = %path.display(),
                has_access = access_key.is_some(),
                has_secret = secret_key.is_some(),
                "Publishing properties file loaded"
            );
            if access_key.is_none() && secret_key.is_none() {
                return Ok(None);
            }
            return Ok(Some(PublishCredentials {
                access_key,
                secret_key,
                source: CredentialSource::PropertiesFile,
            }));
        }

        let access_key = self.non_blank_env(keys::PUBLISHING_ACCESS_KEY_ENV);
        let secret_key = self.non_blank_env(keys::PUBLISHING_SECRET_KEY_ENV);
        match (access_key, secret_key) {
            (Some(access_key), Some(secret_key)) => Ok(Some(PublishCredentials {
                access_key: Some(access_key),
                secret_key: Some(secret_key),
                source: CredentialSource::Environment,
            })),
            _ => Ok(None),
        }
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn non_blank_env(&self, name: &str) -> Option<String> {
        self.config
            .env_var(name)
            .filter(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{FakeConfigSource, FakeFilesystem};
    use std::path::PathBuf;

    fn service(filesystem: FakeFilesystem, config: FakeConfigSource) -> PublishService {
        PublishService::new(Box::new(filesystem), Box::new(config))
    }

    fn root() -> PathBuf {
        PathBuf::from("/work/project")
    }

    fn request(name: &str, origin: &str) -> PublicationRequest {
        PublicationRequest::new(name, origin)
    }

    // ===================
    // Credential resolution
    // ===================

    #[test]
    fn properties_file_wins_over_environment() {
        let filesystem = FakeFilesystem::new().with_file(
            "/work/project/gradle/publishing.properties",
            "s3.accessKey=AKIA-FILE\ns3.secretKey=FILE-SECRET\n",
        );
        let config = FakeConfigSource::new()
            .with_env(keys::PUBLISHING_ACCESS_KEY_ENV, "AKIA-ENV")
            .with_env(keys::PUBLISHING_SECRET_KEY_ENV, "ENV-SECRET");

        let creds = service(filesystem, config)
            .credentials(&root())
            .unwrap()
            .unwrap();
        assert_eq!(creds.access_key(), Some("AKIA-FILE"));
        assert_eq!(creds.secret_key(), Some("FILE-SECRET"));
        assert_eq!(creds.source(), CredentialSource::PropertiesFile);
        assert!(creds.is_complete());
    }

    #[test]
    fn file_presence_blocks_environment_even_when_empty() {
        let filesystem = FakeFilesystem::new()
            .with_file("/work/project/gradle/publishing.properties", "# no keys\n");
        let config = FakeConfigSource::new()
            .with_env(keys::PUBLISHING_ACCESS_KEY_ENV, "AKIA-ENV")
            .with_env(keys::PUBLISHING_SECRET_KEY_ENV, "ENV-SECRET");

        let creds = service(filesystem, config).credentials(&root()).unwrap();
        assert_eq!(creds, None);
    }

    #[test]
    fn partial_file_resolves_without_failing() {
        let filesystem = FakeFilesystem::new().with_file(
            "/work/project/gradle/publishing.properties",
            "s3.accessKey=AKIA-FILE\n",
        );

        let creds = service(filesystem, FakeConfigSource::new())
            .credentials(&root())
            .unwrap()
            .unwrap();
        assert_eq!(creds.access_key(), Some("AKIA-FILE"));
        assert_eq!(creds.secret_key(), None);
        assert!(!creds.is_complete());
    }

    #[test]
    fn environment_pair_requires_both_halves_non_blank() {
        let lone = FakeConfigSource::new().with_env(keys::PUBLISHING_ACCESS_KEY_ENV, "AKIA-ENV");
        let blank = FakeConfigSource::new()
            .with_env(keys::PUBLISHING_ACCESS_KEY_ENV, "AKIA-ENV")
            .with_env(keys::PUBLISHING_SECRET_KEY_ENV, "   ");

        for config in [lone, blank] {
            let creds = service(FakeFilesystem::new(), config)
                .credentials(&root())
                .unwrap();
            assert_eq!(creds, None);
        }
    }

    #[test]
    fn complete_environment_pair_resolves() {
        let config = FakeConfigSource::new()
            .with_env(keys::PUBLISHING_ACCESS_KEY_ENV, "AKIA-ENV")
            .with_env(keys::PUBLISHING_SECRET_KEY_ENV, "ENV-SECRET");

        let creds = service(FakeFilesystem::new(), config)
            .credentials(&root())
            .unwrap()
            .unwrap();
        assert_eq!(creds.source(), CredentialSource::Environment);
        assert!(creds.is_complete());
    }

    #[test]
    fn no_sources_resolves_empty_without_failing() {
        let creds = service(FakeFilesystem::new(), FakeConfigSource::new())
            .credentials(&root())
            .unwrap();
        assert_eq!(creds, None);
    }

    // ===================
    // Plan assembly
    // ===================

    #[test]
    fn plan_keeps_unique_names_and_renames_collisions() {
        let requests = vec![
            request("mylib", "java"),
            request("mylib", "kotlin"),
            request("other", "java"),
        ];

        let plan = service(FakeFilesystem::new(), FakeConfigSource::new())
            .plan(&root(), &requests, None)
            .unwrap();

        assert_eq!(plan.resolved_names(), vec!["mylib", "mylibKotlin", "other"]);
        assert!(matches!(
            plan.publications()[1].decision(),
            PublicationDecision::Rename { from, to }
                if from == "mylib" && to == "mylibKotlin"
        ));
    }

    #[test]
    fn plan_derives_artifacts_from_each_origin() {
        let requests = vec![request("mylib", "java"), request("mylib", "kotlin")];

        let plan = service(FakeFilesystem::new(), FakeConfigSource::new())
            .plan(&root(), &requests, None)
            .unwrap();

        let artifacts = plan.publications()[1].artifacts();
        assert_eq!(artifacts.component(), "kotlin");
        assert_eq!(artifacts.sources_archive(), "kotlinSourcesJar");
        assert_eq!(artifacts.docs_archive(), "kotlinJavadocJar");
    }

    #[test]
    fn plan_uses_default_repository_url() {
        let plan = service(FakeFilesystem::new(), FakeConfigSource::new())
            .plan(&root(), &[request("mylib", "java")], None)
            .unwrap();

        assert_eq!(plan.repository_url(), keys::DEFAULT_REPOSITORY_URL);
    }

    #[test]
    fn plan_honors_repository_override() {
        let plan = service(FakeFilesystem::new(), FakeConfigSource::new())
            .plan(&root(), &[request("mylib", "java")], Some("s3://mine/maven"))
            .unwrap();

        assert_eq!(plan.repository_url(), "s3://mine/maven");
    }

    #[test]
    fn plan_serializes_with_tagged_decisions() {
        let requests = vec![request("mylib", "java"), request("mylib", "kotlin")];
        let plan = service(FakeFilesystem::new(), FakeConfigSource::new())
            .plan(&root(), &requests, None)
            .unwrap();

        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains(r#""decision":"use-name""#));
        assert!(json.contains(r#""decision":"rename""#));
        assert!(json.contains(r#""to":"mylibKotlin""#));
    }
}
