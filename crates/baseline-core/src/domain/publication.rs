//! Publication naming: collision reconciliation and artifact-set naming.
//!
//! Sibling plugin invocations (a "java" module and a "kotlin" module in the
//! same build) may ask for the same publication name. Reconciliation is
//! stateful against the caller-owned set of declared names and resolves
//! each request against the set as it stands, so request order decides the
//! outcome. Callers apply requests in declaration order.

use heck::ToLowerCamelCase;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ── PublicationRequest ────────────────────────────────────────────────────────

/// A desire to publish an artifact set under `name`, tagged with the
/// sub-plugin that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicationRequest {
    name: String,
    origin: String,
}

impl PublicationRequest {
    pub fn new(name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Origin discriminator, e.g. `java` or `kotlin`.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

// ── PublicationDecision ───────────────────────────────────────────────────────

/// Outcome of reconciling one request against the declared-name set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "kebab-case")]
pub enum PublicationDecision {
    /// No conflict: the requested name is used as-is.
    UseName { name: String },
    /// Conflict: the existing publication under `from` is removed and the
    /// artifact set is recreated under the disambiguated `to`.
    Rename { from: String, to: String },
}

impl PublicationDecision {
    /// The name the publication ends up declared under.
    pub fn resolved_name(&self) -> &str {
        match self {
            Self::UseName { name } => name,
            Self::Rename { to, .. } => to,
        }
    }

    pub fn is_rename(&self) -> bool {
        matches!(self, Self::Rename { .. })
    }
}

// ── Reconciliation ────────────────────────────────────────────────────────────

/// Reconcile one request against the current set of declared names.
///
/// Total over valid string inputs. On collision the requested name is
/// removed from the set and the disambiguated name inserted; otherwise the
/// requested name is inserted. Either way the set stays pairwise distinct.
pub fn reconcile(
    request: &PublicationRequest,
    existing: &mut BTreeSet<String>,
) -> PublicationDecision {
    if existing.contains(request.name()) {
        existing.remove(request.name());
        let renamed = disambiguated_name(request.name(), request.origin());
        existing.insert(renamed.clone());
        PublicationDecision::Rename {
            from: request.name().to_string(),
            to: renamed,
        }
    } else {
        existing.insert(request.name().to_string());
        PublicationDecision::UseName {
            name: request.name().to_string(),
        }
    }
}

/// Collision name: `name` and `origin` joined at a word boundary, then
/// lower-camel-cased. `-`, ` `, and `_` all count as boundaries, so
/// `gradle-infra` + `java` becomes `gradleInfraJava`.
fn disambiguated_name(name: &str, origin: &str) -> String {
    format!("{name}-{origin}").to_lower_camel_case()
}

// ── ArtifactSet ───────────────────────────────────────────────────────────────

/// The artifacts attached to a planned publication: the primary build
/// component plus the sources and docs archive task names derived from the
/// origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSet {
    component: String,
    sources_archive: String,
    docs_archive: String,
}

impl ArtifactSet {
    pub fn for_origin(origin: &str) -> Self {
        Self {
            component: origin.to_string(),
            sources_archive: format!("{origin}SourcesJar"),
            docs_archive: format!("{origin}JavadocJar"),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn sources_archive(&self) -> &str {
        &self.sources_archive
    }

    pub fn docs_archive(&self) -> &str {
        &self.docs_archive
    }
}
