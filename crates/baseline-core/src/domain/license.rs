//! License-header rendering: parameter record, placeholder substitution,
//! and terminator policy.
//!
//! Rendering is a free function over plain strings. The substitution walks
//! the template exactly once and never re-scans text it has already
//! emitted, so parameter values containing placeholder syntax come through
//! verbatim instead of being expanded again.

use crate::domain::value_objects::LineEnding;
use serde::{Deserialize, Serialize};
use std::fmt;

const TOKEN_NAME: &str = "{{ Name }}";
const TOKEN_DESCRIPTION: &str = "{{ Description }}";
const TOKEN_CURRENT_YEAR: &str = "{{ CurrentYear }}";
const TOKEN_EMOJI: &str = "{{ Emoji }}";

// ── LicenseParameters ─────────────────────────────────────────────────────────

/// Values substituted into a license heading.
///
/// No fallback logic lives here: callers resolve defaults (current year,
/// configured description) before constructing the record. An empty emoji
/// means "omit the emoji placeholder entirely".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseParameters {
    name: String,
    description: String,
    year: String,
    emoji: String,
}

impl LicenseParameters {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            year: year.into(),
            emoji: String::new(),
        }
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn has_emoji(&self) -> bool {
        !self.emoji.trim().is_empty()
    }
}

// ── RenderedHeader ────────────────────────────────────────────────────────────

/// A fully substituted heading: trailing whitespace trimmed, terminated
/// with exactly one line terminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedHeader {
    text: String,
}

impl RenderedHeader {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for RenderedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for RenderedHeader {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Substitute `params` into `template`, trim trailing whitespace, and
/// append one `line_ending` terminator.
///
/// Total: unknown placeholders and unterminated braces pass through
/// untouched, and an emoji token in a template is fine whether or not an
/// emoji was supplied.
pub fn render_header(
    template: &str,
    params: &LicenseParameters,
    line_ending: LineEnding,
) -> RenderedHeader {
    let mut text = substitute(template, params).trim_end().to_string();
    text.push_str(line_ending.terminator());
    RenderedHeader { text }
}

/// Single left-to-right scan. Emitted output is never revisited.
fn substitute(template: &str, params: &LicenseParameters) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        rest = &rest[start..];

        if let Some(tail) = rest.strip_prefix(TOKEN_NAME) {
            out.push_str(params.name());
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(TOKEN_DESCRIPTION) {
            out.push_str(params.description());
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(TOKEN_CURRENT_YEAR) {
            out.push_str(params.year());
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(TOKEN_EMOJI) {
            if params.has_emoji() {
                out.push_str(params.emoji());
                rest = tail;
            } else {
                // A blank emoji removes the token and the spacer after it,
                // so no half-rendered placeholder survives in the output.
                rest = tail.strip_prefix(' ').unwrap_or(tail);
            }
        } else {
            // Not one of ours: emit the braces verbatim and move on.
            out.push_str("{{");
            rest = &rest[2..];
        }
    }

    out.push_str(rest);
    out
}
