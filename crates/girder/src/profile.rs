//! Instance profiles: which install to drive, at which schema revision

use serde::{Deserialize, Serialize};

/// The host schema revisions this crate can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Revision {
    /// Release 22 schema
    V22,
    /// Release 23 schema (additive over 22)
    V23,
}

/// A serializable record naming one running host instance.
///
/// Tooling that drives several installs keeps these in configuration files
/// instead of hard-coding program identities; the `revision` field tells
/// the consumer which release module ([`v22`]/[`v23`]) to attach with.
///
/// [`v22`]: crate::v22
/// [`v23`]: crate::v23
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceProfile {
    /// The automation identity of the running instance (the `parent` half
    /// of every component path)
    pub program: String,

    /// The schema revision to bind
    pub revision: Revision,
}

impl InstanceProfile {
    /// Create a profile.
    pub fn new(program: impl Into<String>, revision: Revision) -> Self {
        Self {
            program: program.into(),
            revision,
        }
    }

    /// Parse a profile from JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error on malformed input.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
