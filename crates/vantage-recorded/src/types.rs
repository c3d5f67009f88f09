//! Recording index types
//!
//! Recordings are captured externally and supplied wholesale when the
//! recorded backend is constructed. Both types here are immutable once
//! handed over: the backend only reads them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Key prefix every workspace entry in a recording index carries
///
/// External capture tooling must follow this exact convention when
/// producing an index.
pub const WORKSPACE_KEY_PREFIX: &str = "ws_";

/// Recordings captured for a single workspace
///
/// Categorized by call type; the recorded backend only interprets the
/// execution category, other categories pass through opaquely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceRecordings {
    /// Execution results keyed by computation fingerprint
    #[serde(default)]
    pub executions: BTreeMap<String, Value>,
}

impl WorkspaceRecordings {
    /// Create an empty recording set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With one execution recording added
    #[inline]
    #[must_use]
    pub fn with_execution(mut self, fingerprint: impl Into<String>, payload: Value) -> Self {
        self.executions.insert(fingerprint.into(), payload);
        self
    }
}

/// Static table of captured service responses keyed by workspace
///
/// Entries are keyed `"ws_" + <workspace id>`. Contents are not validated
/// at construction time; a malformed index surfaces on first use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordingIndex {
    entries: BTreeMap<String, WorkspaceRecordings>,
}

impl RecordingIndex {
    /// Create an empty index
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry key for the given workspace id
    #[inline]
    #[must_use]
    pub fn workspace_key(id: &str) -> String {
        format!("{WORKSPACE_KEY_PREFIX}{id}")
    }

    /// Insert recordings for a workspace, applying the key convention
    #[inline]
    pub fn insert_workspace(&mut self, id: &str, recordings: WorkspaceRecordings) {
        self.entries.insert(Self::workspace_key(id), recordings);
    }

    /// Look up recordings for a workspace id
    #[inline]
    #[must_use]
    pub fn workspace(&self, id: &str) -> Option<&WorkspaceRecordings> {
        self.entries.get(&Self::workspace_key(id))
    }

    /// Number of workspace entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, WorkspaceRecordings)> for RecordingIndex {
    /// Build an index from raw entries; keys must already carry the
    /// `ws_` prefix
    fn from_iter<I: IntoIterator<Item = (String, WorkspaceRecordings)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
