//! Recorded execution factory
//!
//! Resolves computation fingerprints against the execution category of
//! one workspace's recordings. No matching engine lives here: a
//! fingerprint either has a recorded result or the lookup fails the same
//! way a live backend reports an unknown computation.

use crate::types::WorkspaceRecordings;
use serde_json::{json, Value};
use vantage_backend_spi::{BackendError, ExecutionFactory};

/// Execution factory answering from recorded results
#[derive(Debug, Clone)]
pub struct RecordedExecutionFactory {
    recordings: WorkspaceRecordings,
    workspace: String,
}

impl RecordedExecutionFactory {
    /// Create a factory bound to one workspace's recordings
    #[inline]
    #[must_use]
    pub fn new(recordings: WorkspaceRecordings, workspace: impl Into<String>) -> Self {
        Self {
            recordings,
            workspace: workspace.into(),
        }
    }
}

impl ExecutionFactory for RecordedExecutionFactory {
    fn workspace(&self) -> &str {
        &self.workspace
    }

    fn result_for(&self, fingerprint: &str) -> Result<Value, BackendError> {
        match self.recordings.executions.get(fingerprint) {
            Some(payload) => {
                tracing::debug!(workspace = %self.workspace, %fingerprint, "serving recorded execution");
                Ok(payload.clone())
            }
            None => {
                tracing::warn!(workspace = %self.workspace, %fingerprint, "execution recording not found");
                Err(BackendError::unexpected_response(
                    "Execution recording not found",
                    404,
                    json!({}),
                ))
            }
        }
    }
}
