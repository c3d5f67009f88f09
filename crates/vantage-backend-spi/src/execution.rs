//! Execution service contract
//!
//! The execution factory resolves computation requests for one workspace.
//! Requests are identified by a fingerprint: a stable string derived from
//! the computation definition, so structurally identical requests map to
//! the same result regardless of which backend (live or recorded) serves
//! them.

use crate::error::BackendError;
use serde_json::Value;

/// Execution service bound to a single workspace
pub trait ExecutionFactory: Send + Sync {
    /// Identifier of the workspace this factory is bound to
    fn workspace(&self) -> &str;

    /// Resolve a computation fingerprint to its result payload
    ///
    /// # Errors
    /// [`BackendError::UnexpectedResponse`] when the backend cannot
    /// produce a result for the fingerprint.
    fn result_for(&self, fingerprint: &str) -> Result<Value, BackendError>;
}
