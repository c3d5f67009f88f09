//! Analytical backend contract
//!
//! The top-level capability surface of a backend implementation. Handles
//! are immutable snapshots: every derivation (`on_hostname`,
//! `with_telemetry`, `with_authentication`) returns a new handle and
//! leaves the original untouched, so handles are safe to share across
//! tasks without locking.

use crate::config::{AuthenticatedPrincipal, BackendCapabilities, BackendConfig};
use crate::error::BackendError;
use crate::workspace::AnalyticalWorkspace;
use serde_json::Value;
use std::sync::Arc;

/// Pluggable authentication provider
///
/// Supplied by the caller via [`AnalyticalBackend::with_authentication`];
/// the backend decides when (and whether) to invoke it.
#[async_trait::async_trait]
pub trait AuthenticationProvider: Send + Sync {
    /// Resolve the principal for the current caller
    async fn authenticate(&self) -> Result<AuthenticatedPrincipal, BackendError>;
}

/// Analytical backend handle
///
/// Entry point to everything a backend offers: workspace access,
/// authentication, and handle derivation. Implementations must be
/// cheaply cloneable behind `Arc` and free of interior mutability.
#[async_trait::async_trait]
pub trait AnalyticalBackend: Send + Sync {
    /// Optional capabilities this backend declares
    fn capabilities(&self) -> &BackendCapabilities;

    /// Configuration this handle is bound to
    fn config(&self) -> &BackendConfig;

    /// Derive a handle bound to a different hostname
    ///
    /// The returned handle shares backing state with this one but carries
    /// a copied configuration with the hostname replaced. This handle is
    /// unaffected.
    fn on_hostname(&self, hostname: &str) -> Arc<dyn AnalyticalBackend>;

    /// Derive a handle that reports telemetry for the given component
    ///
    /// Backends without telemetry support return an equivalent handle
    /// unchanged.
    fn with_telemetry(&self, component: &str, props: &Value) -> Arc<dyn AnalyticalBackend>;

    /// Derive a handle that authenticates through the given provider
    ///
    /// Accepting a provider does not obligate the backend to invoke it;
    /// always-authenticated backends ignore it.
    fn with_authentication(
        &self,
        provider: Arc<dyn AuthenticationProvider>,
    ) -> Arc<dyn AnalyticalBackend>;

    /// Open the workspace with the given id
    ///
    /// # Errors
    /// Returns [`BackendError::UnexpectedResponse`] when the backend has
    /// no such workspace.
    fn workspace(&self, id: &str) -> Result<Arc<dyn AnalyticalWorkspace>, BackendError>;

    /// Authenticate the current caller
    ///
    /// Asynchronous because real backends resolve identity over the
    /// network; mock backends still honor the deferred contract.
    async fn authenticate(&self) -> Result<AuthenticatedPrincipal, BackendError>;

    /// Check whether the caller is already authenticated
    ///
    /// Resolves to `None` when no principal is established.
    async fn is_authenticated(&self) -> Result<Option<AuthenticatedPrincipal>, BackendError>;
}
