//! Recorded analytical backend
//!
//! A stand-in for a live backend client that answers from a static
//! recording index, for tests and offline demos. Handles are immutable
//! snapshots over the shared index: derivations copy the configuration
//! and share the index, nothing is mutated after construction, so
//! concurrent use needs no locking.
//!
//! The mock only models execution. Workspace metadata services
//! (elements, settings, metadata, styling) fail with a not-supported
//! error on every call; authentication always succeeds with a fixed
//! principal.

use crate::execution::RecordedExecutionFactory;
use crate::types::{RecordingIndex, WorkspaceRecordings};
use serde_json::{json, Value};
use std::sync::Arc;
use vantage_backend_spi::{
    AnalyticalBackend, AnalyticalWorkspace, AuthenticatedPrincipal, AuthenticationProvider,
    BackendCapabilities, BackendConfig, BackendError, ElementsQueryFactory, ExecutionFactory,
    WorkspaceMetadata, WorkspaceSettingsService, WorkspaceStylingService,
};

/// Fixed principal every authentication operation resolves to
pub const RECORDED_USER_ID: &str = "recordedUser";

/// Create a backend answering from the given recording index
///
/// Configuration defaults to hostname `"test"`. The index contents are
/// not validated here; a workspace id with no entry fails on first
/// lookup, not at construction time.
#[must_use]
pub fn recorded_backend(index: RecordingIndex) -> Arc<dyn AnalyticalBackend> {
    recorded_backend_with_config(index, BackendConfig::default())
}

/// Create a recorded backend with an explicit configuration
#[must_use]
pub fn recorded_backend_with_config(
    index: RecordingIndex,
    config: BackendConfig,
) -> Arc<dyn AnalyticalBackend> {
    Arc::new(RecordedBackend {
        index: Arc::new(index),
        config,
        capabilities: BackendCapabilities::none(),
    })
}

/// Backend handle over a shared recording index
#[derive(Debug, Clone)]
struct RecordedBackend {
    index: Arc<RecordingIndex>,
    config: BackendConfig,
    capabilities: BackendCapabilities,
}

#[async_trait::async_trait]
impl AnalyticalBackend for RecordedBackend {
    fn capabilities(&self) -> &BackendCapabilities {
        &self.capabilities
    }

    fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn on_hostname(&self, hostname: &str) -> Arc<dyn AnalyticalBackend> {
        Arc::new(Self {
            index: Arc::clone(&self.index),
            config: self.config.with_hostname(hostname),
            capabilities: self.capabilities,
        })
    }

    fn with_telemetry(&self, component: &str, _props: &Value) -> Arc<dyn AnalyticalBackend> {
        // Telemetry is a no-op in the recorded backend
        tracing::debug!(%component, "telemetry requested on recorded backend, ignoring");
        Arc::new(self.clone())
    }

    fn with_authentication(
        &self,
        _provider: Arc<dyn AuthenticationProvider>,
    ) -> Arc<dyn AnalyticalBackend> {
        // Accepted for interface conformance, never invoked
        Arc::new(self.clone())
    }

    fn workspace(&self, id: &str) -> Result<Arc<dyn AnalyticalWorkspace>, BackendError> {
        match self.index.workspace(id) {
            Some(recordings) => Ok(Arc::new(RecordedWorkspace {
                id: id.to_string(),
                recordings: recordings.clone(),
            })),
            None => {
                tracing::warn!(workspace = %id, "workspace recordings not found");
                Err(BackendError::unexpected_response(
                    "Workspace recordings not found",
                    404,
                    json!({}),
                ))
            }
        }
    }

    async fn authenticate(&self) -> Result<AuthenticatedPrincipal, BackendError> {
        Ok(AuthenticatedPrincipal::new(RECORDED_USER_ID))
    }

    async fn is_authenticated(&self) -> Result<Option<AuthenticatedPrincipal>, BackendError> {
        // The recorded backend never reports an unauthenticated state
        Ok(Some(AuthenticatedPrincipal::new(RECORDED_USER_ID)))
    }
}

/// Workspace handle bound to one workspace's recordings
#[derive(Debug, Clone)]
struct RecordedWorkspace {
    id: String,
    recordings: WorkspaceRecordings,
}

impl AnalyticalWorkspace for RecordedWorkspace {
    fn id(&self) -> &str {
        &self.id
    }

    fn execution(&self) -> Arc<dyn ExecutionFactory> {
        Arc::new(RecordedExecutionFactory::new(
            self.recordings.clone(),
            self.id.clone(),
        ))
    }

    fn elements(&self) -> Result<Arc<dyn ElementsQueryFactory>, BackendError> {
        Err(BackendError::not_supported("not supported"))
    }

    fn settings(&self) -> Result<Arc<dyn WorkspaceSettingsService>, BackendError> {
        Err(BackendError::not_supported("not supported"))
    }

    fn metadata(&self) -> Result<Arc<dyn WorkspaceMetadata>, BackendError> {
        Err(BackendError::not_supported("not supported"))
    }

    fn styling(&self) -> Result<Arc<dyn WorkspaceStylingService>, BackendError> {
        Err(BackendError::not_supported("not supported"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn backend_with_one_workspace() -> Arc<dyn AnalyticalBackend> {
        let mut index = RecordingIndex::new();
        index.insert_workspace(
            "foo",
            WorkspaceRecordings::new().with_execution("fp1", json!({"rows": []})),
        );
        recorded_backend(index)
    }

    #[test]
    fn default_config_binds_to_test_hostname() {
        let backend = recorded_backend(RecordingIndex::new());
        assert_eq!(backend.config().hostname, "test");
        assert_eq!(*backend.capabilities(), BackendCapabilities::none());
    }

    #[test]
    fn on_hostname_leaves_original_untouched() {
        let backend = backend_with_one_workspace();
        let derived = backend.on_hostname("staging.example.com");

        assert_eq!(backend.config().hostname, "test");
        assert_eq!(derived.config().hostname, "staging.example.com");
        // Derived handle still serves the shared index
        assert!(derived.workspace("foo").is_ok());
    }

    #[test]
    fn telemetry_and_authentication_hooks_are_noops() {
        struct NeverCalled;

        #[async_trait::async_trait]
        impl AuthenticationProvider for NeverCalled {
            async fn authenticate(&self) -> Result<AuthenticatedPrincipal, BackendError> {
                panic!("recorded backend must not invoke the provider");
            }
        }

        let backend = backend_with_one_workspace();
        let with_telemetry = backend.with_telemetry("dashboard", &json!({"page": 1}));
        let with_auth = with_telemetry.with_authentication(Arc::new(NeverCalled));

        assert_eq!(with_auth.config().hostname, "test");
        assert!(with_auth.workspace("foo").is_ok());
    }

    #[test]
    fn missing_workspace_fails_with_404() {
        let backend = backend_with_one_workspace();
        let err = backend.workspace("bar").unwrap_err();

        assert_eq!(err.status_code(), Some(404));
        assert!(matches!(err, BackendError::UnexpectedResponse { .. }));
    }

    #[test]
    fn workspace_handle_is_bound_to_its_recordings() {
        let backend = backend_with_one_workspace();
        let workspace = backend.workspace("foo").unwrap();

        assert_eq!(workspace.id(), "foo");
        let execution = workspace.execution();
        assert_eq!(execution.workspace(), "foo");
        assert_eq!(execution.result_for("fp1").unwrap(), json!({"rows": []}));
    }

    #[test]
    fn metadata_services_are_permanently_unsupported() {
        let backend = backend_with_one_workspace();
        let workspace = backend.workspace("foo").unwrap();

        // Every invocation fails, not just the first
        for _ in 0..2 {
            assert!(matches!(
                workspace.elements().unwrap_err(),
                BackendError::NotSupported(_)
            ));
            assert!(matches!(
                workspace.settings().unwrap_err(),
                BackendError::NotSupported(_)
            ));
            assert!(matches!(
                workspace.metadata().unwrap_err(),
                BackendError::NotSupported(_)
            ));
            assert!(matches!(
                workspace.styling().unwrap_err(),
                BackendError::NotSupported(_)
            ));
        }
    }

    #[tokio::test]
    async fn authentication_always_resolves_to_recorded_user() {
        let backend = backend_with_one_workspace();

        let principal = backend.authenticate().await.unwrap();
        assert_eq!(principal.user_id, RECORDED_USER_ID);

        let checked = backend.is_authenticated().await.unwrap();
        assert_eq!(checked, Some(AuthenticatedPrincipal::new(RECORDED_USER_ID)));
    }
}
