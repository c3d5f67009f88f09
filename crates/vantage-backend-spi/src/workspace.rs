//! Workspace-scoped service contracts
//!
//! A workspace handle fans out into the services scoped to one workspace:
//! execution, attribute element queries, settings, metadata and styling.
//! A backend may support only a subset; unsupported services fail with
//! [`BackendError::NotSupported`] at accessor time rather than returning
//! a handle that fails later.

use crate::error::BackendError;
use crate::execution::ExecutionFactory;
use serde_json::Value;
use std::sync::Arc;

/// Handle to a single analytical workspace
///
/// Stateless beyond its captured configuration; accessors may be called
/// in any order, any number of times.
pub trait AnalyticalWorkspace: std::fmt::Debug + Send + Sync {
    /// Identifier of this workspace
    fn id(&self) -> &str;

    /// Execution service for this workspace
    fn execution(&self) -> Arc<dyn ExecutionFactory>;

    /// Attribute element query service
    ///
    /// # Errors
    /// [`BackendError::NotSupported`] when the backend does not offer
    /// element queries.
    fn elements(&self) -> Result<Arc<dyn ElementsQueryFactory>, BackendError>;

    /// Workspace settings service
    ///
    /// # Errors
    /// [`BackendError::NotSupported`] when the backend does not offer
    /// workspace settings.
    fn settings(&self) -> Result<Arc<dyn WorkspaceSettingsService>, BackendError>;

    /// Workspace metadata service
    ///
    /// # Errors
    /// [`BackendError::NotSupported`] when the backend does not offer
    /// metadata access.
    fn metadata(&self) -> Result<Arc<dyn WorkspaceMetadata>, BackendError>;

    /// Workspace styling service
    ///
    /// # Errors
    /// [`BackendError::NotSupported`] when the backend does not offer
    /// styling access.
    fn styling(&self) -> Result<Arc<dyn WorkspaceStylingService>, BackendError>;
}

/// Attribute element query service
pub trait ElementsQueryFactory: std::fmt::Debug + Send + Sync {
    /// Query elements of the given display form
    ///
    /// # Errors
    /// Backend-specific lookup failures.
    fn for_display_form(&self, display_form: &str) -> Result<Value, BackendError>;
}

/// Workspace settings service
pub trait WorkspaceSettingsService: std::fmt::Debug + Send + Sync {
    /// Query effective settings for this workspace
    ///
    /// # Errors
    /// Backend-specific lookup failures.
    fn query(&self) -> Result<Value, BackendError>;
}

/// Workspace metadata service
pub trait WorkspaceMetadata: std::fmt::Debug + Send + Sync {
    /// Fetch a visualization object by id
    ///
    /// # Errors
    /// Backend-specific lookup failures.
    fn visualization(&self, id: &str) -> Result<Value, BackendError>;
}

/// Workspace styling service
pub trait WorkspaceStylingService: std::fmt::Debug + Send + Sync {
    /// Fetch the color palette configured for this workspace
    ///
    /// # Errors
    /// Backend-specific lookup failures.
    fn color_palette(&self) -> Result<Value, BackendError>;
}
