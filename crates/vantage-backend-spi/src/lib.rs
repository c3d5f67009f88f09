//! Vantage Backend SPI
//!
//! The service provider interface every analytical backend implements:
//! - Backend handle with hostname binding, telemetry and authentication hooks
//! - Workspace-scoped services (execution, elements, settings, metadata, styling)
//! - Configuration, capabilities descriptor and authenticated principal types
//! - The error surface shared by all backend implementations
//!
//! This crate carries contracts only. Concrete backends (live or recorded)
//! live in their own crates and implement these traits.

#![warn(unreachable_pub)]

// Contract modules
pub mod backend;
pub mod config;
pub mod error;
pub mod execution;
pub mod workspace;

// Re-exports for convenience
pub use backend::{AnalyticalBackend, AuthenticationProvider};
pub use config::{AuthenticatedPrincipal, BackendCapabilities, BackendConfig};
pub use error::BackendError;
pub use execution::ExecutionFactory;
pub use workspace::{
    AnalyticalWorkspace, ElementsQueryFactory, WorkspaceMetadata, WorkspaceSettingsService,
    WorkspaceStylingService,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with analytical backends
    pub use crate::{
        AnalyticalBackend, AnalyticalWorkspace, AuthenticatedPrincipal, BackendCapabilities,
        BackendConfig, BackendError, ExecutionFactory,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
