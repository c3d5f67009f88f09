//! Vantage Recorded Backend
//!
//! An analytical backend that serves pre-captured responses instead of
//! contacting a live service:
//! - Recording index types supplied by external capture tooling
//! - Backend and workspace handles implementing the SPI contract
//! - Execution factory resolving fingerprints against recorded results
//!
//! # Example
//!
//! ```rust
//! use vantage_backend_spi::prelude::*;
//! use vantage_recorded::{recorded_backend, RecordingIndex, WorkspaceRecordings};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), vantage_backend_spi::BackendError> {
//! let mut index = RecordingIndex::new();
//! index.insert_workspace(
//!     "demo",
//!     WorkspaceRecordings::new().with_execution("fp_sales", json!({"rows": []})),
//! );
//!
//! let backend = recorded_backend(index);
//! let execution = backend.workspace("demo")?.execution();
//! let result = execution.result_for("fp_sales")?;
//! assert!(result.is_object());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod backend;
pub mod execution;
pub mod types;

// Re-exports for convenience
pub use backend::{recorded_backend, recorded_backend_with_config, RECORDED_USER_ID};
pub use execution::RecordedExecutionFactory;
pub use types::{RecordingIndex, WorkspaceRecordings, WORKSPACE_KEY_PREFIX};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
