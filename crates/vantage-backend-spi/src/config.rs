//! Backend configuration and identity types
//!
//! Defines the value types shared by every backend implementation:
//! - Backend configuration (hostname binding)
//! - Capabilities descriptor for optional backend features
//! - Authenticated principal returned by the authentication operations

use serde::{Deserialize, Serialize};

/// Analytical backend configuration
///
/// Value semantics throughout: deriving a backend bound to a new hostname
/// copies the configuration, it never mutates the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Hostname the backend is bound to
    pub hostname: String,
}

impl BackendConfig {
    /// Create a configuration bound to the given hostname
    #[inline]
    #[must_use]
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
        }
    }

    /// Copy of this configuration with the hostname replaced
    #[inline]
    #[must_use]
    pub fn with_hostname(&self, hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            hostname: "test".to_string(),
        }
    }
}

/// Principal resolved by a successful authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedPrincipal {
    /// Identifier of the authenticated user
    pub user_id: String,
}

impl AuthenticatedPrincipal {
    /// Create a principal for the given user id
    #[inline]
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Descriptor of optional backend features
///
/// Backends declare which optional capabilities they support; callers
/// consult the descriptor before relying on an optional feature. The
/// default descriptor declares nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendCapabilities {
    /// Whether execution results can be exported
    pub can_export: bool,
    /// Whether an existing result can be transformed server-side
    pub can_transform_existing_result: bool,
    /// Whether attribute element queries are available
    pub supports_element_queries: bool,
    /// Whether objects are addressable by URI
    pub supports_object_uris: bool,
}

impl BackendCapabilities {
    /// Descriptor declaring no optional capabilities
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}
