//! Vantage Charts
//!
//! Chart configuration helpers shared by Vantage visualization code:
//! - Axis configuration shapes (declarative and rendered)
//! - Axis orientation classification

#![warn(unreachable_pub)]

pub mod axis;

// Re-exports for convenience
pub use axis::{is_primary_y_axis, AxisConfig, HasOpposite, RenderedAxis};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
