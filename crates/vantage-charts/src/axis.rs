//! Axis configuration and orientation
//!
//! Two axis shapes flow through chart code: the declarative
//! configuration authored by the caller and the rendered axis handed
//! back by the rendering engine. Orientation logic only needs the
//! `opposite` flag, so both implement [`HasOpposite`] and the predicate
//! takes either shape.

use serde::{Deserialize, Serialize};

/// Declarative axis configuration
///
/// All fields optional; an absent `opposite` flag means the axis sits on
/// the primary side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Axis label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Lower bound of the axis scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound of the axis scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Whether the axis renders on the opposite side of the chart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opposite: Option<bool>,
}

/// Axis as materialized by the rendering engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedAxis {
    /// Position of this axis among its siblings
    pub index: usize,
    /// Whether the axis rendered on the opposite side of the chart
    #[serde(default)]
    pub opposite: bool,
    /// Resolved axis title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Shared capability of both axis shapes: an `opposite` flag
pub trait HasOpposite {
    /// Whether the axis sits on the opposite side of the chart
    fn opposite(&self) -> bool;
}

impl HasOpposite for AxisConfig {
    fn opposite(&self) -> bool {
        self.opposite.unwrap_or(false)
    }
}

impl HasOpposite for RenderedAxis {
    fn opposite(&self) -> bool {
        self.opposite
    }
}

/// Classify a Y axis as primary (left) or secondary (right)
///
/// Pure and total: an axis without the `opposite` flag is primary.
#[inline]
#[must_use]
pub fn is_primary_y_axis<A: HasOpposite>(axis: &A) -> bool {
    !axis.opposite()
}
