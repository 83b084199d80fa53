//! Computed layout geometry.

use serde::{Deserialize, Serialize};

/// Column count and item width fraction resolved for one viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Number of columns the grid is divided into. Always at least 1 for a
    /// spec produced by the breakpoint resolver.
    pub count: usize,
    /// Item width as a percentage of the grid width (100 / count).
    pub width_pct: f32,
}

impl ColumnSpec {
    /// Creates a spec for the given column count.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count,
            width_pct: 100.0 / count as f32,
        }
    }
}

/// Position and size assigned to one card by the column balancer.
///
/// Horizontal values are percentages of the grid width so that placements
/// survive container resizes between layout passes; vertical values are
/// pixels of accumulated column height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Index of the column the card was assigned to (0 = leftmost).
    pub column: usize,
    /// Left offset as a percentage of the grid width.
    pub left_pct: f32,
    /// Top offset in pixels.
    pub top_px: f32,
    /// Card width as a percentage of the grid width.
    pub width_pct: f32,
}
