//! Greedy shortest-column balancer.

use crate::models::Placement;

/// Result of balancing one ordered item sequence into columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    /// One placement per input item, in input order.
    pub placements: Vec<Placement>,
    /// Maximum accumulated column height; the height the grid element must
    /// be set to so every card fits.
    pub container_height: f32,
}

impl Balance {
    /// An empty result for vacuous inputs.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            placements: Vec::new(),
            container_height: 0.0,
        }
    }
}

/// Assigns each item a column and vertical offset, greedily extending the
/// currently shortest column.
///
/// Deterministic, single pass, stable in input order. Ties break toward the
/// leftmost column. A zero column count or empty item list yields an empty
/// result; callers uphold the configuration invariant that keeps the
/// resolver from ever producing zero columns.
#[must_use]
pub fn balance(heights: &[f32], column_count: usize) -> Balance {
    if column_count == 0 || heights.is_empty() {
        return Balance::empty();
    }

    let column_width = 100.0 / column_count as f32;
    let mut column_heights = vec![0.0_f32; column_count];
    let mut placements = Vec::with_capacity(heights.len());

    for &height in heights {
        let column = shortest_column(&column_heights);
        placements.push(Placement {
            column,
            left_pct: column as f32 * column_width,
            top_px: column_heights[column],
            width_pct: column_width,
        });
        column_heights[column] += height;
    }

    let container_height = column_heights.iter().copied().fold(0.0_f32, f32::max);
    Balance {
        placements,
        container_height,
    }
}

/// Index of the column with the minimum accumulated height; ties resolve to
/// the lowest index.
fn shortest_column(column_heights: &[f32]) -> usize {
    let mut shortest = 0;
    for (index, &height) in column_heights.iter().enumerate().skip(1) {
        if height < column_heights[shortest] {
            shortest = index;
        }
    }
    shortest
}
