//! Layout application: writing computed placements into the document.

use crate::document::{Document, NodeId, PositionMode};
use crate::layout::Balance;

/// Writes a balance result onto the grid and its items.
///
/// Each item becomes absolutely positioned at its computed offsets; the grid
/// becomes the relative positioning context and takes the maximum column
/// height as its explicit height. Re-applying identical inputs produces
/// identical style state.
pub fn apply(doc: &mut Document, grid: NodeId, items: &[NodeId], outcome: &Balance) {
    for (&item, placement) in items.iter().zip(&outcome.placements) {
        let style = doc.style_mut(item);
        style.position = PositionMode::Absolute;
        style.left_pct = Some(placement.left_pct);
        style.top_px = Some(placement.top_px);
        style.width_pct = Some(placement.width_pct);
    }

    let grid_style = doc.style_mut(grid);
    grid_style.position = PositionMode::Relative;
    grid_style.height_px = Some(outcome.container_height);
}
