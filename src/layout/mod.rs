//! Masonry layout: breakpoint resolution, column balancing, and style
//! application.
//!
//! A layout pass is the composition of the three submodules: resolve the
//! column spec for the current viewport width, balance the measured item
//! heights into columns, then write the resulting placements back into the
//! document. Heights are measured before any offset is assigned, so an
//! item's own placement never influences which column it lands in.

pub mod apply;
pub mod balance;
pub mod breakpoint;

pub use apply::apply;
pub use balance::{balance, Balance};
pub use breakpoint::{resolve, Tier};

use crate::config::Breakpoints;
use crate::document::{Document, NodeId};

/// Runs one full layout pass over a grid's items.
///
/// Items are re-queried by the caller and passed in document order; hidden
/// items measure 0 and therefore stack at the top of their column without
/// contributing height.
pub fn layout_pass(doc: &mut Document, grid: NodeId, items: &[NodeId], breakpoints: &Breakpoints) {
    let heights: Vec<f32> = items.iter().map(|&item| doc.measured_height(item)).collect();
    let spec = resolve(doc.viewport_width(), breakpoints);
    let outcome = balance(&heights, spec.count);
    apply(doc, grid, items, &outcome);
}
