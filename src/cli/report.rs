//! Shared report structures for CLI output.
//!
//! Both the `layout` and `filter` commands describe the engine's result the
//! same way: per container, the resolved column spec and grid extent; per
//! item, its placement, measured height, visibility, and categories.

use serde::Serialize;

use crate::constants::{ACTIVE_CLASS, HIDDEN_CLASS, ITEM_CLASS};
use crate::document::Document;
use crate::engine::Engine;
use crate::layout::{balance, breakpoint};

/// Layout state of a whole document.
#[derive(Debug, Serialize)]
pub struct LayoutReport {
    /// Viewport width the layout was resolved against.
    pub viewport_width: f32,
    /// One entry per bound container, in document order.
    pub containers: Vec<ContainerReport>,
}

/// Layout state of one container.
#[derive(Debug, Serialize)]
pub struct ContainerReport {
    /// Name of the viewport tier that matched.
    pub tier: String,
    /// Resolved column count.
    pub columns: usize,
    /// Grid height in pixels (maximum accumulated column height).
    pub container_height: f32,
    /// Number of items currently occupying the visible flow.
    pub visible_items: usize,
    /// Per-item details, in document order.
    pub items: Vec<ItemReport>,
}

/// Placement and visibility of one card.
#[derive(Debug, Serialize)]
pub struct ItemReport {
    /// Position of the card in document order.
    pub index: usize,
    /// Column the balancer assigned.
    pub column: usize,
    /// Left offset as a percentage of the grid width.
    pub left_pct: f32,
    /// Top offset in pixels.
    pub top_px: f32,
    /// Width as a percentage of the grid width.
    pub width_pct: f32,
    /// Measured height in pixels (0 when removed from the flow).
    pub height: f32,
    /// Whether the card occupies the visible flow.
    pub visible: bool,
    /// Current visibility phase.
    pub phase: String,
    /// Category tags carried by the card.
    pub categories: Vec<String>,
}

/// Captures the current layout state of every bound container.
#[must_use]
pub fn build_report(engine: &Engine, doc: &Document) -> LayoutReport {
    let containers = engine
        .handles()
        .into_iter()
        .filter_map(|handle| {
            let grid = engine.grid(handle)?;
            let breakpoints = engine.breakpoints(handle)?;
            let spec = breakpoint::resolve(doc.viewport_width(), breakpoints);
            let tier = breakpoint::Tier::for_width(doc.viewport_width());

            let items = doc.descendants_with_class(grid, ITEM_CLASS);
            let heights: Vec<f32> = items.iter().map(|&item| doc.measured_height(item)).collect();
            let outcome = balance(&heights, spec.count);

            let item_reports = items
                .iter()
                .zip(&outcome.placements)
                .enumerate()
                .map(|(index, (&item, placement))| ItemReport {
                    index,
                    column: placement.column,
                    left_pct: placement.left_pct,
                    top_px: placement.top_px,
                    width_pct: placement.width_pct,
                    height: doc.measured_height(item),
                    visible: doc.is_displayed(item),
                    phase: doc.phase(item).as_str().to_string(),
                    categories: doc
                        .classes(item)
                        .iter()
                        .filter(|class| {
                            class.as_str() != ITEM_CLASS
                                && class.as_str() != ACTIVE_CLASS
                                && class.as_str() != HIDDEN_CLASS
                        })
                        .cloned()
                        .collect(),
                })
                .collect();

            Some(ContainerReport {
                tier: tier.name().to_string(),
                columns: spec.count,
                container_height: outcome.container_height,
                visible_items: items.iter().filter(|&&item| doc.is_displayed(item)).count(),
                items: item_reports,
            })
        })
        .collect();

    LayoutReport {
        viewport_width: doc.viewport_width(),
        containers,
    }
}

/// Prints a report as a human-readable table.
pub fn print_report(report: &LayoutReport) {
    println!("Viewport: {:.0}px", report.viewport_width);
    for (index, container) in report.containers.iter().enumerate() {
        println!();
        println!(
            "Container {} — {} columns ({} tier), height {:.0}px, {} of {} items visible",
            index + 1,
            container.columns,
            container.tier,
            container.container_height,
            container.visible_items,
            container.items.len()
        );
        println!(
            "  {:>4}  {:>3}  {:>7}  {:>8}  {:>7}  {:>7}  {:<14}  categories",
            "item", "col", "left%", "top px", "width%", "height", "phase"
        );
        for item in &container.items {
            println!(
                "  {:>4}  {:>3}  {:>7.2}  {:>8.1}  {:>7.2}  {:>7.1}  {:<14}  {}",
                item.index,
                item.column,
                item.left_pct,
                item.top_px,
                item.width_pct,
                item.height,
                item.phase,
                item.categories.join(", ")
            );
        }
    }
}
