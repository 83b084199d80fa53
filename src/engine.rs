//! Orchestration: container discovery, event routing, and tick processing.
//!
//! The engine scans a document for filterable masonry containers, performs
//! the initial layout, and then reacts to two kinds of events: viewport
//! resizes (coalesced into at most one relayout per tick) and filter
//! trigger activations (immediate relayout plus settle-delayed follow-ups).
//! Scanning again re-binds from scratch instead of accumulating bindings,
//! and containers can be released individually with [`Engine::dispose`].

use std::time::Instant;

use tracing::debug;

use crate::config::Breakpoints;
use crate::constants::{
    ACTIVE_CLASS, CONTAINER_CLASS, FILTER_CONTROLS_CLASS, GRID_CONFIG_ATTR, HIDE_SETTLE,
    ITEM_CLASS, TRIGGER_FILTER_ATTR,
};
use crate::document::{Document, NodeId};
use crate::filter::{self, FilterValue};
use crate::layout;
use crate::scheduler::{DeferredTask, Scheduler};

/// Handle identifying one bound container for the lifetime of an [`Engine`].
///
/// Handles stay unique across re-scans, so a stale handle held over a
/// re-scan simply stops resolving instead of addressing the wrong container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerHandle(u64);

/// Everything the engine keeps per discovered container.
#[derive(Debug, Clone)]
struct ContainerBinding {
    handle: ContainerHandle,
    grid: NodeId,
    breakpoints: Breakpoints,
    triggers: Vec<NodeId>,
}

/// The masonry/filter orchestrator for one document.
#[derive(Debug, Default)]
pub struct Engine {
    bindings: Vec<ContainerBinding>,
    scheduler: Scheduler,
    next_handle: u64,
}

impl Engine {
    /// Creates an engine with no bound containers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovers every container in the document, binds it, and performs
    /// the initial layout pass for each.
    ///
    /// Containers without a grid are skipped without affecting the others.
    /// Any previous bindings are replaced, so calling this twice does not
    /// double-bind; deferred tasks already in flight keep running and
    /// simply no-op where their target binding is gone.
    pub fn scan(&mut self, doc: &mut Document) -> Vec<ContainerHandle> {
        self.bindings.clear();

        for container in doc.descendants_with_class(doc.root(), CONTAINER_CLASS) {
            let Some(grid) = doc.first_descendant_with_attribute(container, GRID_CONFIG_ATTR)
            else {
                debug!("container without a grid element, skipping");
                continue;
            };

            let breakpoints = Breakpoints::parse_attribute(doc.attribute(grid, GRID_CONFIG_ATTR));
            let triggers = doc
                .first_descendant_with_class(container, FILTER_CONTROLS_CLASS)
                .map(|controls| doc.descendants_with_attribute(controls, TRIGGER_FILTER_ATTR))
                .unwrap_or_default();

            let handle = ContainerHandle(self.next_handle);
            self.next_handle += 1;
            self.bindings.push(ContainerBinding {
                handle,
                grid,
                breakpoints,
                triggers,
            });
        }

        self.relayout_all(doc);
        self.bindings.iter().map(|binding| binding.handle).collect()
    }

    /// Number of currently bound containers.
    #[must_use]
    pub fn container_count(&self) -> usize {
        self.bindings.len()
    }

    /// Handles of all bound containers, in document order.
    #[must_use]
    pub fn handles(&self) -> Vec<ContainerHandle> {
        self.bindings.iter().map(|binding| binding.handle).collect()
    }

    /// The grid element of a bound container.
    #[must_use]
    pub fn grid(&self, handle: ContainerHandle) -> Option<NodeId> {
        self.binding(handle).map(|binding| binding.grid)
    }

    /// The parsed breakpoint configuration of a bound container.
    #[must_use]
    pub fn breakpoints(&self, handle: ContainerHandle) -> Option<&Breakpoints> {
        self.binding(handle).map(|binding| &binding.breakpoints)
    }

    /// The filter trigger elements of a bound container. Empty for
    /// layout-only containers.
    #[must_use]
    pub fn triggers(&self, handle: ContainerHandle) -> Option<&[NodeId]> {
        self.binding(handle)
            .map(|binding| binding.triggers.as_slice())
    }

    /// Finds the first trigger across all bindings whose filter tag matches
    /// `token` (wildcard exact, tags case-folded).
    #[must_use]
    pub fn find_trigger(&self, doc: &Document, token: &str) -> Option<NodeId> {
        let wanted = FilterValue::from_token(token);
        self.bindings
            .iter()
            .flat_map(|binding| binding.triggers.iter().copied())
            .find(|&trigger| {
                doc.attribute(trigger, TRIGGER_FILTER_ATTR)
                    .is_some_and(|tag| FilterValue::from_token(tag) == wanted)
            })
    }

    /// Releases one container binding. Returns whether it existed.
    pub fn dispose(&mut self, handle: ContainerHandle) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|binding| binding.handle != handle);
        self.bindings.len() != before
    }

    /// Releases every container binding.
    pub fn dispose_all(&mut self) {
        self.bindings.clear();
    }

    /// Notes a viewport resize. The relayout itself runs on the next
    /// [`Engine::tick`]; bursts of resizes coalesce into one pass.
    pub fn handle_resize(&mut self) {
        self.scheduler.request_frame();
    }

    /// Activates a filter trigger: marks it exclusively active among its
    /// container's triggers, derives the filter value from its tag, applies
    /// the filter, and relayouts the container synchronously.
    ///
    /// Returns `false` if the element is not a bound trigger.
    pub fn activate_trigger(&mut self, doc: &mut Document, trigger: NodeId, now: Instant) -> bool {
        let Some(index) = self
            .bindings
            .iter()
            .position(|binding| binding.triggers.contains(&trigger))
        else {
            return false;
        };
        let (handle, grid, triggers) = {
            let binding = &self.bindings[index];
            (binding.handle, binding.grid, binding.triggers.clone())
        };

        for other in triggers {
            doc.remove_class(other, ACTIVE_CLASS);
        }
        doc.add_class(trigger, ACTIVE_CLASS);

        let Some(token) = doc
            .attribute(trigger, TRIGGER_FILTER_ATTR)
            .map(str::to_string)
        else {
            return false;
        };
        let filter = FilterValue::from_token(&token);

        let hides_issued = filter::apply_filter(doc, &mut self.scheduler, grid, &filter, now);

        // Layout reflects the shown set right away; space freed by hides is
        // reclaimed by the settle relayout once they leave the flow.
        self.relayout_binding(index, doc);
        if hides_issued {
            self.scheduler
                .schedule(DeferredTask::SettleRelayout { container: handle }, now + HIDE_SETTLE);
        }
        true
    }

    /// Runs one cooperative scheduling step: drains every deferred task due
    /// at `now` in order, then runs the pending layout frame if a resize
    /// requested one.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) {
        for task in self.scheduler.drain_due(now) {
            match task {
                DeferredTask::FinishShow { item } => filter::finish_show(doc, item),
                DeferredTask::CommitHide { item } => {
                    filter::commit_hide(doc, item);
                }
                DeferredTask::SettleRelayout { container } => {
                    if let Some(index) = self
                        .bindings
                        .iter()
                        .position(|binding| binding.handle == container)
                    {
                        self.relayout_binding(index, doc);
                    }
                }
            }
        }

        if self.scheduler.take_frame_request() {
            self.relayout_all(doc);
        }
    }

    /// Fire time of the earliest pending deferred task, if any. Lets event
    /// loops pick a poll timeout that does not oversleep a settle delay.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_fire_at()
    }

    /// Re-runs breakpoint resolution, balancing and application for every
    /// bound container.
    pub fn relayout_all(&self, doc: &mut Document) {
        for index in 0..self.bindings.len() {
            self.relayout_binding(index, doc);
        }
    }

    fn relayout_binding(&self, index: usize, doc: &mut Document) {
        let binding = &self.bindings[index];
        // Fresh item query every pass; cards added or removed since the
        // last pass participate without any cache invalidation.
        let items = doc.descendants_with_class(binding.grid, ITEM_CLASS);
        layout::layout_pass(doc, binding.grid, &items, &binding.breakpoints);
    }

    fn binding(&self, handle: ContainerHandle) -> Option<&ContainerBinding> {
        self.bindings
            .iter()
            .find(|binding| binding.handle == handle)
    }
}
