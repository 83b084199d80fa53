//! Category filtering state machine.
//!
//! A filter application walks a grid's items and splits them into a shown
//! and a hidden set. Showing is immediate for display eligibility but the
//! settled visibility markers arrive only after the show settle delay;
//! hiding applies its markers immediately but leaves the visible flow only
//! after the (shorter) hide settle delay. Both delayed steps re-check the
//! item's phase when they fire, so a newer filter application supersedes an
//! in-flight transition without cancelling its task.

use std::time::Instant;

use tracing::debug;

use crate::constants::{
    ACTIVE_CLASS, FILTER_WILDCARD, HIDDEN_CLASS, HIDE_SETTLE, ITEM_CLASS, SHOW_SETTLE,
};
use crate::document::{Document, NodeId};
use crate::models::VisibilityPhase;
use crate::scheduler::{DeferredTask, Scheduler};

/// A filter predicate: the wildcard, or one case-folded category tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Matches every item.
    All,
    /// Matches items whose class list contains the tag.
    Tag(String),
}

impl FilterValue {
    /// Builds a filter value from a trigger's tag token. The wildcard
    /// sentinel passes through; any other token is case-folded.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token == FILTER_WILDCARD {
            Self::All
        } else {
            Self::Tag(token.to_lowercase())
        }
    }

    /// Whether an item matches this filter.
    #[must_use]
    pub fn matches(&self, doc: &Document, item: NodeId) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => doc.has_class(item, tag),
        }
    }

    /// The token this value was built from.
    #[must_use]
    pub fn as_token(&self) -> &str {
        match self {
            Self::All => FILTER_WILDCARD,
            Self::Tag(tag) => tag,
        }
    }
}

/// Applies a filter to every item of a grid, issuing the immediate
/// visibility changes and scheduling the delayed finalizers.
///
/// Items are re-queried from the document, not taken from a cached list.
/// Returns whether any hide was issued; the caller schedules the coalesced
/// settle relayout in that case, once the hidden items have left the flow.
pub fn apply_filter(
    doc: &mut Document,
    scheduler: &mut Scheduler,
    grid: NodeId,
    filter: &FilterValue,
    now: Instant,
) -> bool {
    let items = doc.descendants_with_class(grid, ITEM_CLASS);
    let mut hides_issued = false;

    for item in items {
        if filter.matches(doc, item) {
            // Entering Showing supersedes a pending hide; the CommitHide
            // task will find the phase changed and leave the item alone.
            doc.set_display(item, true);
            doc.set_phase(item, VisibilityPhase::Showing);
            scheduler.schedule(DeferredTask::FinishShow { item }, now + SHOW_SETTLE);
        } else {
            doc.set_phase(item, VisibilityPhase::Hiding);
            doc.remove_class(item, ACTIVE_CLASS);
            doc.add_class(item, HIDDEN_CLASS);
            scheduler.schedule(DeferredTask::CommitHide { item }, now + HIDE_SETTLE);
            hides_issued = true;
        }
    }

    debug!(filter = filter.as_token(), hides_issued, "filter applied");
    hides_issued
}

/// Finalizes a show transition: applies the settled visibility markers if
/// the item is still on its way in.
pub fn finish_show(doc: &mut Document, item: NodeId) {
    if doc.phase(item) == VisibilityPhase::Showing {
        doc.set_phase(item, VisibilityPhase::VisibleActive);
        doc.add_class(item, ACTIVE_CLASS);
        doc.remove_class(item, HIDDEN_CLASS);
    }
}

/// Finalizes a hide transition: removes the item from the visible flow if
/// no re-match superseded the hide. Returns whether the hide committed.
pub fn commit_hide(doc: &mut Document, item: NodeId) -> bool {
    if doc.phase(item) == VisibilityPhase::Hiding {
        doc.set_display(item, false);
        doc.set_phase(item, VisibilityPhase::Hidden);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn grid_with_categories(categories: &[&[&str]]) -> (Document, NodeId, Vec<NodeId>) {
        let mut doc = Document::new(1024.0);
        let grid = doc.create_element(doc.root());
        let items: Vec<NodeId> = categories
            .iter()
            .map(|cats| {
                let item = doc.create_element(grid);
                doc.add_class(item, ITEM_CLASS);
                for cat in *cats {
                    doc.add_class(item, cat);
                }
                doc.set_content_height(item, 100.0);
                item
            })
            .collect();
        (doc, grid, items)
    }

    #[test]
    fn test_from_token_folds_case() {
        assert_eq!(FilterValue::from_token("*"), FilterValue::All);
        assert_eq!(
            FilterValue::from_token("Video"),
            FilterValue::Tag("video".to_string())
        );
    }

    #[test]
    fn test_wildcard_matches_everything() {
        let (doc, _, items) = grid_with_categories(&[&["video"], &[]]);
        let filter = FilterValue::All;
        assert!(items.iter().all(|&item| filter.matches(&doc, item)));
    }

    #[test]
    fn test_tag_matches_category_class() {
        let (doc, _, items) = grid_with_categories(&[&["video"], &["branding"]]);
        let filter = FilterValue::from_token("video");
        assert!(filter.matches(&doc, items[0]));
        assert!(!filter.matches(&doc, items[1]));
    }

    #[test]
    fn test_apply_filter_splits_shown_and_hidden() {
        let (mut doc, grid, items) = grid_with_categories(&[&["video"], &["branding"]]);
        let mut scheduler = Scheduler::new();
        let now = Instant::now();

        let hides = apply_filter(
            &mut doc,
            &mut scheduler,
            grid,
            &FilterValue::from_token("video"),
            now,
        );
        assert!(hides);

        assert!(doc.is_displayed(items[0]));
        assert_eq!(doc.phase(items[0]), VisibilityPhase::Showing);

        // The non-matching item keeps display until its hide commits, but
        // the markers flip immediately.
        assert!(doc.is_displayed(items[1]));
        assert_eq!(doc.phase(items[1]), VisibilityPhase::Hiding);
        assert!(doc.has_class(items[1], HIDDEN_CLASS));
        assert!(!doc.has_class(items[1], ACTIVE_CLASS));

        assert_eq!(scheduler.pending(), 2);
    }

    #[test]
    fn test_unmatched_tag_hides_all_items() {
        let (mut doc, grid, items) = grid_with_categories(&[&["video"], &["branding"]]);
        let mut scheduler = Scheduler::new();
        let now = Instant::now();

        apply_filter(
            &mut doc,
            &mut scheduler,
            grid,
            &FilterValue::from_token("sculpture"),
            now,
        );
        for item in items {
            assert_eq!(doc.phase(item), VisibilityPhase::Hiding);
            assert!(commit_hide(&mut doc, item));
            assert!(!doc.is_displayed(item));
        }
    }

    #[test]
    fn test_rematch_supersedes_pending_hide() {
        let (mut doc, grid, items) = grid_with_categories(&[&["video"]]);
        let mut scheduler = Scheduler::new();
        let now = Instant::now();

        apply_filter(
            &mut doc,
            &mut scheduler,
            grid,
            &FilterValue::from_token("branding"),
            now,
        );
        assert_eq!(doc.phase(items[0]), VisibilityPhase::Hiding);

        // Re-match inside the hide window.
        apply_filter(
            &mut doc,
            &mut scheduler,
            grid,
            &FilterValue::All,
            now + Duration::from_millis(100),
        );
        assert_eq!(doc.phase(items[0]), VisibilityPhase::Showing);

        // The stale hide finds the phase changed and does not commit.
        assert!(!commit_hide(&mut doc, items[0]));
        assert!(doc.is_displayed(items[0]));
    }

    #[test]
    fn test_finish_show_applies_settled_markers() {
        let (mut doc, _, items) = grid_with_categories(&[&["video"]]);
        doc.add_class(items[0], HIDDEN_CLASS);
        doc.set_phase(items[0], VisibilityPhase::Showing);

        finish_show(&mut doc, items[0]);
        assert_eq!(doc.phase(items[0]), VisibilityPhase::VisibleActive);
        assert!(doc.has_class(items[0], ACTIVE_CLASS));
        assert!(!doc.has_class(items[0], HIDDEN_CLASS));
    }

    #[test]
    fn test_finish_show_skips_superseded_transition() {
        let (mut doc, _, items) = grid_with_categories(&[&["video"]]);
        doc.set_phase(items[0], VisibilityPhase::Hiding);

        finish_show(&mut doc, items[0]);
        assert_eq!(doc.phase(items[0]), VisibilityPhase::Hiding);
        assert!(!doc.has_class(items[0], ACTIVE_CLASS));
    }
}
