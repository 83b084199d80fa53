//! Application-wide constants.
//!
//! This module defines the discovery-contract marker names, the viewport
//! breakpoint thresholds, the filter settle delays, and the fallback column
//! counts used throughout the engine.

use std::time::Duration;

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Cardwall";

/// Class marking a region that should receive masonry layout and filtering.
pub const CONTAINER_CLASS: &str = "have-filter-masonry";

/// Attribute identifying a container's grid element; its value holds the
/// JSON breakpoint configuration.
pub const GRID_CONFIG_ATTR: &str = "data-filter-masonry";

/// Class marking an individual card inside a grid.
pub const ITEM_CLASS: &str = "grid-item";

/// Class marking the element that holds a container's filter triggers.
pub const FILTER_CONTROLS_CLASS: &str = "filter-buttons";

/// Attribute carried by each filter trigger; its value is a category tag or
/// the wildcard sentinel.
pub const TRIGGER_FILTER_ATTR: &str = "data-filter";

/// Filter tag sentinel matching every item.
pub const FILTER_WILDCARD: &str = "*";

/// Marker class for items that have settled visible and for the currently
/// selected filter trigger.
pub const ACTIVE_CLASS: &str = "active";

/// Marker class for items transitioning out of or removed from the flow.
pub const HIDDEN_CLASS: &str = "hidden";

/// Exclusive upper bound of the mobile tier, in pixels.
pub const MOBILE_MAX_WIDTH: f32 = 480.0;

/// Exclusive upper bound of the tablet tier, in pixels.
pub const TABLET_MAX_WIDTH: f32 = 768.0;

/// Exclusive upper bound of the desktop tier, in pixels. Wider viewports
/// fall into the xlarge tier.
pub const DESKTOP_MAX_WIDTH: f32 = 1280.0;

/// Delay before a newly shown item receives its settled visibility markers.
///
/// Must stay longer than [`HIDE_SETTLE`]: an item re-matched during its hide
/// window has to be recoverable before the hide commits.
pub const SHOW_SETTLE: Duration = Duration::from_millis(300);

/// Delay before a hidden item is removed from the visible flow and the freed
/// space is reclaimed by a settle re-layout.
pub const HIDE_SETTLE: Duration = Duration::from_millis(200);

/// Fallback column count for the `default` configuration field.
pub const DEFAULT_COLUMNS: usize = 1;

/// Fallback column count for the mobile tier.
pub const DEFAULT_MOBILE_COLUMNS: usize = 1;

/// Fallback column count for the tablet tier.
pub const DEFAULT_TABLET_COLUMNS: usize = 2;

/// Fallback column count for the desktop tier.
pub const DEFAULT_DESKTOP_COLUMNS: usize = 3;

/// Fallback column count for the xlarge tier.
pub const DEFAULT_XLARGE_COLUMNS: usize = 4;
