//! Breakpoint configuration parsing.
//!
//! Each grid element carries a JSON attribute mapping viewport tiers to
//! column counts. Parsing is deliberately forgiving: every field defaults
//! independently when absent or malformed, and an attribute value that is
//! not valid JSON degrades to the full default set with a logged warning
//! rather than an error.

use serde_json::Value;
use tracing::warn;

use crate::constants::{
    DEFAULT_COLUMNS, DEFAULT_DESKTOP_COLUMNS, DEFAULT_MOBILE_COLUMNS, DEFAULT_TABLET_COLUMNS,
    DEFAULT_XLARGE_COLUMNS,
};

/// Column counts per viewport tier for one grid.
///
/// Every field is a positive column count. Fields that were absent or
/// malformed in the source attribute hold their tier's fallback value, so a
/// `Breakpoints` is always safe to lay out with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    /// Seed column count from the `default` field. No viewport tier maps to
    /// it; kept for configuration-format compatibility.
    pub default_columns: usize,
    /// Column count below 480 px.
    pub mobile: usize,
    /// Column count from 480 px up to 768 px.
    pub tablet: usize,
    /// Column count from 768 px up to 1280 px.
    pub desktop: usize,
    /// Column count from 1280 px upward.
    pub xlarge: usize,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            default_columns: DEFAULT_COLUMNS,
            mobile: DEFAULT_MOBILE_COLUMNS,
            tablet: DEFAULT_TABLET_COLUMNS,
            desktop: DEFAULT_DESKTOP_COLUMNS,
            xlarge: DEFAULT_XLARGE_COLUMNS,
        }
    }
}

impl Breakpoints {
    /// Parses a grid's configuration attribute value.
    ///
    /// Unparsable JSON logs a warning and yields the full default set. A
    /// parsed value that is not an object (or an object missing fields)
    /// falls back field by field.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::from_value(&value),
            Err(err) => {
                warn!(error = %err, "malformed grid configuration attribute, using defaults");
                Self::default()
            }
        }
    }

    /// Parses an optional configuration attribute; a missing attribute
    /// yields the default set without a warning.
    #[must_use]
    pub fn parse_attribute(raw: Option<&str>) -> Self {
        raw.map_or_else(Self::default, Self::parse)
    }

    /// Extracts per-tier column counts from a parsed JSON value.
    ///
    /// Each field must be a positive integer to be honored; anything else
    /// (missing, fractional, zero, negative, wrong type) takes the tier
    /// fallback.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            default_columns: column_field(value, "default", DEFAULT_COLUMNS),
            mobile: column_field(value, "mobile", DEFAULT_MOBILE_COLUMNS),
            tablet: column_field(value, "tablet", DEFAULT_TABLET_COLUMNS),
            desktop: column_field(value, "desktop", DEFAULT_DESKTOP_COLUMNS),
            xlarge: column_field(value, "xlarge", DEFAULT_XLARGE_COLUMNS),
        }
    }
}

/// Reads one column-count field, falling back when it is not a positive integer.
fn column_field(value: &Value, field: &str, fallback: usize) -> usize {
    value
        .get(field)
        .and_then(Value::as_u64)
        .filter(|&count| count >= 1)
        .map_or(fallback, |count| count as usize)
}
