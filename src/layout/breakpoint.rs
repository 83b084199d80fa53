//! Viewport breakpoint resolution.

use crate::config::Breakpoints;
use crate::constants::{DESKTOP_MAX_WIDTH, MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};
use crate::models::ColumnSpec;

/// Viewport width tier. Tiers are evaluated low to high; the first matching
/// upper bound wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Below 480 px.
    Mobile,
    /// 480 px up to (excluding) 768 px.
    Tablet,
    /// 768 px up to (excluding) 1280 px.
    Desktop,
    /// 1280 px and above.
    Xlarge,
}

impl Tier {
    /// Classifies a viewport width.
    #[must_use]
    pub fn for_width(viewport_width: f32) -> Self {
        if viewport_width < MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if viewport_width < TABLET_MAX_WIDTH {
            Self::Tablet
        } else if viewport_width < DESKTOP_MAX_WIDTH {
            Self::Desktop
        } else {
            Self::Xlarge
        }
    }

    /// Human-readable tier name, as used in configuration fields.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
            Self::Xlarge => "xlarge",
        }
    }
}

impl Breakpoints {
    /// Configured column count for a tier.
    #[must_use]
    pub fn columns_for(&self, tier: Tier) -> usize {
        match tier {
            Tier::Mobile => self.mobile,
            Tier::Tablet => self.tablet,
            Tier::Desktop => self.desktop,
            Tier::Xlarge => self.xlarge,
        }
    }
}

/// Resolves a viewport width to a column spec.
///
/// Total for every input: the configuration invariant guarantees a positive
/// column count for each tier, so the returned spec never divides by zero.
#[must_use]
pub fn resolve(viewport_width: f32, breakpoints: &Breakpoints) -> ColumnSpec {
    ColumnSpec::new(breakpoints.columns_for(Tier::for_width(viewport_width)))
}
