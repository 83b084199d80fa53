//! CLI command handlers for Cardwall.
//!
//! This module provides headless, scriptable access to the layout and
//! filter engine for automation, testing, and CI integration. Each
//! subcommand lives in its own module and exposes a clap `Args` struct with
//! an `execute` method.

#[cfg(feature = "tui")]
pub mod demo;
pub mod filter;
pub mod layout;
pub mod report;

// Re-export types used by main.rs and tests
#[cfg(feature = "tui")]
pub use demo::DemoArgs;
pub use filter::FilterArgs;
pub use layout::LayoutArgs;
