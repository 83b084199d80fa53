//! Masonry Layout Library
//!
//! This library provides the core functionality for the Cardwall
//! application: balancing varying-height cards into columns, resolving
//! viewport breakpoints, and filtering the visible card set by category
//! with settle-delayed show/hide transitions.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod document;
pub mod engine;
pub mod filter;
pub mod layout;
pub mod models;
pub mod scene;
pub mod scheduler;
#[cfg(feature = "tui")]
pub mod tui;

// Re-export the primary entry points
pub use config::Breakpoints;
pub use document::Document;
pub use engine::{ContainerHandle, Engine};
pub use filter::FilterValue;
pub use scene::Scene;
