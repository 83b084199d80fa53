//! Scene files: JSON descriptions of a document to lay out.
//!
//! A scene lists containers with their breakpoint configuration, filter
//! tags, and items (height plus category tags). The CLI, the terminal demo,
//! and the integration tests all build their documents from scenes, using
//! the same discovery contract the engine scans for.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{
    CONTAINER_CLASS, FILTER_CONTROLS_CLASS, GRID_CONFIG_ATTR, ITEM_CLASS, TRIGGER_FILTER_ATTR,
};
use crate::document::Document;

/// A complete scene: viewport width plus any number of containers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Initial viewport width in pixels.
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    /// Containers in document order.
    #[serde(default)]
    pub containers: Vec<SceneContainer>,
}

/// One filterable masonry region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneContainer {
    /// Raw breakpoint configuration, carried verbatim onto the grid's
    /// configuration attribute. Anything JSON is allowed here; the engine's
    /// tolerant parsing decides what counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<Value>,
    /// Filter tags to expose as triggers, e.g. `["*", "video"]`. Empty
    /// means a layout-only container.
    #[serde(default)]
    pub filters: Vec<String>,
    /// Cards in document order.
    #[serde(default)]
    pub items: Vec<SceneItem>,
}

/// One card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneItem {
    /// Intrinsic rendered height in pixels.
    pub height: f32,
    /// Category tags this card belongs to.
    #[serde(default)]
    pub categories: Vec<String>,
}

fn default_viewport_width() -> f32 {
    1024.0
}

impl Scene {
    /// Loads a scene from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse scene file: {}", path.display()))
    }

    /// Builds the element tree this scene describes.
    #[must_use]
    pub fn build_document(&self) -> Document {
        let mut doc = Document::new(self.viewport_width);

        for container_scene in &self.containers {
            let container = doc.create_element(doc.root());
            doc.add_class(container, CONTAINER_CLASS);

            let grid = doc.create_element(container);
            let config = container_scene
                .breakpoints
                .as_ref()
                .map_or_else(|| "{}".to_string(), Value::to_string);
            doc.set_attribute(grid, GRID_CONFIG_ATTR, &config);

            for item_scene in &container_scene.items {
                let item = doc.create_element(grid);
                doc.add_class(item, ITEM_CLASS);
                for category in &item_scene.categories {
                    doc.add_class(item, category);
                }
                doc.set_content_height(item, item_scene.height);
            }

            if !container_scene.filters.is_empty() {
                let controls = doc.create_element(container);
                doc.add_class(controls, FILTER_CONTROLS_CLASS);
                for tag in &container_scene.filters {
                    let trigger = doc.create_element(controls);
                    doc.set_attribute(trigger, TRIGGER_FILTER_ATTR, tag);
                }
            }
        }

        doc
    }
}
