//! In-memory element tree standing in for the live render surface.
//!
//! The engine lays out and filters cards by mutating this tree: elements
//! carry classes, attributes, a display flag, a measured content height, and
//! inline style state, while the document itself tracks the viewport width.
//! Queries walk the tree in document order and are re-executed freshly by
//! every caller, so elements added or removed between passes are picked up
//! automatically.

use std::collections::HashMap;

use crate::models::VisibilityPhase;

/// Handle to one element in a [`Document`].
///
/// Handles are only valid for the document that created them; using a handle
/// from another document indexes arbitrary elements or panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// CSS-like positioning mode of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionMode {
    /// Laid out in normal flow (the default for fresh elements).
    #[default]
    Static,
    /// Positioning context for absolutely placed descendants.
    Relative,
    /// Placed at explicit offsets within the nearest relative ancestor.
    Absolute,
}

/// Mutable inline style state written by the layout applicator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InlineStyle {
    /// Positioning mode.
    pub position: PositionMode,
    /// Left offset as a percentage of the parent width.
    pub left_pct: Option<f32>,
    /// Top offset in pixels.
    pub top_px: Option<f32>,
    /// Width as a percentage of the parent width.
    pub width_pct: Option<f32>,
    /// Explicit height in pixels.
    pub height_px: Option<f32>,
}

#[derive(Debug, Clone)]
struct ElementData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    display: bool,
    content_height: f32,
    style: InlineStyle,
    phase: VisibilityPhase,
}

impl ElementData {
    fn new(parent: Option<NodeId>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            classes: Vec::new(),
            attributes: HashMap::new(),
            display: true,
            content_height: 0.0,
            style: InlineStyle::default(),
            phase: VisibilityPhase::default(),
        }
    }
}

/// An element tree with a viewport width.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<ElementData>,
    viewport_width: f32,
}

impl Document {
    /// Creates a document with a single root element and the given viewport
    /// width in pixels.
    #[must_use]
    pub fn new(viewport_width: f32) -> Self {
        Self {
            elements: vec![ElementData::new(None)],
            viewport_width,
        }
    }

    /// The root element.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Current viewport width in pixels.
    #[must_use]
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Updates the viewport width. Takes effect on the next layout pass.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Appends a new child element under `parent` and returns its handle.
    pub fn create_element(&mut self, parent: NodeId) -> NodeId {
        let id = NodeId(self.elements.len());
        self.elements.push(ElementData::new(Some(parent)));
        self.elements[parent.0].children.push(id);
        id
    }

    /// Parent of an element, `None` for the root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.elements[id.0].parent
    }

    /// Direct children of an element, in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.elements[id.0].children
    }

    /// Adds a class to an element's class list if not already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        let classes = &mut self.elements[id.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    /// Removes a class from an element's class list.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.elements[id.0].classes.retain(|c| c != class);
    }

    /// Whether an element's class list contains `class`.
    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.elements[id.0].classes.iter().any(|c| c == class)
    }

    /// An element's class list.
    #[must_use]
    pub fn classes(&self, id: NodeId) -> &[String] {
        &self.elements[id.0].classes
    }

    /// Sets an attribute on an element, replacing any previous value.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        self.elements[id.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Reads an attribute value from an element.
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.elements[id.0].attributes.get(name).map(String::as_str)
    }

    /// Toggles whether an element occupies the visible flow.
    pub fn set_display(&mut self, id: NodeId, display: bool) {
        self.elements[id.0].display = display;
    }

    /// Whether an element currently occupies the visible flow.
    #[must_use]
    pub fn is_displayed(&self, id: NodeId) -> bool {
        self.elements[id.0].display
    }

    /// Sets the intrinsic rendered height of an element, in pixels.
    pub fn set_content_height(&mut self, id: NodeId, height: f32) {
        self.elements[id.0].content_height = height;
    }

    /// Measured rendered height of an element.
    ///
    /// Elements removed from the flow measure 0, matching the behavior of a
    /// render surface that stops reserving space for them.
    #[must_use]
    pub fn measured_height(&self, id: NodeId) -> f32 {
        let element = &self.elements[id.0];
        if element.display {
            element.content_height
        } else {
            0.0
        }
    }

    /// An element's inline style state.
    #[must_use]
    pub fn style(&self, id: NodeId) -> &InlineStyle {
        &self.elements[id.0].style
    }

    /// Mutable access to an element's inline style state.
    pub fn style_mut(&mut self, id: NodeId) -> &mut InlineStyle {
        &mut self.elements[id.0].style
    }

    /// An element's visibility phase.
    #[must_use]
    pub fn phase(&self, id: NodeId) -> VisibilityPhase {
        self.elements[id.0].phase
    }

    /// Sets an element's visibility phase.
    pub fn set_phase(&mut self, id: NodeId, phase: VisibilityPhase) {
        self.elements[id.0].phase = phase;
    }

    /// All descendants of `start` in document order, excluding `start`.
    fn descendants(&self, start: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.elements[start.0]
            .children
            .iter()
            .rev()
            .copied()
            .collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.elements[id.0].children.iter().rev().copied());
        }
        out
    }

    /// Descendants of `start` carrying `class`, in document order.
    #[must_use]
    pub fn descendants_with_class(&self, start: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(start)
            .into_iter()
            .filter(|&id| self.has_class(id, class))
            .collect()
    }

    /// Descendants of `start` carrying attribute `name`, in document order.
    #[must_use]
    pub fn descendants_with_attribute(&self, start: NodeId, name: &str) -> Vec<NodeId> {
        self.descendants(start)
            .into_iter()
            .filter(|&id| self.elements[id.0].attributes.contains_key(name))
            .collect()
    }

    /// First descendant of `start` carrying attribute `name`.
    #[must_use]
    pub fn first_descendant_with_attribute(&self, start: NodeId, name: &str) -> Option<NodeId> {
        self.descendants(start)
            .into_iter()
            .find(|&id| self.elements[id.0].attributes.contains_key(name))
    }

    /// First descendant of `start` carrying `class`.
    #[must_use]
    pub fn first_descendant_with_class(&self, start: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(start)
            .into_iter()
            .find(|&id| self.has_class(id, class))
    }
}
