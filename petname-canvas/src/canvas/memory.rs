//! In-memory canvas host for tests and demos

use crate::canvas::element::{ElementId, FontName, SceneElement, ShapeElement, TextElement};
use crate::canvas::host::CanvasHost;
use crate::config::PluginConfig;
use crate::error::{CanvasError, Result};

/// A canvas host backed by plain data structures
///
/// Mimics the observable behavior of a real host: fonts must be loaded
/// before characters can be written, notifications accumulate, and the
/// panel-open flag flips on close.
#[derive(Debug)]
pub struct InMemoryCanvas {
    elements: Vec<SceneElement>,
    selection: Vec<ElementId>,
    viewport_center: (f64, f64),
    notifications: Vec<String>,
    panel_open: bool,
}

impl Default for InMemoryCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCanvas {
    /// Create an empty canvas with an open plugin panel
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            selection: Vec::new(),
            viewport_center: (0.0, 0.0),
            notifications: Vec::new(),
            panel_open: true,
        }
    }

    /// Set the viewport center used for created elements
    pub fn with_viewport_center(mut self, x: f64, y: f64) -> Self {
        self.viewport_center = (x, y);
        self
    }

    /// Add a text element with the given content, returning its id
    ///
    /// The element's font counts as not yet loaded, as for any element that
    /// already existed when the plugin opened.
    pub fn add_text_element(&mut self, characters: impl Into<String>, font: FontName) -> ElementId {
        let id = ElementId::generate();
        self.elements.push(SceneElement::Text(TextElement {
            id: id.clone(),
            characters: characters.into(),
            font,
            font_size: 16.0,
            line_height: 24.0,
            x: 0.0,
            y: 0.0,
            font_loaded: false,
        }));
        id
    }

    /// Add a non-text element, returning its id
    pub fn add_shape_element(&mut self) -> ElementId {
        let id = ElementId::generate();
        self.elements.push(SceneElement::Shape(ShapeElement { id: id.clone() }));
        id
    }

    /// Replace the current selection
    pub fn select(&mut self, ids: Vec<ElementId>) {
        self.selection = ids;
    }

    /// All elements on the canvas
    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    /// Text content of the element, if it is a text element
    pub fn text_characters(&self, id: &ElementId) -> Option<&str> {
        self.elements.iter().find_map(|element| match element {
            SceneElement::Text(text) if &text.id == id => Some(text.characters.as_str()),
            _ => None,
        })
    }

    /// Notifications shown so far, oldest first
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Whether the plugin panel is still open
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    fn text_element_mut(&mut self, id: &ElementId) -> Result<&mut TextElement> {
        let element = self
            .elements
            .iter_mut()
            .find(|element| element.id() == id)
            .ok_or_else(|| CanvasError::ElementNotFound(id.clone()))?;
        match element {
            SceneElement::Text(text) => Ok(text),
            SceneElement::Shape(_) => Err(CanvasError::NotTextElement(id.clone())),
        }
    }
}

impl CanvasHost for InMemoryCanvas {
    fn selection(&self) -> Vec<ElementId> {
        self.selection.clone()
    }

    fn is_text(&self, id: &ElementId) -> bool {
        self.elements
            .iter()
            .any(|element| element.id() == id && element.is_text())
    }

    fn create_centered_text(&mut self, config: &PluginConfig) -> Result<ElementId> {
        let id = ElementId::generate();
        let (x, y) = self.viewport_center;
        self.elements.push(SceneElement::Text(TextElement {
            id: id.clone(),
            characters: String::new(),
            font: config.font.clone(),
            font_size: config.font_size,
            line_height: config.line_height,
            x,
            y,
            font_loaded: true,
        }));
        Ok(id)
    }

    fn load_font(&mut self, id: &ElementId) -> Result<()> {
        let text = self.text_element_mut(id)?;
        text.font_loaded = true;
        Ok(())
    }

    fn set_characters(&mut self, id: &ElementId, characters: &str) -> Result<()> {
        let text = self.text_element_mut(id)?;
        if !text.font_loaded {
            return Err(CanvasError::FontUnavailable {
                family: text.font.family.clone(),
                style: text.font.style.clone(),
            });
        }
        text.characters = characters.to_string();
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn close_panel(&mut self) {
        self.panel_open = false;
    }
}
