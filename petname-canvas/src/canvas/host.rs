use crate::canvas::element::ElementId;
use crate::config::PluginConfig;
use crate::error::Result;

/// Trait for host design-tool integration
///
/// One implementation per design tool. The controller drives this surface
/// and knows nothing about the tool behind it; the library ships
/// [`InMemoryCanvas`](crate::canvas::InMemoryCanvas) for tests and demos.
pub trait CanvasHost {
    /// Ids of the currently selected elements, in selection order
    fn selection(&self) -> Vec<ElementId>;

    /// Whether the element exists and is a text element
    fn is_text(&self, id: &ElementId) -> bool;

    /// Create a new text element at the viewport center with the configured
    /// text style, returning its id
    ///
    /// The element's font must be loaded as part of creation so characters
    /// can be written immediately.
    fn create_centered_text(&mut self, config: &PluginConfig) -> Result<ElementId>;

    /// Load the element's font
    ///
    /// Must complete before [`set_characters`](CanvasHost::set_characters)
    /// is called for the element.
    fn load_font(&mut self, id: &ElementId) -> Result<()>;

    /// Replace the element's text content
    fn set_characters(&mut self, id: &ElementId, characters: &str) -> Result<()>;

    /// Show a notification to the operator
    fn notify(&mut self, message: &str);

    /// Close the plugin panel
    fn close_panel(&mut self);
}
