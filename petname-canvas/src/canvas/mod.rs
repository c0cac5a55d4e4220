// Module declarations
pub(crate) mod controller;
pub(crate) mod element;
pub(crate) mod host;
pub(crate) mod memory;

pub use controller::{ControllerFlow, PluginController};
pub use element::{ElementId, FontName, SceneElement, ShapeElement, TextElement};
pub use host::CanvasHost;
pub use memory::InMemoryCanvas;
