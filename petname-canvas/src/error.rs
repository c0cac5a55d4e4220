/// Error types for the petname-canvas library
use thiserror::Error;

use crate::canvas::ElementId;

/// Result type alias for canvas operations
pub type Result<T> = std::result::Result<T, CanvasError>;

/// Errors that can occur at the canvas-host boundary
///
/// The name generator itself never fails - unsatisfiable constraints degrade
/// to the fallback name. Errors exist only for host operations on elements.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// No element with the given id exists on the canvas
    #[error("Element not found: {0}")]
    ElementNotFound(ElementId),

    /// The element exists but is not a text element
    #[error("Element {0} is not a text element")]
    NotTextElement(ElementId),

    /// The host could not load the font required before writing characters
    #[error("Font unavailable: {family} {style}")]
    FontUnavailable {
        /// Font family name
        family: String,
        /// Font style name
        style: String,
    },

    /// Message serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
