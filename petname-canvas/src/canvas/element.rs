/// Canvas element types
///
/// A minimal model of the host application's scene: enough structure to
/// enumerate a selection, tell text elements apart from everything else, and
/// write characters back.

/// Unique element identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(String);

impl ElementId {
    /// Generate a new unique element ID
    pub fn generate() -> Self {
        ElementId(uuid::Uuid::new_v4().to_string())
    }

    /// Create from a specific id string
    pub fn from_raw(id: impl Into<String>) -> Self {
        ElementId(id.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A font family/style pair as host applications address fonts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontName {
    /// Font family name
    pub family: String,
    /// Font style name
    pub style: String,
}

impl FontName {
    /// Create a font name
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

/// A text element on the canvas
#[derive(Debug, Clone)]
pub struct TextElement {
    /// Element identifier
    pub id: ElementId,
    /// Current text content
    pub characters: String,
    /// Font assigned to the element
    pub font: FontName,
    /// Font size in pixels
    pub font_size: f64,
    /// Line height in pixels
    pub line_height: f64,
    /// X position on the canvas
    pub x: f64,
    /// Y position on the canvas
    pub y: f64,
    /// Whether the element's font has been loaded by the host
    ///
    /// Hosts require the font loaded before characters may be written.
    pub font_loaded: bool,
}

/// A non-text element; only its identity matters to the plugin
#[derive(Debug, Clone)]
pub struct ShapeElement {
    /// Element identifier
    pub id: ElementId,
}

/// Any element the selection can contain
#[derive(Debug, Clone)]
pub enum SceneElement {
    /// A text element the plugin can write into
    Text(TextElement),
    /// Any other element kind; skipped during generation
    Shape(ShapeElement),
}

impl SceneElement {
    /// Element identifier
    pub fn id(&self) -> &ElementId {
        match self {
            SceneElement::Text(text) => &text.id,
            SceneElement::Shape(shape) => &shape.id,
        }
    }

    /// Whether this is a text element
    pub fn is_text(&self) -> bool {
        matches!(self, SceneElement::Text(_))
    }
}
