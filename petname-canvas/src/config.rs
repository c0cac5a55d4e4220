//! Configuration for the plugin panel and created text elements

use crate::canvas::FontName;

/// Main configuration for a plugin instance
///
/// Covers the panel geometry and the text style applied to elements the
/// plugin creates itself. Elements already on the canvas keep their own
/// style; only their characters are replaced.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// Plugin panel width in pixels
    pub panel_width: u32,

    /// Plugin panel height in pixels
    pub panel_height: u32,

    /// Font applied to text elements created by the plugin
    pub font: FontName,

    /// Font size for created text elements
    pub font_size: f64,

    /// Line height in pixels for created text elements
    pub line_height: f64,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            panel_width: 450,
            panel_height: 720,
            font: FontName::new("Ubuntu Sans", "Regular"),
            font_size: 16.0,
            line_height: 24.0,
        }
    }
}

impl PluginConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the panel dimensions in pixels
    pub fn with_panel_size(mut self, width: u32, height: u32) -> Self {
        self.panel_width = width;
        self.panel_height = height;
        self
    }

    /// Set the font for created text elements
    pub fn with_font(mut self, font: FontName) -> Self {
        self.font = font;
        self
    }

    /// Set the font size for created text elements
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set the line height for created text elements
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }
}
