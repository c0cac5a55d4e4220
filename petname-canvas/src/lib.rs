//! # petname-canvas
//!
//! A pet name generator for design-tool plugins: produces random multi-word
//! codenames ("wholly-warty-warthog") and writes them into text elements on
//! a design canvas.
//!
//! ## Overview
//!
//! The library is split into a pure generator core and a thin host boundary.
//! The generator samples words from three curated categories (names,
//! adjectives, adverbs), applies length and starting-letter constraints, and
//! joins the result with a separator. The host boundary is the [`CanvasHost`]
//! trait - one implementation per design tool - driven by a
//! [`PluginController`] that applies [`PluginMessage`]s posted by a settings
//! panel.
//!
//! ## Key Features
//!
//! - Ubuntu-style alliteration (every word shares one starting letter)
//! - Maximum word length filtering
//! - Graceful fallback when constraints leave no candidate words
//! - Tagged message protocol matching the settings-panel wire format
//! - In-memory canvas implementation for tests and demos
//!
//! ## Example
//!
//! ```rust
//! use petname_canvas::{GenerationOptions, StartingLetterStyle, WordCategories};
//!
//! let categories = WordCategories::builtin();
//! let options = GenerationOptions::default()
//!     .with_word_count(3)
//!     .with_starting_letter_style(StartingLetterStyle::Ubuntu);
//! let name = petname_canvas::generate(&options, &categories);
//! assert!(!name.is_empty());
//! ```

// Module declarations
pub mod canvas;
pub mod config;
pub mod error;
pub mod message;
pub mod petname;

// Re-exports for convenience
pub use canvas::{
    CanvasHost, ControllerFlow, ElementId, FontName, InMemoryCanvas, PluginController,
    SceneElement, ShapeElement, TextElement,
};
pub use config::PluginConfig;
pub use error::{CanvasError, Result};
pub use message::PluginMessage;
pub use petname::{generate, GenerationOptions, StartingLetterStyle, WordCategories, FALLBACK_NAME};
