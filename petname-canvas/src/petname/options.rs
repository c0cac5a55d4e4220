//! Generation options as posted by the settings panel

use serde::{Deserialize, Serialize};

/// How the starting letters of the composed words relate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartingLetterStyle {
    /// Every word starts with the same randomly chosen letter
    #[default]
    Ubuntu,
    /// No starting-letter constraint
    Random,
}

/// Options for one pet name generation
///
/// Field names on the wire match the settings-panel message format
/// (`wordCount`, `wordSeparator`, `maxWordLength`, `startingLetterStyle`).
/// Immutable for the duration of a generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Requested number of words; values <= 0 are treated as 1
    pub word_count: i32,

    /// Separator inserted between the composed words
    pub word_separator: String,

    /// Only words of at most this many characters are eligible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_word_length: Option<usize>,

    /// Starting-letter style; defaults to ubuntu when absent on the wire
    #[serde(default)]
    pub starting_letter_style: StartingLetterStyle,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            word_count: 2,
            word_separator: "-".to_string(),
            max_word_length: None,
            starting_letter_style: StartingLetterStyle::default(),
        }
    }
}

impl GenerationOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested word count
    pub fn with_word_count(mut self, word_count: i32) -> Self {
        self.word_count = word_count;
        self
    }

    /// Set the word separator
    pub fn with_word_separator(mut self, separator: impl Into<String>) -> Self {
        self.word_separator = separator.into();
        self
    }

    /// Set the maximum word length
    pub fn with_max_word_length(mut self, max_word_length: Option<usize>) -> Self {
        self.max_word_length = max_word_length;
        self
    }

    /// Set the starting-letter style
    pub fn with_starting_letter_style(mut self, style: StartingLetterStyle) -> Self {
        self.starting_letter_style = style;
        self
    }
}
