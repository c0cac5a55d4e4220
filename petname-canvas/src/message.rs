//! Plugin message protocol
//!
//! The settings panel posts tagged JSON messages; the controller matches the
//! finite variants exhaustively. The tag and field names are the panel's wire
//! format, so a message serialized here is byte-compatible with what the
//! panel emits.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::petname::GenerationOptions;

/// Messages posted by the settings panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PluginMessage {
    /// Generate pet names into the current selection
    #[serde(rename = "generate-petnames")]
    GeneratePetnames(GenerationOptions),

    /// Generate pet names, then close the plugin panel
    #[serde(rename = "generate-and-close")]
    GenerateAndClose(GenerationOptions),

    /// Close the plugin panel without generating
    #[serde(rename = "close")]
    Close,
}

impl PluginMessage {
    /// Parse a message from its wire JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize a message to wire JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
