//! Notebook configuration
//!
//! Read from the object passed to `startNotebook`. Every field is optional;
//! missing fields fall back to the defaults of the stock notebook page.

use serde::{Deserialize, Serialize};

use crate::models::document::UNTITLED;
use crate::models::layout::MIN_PANE_WIDTH;
use crate::models::presentation::Switch;

pub const DEFAULT_PLACEHOLDER: &str =
    "Welcome to your notebook! Feel free to write yourself a message and save it for later!";

pub const DEFAULT_UNSAVED_PROMPT: &str =
    "You have unsaved changes. Are you sure you want to leave?";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementIds {
    pub editor: String,
    pub container: String,
    pub divider: String,
    pub word_wrap_select: String,
    pub minimap_select: String,
    pub open_button: String,
    pub save_button: String,
    pub save_dump_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            editor: "editor".to_string(),
            container: "editor-container".to_string(),
            divider: "divider".to_string(),
            word_wrap_select: "lineWrapSelect".to_string(),
            minimap_select: "minimapSelect".to_string(),
            open_button: "openButton".to_string(),
            save_button: "saveButton".to_string(),
            save_dump_button: "saveDump".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontConfig {
    pub family: String,
    pub url: String,
    /// Families used until (or instead of) the custom font
    pub fallback: String,
    pub size: u32,
}

impl FontConfig {
    /// CSS font-family stack with the custom font first
    pub fn family_stack(&self) -> String {
        if self.fallback.is_empty() {
            self.family.clone()
        } else {
            format!("{}, {}", self.family, self.fallback)
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "andorraMono".to_string(),
            url: "https://andorraeditor.pages.dev/assets/fonts/andorra.ttf".to_string(),
            fallback: "TwemojiRubisco, Arial, Helvetica, sans-serif".to_string(),
            size: 18,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotebookConfig {
    pub elements: ElementIds,
    pub font: FontConfig,
    pub placeholder: String,
    pub untitled_name: String,
    pub word_wrap: Switch,
    pub minimap: Switch,
    pub min_pane_width: f64,
    pub unsaved_prompt: String,
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            font: FontConfig::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            untitled_name: UNTITLED.to_string(),
            word_wrap: Switch::Off,
            minimap: Switch::On,
            min_pane_width: MIN_PANE_WIDTH,
            unsaved_prompt: DEFAULT_UNSAVED_PROMPT.to_string(),
        }
    }
}
