//! Bindings to the Monaco editor widget
//!
//! The widget is loaded by the host page before `startNotebook` runs. This
//! module registers the notebook's language and theme, creates the editor
//! and adapts it to [`EditingSurface`].

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use super::helpers::{from_js, to_js};
use crate::config::NotebookConfig;
use crate::error::NotebookError;
use crate::models::presentation::{PresentationOption, Switch};
use crate::surface::EditingSurface;
use crate::wasm_error;

pub const LANGUAGE_ID: &str = "plaintext";
pub const THEME_NAME: &str = "WebScript";

/// The only highlighted construct: bare http(s) links
pub const URL_PATTERN: &str = r"https?://[^\s]+";
pub const URL_TOKEN: &str = "url";

#[wasm_bindgen]
extern "C" {
    /// A live editor instance
    #[derive(Debug, Clone)]
    pub type MonacoEditor;

    #[wasm_bindgen(method, js_name = getValue)]
    pub fn get_value(this: &MonacoEditor) -> String;

    #[wasm_bindgen(method, js_name = setValue)]
    pub fn set_value(this: &MonacoEditor, value: &str);

    #[wasm_bindgen(method, js_name = updateOptions)]
    pub fn update_options(this: &MonacoEditor, options: &JsValue);

    #[wasm_bindgen(method, js_name = getRawOptions)]
    pub fn get_raw_options(this: &MonacoEditor) -> JsValue;

    #[wasm_bindgen(method, js_name = onDidChangeModelContent)]
    pub fn on_did_change_model_content(this: &MonacoEditor, listener: &js_sys::Function) -> JsValue;

    #[wasm_bindgen(js_namespace = ["monaco", "editor"], js_name = create)]
    fn create_editor(element: &web_sys::HtmlElement, options: &JsValue) -> MonacoEditor;

    #[wasm_bindgen(js_namespace = ["monaco", "editor"], js_name = defineTheme)]
    fn define_theme(name: &str, theme: &JsValue);

    #[wasm_bindgen(js_namespace = ["monaco", "editor"], js_name = remeasureFonts)]
    fn remeasure_fonts();

    #[wasm_bindgen(js_namespace = ["monaco", "languages"], js_name = register)]
    fn register_language(language: &JsValue);

    #[wasm_bindgen(js_namespace = ["monaco", "languages"], js_name = setMonarchTokensProvider)]
    fn set_monarch_tokens_provider(language_id: &str, definition: &JsValue);
}

// ============================================================================
// Option payloads
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimapOptions {
    pub enabled: bool,
}

/// Options passed to `monaco.editor.create`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    pub language: &'static str,
    pub theme: &'static str,
    pub automatic_layout: bool,
    pub font_size: u32,
    pub font_family: String,
    pub scroll_beyond_last_line: bool,
    pub minimap: MinimapOptions,
    pub line_numbers: &'static str,
    pub word_wrap: &'static str,
}

impl EditorOptions {
    pub fn from_config(config: &NotebookConfig) -> Self {
        Self {
            language: LANGUAGE_ID,
            theme: THEME_NAME,
            automatic_layout: true,
            font_size: config.font.size,
            font_family: config.font.family_stack(),
            scroll_beyond_last_line: true,
            minimap: MinimapOptions {
                enabled: config.minimap.is_on(),
            },
            line_numbers: "on",
            word_wrap: config.word_wrap.as_str(),
        }
    }
}

/// Partial options for `updateOptions`; unset fields are left alone
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_wrap: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimap: Option<MinimapOptions>,
}

impl OptionsUpdate {
    pub fn for_option(option: PresentationOption, value: Switch) -> Self {
        match option {
            PresentationOption::WordWrap => Self {
                word_wrap: Some(value.as_str()),
                ..Default::default()
            },
            PresentationOption::Minimap => Self {
                minimap: Some(MinimapOptions {
                    enabled: value.is_on(),
                }),
                ..Default::default()
            },
        }
    }
}

/// The subset of `getRawOptions()` the notebook reads
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOptions {
    pub word_wrap: Option<String>,
    pub minimap: Option<RawMinimap>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawMinimap {
    pub enabled: Option<bool>,
}

impl RawOptions {
    /// Editor defaults apply to anything never set: wrap off, minimap shown
    pub fn get(&self, option: PresentationOption) -> Switch {
        match option {
            PresentationOption::WordWrap => {
                Switch::from_value(self.word_wrap.as_deref().unwrap_or("off"))
            }
            PresentationOption::Minimap => {
                let enabled = self.minimap.as_ref().and_then(|m| m.enabled);
                Switch::from_enabled(enabled.unwrap_or(true))
            }
        }
    }
}

// ============================================================================
// Language and theme
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageRegistration {
    pub id: &'static str,
}

/// Monarch grammar: a single root state with one `[regex, token]` rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonarchLanguage {
    pub tokenizer: BTreeMap<&'static str, Vec<(&'static str, &'static str)>>,
}

impl MonarchLanguage {
    pub fn urls_only() -> Self {
        let mut tokenizer = BTreeMap::new();
        tokenizer.insert("root", vec![(URL_PATTERN, URL_TOKEN)]);
        Self { tokenizer }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeRule {
    pub token: &'static str,
    pub foreground: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeDefinition {
    pub base: &'static str,
    pub inherit: bool,
    pub rules: Vec<ThemeRule>,
    pub colors: BTreeMap<&'static str, &'static str>,
}

impl ThemeDefinition {
    pub fn web_script() -> Self {
        let colors = [
            ("editor.foreground", "#dcdcdc"),
            ("editor.background", "#1e1e1e"),
            ("editorCursor.foreground", "#e7e7e7"),
            ("editor.lineHighlightBackground", "#2e2e2e"),
            ("editorLineNumber.foreground", "#8a8a8a"),
            ("editor.selectionBackground", "#264f78"),
            ("minimap.background", "#1e1e1e"),
            ("minimap.foreground", "#dcdcdc"),
        ];

        Self {
            base: "vs-dark",
            inherit: true,
            rules: vec![ThemeRule {
                token: URL_TOKEN,
                foreground: "569cd6",
            }],
            colors: colors.into_iter().collect(),
        }
    }
}

/// Register the URL-only language and the dark theme
pub fn register_language_and_theme() -> Result<(), NotebookError> {
    let language = LanguageRegistration { id: LANGUAGE_ID };
    register_language(&to_js(&language, "Language registration")?);

    let grammar = to_js(&MonarchLanguage::urls_only(), "Monarch grammar")?;
    set_monarch_tokens_provider(LANGUAGE_ID, &grammar);

    let theme = to_js(&ThemeDefinition::web_script(), "Theme definition")?;
    define_theme(THEME_NAME, &theme);
    Ok(())
}

/// Create the editor inside `element`
pub fn create(
    element: &web_sys::HtmlElement,
    config: &NotebookConfig,
) -> Result<MonacoEditor, NotebookError> {
    let options = to_js(&EditorOptions::from_config(config), "Editor options")?;
    Ok(create_editor(element, &options))
}

// ============================================================================
// Surface adapter
// ============================================================================

/// Content changes reported by the editor and not yet drained
pub type ChangeCounter = Rc<Cell<usize>>;

pub struct MonacoSurface {
    editor: MonacoEditor,
    changes: ChangeCounter,
}

impl MonacoSurface {
    pub fn new(editor: MonacoEditor) -> Self {
        Self {
            editor,
            changes: Rc::new(Cell::new(0)),
        }
    }

    /// Counter the editor's change listener increments
    pub fn change_counter(&self) -> ChangeCounter {
        self.changes.clone()
    }

    fn raw_options(&self) -> RawOptions {
        from_js(self.editor.get_raw_options(), "Editor options").unwrap_or_default()
    }
}

impl EditingSurface for MonacoSurface {
    fn value(&self) -> String {
        self.editor.get_value()
    }

    fn set_value(&mut self, text: &str) {
        self.editor.set_value(text);
    }

    fn drain_changes(&mut self) -> usize {
        self.changes.replace(0)
    }

    fn option(&self, option: PresentationOption) -> Switch {
        self.raw_options().get(option)
    }

    fn set_option(&mut self, option: PresentationOption, value: Switch) {
        let update = OptionsUpdate::for_option(option, value);
        match to_js(&update, "Options update") {
            Ok(update) => self.editor.update_options(&update),
            Err(err) => wasm_error!("Could not apply {:?}: {}", option, err),
        }
    }

    fn remeasure_fonts(&mut self) {
        remeasure_fonts();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_editor_options_from_defaults() {
        let options = EditorOptions::from_config(&NotebookConfig::default());
        let options = serde_json::to_value(options).unwrap();

        assert_eq!(options["language"], "plaintext");
        assert_eq!(options["theme"], "WebScript");
        assert_eq!(options["automaticLayout"], true);
        assert_eq!(options["fontSize"], 18);
        assert_eq!(options["minimap"], json!({ "enabled": true }));
        assert_eq!(options["wordWrap"], "off");
        assert_eq!(options["scrollBeyondLastLine"], true);
    }

    #[test]
    fn test_options_update_touches_one_option() {
        let wrap = OptionsUpdate::for_option(PresentationOption::WordWrap, Switch::On);
        let wrap = serde_json::to_value(wrap).unwrap();
        assert_eq!(wrap, json!({ "wordWrap": "on" }));

        let minimap = OptionsUpdate::for_option(PresentationOption::Minimap, Switch::Off);
        let minimap = serde_json::to_value(minimap).unwrap();
        assert_eq!(minimap, json!({ "minimap": { "enabled": false } }));
    }

    #[test]
    fn test_raw_options_read_back() {
        let raw: RawOptions = serde_json::from_value(json!({
            "wordWrap": "on",
            "minimap": { "enabled": false, "side": "right" },
            "fontSize": 18
        }))
        .unwrap();

        assert_eq!(raw.get(PresentationOption::WordWrap), Switch::On);
        assert_eq!(raw.get(PresentationOption::Minimap), Switch::Off);
    }

    #[test]
    fn test_raw_options_fall_back_to_editor_defaults() {
        let raw: RawOptions = serde_json::from_value(json!({})).unwrap();

        assert_eq!(raw.get(PresentationOption::WordWrap), Switch::Off);
        assert_eq!(raw.get(PresentationOption::Minimap), Switch::On);
    }

    #[test]
    fn test_grammar_and_theme_shape() {
        let grammar = serde_json::to_value(MonarchLanguage::urls_only()).unwrap();
        assert_eq!(grammar, json!({ "tokenizer": { "root": [[URL_PATTERN, "url"]] } }));

        let theme = serde_json::to_value(ThemeDefinition::web_script()).unwrap();
        assert_eq!(theme["base"], "vs-dark");
        assert_eq!(theme["rules"][0], json!({ "token": "url", "foreground": "569cd6" }));
        assert_eq!(theme["colors"]["editor.background"], "#1e1e1e");
    }
}
