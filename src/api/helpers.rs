//! Shared helpers for the browser glue
//!
//! Console logging macros, JS <-> Rust conversion and element lookup.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::NotebookError;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript, tagging failures with `context`
pub fn from_js<T: DeserializeOwned>(value: JsValue, context: &str) -> Result<T, NotebookError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", context, e);
        log_error(&msg);
        NotebookError::Config(msg)
    })
}

/// Serialize to a plain JS object (maps become objects, not `Map`s)
pub fn to_js<T: Serialize>(value: &T, context: &str) -> Result<JsValue, NotebookError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", context, e);
        log_error(&msg);
        NotebookError::Dom(msg)
    })
}

// ============================================================================
// DOM Helpers
// ============================================================================

/// Look up an element by id and cast it to the expected type
pub fn element<T: JsCast>(document: &web_sys::Document, id: &str) -> Result<T, NotebookError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| NotebookError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| NotebookError::Dom(format!("#{} has an unexpected element type", id)))
}

/// Create an element and cast it to the expected type
pub fn create<T: JsCast>(document: &web_sys::Document, tag: &str) -> Result<T, NotebookError> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| NotebookError::Dom(format!("<{}> has an unexpected element type", tag)))
}
