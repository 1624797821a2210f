//! Plain-Text Notebook WASM Module
//!
//! A single-document notebook for the browser: the document session with
//! its unsaved-change tracking, local open and export, presentation
//! selector sync, keyboard shortcuts and pane resizing. The state logic
//! lives in plain Rust modules; `api` wires it to the page.

pub mod api;
pub mod config;
pub mod error;
pub mod keymap;
pub mod models;
pub mod notebook;
pub mod surface;
pub mod sync;
pub mod transfer;

// Re-export commonly used types
pub use config::NotebookConfig;
pub use error::NotebookError;
pub use keymap::{Action, Button, KeyPress};
pub use models::*;
pub use notebook::{Notebook, Outcome};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", err).into());
    }

    log::info!("Notebook WASM module initialized");
}
