//! Notebook WASM API
//!
//! Browser glue around the pure notebook core.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, JS conversion, element lookup
//! - `monaco`: editor widget bindings, language and theme registration
//! - `files`: `FileHost` over `FileReader` and Blob downloads
//! - `fonts`: asynchronous custom font loading
//! - `dom`: `startNotebook`, listener wiring

pub mod helpers;
pub mod monaco;
pub mod files;
pub mod fonts;
pub mod dom;

pub use dom::start_notebook;
