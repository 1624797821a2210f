//! Custom font loading
//!
//! Fire-and-forget: the editor is already usable with the fallback stack
//! when this starts. On success the face is added to the document and the
//! caller re-measures; on failure the fallback simply stays.

use wasm_bindgen::prelude::*;
use web_sys::FontFace;

use crate::config::FontConfig;
use crate::error::NotebookError;
use crate::{wasm_error, wasm_info, wasm_warn};

/// CSS `src` descriptor for a font URL
pub fn font_source(url: &str) -> String {
    format!("url({})", url)
}

/// Start loading the configured font; `on_loaded` runs once it is usable
pub fn load_font<F>(font: &FontConfig, on_loaded: F) -> Result<(), NotebookError>
where
    F: FnOnce() + 'static,
{
    let face = FontFace::new_with_str(&font.family, &font_source(&font.url))?;
    let promise = face.load()?;

    let family = font.family.clone();
    let loaded_face = face.clone();
    let on_ok = Closure::once(move |_: JsValue| {
        match web_sys::window().and_then(|w| w.document()) {
            Some(document) => {
                if let Err(err) = document.fonts().add(&loaded_face) {
                    wasm_warn!("Could not register font '{}': {:?}", family, err);
                    return;
                }
            }
            None => return,
        }
        wasm_info!("Font '{}' loaded", family);
        on_loaded();
    });
    let on_err = Closure::once(move |err: JsValue| {
        wasm_error!("Error loading custom font: {:?}", err);
    });

    let _ = promise.then2(&on_ok, &on_err);
    on_ok.forget();
    on_err.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_source() {
        assert_eq!(
            font_source("https://example.org/mono.ttf"),
            "url(https://example.org/mono.ttf)"
        );
    }
}
