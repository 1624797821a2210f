//! Browser file host
//!
//! Opens files through one reusable `<input type="file">` and a
//! `FileReader`, and downloads through a Blob object URL clicked from a
//! transient `<a download>`.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, FileReader, HtmlAnchorElement, HtmlInputElement, Url};

use super::helpers::create;
use crate::error::NotebookError;
use crate::transfer::{ExportPayload, FileHost, LoadedFile};
use crate::{wasm_log, wasm_warn};

/// Receives a picked file once it has been read
pub type DeliverFile = Rc<dyn Fn(LoadedFile)>;

/// The file input reused by every open, with its change listener
struct Picker {
    input: HtmlInputElement,
    _on_change: Closure<dyn FnMut(web_sys::Event)>,
}

pub struct BrowserFiles {
    document: web_sys::Document,
    deliver: DeliverFile,
    picker: Option<Picker>,
}

impl BrowserFiles {
    pub fn new(document: web_sys::Document, deliver: DeliverFile) -> Self {
        Self {
            document,
            deliver,
            picker: None,
        }
    }

    /// The file input, once the first open has created it
    pub fn picker_input(&self) -> Option<&HtmlInputElement> {
        self.picker.as_ref().map(|picker| &picker.input)
    }

    fn picker(&mut self) -> Result<&HtmlInputElement, NotebookError> {
        if self.picker.is_none() {
            let input: HtmlInputElement = create(&self.document, "input")?;
            input.set_type("file");

            let deliver = self.deliver.clone();
            let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |event| {
                if let Err(err) = read_selected(&event, deliver.clone()) {
                    wasm_warn!("Could not read selected file: {}", err);
                }
            });
            input.set_onchange(Some(on_change.as_ref().unchecked_ref()));

            self.picker = Some(Picker {
                input,
                _on_change: on_change,
            });
        }

        self.picker_input()
            .ok_or_else(|| NotebookError::Dom("file input unavailable".to_string()))
    }

    fn show_picker(&mut self, accept: &str) -> Result<(), NotebookError> {
        let input = self.picker()?;
        input.set_accept(accept);
        input.click();
        Ok(())
    }
}

/// Start reading the first selected file. No selection is a silent no-op.
fn read_selected(event: &web_sys::Event, deliver: DeliverFile) -> Result<(), NotebookError> {
    let input = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .ok_or_else(|| NotebookError::Dom("change event without a file input".to_string()))?;

    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        wasm_log!("No file selected");
        return Ok(());
    };
    // Clear so picking the same file again still fires `change`
    input.set_value("");

    let reader = FileReader::new()?;
    let name = file.name();
    let result_reader = reader.clone();
    let on_load = Closure::once_into_js(move || {
        match result_reader.result().map(|value| value.as_string()) {
            Ok(Some(text)) => deliver(LoadedFile { name, text }),
            _ => wasm_warn!("'{}' could not be read as text", name),
        }
    });
    reader.set_onload(Some(on_load.unchecked_ref()));

    reader.read_as_text(&file)?;
    Ok(())
}

/// An element attached to the body, detached when dropped
struct Attached<'a> {
    body: &'a web_sys::HtmlElement,
    node: &'a web_sys::Node,
}

impl<'a> Attached<'a> {
    fn new(body: &'a web_sys::HtmlElement, node: &'a web_sys::Node) -> Result<Self, NotebookError> {
        body.append_child(node)?;
        Ok(Self { body, node })
    }
}

impl Drop for Attached<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.body.remove_child(self.node) {
            wasm_warn!("Failed to detach download link: {:?}", err);
        }
    }
}

/// A Blob object URL, revoked when dropped
struct ObjectUrl(String);

impl ObjectUrl {
    fn create(blob: &Blob) -> Result<Self, NotebookError> {
        Ok(Self(Url::create_object_url_with_blob(blob)?))
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(err) = Url::revoke_object_url(&self.0) {
            wasm_warn!("Failed to revoke {}: {:?}", self.0, err);
        }
    }
}

impl FileHost for BrowserFiles {
    fn pick_text_file(&mut self, accept: &str) {
        if let Err(err) = self.show_picker(accept) {
            wasm_warn!("File picker unavailable: {}", err);
        }
    }

    fn download(&mut self, payload: &ExportPayload) -> Result<(), NotebookError> {
        let parts = js_sys::Array::of1(&JsValue::from_str(&payload.content));
        let options = BlobPropertyBag::new();
        options.set_type(payload.mime_type);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|e| NotebookError::Download(format!("{:?}", e)))?;

        let url = ObjectUrl::create(&blob)?;
        let anchor: HtmlAnchorElement = create(&self.document, "a")?;
        anchor.set_href(url.as_str());
        anchor.set_download(&payload.file_name);

        let body = self
            .document
            .body()
            .ok_or_else(|| NotebookError::Download("document has no body".to_string()))?;
        let _attached = Attached::new(&body, &anchor)?;
        anchor.click();

        wasm_log!("Download triggered: {}", payload.file_name);
        Ok(())
    }
}
