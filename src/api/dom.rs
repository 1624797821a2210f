//! Page wiring
//!
//! `startNotebook` looks up the page elements, creates the editor and
//! routes every DOM event into the shared [`Notebook`]. After each handled
//! event the window title is refreshed from the notebook.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{BeforeUnloadEvent, HtmlElement, HtmlSelectElement, KeyboardEvent, MouseEvent};

use super::files::BrowserFiles;
use super::fonts::load_font;
use super::helpers::{element, from_js};
use super::monaco::{self, MonacoSurface};
use crate::config::NotebookConfig;
use crate::error::NotebookError;
use crate::keymap::{Button, KeyPress};
use crate::models::layout::{px, ContainerGeometry};
use crate::models::presentation::PresentationOption;
use crate::notebook::{Notebook, Outcome};
use crate::surface::{PresentationControls, SelectorControl};
use crate::transfer::LoadedFile;
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

/// A `<select>` mirroring one presentation option
pub struct SelectControl(HtmlSelectElement);

impl SelectorControl for SelectControl {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&mut self, value: &str) {
        self.0.set_value(value);
    }
}

pub type BrowserNotebook = Notebook<MonacoSurface, SelectControl, BrowserFiles>;

/// Shared handle captured by every listener
#[derive(Clone)]
struct Page {
    notebook: Rc<RefCell<BrowserNotebook>>,
    document: web_sys::Document,
}

impl Page {
    /// Run `f` against the notebook and refresh the title. Events raised
    /// while the notebook is already busy are skipped; editor changes stay
    /// counted on the surface until the notebook drains them.
    fn handle<R>(&self, f: impl FnOnce(&mut BrowserNotebook) -> R) -> Option<R> {
        let Ok(mut notebook) = self.notebook.try_borrow_mut() else {
            wasm_log!("Notebook busy, nested event ignored");
            return None;
        };
        let result = f(&mut notebook);
        sync_title(&self.document, &notebook);
        Some(result)
    }

    fn set_cursor(&self, cursor: &str) {
        if let Some(body) = self.document.body() {
            if let Err(err) = body.style().set_property("cursor", cursor) {
                wasm_warn!("Could not set cursor: {:?}", err);
            }
        }
    }
}

fn sync_title(document: &web_sys::Document, notebook: &BrowserNotebook) {
    let title = notebook.title();
    if document.title() != title {
        document.set_title(&title);
    }
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::OpenRequested => wasm_log!("Open requested"),
        Outcome::Exported(name) => wasm_info!("Saved as {}", name),
        Outcome::Toggled(option, value) => wasm_log!("{:?} is now {}", option, value),
        Outcome::Failed(err) => wasm_error!("Action failed: {}", err),
    }
}

/// Attach a listener for the lifetime of the page
fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), NotebookError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Boot the notebook on the current page.
///
/// `config` may be `undefined` or a partial object; see `NotebookConfig`.
#[wasm_bindgen(js_name = startNotebook)]
pub fn start_notebook(config: JsValue) -> Result<(), JsValue> {
    let config: NotebookConfig = if config.is_undefined() || config.is_null() {
        NotebookConfig::default()
    } else {
        from_js(config, "Notebook config")?
    };

    start(config).map_err(|err| {
        wasm_error!("startNotebook failed: {}", err);
        err.into()
    })
}

fn start(config: NotebookConfig) -> Result<(), NotebookError> {
    let window = web_sys::window().ok_or_else(|| NotebookError::Dom("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| NotebookError::Dom("no document".to_string()))?;
    let ids = &config.elements;

    let editor_element: HtmlElement = element(&document, &ids.editor)?;
    let container: HtmlElement = element(&document, &ids.container)?;
    let divider: HtmlElement = element(&document, &ids.divider)?;
    let controls = PresentationControls::new(
        SelectControl(element(&document, &ids.word_wrap_select)?),
        SelectControl(element(&document, &ids.minimap_select)?),
    );

    monaco::register_language_and_theme()?;
    let editor = monaco::create(&editor_element, &config)?;
    let surface = MonacoSurface::new(editor.clone());
    let changes = surface.change_counter();

    let notebook = Rc::new_cyclic(|weak: &Weak<RefCell<BrowserNotebook>>| {
        let weak = weak.clone();
        let title_document = document.clone();
        let files = BrowserFiles::new(
            document.clone(),
            Rc::new(move |file: LoadedFile| {
                if let Some(notebook) = weak.upgrade() {
                    let page = Page {
                        notebook,
                        document: title_document.clone(),
                    };
                    page.handle(|nb| nb.complete_open(Some(file)));
                }
            }),
        );
        RefCell::new(Notebook::new(&config, surface, controls, files))
    });

    let page = Page { notebook, document };
    sync_title(&page.document, &page.notebook.borrow());

    // Edits
    {
        let page = page.clone();
        let on_change = Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| {
            changes.set(changes.get() + 1);
            page.handle(|nb| nb.content_changed());
        });
        editor.on_did_change_model_content(on_change.as_ref().unchecked_ref());
        on_change.forget();
    }

    // Unsaved-navigation guard
    {
        let page = page.clone();
        listen(&window, "beforeunload", move |event| {
            let Ok(notebook) = page.notebook.try_borrow() else {
                return;
            };
            let Some(prompt) = notebook.before_unload() else {
                return;
            };
            if let Some(event) = event.dyn_ref::<BeforeUnloadEvent>() {
                event.prevent_default();
                event.set_return_value(prompt);
            }
        })?;
    }

    // Buttons
    for button in Button::ALL {
        let id = match button {
            Button::Open => &ids.open_button,
            Button::Save => &ids.save_button,
            Button::SaveDump => &ids.save_dump_button,
        };
        let target: HtmlElement = element(&page.document, id)?;
        let page = page.clone();
        listen(&target, "click", move |_| {
            if let Some(outcome) = page.handle(|nb| nb.button(button)) {
                report(&outcome);
            }
        })?;
    }

    // Presentation selectors
    for (option, id) in [
        (PresentationOption::WordWrap, &ids.word_wrap_select),
        (PresentationOption::Minimap, &ids.minimap_select),
    ] {
        let target: HtmlElement = element(&page.document, id)?;
        let page = page.clone();
        listen(&target, "change", move |_| {
            page.handle(|nb| nb.control_changed(option));
        })?;
    }

    // Shortcuts
    {
        let page = page.clone();
        listen(&window, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let press = KeyPress {
                key: key_event.key(),
                ctrl: key_event.ctrl_key(),
                alt: key_event.alt_key(),
            };
            if let Some(Some(outcome)) = page.handle(|nb| nb.key_down(&press)) {
                event.prevent_default();
                report(&outcome);
            }
        })?;
    }

    // Pane resizing: press on the divider, move and release anywhere
    {
        let page = page.clone();
        listen(&divider, "mousedown", move |_| {
            if let Some(cursor) = page.handle(|nb| nb.divider_pressed()) {
                page.set_cursor(cursor);
            }
        })?;
    }
    {
        let page = page.clone();
        listen(&page.document.clone(), "mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let geometry = ContainerGeometry {
                offset_left: container.offset_left() as f64,
                client_width: container.client_width() as f64,
            };
            let width = page
                .handle(|nb| nb.pointer_moved(mouse.client_x() as f64, geometry))
                .flatten();
            if let Some(width) = width {
                if let Err(err) = editor_element.style().set_property("width", &px(width)) {
                    wasm_warn!("Could not resize pane: {:?}", err);
                }
            }
        })?;
    }
    {
        let page = page.clone();
        listen(&page.document.clone(), "mouseup", move |_| {
            if let Some(Some(cursor)) = page.handle(|nb| nb.pointer_released()) {
                page.set_cursor(cursor);
            }
        })?;
    }

    // Custom font, after the editor is already usable
    {
        let page = page.clone();
        if let Err(err) = load_font(&config.font, move || {
            page.handle(|nb| nb.fonts_loaded());
        }) {
            wasm_error!("Error loading custom font: {}", err);
        }
    }

    wasm_info!("Notebook started");
    Ok(())
}
