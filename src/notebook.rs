//! Notebook controller
//!
//! Owns the document session, the presentation selectors, the file host
//! and the pane layout. Every user input, whether a key chord, a button or
//! a selector change, ends up in [`Notebook::perform`] or one of the
//! narrow event methods next to it, so the whole page can be driven
//! without a browser.

use chrono::{DateTime, Utc};

use crate::config::NotebookConfig;
use crate::error::NotebookError;
use crate::keymap::{self, Action, Button, KeyPress};
use crate::models::document::DocumentSession;
use crate::models::layout::{ContainerGeometry, LayoutManager};
use crate::models::presentation::{PresentationOption, Switch};
use crate::surface::{EditingSurface, PresentationControls, SelectorControl};
use crate::sync;
use crate::transfer::{self, FileHost, LoadedFile};

/// What an action did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A picker was shown; the file arrives through [`Notebook::complete_open`]
    OpenRequested,
    /// The document was downloaded under this name
    Exported(String),
    Toggled(PresentationOption, Switch),
    /// Nothing changed
    Failed(NotebookError),
}

pub struct Notebook<S, C, H> {
    document: DocumentSession<S>,
    controls: PresentationControls<C>,
    files: H,
    layout: LayoutManager,
    unsaved_prompt: String,
}

impl<S, C, H> Notebook<S, C, H>
where
    S: EditingSurface,
    C: SelectorControl,
    H: FileHost,
{
    /// Fresh session: placeholder text, default name, configured presentation
    pub fn new(
        config: &NotebookConfig,
        mut surface: S,
        mut controls: PresentationControls<C>,
        files: H,
    ) -> Self {
        surface.set_value(&config.placeholder);
        surface.drain_changes();
        sync::sync_option(
            &mut surface,
            &mut controls,
            PresentationOption::WordWrap,
            config.word_wrap,
        );
        sync::sync_option(
            &mut surface,
            &mut controls,
            PresentationOption::Minimap,
            config.minimap,
        );

        Self {
            document: DocumentSession::new(surface, &config.untitled_name),
            controls,
            files,
            layout: LayoutManager::new(config.min_pane_width),
            unsaved_prompt: config.unsaved_prompt.clone(),
        }
    }

    pub fn perform(&mut self, action: Action) -> Outcome {
        self.perform_at(action, Utc::now())
    }

    /// [`perform`](Self::perform) with an explicit clock reading for export names
    pub fn perform_at(&mut self, action: Action, now: DateTime<Utc>) -> Outcome {
        match action {
            Action::Open => {
                transfer::open_local(&mut self.files);
                Outcome::OpenRequested
            }
            Action::Export(kind) => {
                let profile = kind.profile();
                match transfer::export_local(&mut self.document, &mut self.files, profile, now) {
                    Ok(name) => Outcome::Exported(name),
                    Err(err) => {
                        log::error!("Export failed: {}", err);
                        Outcome::Failed(err)
                    }
                }
            }
            Action::Toggle(option) => {
                let surface = self.document.surface_mut();
                let value = sync::toggle(surface, &mut self.controls, option);
                Outcome::Toggled(option, value)
            }
        }
    }

    /// Handle a key press. `Some` means the chord was bound and the browser
    /// default must be suppressed.
    pub fn key_down(&mut self, press: &KeyPress) -> Option<Outcome> {
        keymap::dispatch(press).map(|action| self.perform(action))
    }

    pub fn button(&mut self, button: Button) -> Outcome {
        self.perform(button.action())
    }

    /// A selector's value changed in the UI
    pub fn control_changed(&mut self, option: PresentationOption) -> Switch {
        let surface = self.document.surface_mut();
        sync::apply_control_change(surface, &mut self.controls, option)
    }

    /// The surface reported edits. Returns whether any were pending.
    pub fn content_changed(&mut self) -> bool {
        self.document.sync_changes()
    }

    /// Deliver the result of a file pick
    pub fn complete_open(&mut self, file: Option<LoadedFile>) -> bool {
        transfer::complete_open(&mut self.document, file)
    }

    /// Prompt for the unload guard, or `None` when leaving is safe
    pub fn before_unload(&self) -> Option<&str> {
        if self.document.can_discard() {
            None
        } else {
            Some(self.unsaved_prompt.as_str())
        }
    }

    /// The custom font arrived; reflow text already on screen
    pub fn fonts_loaded(&mut self) {
        self.document.surface_mut().remeasure_fonts();
    }

    pub fn divider_pressed(&mut self) -> &'static str {
        self.layout.pointer_down()
    }

    pub fn pointer_moved(&mut self, client_x: f64, container: ContainerGeometry) -> Option<f64> {
        self.layout.pointer_move(client_x, container)
    }

    pub fn pointer_released(&mut self) -> Option<&'static str> {
        self.layout.pointer_up()
    }

    pub fn title(&self) -> String {
        self.document.display_name()
    }

    pub fn document(&self) -> &DocumentSession<S> {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut DocumentSession<S> {
        &mut self.document
    }

    pub fn controls(&self) -> &PresentationControls<C> {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut PresentationControls<C> {
        &mut self.controls
    }

    pub fn files(&self) -> &H {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut H {
        &mut self.files
    }

    pub fn layout(&self) -> &LayoutManager {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::ProfileKind;
    use crate::surface::{MemoryControl, MemorySurface};
    use crate::transfer::RecordingFileHost;

    type TestNotebook = Notebook<MemorySurface, MemoryControl, RecordingFileHost>;

    fn notebook_with(surface: MemorySurface) -> TestNotebook {
        Notebook::new(
            &NotebookConfig::default(),
            surface,
            PresentationControls::new(MemoryControl::default(), MemoryControl::default()),
            RecordingFileHost::default(),
        )
    }

    fn notebook() -> TestNotebook {
        notebook_with(MemorySurface::default())
    }

    fn edit(nb: &mut TestNotebook) {
        nb.document_mut().surface_mut().type_text("x");
        assert!(nb.content_changed());
    }

    #[test]
    fn test_new_applies_config() {
        let nb = notebook();
        let content = nb.document().content();
        assert!(content.starts_with("Welcome to your notebook!"));
        assert_eq!(nb.title(), "untitled");
        assert_eq!(nb.controls().word_wrap.value, "off");
        assert_eq!(nb.controls().minimap.value, "on");
        assert!(nb.document().surface().minimap_enabled);
    }

    #[test]
    fn test_placeholder_write_is_not_an_edit() {
        let mut nb = notebook_with(MemorySurface::echoing(""));
        assert!(!nb.content_changed());
        assert_eq!(nb.title(), "untitled");
    }

    #[test]
    fn test_unload_guard_follows_modified_flag() {
        let mut nb = notebook();
        assert_eq!(nb.before_unload(), None);

        edit(&mut nb);
        assert_eq!(
            nb.before_unload(),
            Some("You have unsaved changes. Are you sure you want to leave?")
        );

        nb.perform(Action::Export(ProfileKind::PlainNote));
        assert_eq!(nb.before_unload(), None);
    }

    #[test]
    fn test_unbound_key_is_not_consumed() {
        let mut nb = notebook();
        assert_eq!(nb.key_down(&KeyPress::plain("a")), None);
        assert!(nb.files().open_requests.is_empty());
    }

    #[test]
    fn test_open_button_requests_picker() {
        let mut nb = notebook();
        assert_eq!(nb.button(Button::Open), Outcome::OpenRequested);
        assert_eq!(nb.files().open_requests.len(), 1);
    }

    #[test]
    fn test_failed_export_reports_failure() {
        let mut nb = notebook();
        nb.files_mut().fail_downloads = true;
        edit(&mut nb);

        let outcome = nb.button(Button::SaveDump);
        assert!(matches!(outcome, Outcome::Failed(NotebookError::Download(_))));
        assert_eq!(nb.title(), "untitled*");
    }

    #[test]
    fn test_fonts_loaded_remeasures_surface() {
        let mut nb = notebook();
        nb.fonts_loaded();
        assert_eq!(nb.document().surface().remeasure_count, 1);
    }

    #[test]
    fn test_selector_change_reaches_surface() {
        let mut nb = notebook();
        nb.controls_mut().word_wrap.set_value("on");

        assert_eq!(nb.control_changed(PresentationOption::WordWrap), Switch::On);
        assert_eq!(nb.document().surface().word_wrap, Switch::On);
    }
}
