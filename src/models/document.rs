//! Document session
//!
//! Owns the single document of the page: its text (held by the editing
//! surface), its name and the modified flag. The displayed title is derived
//! from the name and the flag, so it cannot drift from either.

use crate::surface::EditingSurface;

/// Trailing marker shown on the title while there are unsaved changes
pub const MODIFIED_MARKER: char = '*';

/// Default name of a document that was never loaded or saved
pub const UNTITLED: &str = "untitled";

/// The page's one document plus its unsaved-change bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSession<S> {
    surface: S,
    name: String,
    modified: bool,
}

impl<S: EditingSurface> DocumentSession<S> {
    /// Start a session over a surface that already shows its placeholder text
    pub fn new(surface: S, name: &str) -> Self {
        Self {
            surface,
            name: name.to_string(),
            modified: false,
        }
    }

    /// Replace content and name; the result is a clean document
    pub fn load(&mut self, name: &str, content: &str) {
        self.surface.set_value(content);
        // The widget reports our own write as an edit; it is not one.
        self.surface.drain_changes();
        self.name = name.to_string();
        self.modified = false;
        log::info!("Loaded '{}' ({} bytes)", name, content.len());
    }

    /// Note a content change reported by the surface
    pub fn record_change(&mut self) {
        if !self.modified {
            log::debug!("'{}' now has unsaved changes", self.name);
        }
        self.modified = true;
    }

    /// Record any edits the surface reported since the last call
    pub fn sync_changes(&mut self) -> bool {
        let changes = self.surface.drain_changes();
        if changes > 0 {
            self.record_change();
        }
        changes > 0
    }

    /// The document was exported under `new_name`
    pub fn mark_saved(&mut self, new_name: &str) {
        self.name = new_name.to_string();
        self.modified = false;
    }

    /// True when navigating away would lose nothing
    pub fn can_discard(&self) -> bool {
        !self.modified
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Window title: the name, plus the marker while modified
    pub fn display_name(&self) -> String {
        if self.modified {
            format!("{}{}", self.name, MODIFIED_MARKER)
        } else {
            self.name.clone()
        }
    }

    pub fn content(&self) -> String {
        self.surface.value()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
