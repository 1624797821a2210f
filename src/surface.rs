//! Editing surface adapter and selector control seams
//!
//! The text widget and the `<select>` elements live in the browser. The
//! notebook only talks to them through these two traits, so the session
//! logic runs the same against the real widget and against the in-memory
//! versions below.

use crate::models::presentation::{PresentationOption, Switch};

/// The pre-built text editing capability
pub trait EditingSurface {
    /// Full text currently shown in the editor
    fn value(&self) -> String;

    /// Replace the full text
    fn set_value(&mut self, text: &str);

    /// Number of content changes reported since the last drain, reset to zero.
    /// Writes made through [`set_value`](Self::set_value) may be counted too.
    fn drain_changes(&mut self) -> usize;

    /// Current value of a presentation option
    fn option(&self, option: PresentationOption) -> Switch;

    /// Apply a presentation option
    fn set_option(&mut self, option: PresentationOption, value: Switch);

    /// Re-measure glyphs after a font finishes loading
    fn remeasure_fonts(&mut self) {}
}

/// A UI selector whose value mirrors one presentation option
pub trait SelectorControl {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
}

/// The two presentation selectors, addressed by option
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationControls<C> {
    pub word_wrap: C,
    pub minimap: C,
}

impl<C: SelectorControl> PresentationControls<C> {
    pub fn new(word_wrap: C, minimap: C) -> Self {
        Self { word_wrap, minimap }
    }

    pub fn get(&self, option: PresentationOption) -> &C {
        match option {
            PresentationOption::WordWrap => &self.word_wrap,
            PresentationOption::Minimap => &self.minimap,
        }
    }

    pub fn get_mut(&mut self, option: PresentationOption) -> &mut C {
        match option {
            PresentationOption::WordWrap => &mut self.word_wrap,
            PresentationOption::Minimap => &mut self.minimap,
        }
    }
}

/// In-memory editing surface
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySurface {
    pub text: String,
    pub word_wrap: Switch,
    pub minimap_enabled: bool,
    pub remeasure_count: usize,
    /// Changes not yet drained
    pub pending_changes: usize,
    /// Report `set_value` as a change, like the browser widget does
    pub echo_writes: bool,
}

impl MemorySurface {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            word_wrap: Switch::Off,
            minimap_enabled: true,
            remeasure_count: 0,
            pending_changes: 0,
            echo_writes: false,
        }
    }

    /// A surface that reports its own writes as changes
    pub fn echoing(text: &str) -> Self {
        Self {
            echo_writes: true,
            ..Self::new(text)
        }
    }

    /// Simulate the user typing at the end of the text
    pub fn type_text(&mut self, text: &str) {
        self.text.push_str(text);
        self.pending_changes += 1;
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new("")
    }
}

impl EditingSurface for MemorySurface {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_value(&mut self, text: &str) {
        self.text = text.to_string();
        if self.echo_writes {
            self.pending_changes += 1;
        }
    }

    fn drain_changes(&mut self) -> usize {
        std::mem::take(&mut self.pending_changes)
    }

    fn option(&self, option: PresentationOption) -> Switch {
        match option {
            PresentationOption::WordWrap => self.word_wrap,
            PresentationOption::Minimap => Switch::from_enabled(self.minimap_enabled),
        }
    }

    fn set_option(&mut self, option: PresentationOption, value: Switch) {
        match option {
            PresentationOption::WordWrap => self.word_wrap = value,
            PresentationOption::Minimap => self.minimap_enabled = value.is_on(),
        }
    }

    fn remeasure_fonts(&mut self) {
        self.remeasure_count += 1;
    }
}

/// In-memory selector control
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemoryControl {
    pub value: String,
}

impl MemoryControl {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

impl SelectorControl for MemoryControl {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}
