//! Keybinding dispatch
//!
//! A static chord table, consulted in order. Buttons resolve to the same
//! [`Action`]s, so a shortcut and its button can never behave differently.

use std::fmt;

use crate::models::presentation::PresentationOption;
use crate::models::profile::ProfileKind;

/// Everything the user can ask the notebook to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Open,
    Export(ProfileKind),
    Toggle(PresentationOption),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Ctrl,
    Alt,
}

/// A key plus the modifier that must be held with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    pub modifier: Modifier,
    pub key: &'static str,
}

impl Chord {
    pub const fn ctrl(key: &'static str) -> Self {
        Self {
            modifier: Modifier::Ctrl,
            key,
        }
    }

    pub const fn alt(key: &'static str) -> Self {
        Self {
            modifier: Modifier::Alt,
            key,
        }
    }

    /// Keys compare exactly, so Shift+S (`"S"`) does not match `"s"`
    pub fn matches(&self, event: &KeyPress) -> bool {
        let held = match self.modifier {
            Modifier::Ctrl => event.ctrl,
            Modifier::Alt => event.alt,
        };
        held && event.key == self.key
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modifier = match self.modifier {
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
        };
        write!(f, "{}+{}", modifier, self.key.to_uppercase())
    }
}

/// The parts of a keyboard event the dispatcher looks at
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyPress {
    pub fn ctrl(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: true,
            alt: false,
        }
    }

    pub fn alt(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: false,
            alt: true,
        }
    }

    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Default::default()
        }
    }
}

pub const KEYMAP: &[(Chord, Action)] = &[
    (Chord::ctrl("s"), Action::Export(ProfileKind::PlainNote)),
    (Chord::ctrl("o"), Action::Open),
    (Chord::alt("m"), Action::Toggle(PresentationOption::Minimap)),
    (Chord::alt("z"), Action::Toggle(PresentationOption::WordWrap)),
];

/// Buttons on the page and what they do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Open,
    Save,
    SaveDump,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Open, Button::Save, Button::SaveDump];

    pub fn action(self) -> Action {
        match self {
            Button::Open => Action::Open,
            Button::Save => Action::Export(ProfileKind::PlainNote),
            Button::SaveDump => Action::Export(ProfileKind::StructuredDump),
        }
    }
}

/// First action bound to the key press. `None` means let the browser have it.
pub fn dispatch(event: &KeyPress) -> Option<Action> {
    KEYMAP
        .iter()
        .find(|(chord, _)| chord.matches(event))
        .map(|&(_, action)| action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_chords() {
        let save = Action::Export(ProfileKind::PlainNote);
        let minimap = Action::Toggle(PresentationOption::Minimap);
        let wrap = Action::Toggle(PresentationOption::WordWrap);

        assert_eq!(dispatch(&KeyPress::ctrl("s")), Some(save));
        assert_eq!(dispatch(&KeyPress::ctrl("o")), Some(Action::Open));
        assert_eq!(dispatch(&KeyPress::alt("m")), Some(minimap));
        assert_eq!(dispatch(&KeyPress::alt("z")), Some(wrap));
    }

    #[test]
    fn test_unbound_keys_pass_through() {
        assert_eq!(dispatch(&KeyPress::plain("s")), None);
        assert_eq!(dispatch(&KeyPress::alt("s")), None);
        assert_eq!(dispatch(&KeyPress::ctrl("m")), None);
        assert_eq!(dispatch(&KeyPress::ctrl("S")), None);
    }

    #[test]
    fn test_extra_modifiers_still_match() {
        let press = KeyPress {
            key: "s".to_string(),
            ctrl: true,
            alt: true,
        };
        assert_eq!(dispatch(&press), Some(Action::Export(ProfileKind::PlainNote)));
    }

    #[test]
    fn test_chords_are_unique() {
        let chords: HashSet<_> = KEYMAP.iter().map(|(chord, _)| *chord).collect();
        assert_eq!(chords.len(), KEYMAP.len());
    }

    #[test]
    fn test_buttons_share_actions_with_chords() {
        assert_eq!(Some(Button::Save.action()), dispatch(&KeyPress::ctrl("s")));
        assert_eq!(Some(Button::Open.action()), dispatch(&KeyPress::ctrl("o")));
        assert_eq!(Button::SaveDump.action(), Action::Export(ProfileKind::StructuredDump));
    }

    #[test]
    fn test_chord_display() {
        assert_eq!(Chord::ctrl("s").to_string(), "Ctrl+S");
        assert_eq!(Chord::alt("z").to_string(), "Alt+Z");
    }
}
