//! Presentation options shared by the editing surface and the UI selectors
//!
//! Both sides speak the selector vocabulary: `"on"` / `"off"`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A two-valued presentation setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Switch::On
        } else {
            Switch::Off
        }
    }

    /// Read a selector value. Anything other than `"on"` is treated as off,
    /// which also covers the editor's other wrap modes (`"bounded"`, ...).
    pub fn from_value(value: &str) -> Self {
        Self::from_enabled(value == "on")
    }

    pub fn is_on(self) -> bool {
        self == Switch::On
    }

    pub fn toggled(self) -> Self {
        match self {
            Switch::On => Switch::Off,
            Switch::Off => Switch::On,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Switch::On => "on",
            Switch::Off => "off",
        }
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editor presentation options that have a matching UI selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresentationOption {
    /// Soft wrapping of long lines (value passthrough)
    WordWrap,
    /// Minimap visibility (stored as a boolean by the editor)
    Minimap,
}

impl PresentationOption {
    pub const ALL: [PresentationOption; 2] =
        [PresentationOption::WordWrap, PresentationOption::Minimap];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_from_value() {
        assert_eq!(Switch::from_value("on"), Switch::On);
        assert_eq!(Switch::from_value("off"), Switch::Off);
        assert_eq!(Switch::from_value("bounded"), Switch::Off);
        assert_eq!(Switch::from_value(""), Switch::Off);
    }

    #[test]
    fn test_switch_toggle_twice_is_identity() {
        for s in [Switch::On, Switch::Off] {
            assert_ne!(s.toggled(), s);
            assert_eq!(s.toggled().toggled(), s);
        }
    }

    #[test]
    fn test_switch_display_matches_selector_values() {
        assert_eq!(Switch::On.to_string(), "on");
        assert_eq!(Switch::from_enabled(false).to_string(), "off");
    }
}
