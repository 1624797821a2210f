//! Presentation control sync
//!
//! Keeps each editor presentation option and its UI selector in agreement.
//! Both directions go through [`sync_option`], so a selector change and a
//! keyboard toggle cannot leave the two sides disagreeing.

use crate::models::presentation::{PresentationOption, Switch};
use crate::surface::{EditingSurface, PresentationControls, SelectorControl};

/// Write `value` to both the surface option and its selector
pub fn sync_option<S, C>(
    surface: &mut S,
    controls: &mut PresentationControls<C>,
    option: PresentationOption,
    value: Switch,
) where
    S: EditingSurface,
    C: SelectorControl,
{
    surface.set_option(option, value);
    controls.get_mut(option).set_value(value.as_str());
}

/// Selector → surface: the user picked a value in the selector
pub fn apply_control_change<S, C>(
    surface: &mut S,
    controls: &mut PresentationControls<C>,
    option: PresentationOption,
) -> Switch
where
    S: EditingSurface,
    C: SelectorControl,
{
    let value = Switch::from_value(&controls.get(option).value());
    sync_option(surface, controls, option, value);
    value
}

/// Keybinding → surface + selector: flip the surface's current value
pub fn toggle<S, C>(
    surface: &mut S,
    controls: &mut PresentationControls<C>,
    option: PresentationOption,
) -> Switch
where
    S: EditingSurface,
    C: SelectorControl,
{
    let value = surface.option(option).toggled();
    sync_option(surface, controls, option, value);
    log::debug!("Toggled {:?} to {}", option, value);
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{MemoryControl, MemorySurface};

    fn setup() -> (MemorySurface, PresentationControls<MemoryControl>) {
        let surface = MemorySurface::new("");
        let controls =
            PresentationControls::new(MemoryControl::new("off"), MemoryControl::new("on"));
        (surface, controls)
    }

    fn agree(surface: &MemorySurface, controls: &PresentationControls<MemoryControl>) -> bool {
        PresentationOption::ALL
            .iter()
            .all(|&o| surface.option(o).as_str() == controls.get(o).value())
    }

    #[test]
    fn test_sync_option_writes_both_sides() {
        let (mut surface, mut controls) = setup();
        sync_option(
            &mut surface,
            &mut controls,
            PresentationOption::WordWrap,
            Switch::On,
        );

        assert_eq!(surface.word_wrap, Switch::On);
        assert_eq!(controls.word_wrap.value, "on");
    }

    #[test]
    fn test_control_change_reaches_surface() {
        let (mut surface, mut controls) = setup();

        controls.word_wrap.set_value("on");
        let value = apply_control_change(&mut surface, &mut controls, PresentationOption::WordWrap);
        assert_eq!(value, Switch::On);
        assert_eq!(surface.word_wrap, Switch::On);

        controls.minimap.set_value("off");
        apply_control_change(&mut surface, &mut controls, PresentationOption::Minimap);
        assert!(!surface.minimap_enabled);
        assert!(agree(&surface, &controls));
    }

    #[test]
    fn test_toggle_updates_both_sides() {
        let (mut surface, mut controls) = setup();

        assert_eq!(toggle(&mut surface, &mut controls, PresentationOption::Minimap), Switch::Off);
        assert!(!surface.minimap_enabled);
        assert_eq!(controls.minimap.value, "off");

        toggle(&mut surface, &mut controls, PresentationOption::WordWrap);
        assert!(agree(&surface, &controls));
    }

    #[test]
    fn test_toggle_reads_surface_not_stale_control() {
        let (mut surface, mut controls) = setup();
        // Selector edited but its change event never delivered
        controls.minimap.set_value("off");

        toggle(&mut surface, &mut controls, PresentationOption::Minimap);
        assert!(!surface.minimap_enabled);
        assert_eq!(controls.minimap.value, "off");
    }

    #[test]
    fn test_even_toggles_round_trip() {
        let (mut surface, mut controls) = setup();
        let before = (surface.clone(), controls.clone());

        for _ in 0..4 {
            toggle(&mut surface, &mut controls, PresentationOption::Minimap);
            assert!(agree(&surface, &controls));
        }

        assert_eq!((surface, controls), before);
    }
}
