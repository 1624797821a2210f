//! Pane resizing
//!
//! Two states: idle and dragging. A drag starts on the divider but is fed
//! by page-wide pointer events, so it keeps tracking when the pointer
//! outruns the handle and ends on a release anywhere.

/// Smallest pane width a drag may produce
pub const MIN_PANE_WIDTH: f64 = 100.0;

/// Page cursor while a resize is in progress
pub const RESIZE_CURSOR: &str = "ew-resize";

/// Page cursor otherwise
pub const DEFAULT_CURSOR: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Position and size of the element that contains the pane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerGeometry {
    pub offset_left: f64,
    pub client_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutManager {
    state: DragState,
    min_width: f64,
    width: Option<f64>,
}

impl LayoutManager {
    pub fn new(min_width: f64) -> Self {
        Self {
            state: DragState::Idle,
            min_width,
            width: None,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Last width applied to the pane, if a drag ever moved it
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Pointer pressed on the divider. Returns the cursor to show.
    pub fn pointer_down(&mut self) -> &'static str {
        self.state = DragState::Dragging;
        RESIZE_CURSOR
    }

    /// Pointer moved anywhere on the page. Returns the new pane width while
    /// dragging, `None` when idle.
    pub fn pointer_move(&mut self, client_x: f64, container: ContainerGeometry) -> Option<f64> {
        if self.state != DragState::Dragging {
            return None;
        }

        let offset_right = container.client_width - (client_x - container.offset_left);
        let width = (container.client_width - offset_right).max(self.min_width);
        self.width = Some(width);
        Some(width)
    }

    /// Pointer released anywhere. Returns the cursor to restore if a drag ended.
    pub fn pointer_up(&mut self) -> Option<&'static str> {
        match self.state {
            DragState::Dragging => {
                self.state = DragState::Idle;
                Some(DEFAULT_CURSOR)
            }
            DragState::Idle => None,
        }
    }
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new(MIN_PANE_WIDTH)
    }
}

/// Pixel value for a style property
pub fn px(width: f64) -> String {
    format!("{}px", width)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: ContainerGeometry = ContainerGeometry {
        offset_left: 40.0,
        client_width: 1000.0,
    };

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut layout = LayoutManager::default();
        assert_eq!(layout.pointer_move(500.0, CONTAINER), None);
        assert_eq!(layout.width(), None);
    }

    #[test]
    fn test_drag_tracks_pointer_relative_to_container() {
        let mut layout = LayoutManager::default();
        assert_eq!(layout.pointer_down(), RESIZE_CURSOR);

        assert_eq!(layout.pointer_move(540.0, CONTAINER), Some(500.0));
        assert_eq!(layout.pointer_move(1200.0, CONTAINER), Some(1160.0));
        assert!(layout.is_dragging());
    }

    #[test]
    fn test_drag_clamps_to_minimum() {
        let mut layout = LayoutManager::default();
        layout.pointer_down();

        assert_eq!(layout.pointer_move(100.0, CONTAINER), Some(MIN_PANE_WIDTH));
        assert_eq!(layout.pointer_move(-300.0, CONTAINER), Some(MIN_PANE_WIDTH));
    }

    #[test]
    fn test_release_ends_drag() {
        let mut layout = LayoutManager::default();
        layout.pointer_down();
        layout.pointer_move(600.0, CONTAINER);

        assert_eq!(layout.pointer_up(), Some(DEFAULT_CURSOR));
        assert_eq!(layout.state(), DragState::Idle);
        assert_eq!(layout.pointer_move(900.0, CONTAINER), None);
        assert_eq!(layout.width(), Some(560.0));
    }

    #[test]
    fn test_release_without_drag_is_noop() {
        let mut layout = LayoutManager::default();
        assert_eq!(layout.pointer_up(), None);
    }

    #[test]
    fn test_px() {
        assert_eq!(px(100.0), "100px");
        assert_eq!(px(512.5), "512.5px");
    }
}
