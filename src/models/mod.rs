//! Notebook state models
//!
//! Pure state with no browser dependencies.

pub mod document;
pub mod layout;
pub mod presentation;
pub mod profile;

pub use document::{DocumentSession, MODIFIED_MARKER, UNTITLED};
pub use layout::{ContainerGeometry, DragState, LayoutManager, MIN_PANE_WIDTH};
pub use presentation::{PresentationOption, Switch};
pub use profile::{FormatProfile, ProfileKind, OPEN_ACCEPT};
