//! View-state reconciliation for the embedded map widget
//!
//! This crate keeps four independently changing things mutually consistent:
//! the camera of an opaque map primitive, the selection derived from a
//! navigable path, the externally supplied props, and the snapshot persisted
//! through the host bridge. The [`engine::ViewEngine`] is the single mediator;
//! everything else is either a pure helper or a contract for a collaborator
//! the widget consumes but does not implement.

pub mod camera;
pub mod engine;
pub mod events;
pub mod geo;
pub mod layout;
pub mod markers;
pub mod props;
pub mod selection;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use camera::{
    CameraCommand, CameraPrimitive, FitBoundsOptions, FlyTo, MapSurface, MarkerHandle,
    MarkerSurface,
};
pub use engine::{ViewEngine, ViewState};
pub use events::WidgetEvent;
pub use geo::{LngLat, LngLatBounds};
pub use layout::{inspector_offset_px, LayoutMetrics, LayoutProbe};
pub use markers::MarkerRegistry;
pub use props::{MapProps, Place, PropsError};
pub use selection::{selected_place_id, MemoryRouter, NavigateOptions, SelectionRouter};
