//! Events the reconciliation engine consumes

use crate::camera::MarkerHandle;

/// Every signal that can change the widget's view, on one queue.
///
/// `MoveEnded` is the only camera-originated variant. Handling it reads the
/// primitive back into the engine's view state and never issues a camera
/// command, which is what breaks the moved/target feedback loop; all the
/// other variants may end in a command being issued.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// The first frame is on screen; layout queries are now meaningful.
    FirstPaint,
    /// The camera finished moving (user drag/zoom or an animation ending).
    MoveEnded,
    /// A marker on the map was clicked.
    MarkerClicked(MarkerHandle),
    /// A place was chosen from the sidebar list.
    PlaceChosen(String),
    /// The current path changed outside the engine (e.g. host back button).
    RouteChanged,
    /// The host swapped the props value.
    PropsChanged,
    /// The widget container was resized.
    ContainerResized,
    /// The host changed the height constraint.
    MaxHeightChanged,
    /// The host changed the display mode.
    DisplayModeChanged,
    /// Layout settled after a display-mode change.
    LayoutSettled,
    /// The user dismissed the inspector panel.
    InspectorClosed,
    /// The user asked to expand the widget.
    FullscreenRequested,
}
