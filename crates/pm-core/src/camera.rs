//! Camera and marker contracts for the opaque map primitive
//!
//! The widget never draws tiles itself; it owns a mounted [`MapSurface`] and
//! issues commands through these traits. [`frame_places`] is the pure policy
//! for the initial framing, kept free of any surface so it can be tested
//! directly.

use crate::geo::{bounds_of, LngLat, LngLatBounds};

/// Animation speed for every fly-to the widget issues.
pub const FLY_SPEED: f64 = 1.2;
/// Animation curve for every fly-to the widget issues.
pub const FLY_CURVE: f64 = 1.6;
/// Zoom used when framing exactly one place.
pub const SINGLE_PLACE_ZOOM: f64 = 12.0;
/// Zoom used when flying to a selected place.
pub const SELECT_ZOOM: f64 = 14.0;
/// Whole-world zoom used when no place has usable coordinates.
pub const WORLD_ZOOM: f64 = 2.0;
/// Pixel padding around a fitted bounding box.
pub const FIT_PADDING: f64 = 60.0;

/// An animated camera transition request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyTo {
    pub center: LngLat,
    pub zoom: f64,
    pub speed: f64,
    pub curve: f64,
    /// Lateral pixel shift of the target, `[x, y]`, if any.
    pub offset: Option<[i32; 2]>,
}

impl FlyTo {
    /// A fly-to with the widget's standard animation profile and no offset.
    pub fn new(center: LngLat, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            speed: FLY_SPEED,
            curve: FLY_CURVE,
            offset: None,
        }
    }

    /// Apply a horizontal pixel offset; zero leaves the target unshifted.
    pub fn with_offset(mut self, offset_px: i32) -> Self {
        if offset_px != 0 {
            self.offset = Some([offset_px, 0]);
        }
        self
    }
}

/// Options for a fit-bounds command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitBoundsOptions {
    pub padding: f64,
    pub animate: bool,
}

impl Default for FitBoundsOptions {
    fn default() -> Self {
        Self {
            padding: FIT_PADDING,
            animate: true,
        }
    }
}

/// One camera command, ready to hand to the primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    FlyTo(FlyTo),
    FitBounds(LngLatBounds, FitBoundsOptions),
}

/// The camera half of the map primitive.
///
/// Move-completion is not a callback slot here; the host delivers it as a
/// widget event, and the engine reads `center`/`zoom` back when it arrives.
pub trait CameraPrimitive {
    fn fly_to(&mut self, target: FlyTo);
    fn fit_bounds(&mut self, bounds: LngLatBounds, options: FitBoundsOptions);
    /// Re-measure the container after a layout change.
    fn resize(&mut self);
    fn center(&self) -> LngLat;
    fn zoom(&self) -> f64;
}

/// Opaque handle to a placed marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// The marker half of the map primitive.
pub trait MarkerSurface {
    fn place_marker(&mut self, at: LngLat) -> MarkerHandle;
    fn remove_marker(&mut self, handle: MarkerHandle);
}

/// The full primitive the engine owns between mount and unmount.
pub trait MapSurface: CameraPrimitive + MarkerSurface {}

impl<T: CameraPrimitive + MarkerSurface> MapSurface for T {}

/// Compute the command that frames every given coordinate.
///
/// No coordinates: nothing to frame. One coordinate, or several that all
/// coincide (a degenerate box): fly to the point at [`SINGLE_PLACE_ZOOM`].
/// Otherwise: fit the minimal bounding box with the default padding.
pub fn frame_places(coords: &[LngLat]) -> Option<CameraCommand> {
    let bounds = bounds_of(coords)?;
    if bounds.is_degenerate() {
        return Some(CameraCommand::FlyTo(FlyTo::new(bounds.sw, SINGLE_PLACE_ZOOM)));
    }
    Some(CameraCommand::FitBounds(bounds, FitBoundsOptions::default()))
}
