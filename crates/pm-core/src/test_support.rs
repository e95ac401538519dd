//! Shared test doubles

use std::cell::RefCell;
use std::rc::Rc;

use crate::camera::{CameraPrimitive, FitBoundsOptions, FlyTo, MarkerHandle, MarkerSurface};
use crate::geo::{LngLat, LngLatBounds};
use crate::layout::{LayoutMetrics, LayoutProbe};

/// One call a surface received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    FlyTo(FlyTo),
    FitBounds(LngLatBounds, FitBoundsOptions),
    Resize,
    PlaceMarker(LngLat),
    RemoveMarker(MarkerHandle),
}

pub type CallLog = Rc<RefCell<Vec<SurfaceCall>>>;
pub type SharedPose = Rc<RefCell<(LngLat, f64)>>;

pub fn new_call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn new_pose(center: LngLat, zoom: f64) -> SharedPose {
    Rc::new(RefCell::new((center, zoom)))
}

/// A map surface that records every call and reports a shared camera pose.
///
/// Tests keep clones of the log and pose handles, so they can inspect
/// commands and simulate user-driven camera movement after the surface has
/// been moved into the engine.
pub struct RecordingSurface {
    log: CallLog,
    pose: SharedPose,
    next_handle: u64,
}

impl RecordingSurface {
    pub fn new(log: CallLog) -> Self {
        Self::with_pose(log, new_pose(LngLat::new(0.0, 0.0), 2.0))
    }

    pub fn with_pose(log: CallLog, pose: SharedPose) -> Self {
        Self {
            log,
            pose,
            next_handle: 0,
        }
    }
}

impl CameraPrimitive for RecordingSurface {
    fn fly_to(&mut self, target: FlyTo) {
        self.log.borrow_mut().push(SurfaceCall::FlyTo(target));
    }

    fn fit_bounds(&mut self, bounds: LngLatBounds, options: FitBoundsOptions) {
        self.log.borrow_mut().push(SurfaceCall::FitBounds(bounds, options));
    }

    fn resize(&mut self) {
        self.log.borrow_mut().push(SurfaceCall::Resize);
    }

    fn center(&self) -> LngLat {
        self.pose.borrow().0
    }

    fn zoom(&self) -> f64 {
        self.pose.borrow().1
    }
}

impl MarkerSurface for RecordingSurface {
    fn place_marker(&mut self, at: LngLat) -> MarkerHandle {
        self.log.borrow_mut().push(SurfaceCall::PlaceMarker(at));
        let handle = MarkerHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.log.borrow_mut().push(SurfaceCall::RemoveMarker(handle));
    }
}

/// A layout probe returning fixed metrics.
pub struct FixedProbe(pub LayoutMetrics);

impl LayoutProbe for FixedProbe {
    fn metrics(&self) -> LayoutMetrics {
        self.0
    }
}
