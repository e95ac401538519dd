//! Geographic primitives
//!
//! Coordinates cross the host boundary as `[lon, lat]` arrays, so [`LngLat`]
//! serializes in that shape.

use serde::{Deserialize, Serialize};

/// A longitude/latitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Both components finite. Precondition for marker placement and bounds.
    pub fn is_valid(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }
}

impl From<[f64; 2]> for LngLat {
    fn from(value: [f64; 2]) -> Self {
        Self {
            lng: value[0],
            lat: value[1],
        }
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(value: LngLat) -> Self {
        [value.lng, value.lat]
    }
}

/// Axis-aligned box over longitude/latitude, southwest/northeast corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LngLatBounds {
    pub sw: LngLat,
    pub ne: LngLat,
}

impl LngLatBounds {
    /// The zero-area box around a single point.
    pub fn point(p: LngLat) -> Self {
        Self { sw: p, ne: p }
    }

    /// Grow the box to cover `p`.
    pub fn extend(&mut self, p: LngLat) {
        self.sw.lng = self.sw.lng.min(p.lng);
        self.sw.lat = self.sw.lat.min(p.lat);
        self.ne.lng = self.ne.lng.max(p.lng);
        self.ne.lat = self.ne.lat.max(p.lat);
    }

    /// True when every extended point was identical.
    pub fn is_degenerate(&self) -> bool {
        self.sw == self.ne
    }

    pub fn center(&self) -> LngLat {
        LngLat::new(
            (self.sw.lng + self.ne.lng) / 2.0,
            (self.sw.lat + self.ne.lat) / 2.0,
        )
    }
}

/// Minimal bounds covering `coords`, or `None` when there are none.
pub fn bounds_of(coords: &[LngLat]) -> Option<LngLatBounds> {
    let (first, rest) = coords.split_first()?;
    let mut bounds = LngLatBounds::point(*first);
    for p in rest {
        bounds.extend(*p);
    }
    Some(bounds)
}
