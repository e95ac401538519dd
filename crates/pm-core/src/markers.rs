//! Marker bookkeeping over the map surface

use ahash::AHashMap;

use crate::camera::{MarkerHandle, MarkerSurface};
use crate::geo::LngLat;

/// Owns the live markers and their place-id bindings.
///
/// The place id is bound to the handle when the marker is created, so a click
/// that arrives after the place list has changed still resolves to the id the
/// marker was created for, never to whatever occupies that slot now.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    by_handle: AHashMap<MarkerHandle, String>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every marker: all existing ones are removed before any new one
    /// is added. Repopulating twice with the same list ends in the same state.
    pub fn repopulate<'a, S, I>(&mut self, surface: &mut S, places: I)
    where
        S: MarkerSurface + ?Sized,
        I: IntoIterator<Item = (&'a str, LngLat)>,
    {
        self.clear(surface);
        for (id, coords) in places {
            let handle = surface.place_marker(coords);
            self.by_handle.insert(handle, id.to_owned());
        }
    }

    /// Remove every marker from the surface.
    pub fn clear<S: MarkerSurface + ?Sized>(&mut self, surface: &mut S) {
        for (handle, _) in self.by_handle.drain() {
            surface.remove_marker(handle);
        }
    }

    /// The id bound to `handle` at creation time.
    pub fn place_id(&self, handle: MarkerHandle) -> Option<&str> {
        self.by_handle.get(&handle).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_handle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_handle.is_empty()
    }

    /// Currently bound ids, sorted for stable inspection.
    pub fn place_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.by_handle.values().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
