//! Scripted demo of the map widget engine
//!
//! Wires an in-memory host, a command-logging map surface, and the view
//! engine, then replays the kind of session a live host would drive: mount,
//! first paint, selection, fullscreen round-trip, a props update that drops
//! the selected place, and unmount. The final persisted snapshot is printed
//! at the end.

use anyhow::Result;
use serde_json::json;
use tracing::info;

use pm_core::{
    CameraPrimitive, FitBoundsOptions, FlyTo, LayoutMetrics, LayoutProbe, LngLat, LngLatBounds,
    MarkerHandle, MarkerSurface, MemoryRouter, ViewEngine, WidgetEvent,
};
use pm_host::InMemoryHost;

/// A map surface that logs every command and tracks the camera pose so a
/// later move-ended event reads back the last target.
struct LoggingSurface {
    center: LngLat,
    zoom: f64,
    next_handle: u64,
}

impl LoggingSurface {
    fn new() -> Self {
        Self {
            center: LngLat::new(0.0, 0.0),
            zoom: 2.0,
            next_handle: 0,
        }
    }
}

impl CameraPrimitive for LoggingSurface {
    fn fly_to(&mut self, target: FlyTo) {
        info!(
            lng = target.center.lng,
            lat = target.center.lat,
            zoom = target.zoom,
            offset = ?target.offset,
            "fly-to"
        );
        self.center = target.center;
        self.zoom = target.zoom;
    }

    fn fit_bounds(&mut self, bounds: LngLatBounds, options: FitBoundsOptions) {
        info!(?bounds, padding = options.padding, "fit-bounds");
        self.center = bounds.center();
        // Nominal post-fit zoom; a real primitive derives it from the viewport.
        self.zoom = 11.0;
    }

    fn resize(&mut self) {
        info!("resize");
    }

    fn center(&self) -> LngLat {
        self.center
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }
}

impl MarkerSurface for LoggingSurface {
    fn place_marker(&mut self, at: LngLat) -> MarkerHandle {
        let handle = MarkerHandle(self.next_handle);
        self.next_handle += 1;
        info!(lng = at.lng, lat = at.lat, handle = handle.0, "place marker");
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        info!(handle = handle.0, "remove marker");
    }
}

struct DemoProbe;

impl LayoutProbe for DemoProbe {
    fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            viewport_width: 1440.0,
            inspector_width: None,
        }
    }
}

fn sample_props() -> serde_json::Value {
    json!({
        "places": [
            {
                "id": "golden-crust",
                "name": "Golden Crust",
                "coords": [-122.421, 37.765],
                "description": "Wood-fired pies near the Mission",
                "rating": 4.6,
            },
            {
                "id": "brick-oven",
                "name": "Brick Oven Social",
                "coords": [-122.447, 37.770],
                "rating": 4.2,
            },
            {
                "id": "slice-house",
                "name": "Slice House",
                "coords": [-122.410, 37.790],
                "rating": 4.8,
            },
        ],
        "label": "Margherita",
    })
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let host = InMemoryHost::new();
    host.set_props(sample_props());
    host.set_max_height(Some(480.0));

    let mut engine = ViewEngine::new(
        Box::new(host.clone()),
        Box::new(MemoryRouter::new()),
        Box::new(DemoProbe),
    );

    info!("mounting surface");
    engine.mount(Box::new(LoggingSurface::new()));
    engine.handle(WidgetEvent::FirstPaint);
    engine.handle(WidgetEvent::MoveEnded);

    info!("expanding to fullscreen");
    engine.handle(WidgetEvent::FullscreenRequested);
    engine.handle(WidgetEvent::DisplayModeChanged);
    engine.handle(WidgetEvent::LayoutSettled);

    info!("selecting a place");
    engine.handle(WidgetEvent::PlaceChosen("golden-crust".to_owned()));
    engine.handle(WidgetEvent::MoveEnded);

    info!("dropping the selected place from props");
    let mut trimmed = sample_props();
    trimmed["places"].as_array_mut().unwrap().remove(0);
    host.set_props(trimmed);
    engine.handle(WidgetEvent::PropsChanged);
    engine.handle(WidgetEvent::DisplayModeChanged);
    engine.handle(WidgetEvent::LayoutSettled);

    engine.unmount();

    let snapshot = serde_json::to_string_pretty(&serde_json::Value::Object(host.state()))?;
    println!("final snapshot:\n{snapshot}");
    Ok(())
}
