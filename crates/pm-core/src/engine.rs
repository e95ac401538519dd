//! The view reconciliation engine
//!
//! Five independent trigger classes compete to change the same view: user
//! drag/zoom, programmatic navigation, prop updates, container resize, and
//! display-mode changes. [`ViewEngine`] is the single authority that turns
//! each of them into at most one camera command and one snapshot write.
//!
//! The feedback loop between "camera moved" and "camera target changed" is
//! broken by construction: a `MoveEnded` event only reads the primitive back
//! into [`ViewState`], it never issues a command.

use pm_host::{merge_patch, DisplayMode, HostBridge};
use serde_json::Value;
use tracing::{debug, warn};

use crate::camera::{
    frame_places, CameraCommand, FlyTo, MapSurface, SELECT_ZOOM, SINGLE_PLACE_ZOOM, WORLD_ZOOM,
};
use crate::events::WidgetEvent;
use crate::geo::LngLat;
use crate::layout::{inspector_offset_px, LayoutProbe};
use crate::markers::MarkerRegistry;
use crate::props::MapProps;
use crate::selection::{
    parent_path, place_path, selected_place_id, NavigateOptions, SelectionRouter,
};

/// The engine's belief about the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub center: LngLat,
    pub zoom: f64,
}

/// Mediator between the host bridge, the selection router, the layout probe,
/// and the mounted map surface.
///
/// The surface is exclusively owned between [`mount`](Self::mount) and
/// [`unmount`](Self::unmount); every camera command silently no-ops while it
/// is absent, so mount races never panic the widget.
pub struct ViewEngine {
    bridge: Box<dyn HostBridge>,
    router: Box<dyn SelectionRouter>,
    probe: Box<dyn LayoutProbe>,
    surface: Option<Box<dyn MapSurface>>,
    markers: MarkerRegistry,
    props: MapProps,
    view: ViewState,
    selected: Option<String>,
    awaiting_first_paint: bool,
    resize_pending: bool,
}

impl ViewEngine {
    /// Build the engine and seed its state.
    ///
    /// The view starts on the first place with usable coordinates (or a world
    /// view when there is none), and the initial snapshot is written
    /// immediately so the host slot is populated before any interaction.
    pub fn new(
        bridge: Box<dyn HostBridge>,
        router: Box<dyn SelectionRouter>,
        probe: Box<dyn LayoutProbe>,
    ) -> Self {
        let props = decode_props(bridge.props());
        let view = match props.valid_places().next() {
            Some((_, coords)) => ViewState {
                center: coords,
                zoom: SINGLE_PLACE_ZOOM,
            },
            None => ViewState {
                center: LngLat::new(0.0, 0.0),
                zoom: WORLD_ZOOM,
            },
        };
        let selected = selected_place_id(&router.current_path()).map(str::to_owned);

        let mut engine = Self {
            bridge,
            router,
            probe,
            surface: None,
            markers: MarkerRegistry::new(),
            props,
            view,
            selected,
            awaiting_first_paint: false,
            resize_pending: false,
        };
        engine.sync_snapshot();
        engine
    }

    /// Hand the engine the mounted map surface.
    ///
    /// Markers are populated immediately; the initial framing waits for
    /// [`WidgetEvent::FirstPaint`] so that dimension queries see real layout.
    pub fn mount(&mut self, mut surface: Box<dyn MapSurface>) {
        self.markers
            .repopulate(surface.as_mut(), self.props.valid_places());
        self.surface = Some(surface);
        self.awaiting_first_paint = true;
    }

    /// Release the surface: markers removed, instance dropped.
    pub fn unmount(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            self.markers.clear(surface.as_mut());
        }
        self.awaiting_first_paint = false;
        self.resize_pending = false;
    }

    /// Run one event to completion.
    pub fn handle(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::FirstPaint => self.on_first_paint(),
            WidgetEvent::MoveEnded => self.on_move_ended(),
            WidgetEvent::MarkerClicked(handle) => {
                let id = self.markers.place_id(handle).map(str::to_owned);
                match id {
                    Some(id) => self.select_place(&id),
                    None => debug!(handle = handle.0, "click on unknown marker handle"),
                }
            }
            WidgetEvent::PlaceChosen(id) => self.select_place(&id),
            WidgetEvent::RouteChanged => self.on_route_changed(),
            WidgetEvent::PropsChanged => self.on_props_changed(),
            WidgetEvent::ContainerResized | WidgetEvent::MaxHeightChanged => self.resize_surface(),
            WidgetEvent::DisplayModeChanged => self.on_display_mode_changed(),
            WidgetEvent::LayoutSettled => {
                if self.resize_pending {
                    self.resize_pending = false;
                    self.resize_surface();
                }
            }
            WidgetEvent::InspectorClosed => {
                let parent = parent_path(&self.router.current_path());
                self.router.navigate(&parent, NavigateOptions::default());
                self.on_route_changed();
            }
            WidgetEvent::FullscreenRequested => {
                if self.selected.is_some() {
                    self.clear_selection_in_place();
                }
                self.bridge.request_display_mode(DisplayMode::Fullscreen);
            }
        }
    }

    pub fn view_state(&self) -> ViewState {
        self.view
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn props(&self) -> &MapProps {
        &self.props
    }

    pub fn markers(&self) -> &MarkerRegistry {
        &self.markers
    }

    fn on_first_paint(&mut self) {
        if !self.awaiting_first_paint {
            return;
        }
        self.awaiting_first_paint = false;
        self.resize_surface();
        let coords = self.props.marker_coords();
        if let Some(command) = frame_places(&coords) {
            self.apply_command(command);
        }
    }

    fn on_move_ended(&mut self) {
        // Read-only sync; re-issuing a target here would loop forever.
        let Some(surface) = self.surface.as_ref() else {
            debug!("move-ended with no mounted surface");
            return;
        };
        self.view = ViewState {
            center: surface.center(),
            zoom: surface.zoom(),
        };
        self.sync_snapshot();
    }

    fn select_place(&mut self, id: &str) {
        let Some(coords) = self.props.coords_of(id) else {
            debug!(id, "selection requested for unknown place");
            return;
        };
        self.router
            .navigate(&place_path(id), NavigateOptions::default());
        self.selected = Some(id.to_owned());
        self.fly_to_selected(coords);
    }

    fn on_route_changed(&mut self) {
        let selected = selected_place_id(&self.router.current_path()).map(str::to_owned);
        if selected == self.selected {
            return;
        }
        self.selected = selected;
        // A selection collapsing to none issues no camera command.
        if let Some(id) = self.selected.clone() {
            if let Some(coords) = self.props.coords_of(&id) {
                self.fly_to_selected(coords);
            }
        }
    }

    fn on_props_changed(&mut self) {
        self.props = decode_props(self.bridge.props());
        if let Some(surface) = self.surface.as_mut() {
            self.markers
                .repopulate(surface.as_mut(), self.props.valid_places());
        }
        // Stale selection: the selected place vanished from the props.
        if let Some(id) = self.selected.clone() {
            if !self.props.contains(&id) {
                self.clear_selection_in_place();
                if self.bridge.display_mode() == DisplayMode::Fullscreen {
                    self.bridge.request_display_mode(DisplayMode::Inline);
                }
            }
        }
        self.sync_snapshot();
    }

    fn on_display_mode_changed(&mut self) {
        if self.bridge.display_mode() == DisplayMode::Inline && self.selected.is_some() {
            // The inspector is gone; drop the selection without a fly-to.
            self.clear_selection_in_place();
        }
        // Resize once the new mode's layout has settled.
        self.resize_pending = true;
    }

    /// Replace the current history entry with its parent and forget the
    /// selection, issuing no camera command.
    fn clear_selection_in_place(&mut self) {
        let parent = parent_path(&self.router.current_path());
        self.router.navigate(&parent, NavigateOptions { replace: true });
        self.selected = None;
    }

    fn fly_to_selected(&mut self, coords: LngLat) {
        // The offset comes from live layout metrics at call time, never cached.
        let offset = inspector_offset_px(self.bridge.display_mode(), self.probe.metrics());
        let target = FlyTo::new(coords, SELECT_ZOOM).with_offset(offset);
        self.apply_command(CameraCommand::FlyTo(target));
    }

    fn resize_surface(&mut self) {
        match self.surface.as_mut() {
            Some(surface) => surface.resize(),
            None => debug!("resize with no mounted surface"),
        }
    }

    fn apply_command(&mut self, command: CameraCommand) {
        let Some(surface) = self.surface.as_mut() else {
            debug!(?command, "camera command dropped; surface not mounted");
            return;
        };
        match command {
            CameraCommand::FlyTo(target) => surface.fly_to(target),
            CameraCommand::FitBounds(bounds, options) => surface.fit_bounds(bounds, options),
        }
    }

    fn sync_snapshot(&mut self) {
        let patch = serde_json::json!({
            "center": self.view.center,
            "zoom": self.view.zoom,
            "markers": self.props.marker_coords(),
            "label": self.props.label_or_default(),
        });
        if let Value::Object(patch) = patch {
            self.bridge
                .write_state(&mut |prev| merge_patch(prev, patch.clone()));
        }
    }
}

fn decode_props(value: Value) -> MapProps {
    match MapProps::from_value(value) {
        Ok(props) => props,
        Err(error) => {
            warn!(%error, "failed to decode widget props");
            MapProps::default()
        }
    }
}
