//! The widget-facing host contract and an in-memory implementation

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::snapshot::StateMap;

/// How the host is currently presenting the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Embedded in the conversation, fixed height
    #[default]
    Inline,
    /// Expanded to fill the host surface
    Fullscreen,
}

/// The channel a widget uses to talk to its host.
///
/// Props and display mode are host-owned and read-only from the widget side.
/// The state slot is read/write, but writes are always functional merges: the
/// closure receives the previous snapshot and returns the next one.
pub trait HostBridge {
    /// Current externally supplied props, as raw JSON.
    fn props(&self) -> Value;

    /// Current display mode.
    fn display_mode(&self) -> DisplayMode;

    /// Maximum height granted to the widget, if the host constrains it.
    fn max_height(&self) -> Option<f64>;

    /// Read the persisted snapshot (empty object if never written).
    fn read_state(&self) -> StateMap;

    /// Update the persisted snapshot through a functional merge.
    fn write_state(&self, update: &mut dyn FnMut(StateMap) -> StateMap);

    /// Ask the host to switch display modes. The host decides; the widget
    /// observes the outcome through `display_mode` and its event feed.
    fn request_display_mode(&self, mode: DisplayMode);
}

/// Everything the host holds for one widget instance.
#[derive(Debug, Default)]
struct HostCell {
    props: Value,
    display_mode: DisplayMode,
    max_height: Option<f64>,
    state: StateMap,
}

/// An in-process host: one shared cell, cloneable handles.
///
/// Host-side code keeps one handle to push props/display-mode updates; the
/// widget engine owns another and sees them through the `HostBridge` trait.
#[derive(Clone, Default)]
pub struct InMemoryHost {
    cell: Arc<RwLock<HostCell>>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the props value (host side).
    pub fn set_props(&self, props: Value) {
        self.cell.write().props = props;
    }

    /// Change the display mode (host side).
    pub fn set_display_mode(&self, mode: DisplayMode) {
        self.cell.write().display_mode = mode;
    }

    /// Change the height constraint (host side).
    pub fn set_max_height(&self, max_height: Option<f64>) {
        self.cell.write().max_height = max_height;
    }

    /// Inspect the persisted snapshot (host side).
    pub fn state(&self) -> StateMap {
        self.cell.read().state.clone()
    }
}

impl HostBridge for InMemoryHost {
    fn props(&self) -> Value {
        self.cell.read().props.clone()
    }

    fn display_mode(&self) -> DisplayMode {
        self.cell.read().display_mode
    }

    fn max_height(&self) -> Option<f64> {
        self.cell.read().max_height
    }

    fn read_state(&self) -> StateMap {
        self.cell.read().state.clone()
    }

    fn write_state(&self, update: &mut dyn FnMut(StateMap) -> StateMap) {
        let mut cell = self.cell.write();
        let prev = std::mem::take(&mut cell.state);
        cell.state = update(prev);
    }

    fn request_display_mode(&self, mode: DisplayMode) {
        // The in-memory host grants every request immediately.
        self.cell.write().display_mode = mode;
    }
}
