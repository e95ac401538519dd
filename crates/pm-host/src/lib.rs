//! Host bridge for sandboxed widgets
//!
//! This crate defines the narrow channel between a widget and the chat-style
//! host surface it is embedded in: read-only props, a read/write persisted
//! state slot, and the display-mode and max-height signals. It also provides
//! an in-memory host used by tests and the demo binary.

pub mod bridge;
pub mod snapshot;

// Re-export commonly used types
pub use bridge::{DisplayMode, HostBridge, InMemoryHost};
pub use snapshot::{merge_patch, StateMap};
