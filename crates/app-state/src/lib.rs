//! # App State Crate
//!
//! UI state containers for the Andong places application shell.
//!
//! Each store is an explicit state-holder object owned by the shell
//! (never a global singleton): it owns its slice of state, exposes
//! getters and setters, and broadcasts snapshots over a
//! `tokio::sync::watch` channel so the presentation layer can subscribe
//! to changes.
//!
//! ## Stores
//!
//! - [`SessionState`]: the signed-in user
//! - [`PlaceListState`]: place list + filter criteria + the cached
//!   filtered view, re-derived through the pure engine on every mutation
//! - [`ViewportState`]: map centre and zoom
//! - [`OverlayState`]: modal dialog and loading flags
//! - [`Notifications`]: toasts with scheduled auto-dismissal
//! - [`ChatState`]: chat transcript
//! - [`SettingsState`]: app settings with JSON persistence

pub mod chat;
pub mod notifications;
pub mod overlay;
pub mod places;
pub mod session;
pub mod settings;
pub mod viewport;

// Re-export the stores and their value types
pub use chat::ChatState;
pub use notifications::{Notifications, Toast, ToastKind};
pub use overlay::{Modal, OverlayState, OverlayUi};
pub use places::PlaceListState;
pub use session::SessionState;
pub use settings::{AppSettings, SettingsState};
pub use viewport::{MapViewport, ViewportState};
