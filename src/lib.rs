//! Per-window UI layout persistence
//!
//! Saves each window's size, position, maximized flag, and per-grid column
//! widths across application runs, keyed by `<type-namespace>.<name>`.
//! The GUI toolkit stays behind the [`toolkit`] traits; the hosting
//! application calls [`SettingsEngine::window_loaded`] and
//! [`SettingsEngine::window_closed`] at the matching lifecycle moments and
//! decides when to [`SettingsEngine::save`].

#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod persistence;
pub mod store;
pub mod toolkit;
pub mod types;

pub use engine::{EngineConfig, SettingsEngine, DEFAULT_SETTINGS_FILE};
pub use error::SettingsError;
pub use store::SettingsStore;
pub use toolkit::{GridControl, ManagedWindow};
pub use types::{Bounds, GridRecord, WindowKey, WindowRecord};
