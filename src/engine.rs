//! Settings engine: lifecycle hooks over the store
//!
//! One explicitly constructed engine instance per process (caller's
//! choice), holding the store and the file configuration. The window-owning
//! caller invokes `window_loaded` after a window finishes loading and
//! `window_closed` after it closes; both hooks only touch the in-memory
//! store. Persisting to disk is a separate, explicit `save` call.

use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::SettingsError;
use crate::store::SettingsStore;
use crate::toolkit::ManagedWindow;
use crate::types::{WindowKey, WindowRecord};
use crate::{geometry, grid, persistence};

/// Default settings filename, resolved against the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "window-settings.json";

/// File location and formatting options for the engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub settings_path: PathBuf,
    pub pretty_print: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from(DEFAULT_SETTINGS_FILE),
            pretty_print: false,
        }
    }
}

impl EngineConfig {
    /// Place the settings file in the per-user config directory
    ///
    /// Falls back to the working directory when no config directory is
    /// available on the platform.
    pub fn in_config_dir(app_dir: &str) -> Self {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(app_dir);
        path.push(DEFAULT_SETTINGS_FILE);
        Self {
            settings_path: path,
            pretty_print: false,
        }
    }
}

/// The persistence engine: store + configuration
#[derive(Debug)]
pub struct SettingsEngine {
    store: SettingsStore,
    config: EngineConfig,
}

impl SettingsEngine {
    /// Build the engine, loading any existing settings file
    ///
    /// A missing file starts an empty store; an unreadable or malformed
    /// file propagates as an error, the caller decides whether to abort or
    /// reinitialize with a fresh config.
    pub fn initialize(config: EngineConfig) -> Result<Self, SettingsError> {
        let store = SettingsStore::initialize(&config.settings_path)?;
        Ok(Self { store, config })
    }

    /// On-load hook: restore saved state onto a freshly loaded window
    ///
    /// No saved record for the window's key is a no-op. A saved record with
    /// no entry for one of the window's live grids fails the restore.
    pub fn window_loaded(&self, window: &mut dyn ManagedWindow) -> Result<(), SettingsError> {
        let key = WindowKey::compose(window.type_namespace(), window.instance_name());
        let Some(record) = self.store.lookup(&key) else {
            debug!(key = %key, "no saved state for window");
            return Ok(());
        };

        info!(key = %key, "restoring window state");
        geometry::apply(window, record);
        grid::apply_widths(window.grids_mut(), &record.grids)
    }

    /// On-close hook: capture the window's current state into the store
    pub fn window_closed(&mut self, window: &dyn ManagedWindow) {
        let record = capture_window(window);
        info!(key = %record.key, maximized = record.maximized, grids = record.grids.len(), "captured window state");
        self.store.upsert(record);
    }

    /// Write the full store contents to the configured settings file
    pub fn save(&self) -> Result<(), SettingsError> {
        persistence::save_records(
            &self.store.snapshot(),
            &self.config.settings_path,
            self.config.pretty_print,
        )
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }
}

/// Build a window's record from its live state
fn capture_window(window: &dyn ManagedWindow) -> WindowRecord {
    let (bounds, maximized) = geometry::capture(window);
    WindowRecord {
        key: WindowKey::compose(window.type_namespace(), window.instance_name()),
        maximized,
        width: bounds.width,
        height: bounds.height,
        x: bounds.x,
        y: bounds.y,
        grids: grid::capture_widths(&window.grids()),
    }
}
