//! Window geometry capture and restore
//!
//! Corrects for the toolkit convention that a maximized window reports its
//! maximized bounds as its current bounds: capture always records the
//! restored geometry so a later session reopens at the pre-maximize shape.

use tracing::debug;

use crate::toolkit::ManagedWindow;
use crate::types::{Bounds, WindowRecord};

/// Read a window's geometry for persistence
///
/// Returns the bounds to persist and the maximized flag. A maximized window
/// yields its restored bounds, never its current (maximized) bounds.
pub fn capture(window: &dyn ManagedWindow) -> (Bounds, bool) {
    if window.maximized() {
        (window.restored_bounds(), true)
    } else {
        (window.bounds(), false)
    }
}

/// Write a record's geometry back onto a window
///
/// The window state is set first, then the restored bounds are always
/// written; a maximized toolkit window re-derives its maximized bounds
/// itself and keeps the written bounds as its restore shape.
pub fn apply(window: &mut dyn ManagedWindow, record: &WindowRecord) {
    debug!(key = %record.key, maximized = record.maximized, "applying saved geometry");
    window.set_maximized(record.maximized);
    window.set_bounds(record.bounds());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::fakes::FakeWindow;
    use crate::types::WindowKey;

    #[test]
    fn test_capture_normal_window_uses_current_bounds() {
        let window = FakeWindow::normal("App", "MainForm", Bounds::new(800, 600, 10, 20));

        let (bounds, maximized) = capture(&window);
        assert_eq!(bounds, Bounds::new(800, 600, 10, 20));
        assert!(!maximized);
    }

    #[test]
    fn test_capture_maximized_window_uses_restored_bounds() {
        let window = FakeWindow::maximized(
            "App",
            "MainForm",
            Bounds::new(1920, 1080, 0, 0),   // current (maximized)
            Bounds::new(800, 600, 10, 20),   // restored
        );

        let (bounds, maximized) = capture(&window);
        assert_eq!(bounds, Bounds::new(800, 600, 10, 20));
        assert!(maximized);
    }

    #[test]
    fn test_apply_sets_state_and_bounds() {
        let mut window = FakeWindow::normal("App", "MainForm", Bounds::new(100, 100, 0, 0));
        let record = WindowRecord {
            key: WindowKey::compose("App", "MainForm"),
            maximized: true,
            width: 800,
            height: 600,
            x: 10,
            y: 20,
            grids: Vec::new(),
        };

        apply(&mut window, &record);
        assert!(window.maximized);
        // Restored bounds are written even though the record is maximized
        assert_eq!(window.bounds, Bounds::new(800, 600, 10, 20));
    }
}
