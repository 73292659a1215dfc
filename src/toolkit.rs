//! Toolkit collaborator traits
//!
//! The engine never talks to a GUI toolkit directly. Whatever hosts the
//! windows implements these two traits and invokes the engine's lifecycle
//! hooks from its own load/close notifications.

use crate::types::Bounds;

/// A window the engine can capture from and restore onto
///
/// `bounds()` reports the window's current geometry; `restored_bounds()`
/// reports the geometry it would have if it were not maximized. Toolkits
/// track these separately, and for a non-maximized window they coincide.
pub trait ManagedWindow {
    /// Type namespace half of the window key (e.g. the owning module path)
    fn type_namespace(&self) -> &str;

    /// Instance name half of the window key
    fn instance_name(&self) -> &str;

    fn bounds(&self) -> Bounds;

    fn restored_bounds(&self) -> Bounds;

    fn maximized(&self) -> bool;

    fn set_bounds(&mut self, bounds: Bounds);

    fn set_maximized(&mut self, maximized: bool);

    /// All grid-like descendant controls, in stable order
    fn grids(&self) -> Vec<&dyn GridControl>;

    /// Mutable view of the same controls, same order as `grids`
    fn grids_mut(&mut self) -> Vec<&mut dyn GridControl>;
}

/// A control displaying tabular data in named columns with resizable widths
pub trait GridControl {
    /// Instance name, unique among sibling grids of one window
    fn name(&self) -> &str;

    fn column_count(&self) -> usize;

    fn column_width(&self, index: usize) -> i32;

    fn set_column_width(&mut self, index: usize, width: i32);
}
