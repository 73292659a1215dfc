//! Core record types shared across the crate
//!
//! These are the shapes that get persisted: one `WindowRecord` per window,
//! each holding the window's restored geometry plus a `GridRecord` per
//! grid-like control found inside it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity for one window instance: `<type-namespace>.<instance-name>`
///
/// Used as the sole lookup and merge key in the store. Two windows composing
/// the same key collide and the later capture wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowKey(String);

impl WindowKey {
    /// Compose a key from a window's type namespace and instance name
    pub fn compose(namespace: &str, name: &str) -> Self {
        WindowKey(format!("{namespace}.{name}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowKey {
    fn from(raw: &str) -> Self {
        WindowKey(raw.to_string())
    }
}

/// Plain size + position carrier used at the toolkit boundary
///
/// Not persisted directly; `WindowRecord` flattens these fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32, x: i32, y: i32) -> Self {
        Self { width, height, x, y }
    }
}

/// One persisted window's state
///
/// `width`/`height`/`x`/`y` always hold the restored (non-maximized)
/// geometry, even when the window was maximized at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub key: WindowKey,
    pub maximized: bool,
    pub width: i32,
    pub height: i32,
    #[serde(rename = "locationX")]
    pub x: i32,
    #[serde(rename = "locationY")]
    pub y: i32,
    #[serde(default)]
    pub grids: Vec<GridRecord>,
}

impl WindowRecord {
    /// The record's restored geometry as a `Bounds`
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height, self.x, self.y)
    }
}

/// One grid control's persisted column layout
///
/// `widths` is positional: column widths in the grid's column index order at
/// capture time, not keyed by column identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRecord {
    #[serde(rename = "gridName")]
    pub name: String,
    pub widths: Vec<i32>,
}
