//! Grid column width capture and restore
//!
//! Capture walks each grid's columns in index order and records their
//! widths. Restore matches saved records to live grids by name, then
//! consumes the saved widths as a queue against the live columns. The queue
//! consumption is positional: widths are never re-matched to columns by
//! identity, so a grid whose column set changed since capture gets a
//! best-effort prefix restore.

use std::collections::VecDeque;
use tracing::{debug, warn};

use crate::error::SettingsError;
use crate::toolkit::GridControl;
use crate::types::GridRecord;

/// Record every grid's column widths, in column index order
pub fn capture_widths(grids: &[&dyn GridControl]) -> Vec<GridRecord> {
    grids
        .iter()
        .map(|grid| GridRecord {
            name: grid.name().to_string(),
            widths: (0..grid.column_count()).map(|i| grid.column_width(i)).collect(),
        })
        .collect()
}

/// Apply saved widths onto live grids, matching records by grid name
///
/// Every live grid must have a saved record; a miss fails the whole apply
/// with `NoMatchingGridRecord`. A record with empty widths leaves its grid
/// untouched. Otherwise widths are popped from the front and assigned to
/// columns 0..N-1 until either side runs out: extra saved widths are
/// discarded, extra live columns keep their prior widths.
pub fn apply_widths(
    grids: Vec<&mut dyn GridControl>,
    saved: &[GridRecord],
) -> Result<(), SettingsError> {
    for grid in grids {
        let record = saved
            .iter()
            .find(|r| r.name == grid.name())
            .ok_or_else(|| SettingsError::NoMatchingGridRecord(grid.name().to_string()))?;

        if record.widths.is_empty() {
            continue;
        }

        if record.widths.len() != grid.column_count() {
            warn!(
                grid = %record.name,
                saved = record.widths.len(),
                live = grid.column_count(),
                "saved width count differs from live column count"
            );
        }

        let mut queue: VecDeque<i32> = record.widths.iter().copied().collect();
        for index in 0..grid.column_count() {
            match queue.pop_front() {
                Some(width) => grid.set_column_width(index, width),
                None => break,
            }
        }
        debug!(grid = %record.name, "restored column widths");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::fakes::FakeGrid;

    fn record(name: &str, widths: &[i32]) -> GridRecord {
        GridRecord {
            name: name.to_string(),
            widths: widths.to_vec(),
        }
    }

    #[test]
    fn test_capture_records_names_and_widths_in_order() {
        let first = FakeGrid::new("Grid1", &[50, 80]);
        let second = FakeGrid::new("Grid2", &[120]);
        let grids: Vec<&dyn GridControl> = vec![&first, &second];

        let records = capture_widths(&grids);
        assert_eq!(records, vec![record("Grid1", &[50, 80]), record("Grid2", &[120])]);
    }

    #[test]
    fn test_capture_empty_grid_yields_empty_widths() {
        let grid = FakeGrid::new("Empty", &[]);
        let grids: Vec<&dyn GridControl> = vec![&grid];

        let records = capture_widths(&grids);
        assert_eq!(records, vec![record("Empty", &[])]);
    }

    #[test]
    fn test_apply_exact_match() {
        let mut grid = FakeGrid::new("Grid1", &[1, 2, 3]);

        apply_widths(vec![&mut grid], &[record("Grid1", &[10, 20, 30])]).unwrap();
        assert_eq!(grid.widths, vec![10, 20, 30]);
    }

    #[test]
    fn test_apply_discards_extra_saved_widths() {
        // Three saved widths onto two live columns: third width is dropped
        let mut grid = FakeGrid::new("Grid1", &[1, 2]);

        apply_widths(vec![&mut grid], &[record("Grid1", &[10, 20, 30])]).unwrap();
        assert_eq!(grid.widths, vec![10, 20]);
    }

    #[test]
    fn test_apply_leaves_unmatched_columns_untouched() {
        // Three saved widths onto four live columns: fourth keeps its width
        let mut grid = FakeGrid::new("Grid1", &[1, 2, 3, 4]);

        apply_widths(vec![&mut grid], &[record("Grid1", &[10, 20, 30])]).unwrap();
        assert_eq!(grid.widths, vec![10, 20, 30, 4]);
    }

    #[test]
    fn test_apply_empty_widths_is_noop() {
        let mut grid = FakeGrid::new("Grid1", &[7, 8, 9]);

        apply_widths(vec![&mut grid], &[record("Grid1", &[])]).unwrap();
        assert_eq!(grid.widths, vec![7, 8, 9]);
    }

    #[test]
    fn test_apply_missing_record_fails() {
        let mut grid = FakeGrid::new("OrdersGrid", &[100, 200]);

        let err = apply_widths(vec![&mut grid], &[record("CustomersGrid", &[10, 20])]).unwrap_err();
        match err {
            SettingsError::NoMatchingGridRecord(name) => assert_eq!(name, "OrdersGrid"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_apply_matches_by_name_not_position() {
        let mut first = FakeGrid::new("Second", &[1, 1]);
        let mut second = FakeGrid::new("First", &[2, 2]);
        let saved = vec![record("First", &[10, 10]), record("Second", &[20, 20])];

        apply_widths(vec![&mut first, &mut second], &saved).unwrap();
        assert_eq!(first.widths, vec![20, 20]);
        assert_eq!(second.widths, vec![10, 10]);
    }

    #[test]
    fn test_apply_no_grids_is_ok() {
        // A window without grids restores fine even with unrelated records
        apply_widths(Vec::new(), &[record("Grid1", &[10])]).unwrap();
    }
}
