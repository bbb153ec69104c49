//! UI collaborator traits and lifecycle adapter actions
//!
//! The store never depends on a GUI toolkit; applications implement
//! [`WindowState`] and [`GridColumns`] for (or as thin handles over) their
//! toolkit objects. The two actions bridge lifecycle events (window closed,
//! grid unloaded) to the store: the wiring layer binds the target once, the
//! event handler calls `invoke`.
//!
//! An unbound action is a silent no-op. Calling the store setters directly
//! with `None` is an error. That asymmetry is deliberate: declarative wiring
//! may legitimately fire before a target exists, while a direct caller
//! passing nothing has a bug.

use crate::error::SettingsError;
use crate::store::SettingsStore;
use crate::types::{ColumnLength, Rect};

/// A window-like object whose placement can be persisted.
pub trait WindowState {
    /// Current rectangle in screen coordinates.
    fn bounds(&self) -> Rect;

    /// Rectangle the window will return to when un-minimized.
    fn restored_bounds(&self) -> Rect;

    fn is_minimized(&self) -> bool;

    /// Role marker: true only for the single designated main window.
    fn is_main(&self) -> bool;
}

/// A grid-like object whose column layout can be persisted.
pub trait GridColumns {
    /// Role marker: true only for the single designated main grid.
    fn is_main(&self) -> bool;

    /// Snapshot of the column state, in current display order.
    fn columns(&self) -> Vec<ColumnView>;
}

/// One grid column as seen at save time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnView {
    pub display_index: u32,
    pub length: ColumnLength,
}

/// Forwards the bound window's placement to the store when invoked.
#[derive(Debug, Default)]
pub struct SaveWindowBoundsAction<W> {
    target: Option<W>,
}

impl<W: WindowState> SaveWindowBoundsAction<W> {
    pub fn new() -> Self {
        Self { target: None }
    }

    /// Late-bind the window this action reads from.
    pub fn bind(&mut self, window: W) {
        self.target = Some(window);
    }

    pub fn unbind(&mut self) -> Option<W> {
        self.target.take()
    }

    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    /// Record the bound window's bounds; no-op if nothing is bound.
    pub fn invoke(&self, store: &mut SettingsStore) -> Result<(), SettingsError> {
        match &self.target {
            Some(window) => store.set_window_bounds(Some(window as &dyn WindowState)),
            None => Ok(()),
        }
    }
}

/// Forwards the bound grid's column layout to the store when invoked.
#[derive(Debug, Default)]
pub struct SaveGridColumnsAction<G> {
    target: Option<G>,
}

impl<G: GridColumns> SaveGridColumnsAction<G> {
    pub fn new() -> Self {
        Self { target: None }
    }

    /// Late-bind the grid this action reads from.
    pub fn bind(&mut self, grid: G) {
        self.target = Some(grid);
    }

    pub fn unbind(&mut self) -> Option<G> {
        self.target.take()
    }

    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    /// Record the bound grid's columns; no-op if nothing is bound.
    pub fn invoke(&self, store: &mut SettingsStore) -> Result<(), SettingsError> {
        match &self.target {
            Some(grid) => store.set_grid_columns(Some(grid as &dyn GridColumns)),
            None => Ok(()),
        }
    }
}
