//! Compiled-in default configuration
//!
//! Consulted only when no settings file exists yet for the active profile.
//! The defaults live behind a trait so an application can bundle its own
//! starting layout without touching the store.

use crate::types::{ColumnSetting, Rect};

/// Source of the configuration used before anything has been saved.
pub trait DefaultSettings {
    /// Starting window rectangle.
    fn window_bounds(&self) -> Rect;

    /// Starting column layout, in display order.
    fn columns(&self) -> Vec<ColumnSetting>;
}

/// The defaults bundled with this crate: a modest window and four
/// auto-sized columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDefaults;

impl DefaultSettings for BuiltinDefaults {
    fn window_bounds(&self) -> Rect {
        Rect::new(100.0, 100.0, 525.0, 350.0)
    }

    fn columns(&self) -> Vec<ColumnSetting> {
        (0..4).map(|i| ColumnSetting::new(i, -1.0)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_columns_are_auto_sized_in_display_order() {
        let columns = BuiltinDefaults.columns();
        assert_eq!(columns.len(), 4);
        for (i, column) in columns.iter().enumerate() {
            assert_eq!(column.display_index, i as u32);
            assert!(column.is_auto());
        }
    }
}
