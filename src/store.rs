//! Settings store service
//!
//! One `SettingsStore` owns the in-memory settings record for a single
//! profile. Construct it once at startup with [`SettingsStore::open`]: if the
//! profile's file exists it is loaded (a file that exists but will not parse
//! is a fatal error, never silently replaced), otherwise the record starts
//! from compiled-in defaults. Setters mutate the record in place; nothing
//! touches the disk again until [`SettingsStore::save`].
//!
//! The store is single-threaded by construction: setters take `&mut self`,
//! so it lives on whatever thread owns the UI event loop.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::constants;
use crate::defaults::{BuiltinDefaults, DefaultSettings};
use crate::error::SettingsError;
use crate::record::{ColumnList, SettingsRecord};
use crate::types::{ColumnLength, ColumnSetting, Rect};
use crate::ui::{GridColumns, WindowState};

pub struct SettingsStore {
    dir: PathBuf,
    profile: u8,
    record: SettingsRecord,
}

impl SettingsStore {
    /// Open the store for `profile`, loading `dir/Setting<NN>.xml` if it
    /// exists and falling back to [`BuiltinDefaults`] otherwise.
    pub fn open(dir: impl Into<PathBuf>, profile: u8) -> Result<Self, SettingsError> {
        Self::open_with_defaults(dir, profile, &BuiltinDefaults)
    }

    /// Like [`SettingsStore::open`] with a caller-supplied defaults source.
    pub fn open_with_defaults(
        dir: impl Into<PathBuf>,
        profile: u8,
        defaults: &dyn DefaultSettings,
    ) -> Result<Self, SettingsError> {
        let dir = dir.into();
        let path = settings_path(&dir, profile);

        let record = if path.exists() {
            let record = SettingsRecord::read_from(&path)?;
            info!(path = %path.display(), columns = record.columns.items.len(), "Loaded settings file");
            record
        } else {
            info!(path = %path.display(), "Settings file not found, using built-in defaults");
            SettingsRecord {
                window_bounds: defaults.window_bounds(),
                columns: ColumnList {
                    items: defaults.columns(),
                },
            }
        };

        Ok(Self {
            dir,
            profile,
            record,
        })
    }

    /// Directory of the running executable, the conventional home of the
    /// settings file.
    pub fn default_dir() -> Result<PathBuf, SettingsError> {
        let exe = std::env::current_exe()?;
        Ok(exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Path of the active profile's settings file.
    pub fn path(&self) -> PathBuf {
        settings_path(&self.dir, self.profile)
    }

    pub fn profile(&self) -> u8 {
        self.profile
    }

    /// Switch the active profile number. Only affects the path used by
    /// subsequent saves; the in-memory record is untouched.
    pub fn set_profile(&mut self, profile: u8) {
        self.profile = profile;
    }

    /// Snapshot of the stored window bounds.
    pub fn window_bounds(&self) -> Rect {
        self.record.window_bounds
    }

    /// Stored column layout in saved display order. Borrows the live
    /// sequence; the next setter call invalidates it.
    pub fn columns(&self) -> &[ColumnSetting] {
        &self.record.columns.items
    }

    /// Record `window`'s placement, replacing the stored bounds wholesale.
    ///
    /// A minimized window contributes its restored bounds rather than its
    /// minimized ones. A window that is not the designated main window is
    /// ignored and the stored settings stay unchanged. An absent target is
    /// an error.
    pub fn set_window_bounds(
        &mut self,
        window: Option<&dyn WindowState>,
    ) -> Result<(), SettingsError> {
        let window = window.ok_or(SettingsError::MissingTarget)?;
        if !window.is_main() {
            warn!("Ignoring bounds from a window that is not the designated main window");
            return Ok(());
        }

        let bounds = if window.is_minimized() {
            window.restored_bounds()
        } else {
            window.bounds()
        };
        debug!(?bounds, "Recorded main window bounds");
        self.record.window_bounds = bounds;
        Ok(())
    }

    /// Record `grid`'s column layout, clearing and rebuilding the stored
    /// sequence in the grid's current display order.
    ///
    /// Auto-sized columns are stored with the `-1` width sentinel. A grid
    /// that is not the designated main grid is ignored; an absent target is
    /// an error.
    pub fn set_grid_columns(
        &mut self,
        grid: Option<&dyn GridColumns>,
    ) -> Result<(), SettingsError> {
        let grid = grid.ok_or(SettingsError::MissingTarget)?;
        if !grid.is_main() {
            warn!("Ignoring columns from a grid that is not the designated main grid");
            return Ok(());
        }

        let items = &mut self.record.columns.items;
        items.clear();
        for column in grid.columns() {
            let width = match column.length {
                ColumnLength::Auto => constants::column::AUTO_WIDTH,
                ColumnLength::Fixed(width) => width,
            };
            items.push(ColumnSetting::new(column.display_index, width));
        }
        debug!(count = items.len(), "Recorded grid column layout");
        Ok(())
    }

    /// Serialize the whole record to the settings file, overwriting any
    /// existing file.
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = self.path();
        self.record.write_to(&path)?;
        info!(path = %path.display(), "Saved settings");
        Ok(())
    }
}

fn settings_path(dir: &Path, profile: u8) -> PathBuf {
    dir.join(format!(
        "{}{:02}{}",
        constants::file::PREFIX,
        profile,
        constants::file::EXTENSION
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ColumnView;

    struct FakeWindow {
        bounds: Rect,
        restored: Rect,
        minimized: bool,
        main: bool,
    }

    impl FakeWindow {
        fn main_at(left: f64, top: f64, width: f64, height: f64) -> Self {
            Self {
                bounds: Rect::new(left, top, width, height),
                restored: Rect::new(left, top, width, height),
                minimized: false,
                main: true,
            }
        }
    }

    impl WindowState for FakeWindow {
        fn bounds(&self) -> Rect {
            self.bounds
        }
        fn restored_bounds(&self) -> Rect {
            self.restored
        }
        fn is_minimized(&self) -> bool {
            self.minimized
        }
        fn is_main(&self) -> bool {
            self.main
        }
    }

    struct FakeGrid {
        columns: Vec<ColumnView>,
        main: bool,
    }

    impl GridColumns for FakeGrid {
        fn is_main(&self) -> bool {
            self.main
        }
        fn columns(&self) -> Vec<ColumnView> {
            self.columns.clone()
        }
    }

    fn grid_columns(widths: &[(u32, ColumnLength)]) -> Vec<ColumnView> {
        widths
            .iter()
            .map(|&(display_index, length)| ColumnView {
                display_index,
                length,
            })
            .collect()
    }

    fn fresh_store() -> (tempfile::TempDir, SettingsStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::open(dir.path(), 0).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_file_loads_builtin_defaults() {
        let (_dir, store) = fresh_store();
        assert_eq!(store.window_bounds(), BuiltinDefaults.window_bounds());
        assert_eq!(store.columns(), BuiltinDefaults.columns().as_slice());
    }

    #[test]
    fn test_settings_path_uses_two_digit_profile_suffix() {
        let (dir, mut store) = fresh_store();
        assert_eq!(store.path(), dir.path().join("Setting00.xml"));
        store.set_profile(7);
        assert_eq!(store.path(), dir.path().join("Setting07.xml"));
        store.set_profile(42);
        assert_eq!(store.path(), dir.path().join("Setting42.xml"));
    }

    #[test]
    fn test_set_window_bounds_round_trips_through_getter() {
        let (_dir, mut store) = fresh_store();
        let window = FakeWindow::main_at(100.0, 110.0, 320.0, 240.0);
        store.set_window_bounds(Some(&window)).unwrap();
        assert_eq!(store.window_bounds(), Rect::new(100.0, 110.0, 320.0, 240.0));
    }

    #[test]
    fn test_minimized_window_contributes_restored_bounds() {
        let (_dir, mut store) = fresh_store();
        let window = FakeWindow {
            bounds: Rect::new(-32000.0, -32000.0, 160.0, 28.0),
            restored: Rect::new(50.0, 60.0, 70.0, 80.0),
            minimized: true,
            main: true,
        };
        store.set_window_bounds(Some(&window)).unwrap();
        assert_eq!(store.window_bounds(), Rect::new(50.0, 60.0, 70.0, 80.0));
    }

    #[test]
    fn test_non_main_window_leaves_settings_unchanged() {
        let (_dir, mut store) = fresh_store();
        let before = store.window_bounds();
        let window = FakeWindow {
            main: false,
            ..FakeWindow::main_at(1.0, 2.0, 3.0, 4.0)
        };
        store.set_window_bounds(Some(&window)).unwrap();
        assert_eq!(store.window_bounds(), before);
    }

    #[test]
    fn test_absent_window_is_an_invalid_argument() {
        let (_dir, mut store) = fresh_store();
        let before = store.window_bounds();
        let result = store.set_window_bounds(None);
        assert!(matches!(result, Err(SettingsError::MissingTarget)));
        assert_eq!(store.window_bounds(), before);
    }

    #[test]
    fn test_set_grid_columns_preserves_order_and_sentinels() {
        let (_dir, mut store) = fresh_store();
        let grid = FakeGrid {
            main: true,
            columns: grid_columns(&[
                (0, ColumnLength::Fixed(-2.0)),
                (1, ColumnLength::Fixed(100.0)),
                (2, ColumnLength::Fixed(200.0)),
                (3, ColumnLength::Auto),
                (4, ColumnLength::Fixed(0.0)),
            ]),
        };
        store.set_grid_columns(Some(&grid)).unwrap();
        assert_eq!(
            store.columns(),
            &[
                ColumnSetting::new(0, -2.0),
                ColumnSetting::new(1, 100.0),
                ColumnSetting::new(2, 200.0),
                ColumnSetting::new(3, -1.0),
                ColumnSetting::new(4, 0.0),
            ]
        );
    }

    #[test]
    fn test_set_grid_columns_replaces_the_whole_sequence() {
        let (_dir, mut store) = fresh_store();
        let first = FakeGrid {
            main: true,
            columns: grid_columns(&[(0, ColumnLength::Auto), (1, ColumnLength::Auto)]),
        };
        store.set_grid_columns(Some(&first)).unwrap();
        assert_eq!(store.columns().len(), 2);

        let second = FakeGrid {
            main: true,
            columns: grid_columns(&[(0, ColumnLength::Fixed(33.0))]),
        };
        store.set_grid_columns(Some(&second)).unwrap();
        assert_eq!(store.columns(), &[ColumnSetting::new(0, 33.0)]);
    }

    #[test]
    fn test_non_main_grid_leaves_settings_unchanged() {
        let (_dir, mut store) = fresh_store();
        let before = store.columns().to_vec();
        let grid = FakeGrid {
            main: false,
            columns: grid_columns(&[(0, ColumnLength::Fixed(999.0))]),
        };
        store.set_grid_columns(Some(&grid)).unwrap();
        assert_eq!(store.columns(), before.as_slice());
    }

    #[test]
    fn test_absent_grid_is_an_invalid_argument() {
        let (_dir, mut store) = fresh_store();
        let before = store.columns().to_vec();
        let result = store.set_grid_columns(None);
        assert!(matches!(result, Err(SettingsError::MissingTarget)));
        assert_eq!(store.columns(), before.as_slice());
    }

    #[test]
    fn test_save_writes_the_active_profile_file() {
        let (dir, mut store) = fresh_store();
        store.set_profile(3);
        store.save().unwrap();
        assert!(dir.path().join("Setting03.xml").exists());
        assert!(!dir.path().join("Setting00.xml").exists());
    }

    #[test]
    fn test_custom_defaults_source() {
        struct OneColumn;
        impl DefaultSettings for OneColumn {
            fn window_bounds(&self) -> Rect {
                Rect::new(0.0, 0.0, 800.0, 600.0)
            }
            fn columns(&self) -> Vec<ColumnSetting> {
                vec![ColumnSetting::new(0, 120.0)]
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::open_with_defaults(dir.path(), 0, &OneColumn).unwrap();
        assert_eq!(store.window_bounds(), Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(store.columns(), &[ColumnSetting::new(0, 120.0)]);
    }
}
