#![forbid(unsafe_code)]

//! Persist a window's placement and a grid's column layout to a numbered XML
//! settings file, restoring them on the next launch.
//!
//! A consuming application constructs one [`SettingsStore`] at startup, wires
//! [`SaveWindowBoundsAction`] and [`SaveGridColumnsAction`] to its window and
//! grid lifecycle events, and calls [`SettingsStore::save`] on shutdown. The
//! store talks to the UI only through the [`ui::WindowState`] and
//! [`ui::GridColumns`] traits, so no GUI toolkit types appear here.
//!
//! ```no_run
//! use layout_settings::SettingsStore;
//!
//! # fn main() -> Result<(), layout_settings::SettingsError> {
//! let dir = SettingsStore::default_dir()?;
//! let mut store = SettingsStore::open(dir, 0)?;
//! // ... wire adapter actions, run the UI ...
//! store.save()?;
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod convert;
pub mod defaults;
pub mod error;
pub mod record;
pub mod store;
pub mod types;
pub mod ui;

pub use convert::{length_from_width, width_from_length};
pub use defaults::{BuiltinDefaults, DefaultSettings};
pub use error::SettingsError;
pub use record::SettingsRecord;
pub use store::SettingsStore;
pub use types::{ColumnLength, ColumnSetting, Rect};
pub use ui::{ColumnView, GridColumns, SaveGridColumnsAction, SaveWindowBoundsAction, WindowState};
