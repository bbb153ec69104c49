//! Value types shared across the crate

use serde::{Deserialize, Serialize};

use crate::constants;

/// Window rectangle in screen coordinates.
///
/// Serialized as the four attributes of the `MainWindowBounds` element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    #[serde(rename = "@Left")]
    pub left: f64,
    #[serde(rename = "@Top")]
    pub top: f64,
    #[serde(rename = "@Width")]
    pub width: f64,
    #[serde(rename = "@Height")]
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Persisted state of one grid column.
///
/// A width of `-1` means the column was in auto-size mode when saved; any
/// other value is a literal pixel width. Equality is structural on both
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSetting {
    /// The column's position in the grid's display order
    #[serde(rename = "DisplayIndex")]
    pub display_index: u32,
    /// Pixel width, or the auto-size sentinel `-1`
    #[serde(rename = "Width")]
    pub width: f64,
}

impl ColumnSetting {
    pub fn new(display_index: u32, width: f64) -> Self {
        Self {
            display_index,
            width,
        }
    }

    /// True if this column was saved in auto-size mode.
    pub fn is_auto(&self) -> bool {
        self.width == constants::column::AUTO_WIDTH
    }
}

/// A grid column's display length: either sized automatically by the grid or
/// fixed to an explicit pixel value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnLength {
    Auto,
    Fixed(f64),
}
