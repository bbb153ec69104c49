//! Width ↔ display-length conversion
//!
//! Cosmetic glue for data binding: the persisted width becomes a grid column
//! length, with `-1` mapping to auto-size. The reverse direction is
//! deliberately unsupported; the persistence path reads column state through
//! [`crate::ui::GridColumns`] instead of converting lengths back.

use crate::constants;
use crate::error::SettingsError;
use crate::types::ColumnLength;

/// Convert a persisted width into a column display length.
///
/// `-1` yields [`ColumnLength::Auto`]; every other value, including zero and
/// other negatives, is passed through as a fixed length without clamping.
pub fn length_from_width(width: f64) -> ColumnLength {
    if width == constants::column::AUTO_WIDTH {
        ColumnLength::Auto
    } else {
        ColumnLength::Fixed(width)
    }
}

/// The reverse conversion always fails; this transform is one-way.
pub fn width_from_length(_length: ColumnLength) -> Result<f64, SettingsError> {
    Err(SettingsError::Unsupported)
}
