//! Serializable settings record and its XML file format
//!
//! The on-disk document mirrors the shape the sample has always written:
//!
//! ```xml
//! <SettingFile>
//!   <MainWindowBounds Left="100" Top="110" Width="320" Height="240"/>
//!   <DataGridColumns>
//!     <ColumnSetting>
//!       <DisplayIndex>0</DisplayIndex>
//!       <Width>-1</Width>
//!     </ColumnSetting>
//!   </DataGridColumns>
//! </SettingFile>
//! ```
//!
//! Files are UTF-8 without a byte-order mark. Writes overwrite in place;
//! there is no temp-file-then-rename step, so a crash mid-write can leave a
//! truncated file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants;
use crate::error::SettingsError;
use crate::types::{ColumnSetting, Rect};

/// In-memory representation of everything persisted for one profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename = "SettingFile")]
pub struct SettingsRecord {
    #[serde(rename = "MainWindowBounds")]
    pub window_bounds: Rect,
    #[serde(rename = "DataGridColumns", default)]
    pub columns: ColumnList,
}

/// Wrapper producing the `<DataGridColumns>` grouping element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnList {
    #[serde(rename = "ColumnSetting", default)]
    pub items: Vec<ColumnSetting>,
}

impl SettingsRecord {
    /// Deserialize a record from the XML file at `path`.
    ///
    /// Any I/O or parse failure propagates; a file that exists but cannot be
    /// parsed is never silently replaced with defaults.
    pub fn read_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        let record = quick_xml::de::from_str(&contents)?;
        Ok(record)
    }

    /// Serialize the record to the XML file at `path`, overwriting any
    /// existing file.
    pub fn write_to(&self, path: &Path) -> Result<(), SettingsError> {
        let mut document = String::from(constants::file::XML_DECLARATION);
        document.push('\n');
        document.push_str(&quick_xml::se::to_string(self)?);
        fs::write(path, document)?;
        Ok(())
    }
}
