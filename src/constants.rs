//! Crate-wide constants
//!
//! Magic numbers and string literals used throughout the crate, kept in one
//! place so the file-name convention and sentinel values have a single source
//! of truth.

/// Settings file naming constants
pub mod file {
    /// Prefix of every settings file name
    pub const PREFIX: &str = "Setting";

    /// Settings file extension
    pub const EXTENSION: &str = ".xml";

    /// XML declaration written at the top of every saved file
    pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";
}

/// Profile numbering constants
pub mod profile {
    /// Profile selected when the caller does not care about profiles
    pub const DEFAULT: u8 = 0;
}

/// Column width sentinel constants
pub mod column {
    /// Persisted width meaning "let the grid size this column automatically"
    pub const AUTO_WIDTH: f64 = -1.0;
}
