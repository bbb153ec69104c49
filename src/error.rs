//! Error taxonomy for settings persistence

/// Errors surfaced by the settings store and the width conversion.
///
/// All failures propagate synchronously to the immediate caller; nothing is
/// retried or swallowed inside the crate.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A setter was called with no target; stored settings are unchanged.
    #[error("No target supplied for the requested settings update")]
    MissingTarget,

    /// Reverse width conversion is deliberately one-way.
    #[error("Converting a display length back to a width is not supported")]
    Unsupported,

    /// Reading or writing the settings file failed.
    #[error("Settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file exists but could not be parsed.
    #[error("Failed to parse settings file: {0}")]
    Deserialize(#[from] quick_xml::DeError),

    /// The in-memory record could not be serialized.
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] quick_xml::SeError),
}
