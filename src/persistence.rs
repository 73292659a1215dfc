//! Settings file serialization
//!
//! The on-disk document is a UTF-8 JSON array of window records. Saving
//! rewrites the whole file; there is no partial update. Pretty-printing is
//! a cosmetic toggle, the parser accepts both forms.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::SettingsError;
use crate::types::WindowRecord;

/// Serialize records to the document text
pub fn encode(records: &[WindowRecord], pretty: bool) -> Result<String, SettingsError> {
    let text = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(text)
}

/// Parse document text back into records
pub fn decode(text: &str) -> Result<Vec<WindowRecord>, SettingsError> {
    Ok(serde_json::from_str(text)?)
}

/// Write all records to the settings file, overwriting existing content
pub fn save_records(records: &[WindowRecord], path: &Path, pretty: bool) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(SettingsError::SaveFailure)?;
        }
    }

    let text = encode(records, pretty)?;
    fs::write(path, text).map_err(SettingsError::SaveFailure)?;
    info!(path = %path.display(), windows = records.len(), "saved settings");
    Ok(())
}

/// Read and parse the settings file
///
/// Existence checks belong to the caller; a missing file surfaces here as
/// `LoadFailure` like any other unreadable file.
pub fn load_records(path: &Path) -> Result<Vec<WindowRecord>, SettingsError> {
    let text = fs::read_to_string(path).map_err(SettingsError::LoadFailure)?;
    decode(&text)
}
