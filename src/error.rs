//! Error taxonomy for the settings engine

use std::error::Error;

/// Errors surfaced by store initialization, serialization, and width restore
///
/// Absence is never an error here: a missing settings file at init and an
/// unknown window key at restore are both normal conditions handled by the
/// callers.
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file exists but could not be read.
    LoadFailure(std::io::Error),
    /// Settings document is structurally invalid.
    ParseFailure(serde_json::Error),
    /// Settings file could not be written; destination state is undefined.
    SaveFailure(std::io::Error),
    /// A live grid control has no saved record matching its name.
    NoMatchingGridRecord(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SettingsError::LoadFailure(err) => {
                write!(f, "failed to read settings file: {err}")
            }
            SettingsError::ParseFailure(err) => {
                write!(f, "failed to parse settings document: {err}")
            }
            SettingsError::SaveFailure(err) => {
                write!(f, "failed to write settings file: {err}")
            }
            SettingsError::NoMatchingGridRecord(name) => {
                write!(f, "no saved grid record named '{name}'")
            }
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SettingsError::LoadFailure(err) => Some(err),
            SettingsError::ParseFailure(err) => Some(err),
            SettingsError::SaveFailure(err) => Some(err),
            SettingsError::NoMatchingGridRecord(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> SettingsError {
        SettingsError::ParseFailure(err)
    }
}
