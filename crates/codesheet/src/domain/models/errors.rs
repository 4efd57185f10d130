use thiserror::Error;

use super::LanguageId;
use super::ModeId;

/// A syntax mode asset could not be fetched. Cloneable so every caller
/// waiting on the same load observes the same failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to load syntax mode '{mode}': {message}")]
pub struct ModeLoadError {
    pub mode: ModeId,
    pub message: String,
}

/// The execution API could not be reached or answered with something other
/// than a JSON run response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return TransportError::Decode(err.to_string());
        }

        return TransportError::Network(err.to_string());
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        return TransportError::Decode(err.to_string());
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Cannot switch to {language}: syntax mode '{mode}' is unavailable ({message})")]
    ModeUnavailable {
        language: LanguageId,
        mode: ModeId,
        message: String,
    },
}

impl SelectionError {
    pub fn from_mode_error(language: LanguageId, err: ModeLoadError) -> SelectionError {
        return SelectionError::ModeUnavailable {
            language,
            mode: err.mode,
            message: err.message,
        };
    }
}
