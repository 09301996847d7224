// ---------------------------------------------------------------------------
// ExportError: failures while writing designs or history to disk
// ---------------------------------------------------------------------------

use std::fmt;

use uuid::Uuid;

/// Errors that can occur while exporting a design or history item.
///
/// Surfaced to the user as a status message; never a panic.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error (directory not creatable, permission denied, disk full, etc.)
    Io(std::io::Error),
    /// JSON serialization failed.
    Serialize(String),
    /// The requested design or history item no longer exists.
    NotFound(Uuid),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "I/O error: {e}"),
            ExportError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
            ExportError::NotFound(id) => write!(f, "Nothing to export for id {id}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Serialize(e.to_string())
    }
}
