//! Error types for host and binding operations
//!
//! Controller operations never fail outward; these errors come from the
//! construction paths (settings, attaching to a document) and from host
//! calls that the controller logs and absorbs.

use crate::settings::SettingsError;
use thiserror::Error;

/// Errors raised while talking to the selection host
#[derive(Error, Debug)]
pub enum SelectionError {
    /// A DOM call threw
    #[error("DOM error: {0}")]
    Dom(String),

    /// No window or document is reachable
    #[error("No document available")]
    MissingDocument,

    /// The document has no body to attach the overlay to
    #[error("Document has no body")]
    MissingBody,

    /// Settings failed to parse or validate
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Result type alias for host operations
pub type SelectionResult<T> = Result<T, SelectionError>;

impl From<String> for SelectionError {
    fn from(s: String) -> Self {
        SelectionError::Dom(s)
    }
}

impl From<&str> for SelectionError {
    fn from(s: &str) -> Self {
        SelectionError::Dom(s.to_string())
    }
}
