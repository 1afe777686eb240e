//! # Error Handling
//!
//! Provides the `AppError` enum used by the document loading surface and the CLI.
//! The path and pointer algorithms themselves never fail; they degrade to defaults.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A document could not be parsed or serialized.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// A pointer or reference addressed nothing.
    #[from(ignore)]
    #[display("Not Found: {_0}")]
    NotFound(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
