/*!
 * Error types for the scrivai application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The model answered but produced no usable text
    #[error("API returned an empty response")]
    EmptyResponse,

    /// The request did not complete within the configured time
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),
}

/// Errors raised while building a translation lexicon
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LexiconError {
    /// The English reference list has no entries
    #[error("Reference word list is empty")]
    EmptyReference,

    /// A language list is not aligned with the reference list
    #[error("Lexicon entry for {language} has {actual} words, expected {expected}")]
    Misaligned {
        /// Language whose list is misaligned
        language: String,
        /// Length of the reference list
        expected: usize,
        /// Length of the offending list
        actual: usize,
    },

    /// The same language was registered twice
    #[error("Duplicate lexicon entry for {0}")]
    DuplicateLanguage(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// The selected file is not a plain text document
    #[error("Unsupported file: {0}. Please select a text (.txt) file")]
    UnsupportedFile(String),

    /// There is no text to work on
    #[error("No text to analyze")]
    EmptyInput,

    /// There is no text to save
    #[error("No content to download")]
    NothingToSave,

    /// The output file exists and overwriting was not requested
    #[error("Output file already exists: {0}. Use --force-overwrite to replace it")]
    OutputExists(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from building the fallback tables
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
