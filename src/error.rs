//! Error types for rs-wikimedia2text.
//!
//! The cleaning pipeline itself is infallible by design: malformed markup
//! degrades to best-effort text instead of raising. The only failure the
//! crate surfaces is decoding raw input bytes.

/// Error type for conversion operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Raw input bytes could not be decoded to text.
    #[error("Input decoding failed: {0}")]
    Encoding(String),
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
