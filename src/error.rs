//! # Error Types
//!
//! This module defines error types used throughout the etiketa library.

use thiserror::Error;

/// Main error type for etiketa operations
#[derive(Debug, Error)]
pub enum EtiketaError {
    /// Encoder invoked with empty text
    #[error("cannot encode an empty code")]
    EmptyInput,

    /// A character outside Code128 Subset B (printable ASCII 32-126)
    #[error(
        "character {character:?} (code point {code_point}) at position {position} \
         cannot be encoded in Code128 Subset B"
    )]
    InvalidCharacter {
        character: char,
        code_point: u32,
        position: usize,
    },

    /// Render template id not found in the registry
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    /// A batch produced no encodable stickers
    #[error("no encodable codes in input")]
    EmptyBatch,

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
