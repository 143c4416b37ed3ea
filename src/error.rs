//! This module defines the single, unified error type for the entire huffpack
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffpackError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// The container header or body is structurally inconsistent with the
    /// actual byte stream: truncated payloads, malformed code text, tables
    /// that are not prefix-free, or leftover bits that form no complete code.
    #[error("Corrupt container: {0}")]
    CorruptContainer(String),

    #[error("Internal logic error (this is a bug): {0}")]
    Internal(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., file not
    /// found, invalid UTF-8 in the input stream).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library during config parsing.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
