//! The single source of truth for all huffpack codec configuration.
//!
//! This module defines the unified `CodecConfig` struct, which is designed to
//! be created once at the application boundary (e.g., from a user's JSON
//! config or CLI flags) and then passed by reference into the engine calls.
//! All per-run state (frequency maps, trees, code books) is derived from it
//! locally; nothing is process-wide.

use serde::{Deserialize, Serialize};

use crate::error::HuffpackError;

//==================================================================================
// I. Core Configuration Enums & Structs
//==================================================================================

/// Defines what counts as one symbol when scanning the input.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenizationMode {
    /// **Default:** every Unicode scalar value is its own symbol, whitespace
    /// and control characters included.
    #[default]
    Character,

    /// Maximal runs of non-whitespace form word symbols; each individual
    /// whitespace character is its own separator symbol. Concatenating the
    /// token stream reproduces the input exactly.
    Word,
}

/// The unified configuration for a compression run.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "snake_case")]
pub struct CodecConfig {
    /// The tokenization policy applied to the input text.
    #[serde(default)]
    pub mode: TokenizationMode,

    /// **The target number of payload bits per container block.**
    /// The encoder flushes its pending bit buffer as a self-describing block
    /// once it reaches this threshold, bounding memory for large inputs.
    /// Block boundaries are a streaming detail only; a symbol's code may
    /// straddle two blocks and the decoder carries the partial code across.
    #[serde(default = "default_block_size_bits")]
    pub block_size_bits: usize,
}

impl CodecConfig {
    /// Parses a config from its JSON representation, as produced at the
    /// application boundary. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, HuffpackError> {
        Ok(serde_json::from_str(json)?)
    }
}

// Default implementation to make constructing the config easier.
impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            mode: TokenizationMode::default(),
            block_size_bits: default_block_size_bits(),
        }
    }
}

/// Helper for `serde` to provide a default for `block_size_bits` (8 KiB of
/// packed payload per block).
fn default_block_size_bits() -> usize {
    65_536
}

//==================================================================================
// Unit Tests
//==================================================================================
