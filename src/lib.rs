//! This file is the root of the `huffpack` Rust crate.
//!
//! huffpack is a static Huffman compressor/decompressor: it turns a stream of
//! symbols (characters, or whole words plus whitespace separators) into a
//! prefix-free bit encoding inside a self-describing binary container, and
//! reverses the process losslessly.
//!
//! ```rust
//! use huffpack::{compress_text, decompress, CodecConfig};
//!
//! let config = CodecConfig::default();
//! let container = compress_text("abracadabra", &config)?;
//! assert_eq!(decompress(&container)?, "abracadabra");
//! # Ok::<(), huffpack::HuffpackError>(())
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================

pub mod api;
pub mod config;
pub mod container;
pub mod kernels;

mod error;
mod pipeline;
mod types;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================

pub use api::{analyze, compress, decompress, decompress_to_writer, ContainerStats};
pub use config::{CodecConfig, TokenizationMode};
pub use error::HuffpackError;
pub use pipeline::{compress_text, decompress_bytes};
pub use types::Symbol;
