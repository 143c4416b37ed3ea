//! The end-to-end compression and decompression engines.
//!
//! This layer owns no algorithmic logic of its own: it composes the pure
//! kernels (`tokenize`, `frequency`, `tree`, `codebook`, `bitpack`) with the
//! container format into the two public operations.

pub mod orchestrator;

pub use orchestrator::{compress_text, decompress_bytes};
