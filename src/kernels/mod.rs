//! This module serves as the public API for the collection of all pure,
//! stateless coding kernels.
//!
//! Each sub-module represents one stage of the codec that the `pipeline`
//! layer composes into a complete compression or decompression run. This is
//! the "toolbox" of the huffpack system.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Stage 1: symbol segmentation
pub mod tokenize;

/// Stage 2: occurrence counting
pub mod frequency;

/// Stage 3: prefix-code derivation
pub mod codebook;
pub mod tree;

/// Stage 4: bit-level packing
pub mod bitpack;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
// We do not re-export individual functions here. The `pipeline::orchestrator`
// is the designated consumer of these kernels and calls them via their full
// path (e.g., `kernels::tokenize::tokens`). This keeps the dependency graph
// explicit and prevents polluting the global namespace.
