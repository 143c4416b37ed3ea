//! Stateless public entry points over the pure pipeline engines.
//!
//! External collaborators (CLIs, menus, services) talk to the codec through
//! these functions; they marshal `Read`/`Write` endpoints to and from the
//! in-memory types the pipeline works on, and nothing here holds state
//! between calls.

use std::io::{Read, Write};

use crate::config::CodecConfig;
use crate::container::ContainerReader;
use crate::error::HuffpackError;
use crate::pipeline;

/// Reads the whole input as UTF-8 text and compresses it into a container.
pub fn compress<R: Read>(mut input: R, config: &CodecConfig) -> Result<Vec<u8>, HuffpackError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    pipeline::compress_text(&text, config)
}

/// Decompresses a container back into the original text.
pub fn decompress(bytes: &[u8]) -> Result<String, HuffpackError> {
    pipeline::decompress_bytes(bytes)
}

/// Decompresses a container and writes the text to `out`.
pub fn decompress_to_writer<W: Write>(bytes: &[u8], mut out: W) -> Result<(), HuffpackError> {
    let text = pipeline::decompress_bytes(bytes)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

/// Summary of a container's structure, extracted without decoding any
/// payload bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerStats {
    /// Number of code-table entries (distinct symbols).
    pub entry_count: usize,
    /// Size of the serialized table header in bytes.
    pub header_size: usize,
    pub block_count: usize,
    /// Total logical payload bits across all blocks.
    pub payload_bits: u64,
    /// Total packed payload bytes across all blocks.
    pub payload_bytes: usize,
    pub total_size: usize,
}

/// Walks a container's structure and reports its shape. This validates the
/// framing exactly like a full decode, but never touches the reverse table
/// or the payload bits.
pub fn analyze(bytes: &[u8]) -> Result<ContainerStats, HuffpackError> {
    let mut reader = ContainerReader::new(bytes);
    let entries = reader.read_table()?;
    let header_size = reader.position();

    let mut block_count = 0;
    let mut payload_bits = 0u64;
    let mut payload_bytes = 0;
    while let Some(block) = reader.next_block()? {
        block_count += 1;
        payload_bits += block.bit_len as u64;
        payload_bytes += block.payload.len();
    }

    Ok(ContainerStats {
        entry_count: entries.len(),
        header_size,
        block_count,
        payload_bits,
        payload_bytes,
        total_size: bytes.len(),
    })
}

//==================================================================================
// Unit Tests
//==================================================================================
