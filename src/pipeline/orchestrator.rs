//! The top-level orchestrators for one compression or decompression run.
//!
//! Compression scans the input twice: once to count frequencies, once to
//! encode through the derived code book. The two passes cannot be pipelined,
//! since no symbol can be encoded before the whole distribution is known, so
//! the engine holds the input text and re-runs the tokenizer instead of
//! buffering the symbol sequence.
//!
//! Decompression never rebuilds the tree: it reconstructs the reverse
//! code-to-symbol map directly from the serialized table, validates it, and
//! decodes with a greedy first-match scan, which prefix-freeness makes
//! unambiguous.
//!
//! All state (frequency table, tree, code book, reverse map) is local to one
//! call and discarded when it returns.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

use bitvec::prelude::*;

use crate::config::CodecConfig;
use crate::container::{ContainerReader, ContainerWriter, TableEntry};
use crate::error::HuffpackError;
use crate::kernels::codebook::CodeBook;
use crate::kernels::{bitpack, frequency, tokenize, tree};

//==================================================================================
// 1. Compression
//==================================================================================

/// Compresses `text` into a self-contained container.
///
/// Zero distinct symbols is not an error: the result is a well-formed empty
/// container (entry count 0, no blocks) that decompresses to the empty
/// string.
pub fn compress_text(text: &str, config: &CodecConfig) -> Result<Vec<u8>, HuffpackError> {
    let start = Instant::now();

    // Pass 1: frequency distribution, in first-occurrence order.
    let frequencies = frequency::count_frequencies(tokenize::tokens(text, config.mode));

    let mut writer = ContainerWriter::new(Vec::new());
    let Some(root) = tree::build_tree(frequencies) else {
        writer.write_table(std::iter::empty())?;
        log::info!(
            "compressed empty input into an empty container in {:.2?}",
            start.elapsed()
        );
        return Ok(writer.into_inner());
    };

    let total_symbols = root.weight();
    let book = CodeBook::from_tree(&root);

    let table: Vec<(Cow<'_, str>, &str)> = book
        .entries()
        .iter()
        .map(|(symbol, code)| (symbol.as_text(), code.as_str()))
        .collect();
    writer.write_table(table.iter().map(|(symbol, code)| (symbol.as_ref(), *code)))?;

    // Pass 2: encode through the code book, flushing a block whenever the
    // pending buffer reaches the configured size.
    let block_bits = config.block_size_bits.max(1);
    let mut pending: BitVec<u8, Lsb0> = BitVec::new();
    for symbol in tokenize::tokens(text, config.mode) {
        let code = book.code_for(&symbol).ok_or_else(|| {
            HuffpackError::Internal(format!("symbol {symbol:?} was counted but has no code"))
        })?;
        bitpack::append_code(&mut pending, code)?;
        if pending.len() >= block_bits {
            let (bit_len, payload) = bitpack::into_block(std::mem::take(&mut pending));
            writer.write_block(bit_len, &payload)?;
        }
    }
    if !pending.is_empty() {
        let (bit_len, payload) = bitpack::into_block(pending);
        writer.write_block(bit_len, &payload)?;
    }

    let out = writer.into_inner();
    log::info!(
        "compressed {} symbols ({} distinct) into {} bytes in {:.2?}",
        total_symbols,
        book.len(),
        out.len(),
        start.elapsed()
    );
    Ok(out)
}

//==================================================================================
// 2. Decompression
//==================================================================================

/// Decompresses a container back into the original text.
pub fn decompress_bytes(bytes: &[u8]) -> Result<String, HuffpackError> {
    let start = Instant::now();

    let mut reader = ContainerReader::new(bytes);
    let reverse = build_reverse_table(reader.read_table()?)?;

    let mut out = String::new();
    let mut pending = String::new();
    let mut symbols: u64 = 0;
    while let Some(block) = reader.next_block()? {
        let bits = bitpack::unpack(block.payload, block.bit_len)?;
        for bit in bits.iter().by_vals() {
            pending.push(if bit { '1' } else { '0' });
            if let Some(symbol) = reverse.get(&pending) {
                out.push_str(symbol);
                symbols += 1;
                pending.clear();
            }
        }
    }

    // The final code must close exactly at the end of the last block.
    if !pending.is_empty() {
        return Err(HuffpackError::CorruptContainer(format!(
            "{} leftover bits at end of stream form no complete code",
            pending.len()
        )));
    }

    log::info!(
        "decompressed {} bytes into {} symbols in {:.2?}",
        bytes.len(),
        symbols,
        start.elapsed()
    );
    Ok(out)
}

/// Rebuilds the code-to-symbol map from the serialized table, rejecting any
/// table that is not a prefix-free bijection.
fn build_reverse_table(
    entries: Vec<TableEntry>,
) -> Result<HashMap<String, String>, HuffpackError> {
    let mut symbols: HashSet<String> = HashSet::with_capacity(entries.len());
    let mut codes: Vec<String> = Vec::with_capacity(entries.len());
    let mut reverse: HashMap<String, String> = HashMap::with_capacity(entries.len());

    for TableEntry { symbol, code } in entries {
        if !symbols.insert(symbol.clone()) {
            return Err(HuffpackError::CorruptContainer(format!(
                "symbol {symbol:?} appears twice in the table"
            )));
        }
        codes.push(code.clone());
        if reverse.insert(code.clone(), symbol).is_some() {
            return Err(HuffpackError::CorruptContainer(format!(
                "code {code:?} appears twice in the table"
            )));
        }
    }

    // Prefix-free check: after a lexicographic sort, any violation must show
    // up between a code and its immediate successor.
    codes.sort();
    for pair in codes.windows(2) {
        if pair[1].starts_with(pair[0].as_str()) {
            return Err(HuffpackError::CorruptContainer(format!(
                "code {:?} is a prefix of code {:?}",
                pair[0], pair[1]
            )));
        }
    }

    Ok(reverse)
}

//==================================================================================
// Unit Tests
//==================================================================================
