//! This module contains the pure kernel for counting symbol occurrences.
//!
//! The result preserves first-occurrence order. That ordering is load-bearing:
//! it seeds the tree builder's priority queue, which breaks frequency ties by
//! insertion sequence, so the whole construction is deterministic for a given
//! input and tokenization mode.

use std::collections::HashMap;

use crate::types::Symbol;

/// Counts occurrences of every distinct symbol in the stream.
///
/// Returns one `(symbol, count)` pair per distinct symbol, ordered by the
/// symbol's first occurrence in the input. Counts are exact. An empty stream
/// yields an empty vector.
pub fn count_frequencies(symbols: impl Iterator<Item = Symbol>) -> Vec<(Symbol, u64)> {
    let mut index: HashMap<Symbol, usize> = HashMap::new();
    let mut counts: Vec<(Symbol, u64)> = Vec::new();

    for symbol in symbols {
        match index.get(&symbol) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(symbol.clone(), counts.len());
                counts.push((symbol, 1));
            }
        }
    }

    counts
}

//==================================================================================
// Unit Tests
//==================================================================================
