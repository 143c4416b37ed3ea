//! This module derives the prefix-free code table from a Huffman tree.
//!
//! A depth-first walk accumulates a `String` prefix by value: descending left
//! appends `'0'`, descending right appends `'1'`, and each leaf binds its
//! symbol to the accumulated prefix. Codes are prefix-free by construction,
//! since a leaf is never an ancestor of another leaf.
//!
//! Degenerate case: a single-leaf tree would bind the empty prefix, which no
//! decoder can match. The symbol gets the canonical 1-bit code `"0"` instead,
//! so a one-symbol alphabet stays decodable.

use std::collections::HashMap;

use crate::kernels::tree::HuffmanNode;
use crate::types::Symbol;

/// The forward code table for one compression run: a bijection between
/// symbols and non-empty bit strings over `{0,1}`.
///
/// Entries are kept in depth-first traversal order, so the serialized table
/// (and with it the whole container) is deterministic for a given tree. The
/// reverse mapping used during decompression is rebuilt from the serialized
/// table, not from this structure.
#[derive(Debug, Clone)]
pub struct CodeBook {
    entries: Vec<(Symbol, String)>,
    index: HashMap<Symbol, usize>,
}

impl CodeBook {
    /// Walks the tree and binds every leaf symbol to its code.
    pub fn from_tree(root: &HuffmanNode) -> Self {
        let mut book = CodeBook {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        match root {
            // Single-leaf tree: canonical 1-bit code.
            HuffmanNode::Leaf { symbol, .. } => book.bind(symbol, "0".to_string()),
            HuffmanNode::Internal { .. } => book.walk(root, String::new()),
        }
        book
    }

    fn walk(&mut self, node: &HuffmanNode, prefix: String) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => self.bind(symbol, prefix),
            HuffmanNode::Internal { left, right, .. } => {
                self.walk(left, format!("{prefix}0"));
                self.walk(right, format!("{prefix}1"));
            }
        }
    }

    fn bind(&mut self, symbol: &Symbol, code: String) {
        self.index.insert(symbol.clone(), self.entries.len());
        self.entries.push((symbol.clone(), code));
    }

    /// The code for `symbol`, or `None` if the symbol was not a leaf of the
    /// tree this book was derived from.
    pub fn code_for(&self, symbol: &Symbol) -> Option<&str> {
        self.index
            .get(symbol)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    /// All `(symbol, code)` pairs in traversal order.
    pub fn entries(&self) -> &[(Symbol, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
