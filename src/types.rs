//! This module defines the core, strongly-typed symbol representation used
//! throughout the huffpack pipeline.
//!
//! A single tagged enum covers both tokenization modes, so the frequency
//! counter, tree builder, code book, and container logic are written once and
//! parametrized over the variant. Internal tree nodes are represented by the
//! node enum itself, so no sentinel symbol value exists that could collide
//! with real input.

use std::borrow::Cow;
use std::fmt;

/// The atomic unit being encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Character mode: one Unicode scalar value, whitespace included.
    Char(char),
    /// Word mode: a maximal non-whitespace run, or a single whitespace
    /// character acting as a separator.
    Text(String),
}

impl Symbol {
    /// The symbol's text form, as it appears in the original input and in the
    /// serialized code table.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Symbol::Char(c) => Cow::Owned(c.to_string()),
            Symbol::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{c}"),
            Symbol::Text(s) => f.write_str(s),
        }
    }
}
