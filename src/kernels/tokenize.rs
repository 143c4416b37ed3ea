//! This module contains the pure, stateless kernels for splitting raw input
//! text into a sequence of symbols.
//!
//! Two policies exist: *character mode* (every `char` is a symbol) and *word
//! mode* (maximal non-whitespace runs form word symbols; each individual
//! whitespace character is its own separator symbol). Both are lossless:
//! concatenating the emitted symbol texts in order reproduces the input
//! byte-for-byte. The tokenizer is a cheap iterator over `&str`, so the
//! engine can run it twice (counting pass, encoding pass) without buffering
//! the symbol sequence.

use std::str::Chars;

use crate::config::TokenizationMode;
use crate::types::Symbol;

/// Returns the symbol stream for `text` under the given tokenization policy.
pub fn tokens(text: &str, mode: TokenizationMode) -> Tokens<'_> {
    match mode {
        TokenizationMode::Character => Tokens::Characters(text.chars()),
        TokenizationMode::Word => Tokens::Words(WordTokens {
            chars: text.chars(),
            pending_separator: None,
        }),
    }
}

/// Iterator over the symbols of one input text.
pub enum Tokens<'a> {
    Characters(Chars<'a>),
    Words(WordTokens<'a>),
}

impl Iterator for Tokens<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        match self {
            Tokens::Characters(chars) => chars.next().map(Symbol::Char),
            Tokens::Words(words) => words.next(),
        }
    }
}

/// Word-mode scanner. Maintains an accumulator of non-whitespace characters;
/// a whitespace character first flushes the accumulator as a word symbol,
/// then is emitted itself as a separator symbol on the following call.
pub struct WordTokens<'a> {
    chars: Chars<'a>,
    pending_separator: Option<char>,
}

impl Iterator for WordTokens<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        if let Some(sep) = self.pending_separator.take() {
            return Some(Symbol::Text(sep.to_string()));
        }

        let mut word = String::new();
        for ch in self.chars.by_ref() {
            if ch.is_whitespace() {
                if word.is_empty() {
                    return Some(Symbol::Text(ch.to_string()));
                }
                // The separator is emitted on the next call, after the word.
                self.pending_separator = Some(ch);
                return Some(Symbol::Text(word));
            }
            word.push(ch);
        }

        // End of stream: flush a trailing word, if any.
        if word.is_empty() {
            None
        } else {
            Some(Symbol::Text(word))
        }
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
