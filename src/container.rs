//! Defines the on-wire container format and its reader/writer. This module is
//! the single source of truth for serialization and deserialization of the
//! code table and the packed payload blocks.
//!
//! Layout (all multi-byte integers are big-endian 32-bit signed):
//!
//! ```text
//! header:
//!   entryCount: i32
//!   entries[entryCount]:
//!     symbolLen: i32, symbolBytes[symbolLen]   // UTF-8 symbol text
//!     codeLen:   i32, codeBytes[codeLen]       // ASCII '0'/'1' only
//! body: blocks until end of input:
//!   bitLength:  i32                            // logical bit count L
//!   byteLength: i32                            // exactly ceil(L/8)
//!   bytes[byteLength]                          // packed bits, LSB-first
//! ```
//!
//! The reader never trusts declared sizes: negative or oversized lengths,
//! truncated payloads, and malformed code text are all rejected before any
//! allocation proportional to the declared size.

use std::io::Write;

use crate::error::HuffpackError;

//==================================================================================
// Format Constants
//==================================================================================

/// A reasonable limit on declared text lengths, to prevent OOM from a
/// malformed header. (16MB)
const MAX_REASONABLE_TEXT_LEN: usize = 16 * 1024 * 1024;

//==================================================================================
// Public Structs
//==================================================================================

/// One deserialized code-table entry: the symbol's text form and its code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub symbol: String,
    pub code: String,
}

/// One payload block, borrowed from the container bytes.
#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    /// Logical bit count; up to 7 trailing bits of the last payload byte are
    /// dead and must be ignored.
    pub bit_len: usize,
    pub payload: &'a [u8],
}

//==================================================================================
// Writer
//==================================================================================

/// Serializes the container onto any `Write` sink: the table once, then zero
/// or more blocks in order.
pub struct ContainerWriter<W: Write> {
    inner: W,
}

impl<W: Write> ContainerWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes the code-table header. An empty iterator writes the well-formed
    /// empty table (entry count 0).
    pub fn write_table<'a, I>(&mut self, entries: I) -> Result<(), HuffpackError>
    where
        I: ExactSizeIterator<Item = (&'a str, &'a str)>,
    {
        self.write_i32(entries.len(), "table entry count")?;
        for (symbol, code) in entries {
            self.write_text(symbol, "table symbol")?;
            self.write_text(code, "table code")?;
        }
        Ok(())
    }

    /// Writes one `(bitLength, byteLength, bytes)` block. The caller packs
    /// the payload with the bitpack kernel, which guarantees the size
    /// contract; a mismatch here is a bug, not an input error.
    pub fn write_block(&mut self, bit_len: usize, payload: &[u8]) -> Result<(), HuffpackError> {
        if payload.len() != bit_len.div_ceil(8) {
            return Err(HuffpackError::Internal(format!(
                "block payload of {} bytes does not match {} bits",
                payload.len(),
                bit_len
            )));
        }
        self.write_i32(bit_len, "block bit length")?;
        self.write_i32(payload.len(), "block byte length")?;
        self.inner.write_all(payload)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write_i32(&mut self, value: usize, what: &str) -> Result<(), HuffpackError> {
        let value = i32::try_from(value)
            .map_err(|_| HuffpackError::Internal(format!("{what} {value} overflows i32")))?;
        self.inner.write_all(&value.to_be_bytes())?;
        Ok(())
    }

    fn write_text(&mut self, text: &str, what: &str) -> Result<(), HuffpackError> {
        self.write_i32(text.len(), what)?;
        self.inner.write_all(text.as_bytes())?;
        Ok(())
    }
}

//==================================================================================
// Reader
//==================================================================================

/// Deserializes a container from a byte slice: the table once, then blocks
/// until end of input. Payloads are borrowed, not copied.
pub struct ContainerReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ContainerReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Current offset into the container; after `read_table` this is the
    /// header size.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Reads and structurally validates the code-table header.
    pub fn read_table(&mut self) -> Result<Vec<TableEntry>, HuffpackError> {
        let count = self.read_len(MAX_REASONABLE_TEXT_LEN, "table entry count")?;
        let mut entries = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            let symbol = self.read_text("table symbol")?;
            let code = self.read_text("table code")?;
            if symbol.is_empty() {
                return Err(HuffpackError::CorruptContainer(
                    "table symbol is empty".into(),
                ));
            }
            if code.is_empty() || !code.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(HuffpackError::CorruptContainer(format!(
                    "table code {code:?} is not a non-empty '0'/'1' string"
                )));
            }
            entries.push(TableEntry { symbol, code });
        }
        Ok(entries)
    }

    /// Reads the next payload block, or `None` at a clean end of input.
    /// Leftover bytes too short to start a block are a truncation error.
    pub fn next_block(&mut self) -> Result<Option<Block<'a>>, HuffpackError> {
        if self.pos == self.bytes.len() {
            return Ok(None);
        }
        let bit_len = self.read_len(usize::MAX, "block bit length")?;
        let byte_len = self.read_len(usize::MAX, "block byte length")?;
        if byte_len != bit_len.div_ceil(8) {
            return Err(HuffpackError::CorruptContainer(format!(
                "block declares {bit_len} bits but {byte_len} bytes (expected {})",
                bit_len.div_ceil(8)
            )));
        }
        let payload = self.take(byte_len, "block payload")?;
        Ok(Some(Block { bit_len, payload }))
    }

    fn take(&mut self, n: usize, what: &str) -> Result<&'a [u8], HuffpackError> {
        if self.bytes.len() - self.pos < n {
            return Err(HuffpackError::CorruptContainer(format!(
                "truncated while reading {what}: need {n} bytes, {} remain",
                self.bytes.len() - self.pos
            )));
        }
        let slice = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Reads a big-endian `i32` that is required to be a non-negative length
    /// within `max`.
    fn read_len(&mut self, max: usize, what: &str) -> Result<usize, HuffpackError> {
        let raw = self.take(4, what)?;
        let value = i32::from_be_bytes(raw.try_into().expect("4-byte slice"));
        if value < 0 {
            return Err(HuffpackError::CorruptContainer(format!(
                "{what} is negative ({value})"
            )));
        }
        let value = value as usize;
        if value > max {
            return Err(HuffpackError::CorruptContainer(format!(
                "{what} {value} exceeds maximum allowed size ({max})"
            )));
        }
        Ok(value)
    }

    fn read_text(&mut self, what: &str) -> Result<String, HuffpackError> {
        let len = self.read_len(MAX_REASONABLE_TEXT_LEN, what)?;
        let raw = self.take(len, what)?;
        String::from_utf8(raw.to_vec())
            .map_err(|e| HuffpackError::CorruptContainer(format!("{what} is not UTF-8: {e}")))
    }
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn write_sample() -> Vec<u8> {
        let mut writer = ContainerWriter::new(Vec::new());
        writer
            .write_table([("a", "0"), (" ", "10"), ("b", "11")].into_iter())
            .unwrap();
        writer.write_block(4, &[0b0000_0110]).unwrap();
        writer.write_block(9, &[0xFF, 0x01]).unwrap();
        writer.into_inner()
    }

    #[test]
    fn test_container_roundtrip() {
        let bytes = write_sample();
        let mut reader = ContainerReader::new(&bytes);

        let table = reader.read_table().unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table[0].symbol, "a");
        assert_eq!(table[0].code, "0");
        assert_eq!(table[1].symbol, " ");
        assert_eq!(table[1].code, "10");

        let first = reader.next_block().unwrap().unwrap();
        assert_eq!(first.bit_len, 4);
        assert_eq!(first.payload, &[0b0000_0110]);
        let second = reader.next_block().unwrap().unwrap();
        assert_eq!(second.bit_len, 9);
        assert!(reader.next_block().unwrap().is_none());
    }

    #[test]
    fn test_exact_wire_bytes() {
        let mut writer = ContainerWriter::new(Vec::new());
        writer.write_table([("a", "0")].into_iter()).unwrap();
        writer.write_block(4, &[0x00]).unwrap();
        let bytes = writer.into_inner();
        assert_eq!(
            bytes,
            vec![
                0, 0, 0, 1, // entryCount
                0, 0, 0, 1, b'a', // symbol
                0, 0, 0, 1, b'0', // code
                0, 0, 0, 4, // bitLength
                0, 0, 0, 1, // byteLength
                0x00, // payload
            ]
        );
    }

    #[test]
    fn test_empty_table_roundtrip() {
        let mut writer = ContainerWriter::new(Vec::new());
        writer.write_table(std::iter::empty()).unwrap();
        let bytes = writer.into_inner();
        assert_eq!(bytes, vec![0, 0, 0, 0]);

        let mut reader = ContainerReader::new(&bytes);
        assert!(reader.read_table().unwrap().is_empty());
        assert!(reader.next_block().unwrap().is_none());
    }

    #[test]
    fn test_negative_entry_count_is_rejected() {
        let bytes = (-1i32).to_be_bytes().to_vec();
        let mut reader = ContainerReader::new(&bytes);
        assert!(matches!(
            reader.read_table(),
            Err(HuffpackError::CorruptContainer(_))
        ));
    }

    #[test]
    fn test_truncated_header_is_rejected() {
        let bytes = write_sample();
        for cut in [2, 5, 9, 12] {
            let mut reader = ContainerReader::new(&bytes[..cut]);
            assert!(matches!(
                reader.read_table(),
                Err(HuffpackError::CorruptContainer(_))
            ));
        }
    }

    #[test]
    fn test_truncated_payload_is_rejected() {
        let bytes = write_sample();
        let mut reader = ContainerReader::new(&bytes[..bytes.len() - 1]);
        reader.read_table().unwrap();
        reader.next_block().unwrap();
        assert!(matches!(
            reader.next_block(),
            Err(HuffpackError::CorruptContainer(_))
        ));
    }

    #[test]
    fn test_partial_block_header_is_rejected() {
        let mut bytes = write_sample();
        bytes.extend_from_slice(&[0, 0]); // 2 stray bytes where a block should start
        let mut reader = ContainerReader::new(&bytes);
        reader.read_table().unwrap();
        reader.next_block().unwrap();
        reader.next_block().unwrap();
        assert!(matches!(
            reader.next_block(),
            Err(HuffpackError::CorruptContainer(_))
        ));
    }

    #[test]
    fn test_inconsistent_block_sizes_are_rejected() {
        let mut writer = ContainerWriter::new(Vec::new());
        writer.write_table(std::iter::empty()).unwrap();
        let mut bytes = writer.into_inner();
        // 9 bits require 2 bytes; declare 3.
        bytes.extend_from_slice(&9i32.to_be_bytes());
        bytes.extend_from_slice(&3i32.to_be_bytes());
        bytes.extend_from_slice(&[0, 0, 0]);

        let mut reader = ContainerReader::new(&bytes);
        reader.read_table().unwrap();
        assert!(matches!(
            reader.next_block(),
            Err(HuffpackError::CorruptContainer(_))
        ));
    }

    #[test]
    fn test_non_binary_code_text_is_rejected() {
        let mut writer = ContainerWriter::new(Vec::new());
        writer.write_table([("a", "02")].into_iter()).unwrap();
        let bytes = writer.into_inner();
        let mut reader = ContainerReader::new(&bytes);
        assert!(matches!(
            reader.read_table(),
            Err(HuffpackError::CorruptContainer(_))
        ));
    }

    #[test]
    fn test_oversized_declared_length_is_rejected_before_allocation() {
        let mut bytes = 1i32.to_be_bytes().to_vec();
        bytes.extend_from_slice(&i32::MAX.to_be_bytes()); // absurd symbol length
        let mut reader = ContainerReader::new(&bytes);
        assert!(matches!(
            reader.read_table(),
            Err(HuffpackError::CorruptContainer(_))
        ));
    }

    #[test]
    fn test_writer_rejects_mismatched_block_payload() {
        let mut writer = ContainerWriter::new(Vec::new());
        assert!(matches!(
            writer.write_block(9, &[0xFF]),
            Err(HuffpackError::Internal(_))
        ));
    }
}
