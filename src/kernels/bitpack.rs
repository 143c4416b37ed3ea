//! This module contains the pure kernels for converting between logical bit
//! sequences and byte-aligned blocks.
//!
//! Layout contract: logical bit `i` is stored at byte `i/8`, bit position
//! `i%8`, least-significant-bit-first (`bitvec`'s `Lsb0` ordering). Packing
//! `L` bits yields exactly `ceil(L/8)` bytes with zero padding in the unused
//! trailing bits. `L` is always carried alongside the bytes and never
//! inferred from the byte count, because up to 7 trailing bits of the last
//! byte are dead.

use bitvec::prelude::*;

use crate::error::HuffpackError;

/// Appends the bits of a `'0'`/`'1'` code string to a pending bit buffer.
///
/// Codes reaching this kernel come from a `CodeBook`, so any other character
/// is an internal-consistency fault, not an input error.
pub fn append_code(bits: &mut BitVec<u8, Lsb0>, code: &str) -> Result<(), HuffpackError> {
    for ch in code.chars() {
        match ch {
            '0' => bits.push(false),
            '1' => bits.push(true),
            other => {
                return Err(HuffpackError::Internal(format!(
                    "non-binary character {other:?} in code {code:?}"
                )))
            }
        }
    }
    Ok(())
}

/// Consumes a pending bit buffer and packs it into `(bit_len, bytes)` with
/// `bytes.len() == ceil(bit_len / 8)`.
pub fn into_block(bits: BitVec<u8, Lsb0>) -> (usize, Vec<u8>) {
    let bit_len = bits.len();
    let bytes = bits.into_vec();
    debug_assert_eq!(bytes.len(), bit_len.div_ceil(8));
    (bit_len, bytes)
}

/// Reverses [`into_block`]: exposes the first `bit_len` logical bits of a
/// packed payload.
///
/// The payload must be exactly `ceil(bit_len / 8)` bytes; anything else means
/// the block's declared sizes do not describe its bytes.
pub fn unpack(bytes: &[u8], bit_len: usize) -> Result<&BitSlice<u8, Lsb0>, HuffpackError> {
    if bytes.len() != bit_len.div_ceil(8) {
        return Err(HuffpackError::CorruptContainer(format!(
            "block declares {} bits but carries {} bytes (expected {})",
            bit_len,
            bytes.len(),
            bit_len.div_ceil(8)
        )));
    }
    Ok(&BitSlice::from_slice(bytes)[..bit_len])
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_of(s: &str) -> BitVec<u8, Lsb0> {
        let mut bits = BitVec::new();
        append_code(&mut bits, s).unwrap();
        bits
    }

    fn string_of(bits: &BitSlice<u8, Lsb0>) -> String {
        bits.iter()
            .by_vals()
            .map(|b| if b { '1' } else { '0' })
            .collect()
    }

    #[test]
    fn test_pack_layout_is_lsb_first() {
        // Logical sequence 1,0,1,1,0,1,1,1 , 1,0,0,1:
        // byte 0 reads 0b11101101 (bit 0 is the first logical bit),
        // byte 1 reads 0b00001001 with four zero padding bits.
        let (bit_len, bytes) = into_block(bits_of("101101111001"));
        assert_eq!(bit_len, 12);
        assert_eq!(bytes, vec![0b1110_1101, 0b0000_1001]);
    }

    #[test]
    fn test_roundtrip_at_non_byte_boundary() {
        for len in [1, 7, 8, 9, 15, 16, 17, 63] {
            let pattern: String = (0..len).map(|i| if i % 3 == 0 { '1' } else { '0' }).collect();
            let (bit_len, bytes) = into_block(bits_of(&pattern));
            assert_eq!(bit_len, len);
            assert_eq!(bytes.len(), len.div_ceil(8));
            assert_eq!(string_of(unpack(&bytes, bit_len).unwrap()), pattern);
        }
    }

    #[test]
    fn test_empty_sequence_packs_to_nothing() {
        let (bit_len, bytes) = into_block(BitVec::new());
        assert_eq!(bit_len, 0);
        assert!(bytes.is_empty());
        assert!(unpack(&bytes, 0).unwrap().is_empty());
    }

    #[test]
    fn test_unpack_rejects_inconsistent_sizes() {
        // 13 bits need exactly 2 bytes.
        assert!(matches!(
            unpack(&[0xFF], 13),
            Err(HuffpackError::CorruptContainer(_))
        ));
        assert!(matches!(
            unpack(&[0xFF, 0x00, 0x00], 13),
            Err(HuffpackError::CorruptContainer(_))
        ));
    }

    #[test]
    fn test_append_code_rejects_non_binary_text() {
        let mut bits = BitVec::new();
        assert!(matches!(
            append_code(&mut bits, "01x"),
            Err(HuffpackError::Internal(_))
        ));
    }
}
