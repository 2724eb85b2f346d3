//! Standalone adaptive compression of byte blocks.
//!
//! Used for payloads that travel outside a connection's message stream. Each
//! call starts from an empty (NYT-only) model and updates it after every
//! symbol, so both sides evolve identical trees from the data itself.
//!
//! Layout: a 2-byte big-endian length of the uncompressed input, followed by
//! the coded bits starting at bit 16.

use bitstream::{BitReader, BitWriter};

use crate::model::HuffmanModel;

/// Size of the big-endian length prefix in bytes.
pub const LENGTH_PREFIX: usize = 2;

/// Compresses `input` with a fresh adaptive model.
///
/// Inputs longer than `u16::MAX` bytes are truncated to fit the length prefix.
#[must_use]
pub fn compress(input: &[u8]) -> Vec<u8> {
    let input = &input[..input.len().min(usize::from(u16::MAX))];
    let len = input.len() as u16;

    // Worst case: an NYT path (at most 256 edges) plus a literal per symbol.
    let mut out = vec![0u8; LENGTH_PREFIX + input.len() * 33 + 1];
    out[..LENGTH_PREFIX].copy_from_slice(&len.to_be_bytes());

    let mut model = HuffmanModel::new();
    let mut writer = BitWriter::at(&mut out, LENGTH_PREFIX * 8);
    for &byte in input {
        model.transmit(byte, &mut writer);
        model.add_ref(byte);
    }
    let total = (writer.position() + 8) >> 3;
    out.truncate(total);
    out
}

/// Decompresses a block produced by [`compress`].
///
/// The declared length is capped at `max_len`. Decoding stops early, returning
/// only the bytes decoded so far, once the read position runs past the input.
#[must_use]
pub fn decompress(input: &[u8], max_len: usize) -> Vec<u8> {
    let Some(prefix) = input.get(..LENGTH_PREFIX) else {
        return Vec::new();
    };
    let declared = usize::from(u16::from_be_bytes([prefix[0], prefix[1]]));
    let len = declared.min(max_len);

    let mut out = Vec::with_capacity(len);
    let mut model = HuffmanModel::new();
    let mut reader = BitReader::at(input, LENGTH_PREFIX * 8);
    for _ in 0..len {
        if reader.position() >> 3 > input.len() {
            break;
        }
        let byte = model.receive(&mut reader);
        out.push(byte);
        model.add_ref(byte);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_zero_length_prefix() {
        let packed = compress(&[]);
        assert_eq!(&packed[..2], &[0, 0]);
        assert!(decompress(&packed, 1024).is_empty());
    }

    #[test]
    fn first_symbol_is_a_bare_literal() {
        // The fresh tree is only the NYT root, so no path bits precede the
        // literal, which lands MSB first in bits 16..24.
        assert_eq!(compress(&[0x41]), [0x00, 0x01, 0x82, 0x00]);
        assert_eq!(compress(&[0x80]), [0x00, 0x01, 0x01, 0x00]);
        assert_eq!(decompress(&[0x00, 0x01, 0x82, 0x00], 16), [0x41]);
    }

    #[test]
    fn second_symbol_follows_root_split() {
        // After one literal the root holds NYT on the left and the symbol on
        // the right.
        assert_eq!(compress(b"AA"), [0x00, 0x02, 0x82, 0x01]);
        assert_eq!(compress(b"AB"), [0x00, 0x02, 0x82, 0x84, 0x00]);
        assert_eq!(compress(b"ABA"), [0x00, 0x03, 0x82, 0x84, 0x02]);
        assert_eq!(decompress(&[0x00, 0x03, 0x82, 0x84, 0x02], 16), b"ABA");
    }

    #[test]
    fn prefix_is_big_endian_length() {
        let input = vec![7u8; 300];
        let packed = compress(&input);
        assert_eq!(&packed[..2], &300u16.to_be_bytes());
    }

    #[test]
    fn roundtrip_text() {
        let input = b"\\name\\Padawan\\rate\\25000\\snaps\\40\\model\\kyle/default";
        let packed = compress(input);
        assert_eq!(decompress(&packed, 4096), input);
    }

    #[test]
    fn repetitive_input_shrinks() {
        let input = vec![b'a'; 1000];
        let packed = compress(&input);
        assert!(packed.len() < input.len() / 4);
        assert_eq!(decompress(&packed, 4096), input);
    }

    #[test]
    fn declared_length_is_capped() {
        let input = b"abcdefgh";
        let packed = compress(input);
        assert_eq!(decompress(&packed, 3), b"abc");
    }

    #[test]
    fn short_input_yields_nothing() {
        assert!(decompress(&[], 16).is_empty());
        assert!(decompress(&[0x01], 16).is_empty());
    }

    #[test]
    fn truncated_stream_stops_early() {
        let input: Vec<u8> = (0..=255u8).collect();
        let packed = compress(&input);
        let truncated = &packed[..packed.len() / 2];
        let out = decompress(truncated, 4096);
        assert!(out.len() < input.len());
        assert_eq!(&out[..out.len().min(16)], &input[..out.len().min(16)]);
    }
}
