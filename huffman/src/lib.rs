//! Adaptive Huffman coding for the jkanet protocol codec.
//!
//! The protocol compresses every message byte with an adaptive Huffman tree
//! (the FGK variant used by Quake3 engines). This crate provides:
//!
//! - [`HuffmanModel`], the tree itself, with `add_ref`, `transmit`, `receive`.
//! - [`HuffmanContext`], the compressor/decompressor pair owned by a connection,
//!   both seeded from [`SEED_FREQUENCIES`].
//! - [`compress`]/[`decompress`], standalone adaptive block coding that starts
//!   from an empty model.
//!
//! # Design Principles
//!
//! - **Wire compatibility first** - Tree updates follow the legacy node
//!   ordering exactly; any deviation desynchronizes peers.
//! - **Index arena** - Nodes live in a fixed-capacity `Vec` and link to each
//!   other by index. No unsafe code, no reference counting.
//! - **Static during messaging** - Seeded contexts are never updated by
//!   message traffic, so the encoder and decoder stay in lockstep without
//!   coordination.
//!
//! # Example
//!
//! ```
//! use bitstream::{BitReader, BitWriter};
//! use huffman::HuffmanContext;
//!
//! let ctx = HuffmanContext::new();
//! let mut buf = [0u8; 16];
//! let mut writer = BitWriter::new(&mut buf);
//! for &b in b"jka" {
//!     ctx.transmit(b, &mut writer);
//! }
//!
//! let mut reader = BitReader::new(&buf);
//! let decoded: Vec<u8> = (0..3).map(|_| ctx.receive(&mut reader)).collect();
//! assert_eq!(decoded, b"jka");
//! ```

mod compress;
mod context;
mod model;
mod seed;

pub use compress::{compress, decompress, LENGTH_PREFIX};
pub use context::{seeded_model, HuffmanContext};
pub use model::{HuffmanModel, INTERNAL_NODE, MAX_NODES, NYT};
pub use seed::SEED_FREQUENCIES;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = HuffmanModel::new();
        let _ = HuffmanContext::default();
        let _ = SEED_FREQUENCIES.len();
        assert_eq!(NYT, 256);
        assert_eq!(INTERNAL_NODE, 257);
        assert_eq!(MAX_NODES, 513);
        assert_eq!(LENGTH_PREFIX, 2);
    }

    #[test]
    fn compress_uses_empty_model_not_seeded() {
        // A single byte on an empty model is a bare 8-bit literal.
        let packed = compress(&[0xA5]);
        assert_eq!(packed, vec![0x00, 0x01, 0xA5u8.reverse_bits(), 0x00]);
    }
}
