//! Per-connection pair of seeded models.

use std::sync::OnceLock;

use bitstream::{BitReader, BitWriter};

use crate::model::HuffmanModel;
use crate::seed::SEED_FREQUENCIES;

/// Returns a model seeded from [`SEED_FREQUENCIES`].
///
/// Seeding replays about a million references, so the result is computed once
/// and every caller receives its own clone.
#[must_use]
pub fn seeded_model() -> HuffmanModel {
    static SEEDED: OnceLock<HuffmanModel> = OnceLock::new();
    SEEDED
        .get_or_init(|| {
            let mut model = HuffmanModel::new();
            for (symbol, &count) in (0..=u8::MAX).zip(SEED_FREQUENCIES.iter()) {
                for _ in 0..count {
                    model.add_ref(symbol);
                }
            }
            model
        })
        .clone()
}

/// The compressor/decompressor model pair owned by one connection.
///
/// Message writes go through the compressor and message reads through the
/// decompressor. Both start from the same seeded state. A context must never
/// be shared between connections.
#[derive(Debug, Clone)]
pub struct HuffmanContext {
    compressor: HuffmanModel,
    decompressor: HuffmanModel,
}

impl Default for HuffmanContext {
    fn default() -> Self {
        Self::new()
    }
}

impl HuffmanContext {
    /// Creates a freshly seeded pair.
    #[must_use]
    pub fn new() -> Self {
        Self {
            compressor: seeded_model(),
            decompressor: seeded_model(),
        }
    }

    /// Returns the model used for writing.
    #[must_use]
    pub const fn compressor(&self) -> &HuffmanModel {
        &self.compressor
    }

    /// Returns the model used for reading.
    #[must_use]
    pub const fn decompressor(&self) -> &HuffmanModel {
        &self.decompressor
    }

    /// Writes one byte through the compressor.
    pub fn transmit(&self, symbol: u8, writer: &mut BitWriter<'_>) {
        self.compressor.transmit(symbol, writer);
    }

    /// Reads one byte through the decompressor.
    pub fn receive(&self, reader: &mut BitReader<'_>) -> u8 {
        self.decompressor.receive(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_model_knows_every_byte() {
        let model = seeded_model();
        assert!((0..=u8::MAX).all(|s| model.contains(s)));
        assert_eq!(u64::from(model.total_weight()), 1_053_340);
        assert!(model.is_consistent());
    }

    #[test]
    fn seeded_weights_match_table() {
        let model = seeded_model();
        assert_eq!(model.weight(0), Some(SEED_FREQUENCIES[0]));
        assert_eq!(model.weight(255), Some(SEED_FREQUENCIES[255]));
    }

    #[test]
    fn pair_is_symmetric() {
        let ctx = HuffmanContext::new();
        let input: Vec<u8> = (0..=u8::MAX).chain([0, 0, 7, 255]).collect();
        let mut buf = vec![0u8; input.len() * 4];
        let mut writer = BitWriter::new(&mut buf);
        for &b in &input {
            ctx.transmit(b, &mut writer);
        }
        let end = writer.position();

        let mut reader = BitReader::new(&buf);
        let output: Vec<u8> = input.iter().map(|_| ctx.receive(&mut reader)).collect();
        assert_eq!(output, input);
        assert_eq!(reader.position(), end);
    }

    #[test]
    fn zero_byte_has_shortest_code() {
        let ctx = HuffmanContext::new();
        let mut buf = [0u8; 8];
        let mut writer = BitWriter::new(&mut buf);
        ctx.transmit(0, &mut writer);
        let zero_len = writer.position();

        let mut buf = [0u8; 8];
        let mut writer = BitWriter::new(&mut buf);
        ctx.transmit(0x7F, &mut writer);
        assert!(zero_len < writer.position());
    }

    fn code_of(ctx: &HuffmanContext, symbol: u8) -> (usize, u32) {
        let mut buf = [0u8; 4];
        let mut writer = BitWriter::new(&mut buf);
        ctx.transmit(symbol, &mut writer);
        let len = writer.position();
        (len, u32::from_le_bytes(buf))
    }

    #[test]
    fn seeded_codes_are_pinned() {
        let ctx = HuffmanContext::new();
        // Root-to-leaf paths, first edge in bit 0.
        assert_eq!(code_of(&ctx, 0x00), (2, 0b10));
        assert_eq!(code_of(&ctx, 0x01), (5, 0b1_1011));
        assert_eq!(code_of(&ctx, 0x41), (7, 0b101_0000));
        assert_eq!(code_of(&ctx, 0xF7), (11, 0b101_0000_0000));
        assert_eq!(code_of(&ctx, 0xFF), (6, 0b10_0100));
    }

    #[test]
    fn contexts_are_independent_copies() {
        let a = HuffmanContext::new();
        let mut b = a.clone();
        b.compressor.add_ref(1);
        assert_ne!(a.compressor().weight(1), b.compressor().weight(1));
        assert_eq!(a.decompressor().weight(1), b.decompressor().weight(1));
    }
}
