//! Bit-level writer over a caller-provided byte buffer.

/// A bit-level writer for encoding legacy packed data.
///
/// Bits are written least-significant-first within each byte. A byte is
/// zeroed when the cursor enters it at a byte-aligned position, so the buffer
/// does not need to be cleared up front. Bits that fall outside the buffer are
/// dropped; the owner is responsible for staying within capacity.
#[derive(Debug)]
pub struct BitWriter<'a> {
    data: &'a mut [u8],
    pos: usize,
}

impl<'a> BitWriter<'a> {
    /// Creates a writer positioned at bit 0.
    #[must_use]
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Creates a writer positioned at an explicit bit offset.
    #[must_use]
    pub fn at(data: &'a mut [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    /// Returns the current bit position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor to an absolute bit position.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Moves the cursor forward by `bits` without writing.
    pub fn advance(&mut self, bits: usize) {
        self.pos = self.pos.saturating_add(bits);
    }

    /// Returns the buffer capacity in bits.
    #[must_use]
    pub fn capacity_bits(&self) -> usize {
        self.data.len().saturating_mul(8)
    }

    /// Returns the number of bytes touched so far (rounded up).
    #[must_use]
    pub const fn bytes_written(&self) -> usize {
        self.pos.div_ceil(8)
    }

    /// Writes a single bit (only the lowest bit of `bit` is used) and advances.
    pub fn put_bit(&mut self, bit: u8) {
        let shift = self.pos & 7;
        if let Some(byte) = self.data.get_mut(self.pos >> 3) {
            if shift == 0 {
                *byte = 0;
            }
            *byte |= (bit & 1) << shift;
        }
        self.advance(1);
    }

    /// Writes the low `bits` bits of `value`, bit 0 first.
    ///
    /// At most 32 bits are written.
    pub fn write_bits_lsb(&mut self, value: u32, bits: u32) {
        for i in 0..bits.min(32) {
            self.put_bit(((value >> i) & 1) as u8);
        }
    }

    /// Writes the low `bits` bits of `value`, most significant first.
    ///
    /// At most 32 bits are written.
    pub fn write_bits_msb(&mut self, value: u32, bits: u32) {
        for i in (0..bits.min(32)).rev() {
            self.put_bit(((value >> i) & 1) as u8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writer() {
        let mut buf = [];
        let writer = BitWriter::new(&mut buf);
        assert_eq!(writer.position(), 0);
        assert_eq!(writer.capacity_bits(), 0);
        assert_eq!(writer.bytes_written(), 0);
    }

    #[test]
    fn put_bit_lsb_first() {
        let mut buf = [0u8; 1];
        let mut writer = BitWriter::new(&mut buf);
        writer.put_bit(1);
        writer.put_bit(0);
        writer.put_bit(1);
        assert_eq!(writer.bytes_written(), 1);
        assert_eq!(buf, [0b0000_0101]);
    }

    #[test]
    fn aligned_write_clears_stale_byte() {
        let mut buf = [0xFFu8; 2];
        let mut writer = BitWriter::new(&mut buf);
        writer.put_bit(0);
        assert_eq!(buf[0], 0);
        assert_eq!(buf[1], 0xFF, "untouched byte keeps its contents");
    }

    #[test]
    fn unaligned_write_preserves_earlier_bits() {
        let mut buf = [0u8; 1];
        let mut writer = BitWriter::at(&mut buf, 0);
        writer.put_bit(1);
        writer.set_position(7);
        writer.put_bit(1);
        assert_eq!(buf, [0b1000_0001]);
    }

    #[test]
    fn writes_past_end_are_dropped() {
        let mut buf = [0u8; 1];
        let mut writer = BitWriter::at(&mut buf, 8);
        writer.write_bits_lsb(0xFFFF, 16);
        assert_eq!(writer.position(), 24);
        assert_eq!(buf, [0]);
    }

    #[test]
    fn write_lsb_multibyte() {
        let mut buf = [0u8; 2];
        let mut writer = BitWriter::new(&mut buf);
        writer.write_bits_lsb(0xABCD, 16);
        assert_eq!(buf, [0xCD, 0xAB]);
    }

    #[test]
    fn write_msb_literal() {
        let mut buf = [0u8; 1];
        let mut writer = BitWriter::new(&mut buf);
        writer.write_bits_msb(0xA5, 8);
        assert_eq!(buf, [0xA5u8.reverse_bits()]);
    }

    #[test]
    fn advance_skips_bits() {
        let mut buf = [0u8; 2];
        let mut writer = BitWriter::new(&mut buf);
        writer.advance(8);
        writer.put_bit(1);
        assert_eq!(writer.bytes_written(), 2);
        assert_eq!(buf, [0, 1]);
    }
}
