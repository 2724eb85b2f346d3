//! Bit-level reader over a borrowed byte buffer.

/// A bit-level reader for decoding legacy packed data.
///
/// Bits are addressed least-significant-first within each byte. Positions past
/// the end of the buffer read as zero bits; the reader never panics and leaves
/// size enforcement to its owner.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a reader positioned at bit 0.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Creates a reader positioned at an explicit bit offset.
    #[must_use]
    pub const fn at(data: &'a [u8], pos: usize) -> Self {
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

    /// Moves the cursor forward by `bits`.
    pub fn advance(&mut self, bits: usize) {
        self.pos = self.pos.saturating_add(bits);
    }

    /// Returns the number of addressable bits in the underlying buffer.
    #[must_use]
    pub const fn len_bits(&self) -> usize {
        self.data.len().saturating_mul(8)
    }

    /// Returns the number of bits between the cursor and the end of the buffer.
    #[must_use]
    pub const fn bits_remaining(&self) -> usize {
        self.len_bits().saturating_sub(self.pos)
    }

    /// Returns the underlying buffer.
    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Reads the bit under the cursor without advancing.
    #[must_use]
    pub fn peek_bit(&self) -> u8 {
        let byte = self.data.get(self.pos >> 3).copied().unwrap_or(0);
        (byte >> (self.pos & 7)) & 1
    }

    /// Reads the bit under the cursor and advances by one.
    pub fn get_bit(&mut self) -> u8 {
        let bit = self.peek_bit();
        self.advance(1);
        bit
    }

    /// Reads `bits` raw bits, first bit read landing in bit 0 of the result.
    ///
    /// At most 32 bits are read.
    pub fn read_bits_lsb(&mut self, bits: u32) -> u32 {
        let mut value = 0u32;
        for i in 0..bits.min(32) {
            value |= u32::from(self.get_bit()) << i;
        }
        value
    }

    /// Reads `bits` raw bits, first bit read becoming the most significant.
    ///
    /// At most 32 bits are read.
    pub fn read_bits_msb(&mut self, bits: u32) -> u32 {
        let mut value = 0u32;
        for _ in 0..bits.min(32) {
            value = (value << 1) | u32::from(self.get_bit());
        }
        value
    }
}
