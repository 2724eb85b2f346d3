//! Huffman-coded message buffer.

use bitstream::{BitReader, BitWriter};
use huffman::HuffmanContext;

/// Longest string accepted by [`MessageCodec::read_string`].
pub const MAX_BIG_STRING: usize = 8192;

/// Masks the low `bits` bits (`bits` in `1..=32`).
pub(crate) const fn bit_mask(bits: u32) -> u32 {
    if bits >= 32 {
        u32::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Snapshot of a message's cursor, for save/peek/restore.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageState {
    pub bit: usize,
    pub readcount: usize,
    pub cursize: usize,
    pub max_size: usize,
    pub overflowed: bool,
}

/// A message buffer whose bytes travel through a connection's Huffman models.
///
/// Each `write_bits` call emits the `|bits| % 8` low bits raw and every
/// remaining byte through the compressor; reads mirror this through the
/// decompressor. The codec never fails:
/// - A write with fewer than 4 bytes of capacity left sets the sticky
///   overflow flag and is dropped.
/// - `read_byte`, `read_short` and `read_long` return `-1` (and `read_float`
///   returns `-1.0`) once the read count passes the logical size.
#[derive(Debug, Clone)]
pub struct MessageCodec<'h> {
    huffman: &'h HuffmanContext,
    data: Vec<u8>,
    bit: usize,
    readcount: usize,
    cursize: usize,
    max_size: usize,
    overflowed: bool,
}

impl<'h> MessageCodec<'h> {
    /// Creates an empty message for writing with `capacity` bytes.
    #[must_use]
    pub fn new(huffman: &'h HuffmanContext, capacity: usize) -> Self {
        Self {
            huffman,
            data: vec![0; capacity],
            bit: 0,
            readcount: 0,
            cursize: 0,
            max_size: capacity,
            overflowed: false,
        }
    }

    /// Wraps received bytes for reading.
    #[must_use]
    pub fn from_bytes(huffman: &'h HuffmanContext, bytes: &[u8]) -> Self {
        Self::from_vec(huffman, bytes.to_vec())
    }

    /// Wraps an owned buffer for reading.
    #[must_use]
    pub fn from_vec(huffman: &'h HuffmanContext, data: Vec<u8>) -> Self {
        let len = data.len();
        Self {
            huffman,
            data,
            bit: 0,
            readcount: 0,
            cursize: len,
            max_size: len,
            overflowed: false,
        }
    }

    /// Returns the Huffman context this message codes through.
    #[must_use]
    pub const fn huffman(&self) -> &'h HuffmanContext {
        self.huffman
    }

    /// Returns the logical contents (`cursize` bytes).
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data[..self.cursize.min(self.data.len())]
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        let len = self.cursize.min(self.data.len());
        &mut self.data[..len]
    }

    /// Consumes the message, returning its logical contents.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        let len = self.cursize.min(self.data.len());
        self.data.truncate(len);
        self.data
    }

    #[must_use]
    pub const fn cursize(&self) -> usize {
        self.cursize
    }

    #[must_use]
    pub const fn readcount(&self) -> usize {
        self.readcount
    }

    #[must_use]
    pub const fn bit(&self) -> usize {
        self.bit
    }

    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns `true` once any write has been dropped for lack of space.
    #[must_use]
    pub const fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Rewinds the read cursor to the start of the message.
    pub fn begin_reading(&mut self) {
        self.bit = 0;
        self.readcount = 0;
    }

    #[must_use]
    pub const fn save_state(&self) -> MessageState {
        MessageState {
            bit: self.bit,
            readcount: self.readcount,
            cursize: self.cursize,
            max_size: self.max_size,
            overflowed: self.overflowed,
        }
    }

    pub fn restore_state(&mut self, state: MessageState) {
        self.bit = state.bit;
        self.readcount = state.readcount;
        self.cursize = state.cursize;
        self.max_size = state.max_size;
        self.overflowed = state.overflowed;
    }

    const fn read_past_end(&self) -> bool {
        self.readcount > self.cursize
    }

    // Writing

    /// Writes the low `|bits|` bits of `value` (`bits` in `1..=32` or
    /// `-32..=-1`; the sign only matters when reading).
    pub fn write_bits(&mut self, value: i32, bits: i32) {
        if self.max_size.saturating_sub(self.cursize) < 4 {
            self.overflowed = true;
            return;
        }

        let bits = bits.unsigned_abs().min(32);
        if bits == 0 {
            return;
        }

        let mut value = value as u32 & bit_mask(bits);
        let raw = bits & 7;
        let mut writer = BitWriter::at(&mut self.data, self.bit);
        writer.write_bits_lsb(value, raw);
        value >>= raw;
        for _ in 0..(bits - raw) / 8 {
            self.huffman.transmit((value & 0xFF) as u8, &mut writer);
            value >>= 8;
        }
        self.bit = writer.position();
        self.cursize = (self.bit >> 3) + 1;
        // Coded bytes can outgrow the four-byte margin; the tail was dropped.
        if self.bit > self.data.len() * 8 {
            self.overflowed = true;
        }
    }

    pub fn write_bit(&mut self, bit: i32) {
        self.write_bits(bit & 1, 1);
    }

    pub fn write_byte(&mut self, value: i32) {
        self.write_bits(value, 8);
    }

    pub fn write_short(&mut self, value: i32) {
        self.write_bits(value, 16);
    }

    pub fn write_long(&mut self, value: i32) {
        self.write_bits(value, 32);
    }

    pub fn write_float(&mut self, value: f32) {
        self.write_bits(value.to_bits() as i32, 32);
    }

    /// Writes each byte through [`write_byte`](Self::write_byte).
    pub fn write_data(&mut self, data: &[u8]) {
        for &byte in data {
            self.write_byte(i32::from(byte));
        }
    }

    /// Writes `s` followed by a NUL terminator.
    pub fn write_string(&mut self, s: &[u8]) {
        self.write_data(s);
        self.write_byte(0);
    }

    // Reading

    /// Reads `|bits|` bits; a negative `bits` sign-extends the result.
    pub fn read_bits(&mut self, bits: i32) -> i32 {
        let signed = bits < 0;
        let bits = bits.unsigned_abs().min(32);
        if bits == 0 {
            return 0;
        }

        let raw = bits & 7;
        let mut reader = BitReader::at(&self.data, self.bit);
        let mut value = reader.read_bits_lsb(raw);
        let mut shift = raw;
        while shift < bits {
            let byte = self.huffman.receive(&mut reader);
            value |= u32::from(byte) << shift;
            shift += 8;
        }
        self.bit = reader.position();
        self.readcount = (self.bit >> 3) + 1;

        if signed && bits < 32 && value & (1 << (bits - 1)) != 0 {
            value |= !bit_mask(bits);
        }
        value as i32
    }

    pub fn read_bit(&mut self) -> i32 {
        self.read_bits(1)
    }

    /// Reads an unsigned byte, or `-1` past the end.
    pub fn read_byte(&mut self) -> i32 {
        let c = self.read_bits(8);
        if self.read_past_end() {
            return -1;
        }
        c
    }

    /// Reads a sign-extended byte, or `-1` past the end.
    pub fn read_signed_byte(&mut self) -> i32 {
        let c = i32::from(self.read_bits(8) as u8 as i8);
        if self.read_past_end() {
            return -1;
        }
        c
    }

    /// Reads a sign-extended short, or `-1` past the end.
    pub fn read_short(&mut self) -> i32 {
        let c = i32::from(self.read_bits(16) as u16 as i16);
        if self.read_past_end() {
            return -1;
        }
        c
    }

    /// Reads an unsigned short (`0xFFFF` past the end).
    pub fn read_ushort(&mut self) -> u16 {
        self.read_short() as u16
    }

    /// Reads a long, or `-1` past the end.
    pub fn read_long(&mut self) -> i32 {
        let c = self.read_bits(32);
        if self.read_past_end() {
            return -1;
        }
        c
    }

    /// Reads a float, or `-1.0` past the end.
    pub fn read_float(&mut self) -> f32 {
        let c = self.read_bits(32);
        if self.read_past_end() {
            return -1.0;
        }
        f32::from_bits(c as u32)
    }

    /// Fills `out` through [`read_byte`](Self::read_byte).
    pub fn read_data(&mut self, out: &mut [u8]) {
        for byte in out {
            *byte = self.read_byte() as u8;
        }
    }

    /// Reads a NUL-terminated string of at most [`MAX_BIG_STRING`] bytes.
    ///
    /// Stops at NUL, at the end of the message and, when `break_on_newline`
    /// is set, at `\n`. The terminator is consumed but not returned. With
    /// `translate_percent`, `%` is returned as `.`.
    pub fn read_string(&mut self, break_on_newline: bool, translate_percent: bool) -> Vec<u8> {
        let mut out = Vec::new();
        while out.len() < MAX_BIG_STRING {
            let c = self.read_byte();
            if c == -1 || c == 0 || (break_on_newline && c == i32::from(b'\n')) {
                break;
            }
            let c = c as u8;
            out.push(if translate_percent && c == b'%' { b'.' } else { c });
        }
        out
    }

    /// Reads a string that also ends at a newline.
    pub fn read_string_line(&mut self, translate_percent: bool) -> Vec<u8> {
        self.read_string(true, translate_percent)
    }

    /// Reads the next long without moving the cursor.
    pub fn peek_long(&mut self) -> i32 {
        let state = self.save_state();
        let value = self.read_long();
        self.restore_state(state);
        value
    }

    // Out of band

    /// Writes 8, 16 or 32 bits as raw little-endian bytes at `cursize`.
    ///
    /// Other widths are ignored.
    pub fn write_oob(&mut self, value: i32, bits: u32) {
        let len = match bits {
            8 | 16 | 32 => (bits / 8) as usize,
            _ => return,
        };
        let Some(dst) = self.data.get_mut(self.cursize..self.cursize + len) else {
            self.overflowed = true;
            return;
        };
        dst.copy_from_slice(&value.to_le_bytes()[..len]);
        self.cursize += len;
        self.bit += len * 8;
    }

    /// Reads 8, 16 or 32 raw little-endian bits at `readcount`,
    /// sign-extended. Yields `-1` past the end or for other widths.
    pub fn read_oob(&mut self, bits: u32) -> i32 {
        let len = match bits {
            8 | 16 | 32 => (bits / 8) as usize,
            _ => return -1,
        };
        let value = match self.data.get(self.readcount..self.readcount + len) {
            Some(&[b]) => i32::from(b as i8),
            Some(&[b0, b1]) => i32::from(i16::from_le_bytes([b0, b1])),
            Some(&[b0, b1, b2, b3]) => i32::from_le_bytes([b0, b1, b2, b3]),
            _ => -1,
        };
        self.readcount += len;
        self.bit += len * 8;
        value
    }

    /// Reads a raw little-endian long at `readcount` without moving.
    #[must_use]
    pub fn peek_long_oob(&self) -> i32 {
        match self.data.get(self.readcount..self.readcount + 4) {
            Some(&[b0, b1, b2, b3]) => i32::from_le_bytes([b0, b1, b2, b3]),
            _ => -1,
        }
    }

    // Deltas

    /// Writes bit 0 when unchanged, else bit 1 and `new` in `bits` bits.
    pub fn write_delta(&mut self, old: i32, new: i32, bits: i32) {
        if old == new {
            self.write_bit(0);
            return;
        }
        self.write_bit(1);
        self.write_bits(new, bits);
    }

    pub fn read_delta(&mut self, old: i32, bits: i32) -> i32 {
        if self.read_bit() != 0 {
            return self.read_bits(bits);
        }
        old
    }

    /// Like [`write_delta`](Self::write_delta) with the value XORed by `key`.
    pub fn write_delta_key(&mut self, key: i32, old: i32, new: i32, bits: i32) {
        if old == new {
            self.write_bit(0);
            return;
        }
        self.write_bit(1);
        let mask = bit_mask(bits.unsigned_abs());
        self.write_bits(((new ^ key) as u32 & mask) as i32, bits);
    }

    pub fn read_delta_key(&mut self, key: i32, old: i32, bits: i32) -> i32 {
        if self.read_bit() != 0 {
            let mask = bit_mask(bits.unsigned_abs());
            return self.read_bits(bits) ^ ((key as u32 & mask) as i32);
        }
        old
    }

    /// Sends the raw float pattern through `write_long` when it compares
    /// unequal (so `0.0` and `-0.0` count as unchanged).
    #[allow(clippy::float_cmp)]
    pub fn write_delta_float(&mut self, old: f32, new: f32) {
        if old == new {
            self.write_bit(0);
            return;
        }
        self.write_bit(1);
        self.write_long(new.to_bits() as i32);
    }

    pub fn read_delta_float(&mut self, old: f32) -> f32 {
        if self.read_bit() != 0 {
            return f32::from_bits(self.read_long() as u32);
        }
        old
    }

    #[allow(clippy::float_cmp)]
    pub fn write_delta_key_float(&mut self, key: i32, old: f32, new: f32) {
        if old == new {
            self.write_bit(0);
            return;
        }
        self.write_bit(1);
        self.write_long(new.to_bits() as i32 ^ key);
    }

    pub fn read_delta_key_float(&mut self, key: i32, old: f32) -> f32 {
        if self.read_bit() != 0 {
            return f32::from_bits((self.read_long() ^ key) as u32);
        }
        old
    }
}
