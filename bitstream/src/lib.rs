//! Bit cursor primitives for the jkanet protocol codec.
//!
//! This crate provides [`BitReader`] and [`BitWriter`], bit-addressable views
//! over byte buffers that match the legacy Quake3 bit order: bits are packed
//! least-significant-first within each byte.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Lenient bounds** - Out-of-range reads yield zero bits and out-of-range
//!   writes are dropped. The owner of the buffer enforces limits.
//! - **No domain knowledge** - This crate knows nothing about Huffman coding,
//!   messages, or game records.
//! - **Explicit positions** - Cursors can be created at, moved to, and queried
//!   for any bit offset, enabling save/peek/restore by the caller.
//!
//! # Example
//!
//! ```
//! use bitstream::{BitReader, BitWriter};
//!
//! let mut buf = [0u8; 4];
//! let mut writer = BitWriter::new(&mut buf);
//! writer.put_bit(1);
//! writer.write_bits_lsb(42, 7);
//! let end = writer.position();
//!
//! let mut reader = BitReader::new(&buf);
//! assert_eq!(reader.get_bit(), 1);
//! assert_eq!(reader.read_bits_lsb(7), 42);
//! assert_eq!(reader.position(), end);
//! ```

mod reader;
mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;
