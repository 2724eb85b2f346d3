//! Message and delta coding for the jkanet protocol codec.
//!
//! This is the main codec crate that ties together bitstream, huffman, wire
//! and schema:
//!
//! # Features
//!
//! - [`MessageCodec`]: Huffman-coded message primitives, strings, raw
//!   out-of-band words and delta helpers
//! - Entity and player-state delta compression driven by the schema tables
//! - Plain and keyed usercmd deltas
//! - [`Netchan`]: sequencing, fragmentation and obfuscation of connected
//!   messages
//! - [`Connection`]: the client handshake state machine
//!
//! # Design Principles
//!
//! - **Bit-exact** - Every primitive reproduces the legacy wire layout,
//!   including its lossy corners.
//! - **Legacy leniency inside** - Message reads past the end yield sentinels
//!   and writes past capacity set a sticky flag. Only framing and sequencing
//!   problems surface as [`CodecError`].
//! - **Per-connection models** - Each connection owns a
//!   [`huffman::HuffmanContext`] and lends it to the messages it codes.
//!
//! # Example
//!
//! ```
//! use codec::MessageCodec;
//! use huffman::HuffmanContext;
//!
//! let ctx = HuffmanContext::new();
//! let mut msg = MessageCodec::new(&ctx, 64);
//! msg.write_long(1234);
//! msg.write_string(b"hello");
//!
//! let mut reader = MessageCodec::from_bytes(&ctx, msg.data());
//! assert_eq!(reader.read_long(), 1234);
//! assert_eq!(reader.read_string(false, false), b"hello");
//! ```

mod connection;
mod delta;
mod error;
mod limits;
mod message;
mod netchan;
mod state;
mod usercmd;

pub use connection::{Connection, ConnectionEvent, ConnectionState};
pub use error::{CodecError, CodecResult, LimitKind};
pub use limits::{CodecLimits, MAX_MSGLEN};
pub use message::{MessageCodec, MessageState, MAX_BIG_STRING};
pub use netchan::{IncomingPacket, Netchan, NetchanConfig, Preamble, Side};
pub use state::{ProtocolState, MAX_RELIABLE_COMMANDS};
pub use usercmd::{hash_key, usercmd_key};
pub use wire::Limits as WireLimits;

#[cfg(test)]
mod tests {
    use super::*;
    use huffman::HuffmanContext;

    #[test]
    fn public_api_exports() {
        let _ = WireLimits::default();
        let _ = CodecLimits::default();
        let _ = ProtocolState::default();
        let _ = MessageState::default();
        let _ = Connection::new(NetchanConfig::new(Side::Client));
        let _: CodecResult<()> = Ok(());
        assert_eq!(MAX_MSGLEN, 49_152);
        assert_eq!(MAX_BIG_STRING, 8192);
        assert_eq!(MAX_RELIABLE_COMMANDS, 128);
    }

    #[test]
    fn doctest_example() {
        let ctx = HuffmanContext::new();
        let mut msg = MessageCodec::new(&ctx, 64);
        msg.write_long(1234);
        msg.write_string(b"hello");

        let mut reader = MessageCodec::from_bytes(&ctx, msg.data());
        assert_eq!(reader.read_long(), 1234);
        assert_eq!(reader.read_string(false, false), b"hello");
    }
}
