//! Packet framing for the jkanet codec.
//!
//! This crate handles the connection packet layout: the sequence word and its
//! fragment flag, the client qport, fragment headers, fragment reassembly and
//! the rolling XOR applied to message bodies. It knows nothing about Huffman
//! coding or game records.
//!
//! # Design Principles
//!
//! - **Legacy layout** - Little-endian sequence, top bit flags fragments,
//!   2-byte qport on client packets, 2-byte start and length per fragment.
//! - **Bounded decoding** - Datagram and reassembly sizes are checked against
//!   [`Limits`].
//! - **Silent leniency** - Out-of-order fragments are dropped without error;
//!   only structural damage surfaces as [`DecodeError`].

mod error;
mod fragment;
mod header;
mod limits;
pub mod obfuscate;
mod packet;

pub use error::{DecodeError, EncodeError, LimitKind, WireResult};
pub use fragment::{split_fragments, Fragment, FragmentAssembler};
pub use header::{
    peek_sequence, Direction, FragmentHeader, PacketHeader, FRAGMENT_BIT, FRAGMENT_HEADER_SIZE,
    FRAGMENT_SIZE, MAX_PACKETLEN, QPORT_SIZE, SEQUENCE_SIZE,
};
pub use limits::Limits;
pub use packet::{decode_packet, encode_header, encode_packet, WirePacket};
