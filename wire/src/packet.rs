//! Packet encoding and decoding.

use crate::error::{DecodeError, EncodeError, LimitKind, WireResult};
use crate::header::{
    Direction, FragmentHeader, PacketHeader, FRAGMENT_HEADER_SIZE, QPORT_SIZE, SEQUENCE_SIZE,
};
use crate::limits::Limits;

/// A decoded connection packet: header plus the bytes that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirePacket<'a> {
    pub header: PacketHeader,
    pub payload: &'a [u8],
}

fn read_u16_le(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

/// Decodes a connection datagram into header and payload slice.
///
/// The payload is everything after the sequence, the qport (client-to-server
/// only) and, for fragments, the fragment header. A fragment whose declared
/// length differs from the remaining byte count is rejected.
pub fn decode_packet<'a>(
    buf: &'a [u8],
    direction: Direction,
    limits: &Limits,
) -> WireResult<WirePacket<'a>> {
    if buf.len() > limits.max_packet_bytes {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::PacketBytes,
            limit: limits.max_packet_bytes,
            actual: buf.len(),
        });
    }
    let Some((sequence, fragmented)) = crate::header::peek_sequence(buf) else {
        return Err(DecodeError::PacketTooSmall {
            actual: buf.len(),
            required: SEQUENCE_SIZE,
        });
    };

    let mut required = SEQUENCE_SIZE;
    if direction.has_qport() {
        required += QPORT_SIZE;
    }
    if fragmented {
        required += FRAGMENT_HEADER_SIZE;
    }
    if buf.len() < required {
        return Err(DecodeError::PacketTooSmall {
            actual: buf.len(),
            required,
        });
    }

    let mut offset = SEQUENCE_SIZE;
    let qport = if direction.has_qport() {
        let qport = read_u16_le(buf, offset);
        offset += QPORT_SIZE;
        Some(qport)
    } else {
        None
    };

    let fragment = if fragmented {
        let start = read_u16_le(buf, offset);
        let length = read_u16_le(buf, offset + 2);
        offset += FRAGMENT_HEADER_SIZE;
        let actual = buf.len() - offset;
        if usize::from(length) != actual {
            return Err(DecodeError::FragmentLengthMismatch {
                declared: length,
                actual,
            });
        }
        Some(FragmentHeader { start, length })
    } else {
        None
    };

    Ok(WirePacket {
        header: PacketHeader {
            sequence,
            qport,
            fragment,
        },
        payload: &buf[offset..],
    })
}

/// Encodes a packet header into the provided output buffer.
pub fn encode_header(header: &PacketHeader, out: &mut [u8]) -> Result<usize, EncodeError> {
    let needed = header.encoded_len();
    if out.len() < needed {
        return Err(EncodeError::BufferTooSmall {
            needed,
            available: out.len(),
        });
    }

    out[0..4].copy_from_slice(&header.raw_sequence().to_le_bytes());
    let mut offset = SEQUENCE_SIZE;
    if let Some(qport) = header.qport {
        out[offset..offset + 2].copy_from_slice(&qport.to_le_bytes());
        offset += QPORT_SIZE;
    }
    if let Some(fragment) = header.fragment {
        out[offset..offset + 2].copy_from_slice(&fragment.start.to_le_bytes());
        out[offset + 2..offset + 4].copy_from_slice(&fragment.length.to_le_bytes());
        offset += FRAGMENT_HEADER_SIZE;
    }

    Ok(offset)
}

/// Encodes a full datagram: header followed by `payload`.
///
/// For fragments the header's length must equal `payload.len()`.
pub fn encode_packet(header: &PacketHeader, payload: &[u8]) -> Result<Vec<u8>, EncodeError> {
    if let Some(fragment) = header.fragment {
        if usize::from(fragment.length) != payload.len() {
            return Err(EncodeError::LengthOverflow {
                length: payload.len(),
            });
        }
    }
    let mut out = vec![0u8; header.encoded_len() + payload.len()];
    let offset = encode_header(header, &mut out)?;
    out[offset..].copy_from_slice(payload);
    Ok(out)
}
