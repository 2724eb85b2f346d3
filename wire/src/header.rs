//! Packet header types and constants.

/// Size of the little-endian sequence word that opens every packet.
pub const SEQUENCE_SIZE: usize = 4;

/// Size of the qport that follows the sequence on client-to-server packets.
pub const QPORT_SIZE: usize = 2;

/// Size of the fragment header (start offset + fragment length).
pub const FRAGMENT_HEADER_SIZE: usize = 4;

/// Sequence bit marking a fragmented packet.
pub const FRAGMENT_BIT: u32 = 1 << 31;

/// Maximum payload bytes carried by one fragment.
///
/// A fragment of any other length ends its payload.
pub const FRAGMENT_SIZE: usize = 1300;

/// Maximum datagram size produced by the legacy engine.
pub const MAX_PACKETLEN: usize = 1400;

/// Which way a packet travels.
///
/// Only client-to-server packets carry a qport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    ClientToServer,
    ServerToClient,
}

impl Direction {
    /// Returns `true` if packets in this direction carry a qport.
    #[must_use]
    pub const fn has_qport(self) -> bool {
        matches!(self, Self::ClientToServer)
    }
}

/// Fragment position within a reassembled payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentHeader {
    /// Offset of this fragment in the reassembled payload.
    pub start: u16,
    /// Number of fragment bytes following the header.
    pub length: u16,
}

/// Connection packet header.
///
/// `sequence` is stored with [`FRAGMENT_BIT`] cleared; fragmentation is
/// represented by `fragment` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    /// Packet sequence number.
    pub sequence: i32,
    /// Client qport, present on client-to-server packets.
    pub qport: Option<u16>,
    /// Fragment header, present on fragmented packets.
    pub fragment: Option<FragmentHeader>,
}

impl PacketHeader {
    /// Creates a header for an unfragmented packet.
    #[must_use]
    pub const fn whole(sequence: i32, qport: Option<u16>) -> Self {
        Self {
            sequence,
            qport,
            fragment: None,
        }
    }

    /// Creates a header for one fragment of a larger payload.
    #[must_use]
    pub const fn fragment(sequence: i32, qport: Option<u16>, start: u16, length: u16) -> Self {
        Self {
            sequence,
            qport,
            fragment: Some(FragmentHeader { start, length }),
        }
    }

    /// Returns `true` if this header describes a fragment.
    #[must_use]
    pub const fn is_fragmented(&self) -> bool {
        self.fragment.is_some()
    }

    /// Returns the raw sequence word as written on the wire.
    #[must_use]
    pub const fn raw_sequence(&self) -> u32 {
        let seq = self.sequence as u32 & !FRAGMENT_BIT;
        if self.fragment.is_some() {
            seq | FRAGMENT_BIT
        } else {
            seq
        }
    }

    /// Returns the encoded header size in bytes.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        let mut len = SEQUENCE_SIZE;
        if self.qport.is_some() {
            len += QPORT_SIZE;
        }
        if self.fragment.is_some() {
            len += FRAGMENT_HEADER_SIZE;
        }
        len
    }
}

/// Reads the sequence word at the start of a datagram.
///
/// Returns the sequence with [`FRAGMENT_BIT`] cleared and whether the bit was
/// set, or `None` if the datagram is shorter than a sequence.
#[must_use]
pub fn peek_sequence(buf: &[u8]) -> Option<(i32, bool)> {
    let bytes = buf.get(..SEQUENCE_SIZE)?;
    let raw = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    Some(((raw & !FRAGMENT_BIT) as i32, raw & FRAGMENT_BIT != 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_bit_is_top_bit() {
        assert_eq!(FRAGMENT_BIT, 0x8000_0000);
    }

    #[test]
    fn fragment_fits_in_packet() {
        let largest = PacketHeader::fragment(1, Some(1), 0, FRAGMENT_SIZE as u16);
        assert!(largest.encoded_len() + FRAGMENT_SIZE < MAX_PACKETLEN);
    }

    #[test]
    fn qport_only_client_to_server() {
        assert!(Direction::ClientToServer.has_qport());
        assert!(!Direction::ServerToClient.has_qport());
    }

    #[test]
    fn raw_sequence_sets_fragment_bit() {
        let whole = PacketHeader::whole(42, None);
        assert_eq!(whole.raw_sequence(), 42);

        let frag = PacketHeader::fragment(42, None, 0, 1300);
        assert_eq!(frag.raw_sequence(), 42 | FRAGMENT_BIT);
    }

    #[test]
    fn raw_sequence_masks_caller_bit() {
        let header = PacketHeader::whole(-1, None);
        assert_eq!(header.raw_sequence(), 0x7FFF_FFFF);
    }

    #[test]
    fn encoded_len_counts_optional_parts() {
        assert_eq!(PacketHeader::whole(1, None).encoded_len(), 4);
        assert_eq!(PacketHeader::whole(1, Some(7)).encoded_len(), 6);
        assert_eq!(PacketHeader::fragment(1, None, 0, 0).encoded_len(), 8);
        assert_eq!(PacketHeader::fragment(1, Some(7), 0, 0).encoded_len(), 10);
    }

    #[test]
    fn peek_sequence_clears_flag() {
        let buf = (0x8000_0005u32).to_le_bytes();
        assert_eq!(peek_sequence(&buf), Some((5, true)));
        assert_eq!(peek_sequence(&5u32.to_le_bytes()), Some((5, false)));
        assert_eq!(peek_sequence(&[1, 2, 3]), None);
    }

    #[test]
    fn header_const_constructible() {
        const HEADER: PacketHeader = PacketHeader::whole(0, None);
        assert!(!HEADER.is_fragmented());
    }
}
