//! Sequenced, fragmenting, obfuscating message channel.

use huffman::HuffmanContext;
use tracing::{trace, warn};
use wire::obfuscate::{
    client_message_key, server_message_key, xor_stream, CL_DECODE_START, SV_DECODE_START,
};
use wire::{Direction, FragmentAssembler, Limits, PacketHeader, FRAGMENT_SIZE};

use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::CodecLimits;
use crate::message::MessageCodec;
use crate::state::ProtocolState;

/// Which end of the connection a netchan runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Client,
    Server,
}

impl Side {
    /// Direction of packets this side receives.
    #[must_use]
    pub const fn incoming(self) -> Direction {
        match self {
            Self::Client => Direction::ServerToClient,
            Self::Server => Direction::ClientToServer,
        }
    }

    /// Direction of packets this side sends.
    #[must_use]
    pub const fn outgoing(self) -> Direction {
        match self {
            Self::Client => Direction::ClientToServer,
            Self::Server => Direction::ServerToClient,
        }
    }
}

/// Netchan configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetchanConfig {
    pub side: Side,
    /// Port tag written into client packets.
    pub qport: u16,
    pub wire_limits: Limits,
    pub codec_limits: CodecLimits,
}

impl NetchanConfig {
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self {
            side,
            qport: 0,
            wire_limits: Limits::default(),
            codec_limits: CodecLimits::default(),
        }
    }

    #[must_use]
    pub const fn with_qport(mut self, qport: u16) -> Self {
        self.qport = qport;
        self
    }
}

/// The plaintext longs at the start of every connected message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preamble {
    /// Server to client: the last client command the server received.
    FromServer { reliable_ack: i32 },
    /// Client to server.
    FromClient {
        server_id: i32,
        message_ack: i32,
        reliable_ack: i32,
    },
}

impl Preamble {
    #[must_use]
    pub const fn reliable_ack(&self) -> i32 {
        match *self {
            Self::FromServer { reliable_ack } | Self::FromClient { reliable_ack, .. } => {
                reliable_ack
            }
        }
    }
}

/// A de-obfuscated message, positioned just after its preamble.
#[derive(Debug)]
pub struct IncomingPacket<'h> {
    pub sequence: i32,
    pub preamble: Preamble,
    pub message: MessageCodec<'h>,
}

/// Reads the preamble for `direction` and applies the rolling XOR to the
/// rest of the message in place.
///
/// The preamble is read before the XOR is applied, so it must be read from
/// the same bytes on both ends.
fn read_preamble_and_xor(
    message: &mut MessageCodec<'_>,
    direction: Direction,
    sequence: i32,
    state: &ProtocolState,
) -> Preamble {
    let (preamble, start, key, key_string) = match direction {
        Direction::ServerToClient => {
            let reliable_ack = message.read_long();
            (
                Preamble::FromServer { reliable_ack },
                CL_DECODE_START,
                server_message_key(state.challenge(), sequence),
                state.reliable_command(reliable_ack),
            )
        }
        Direction::ClientToServer => {
            let server_id = message.read_long();
            let message_ack = message.read_long();
            let reliable_ack = message.read_long();
            (
                Preamble::FromClient {
                    server_id,
                    message_ack,
                    reliable_ack,
                },
                SV_DECODE_START,
                client_message_key(state.challenge(), server_id, message_ack),
                state.server_command(reliable_ack),
            )
        }
    };

    if let Some(body) = message.data_mut().get_mut(start..) {
        xor_stream(body, key, key_string);
    }
    preamble
}

/// One end of a connected channel.
///
/// Tracks the last incoming and next outgoing sequence, reassembles
/// fragmented payloads, and applies the legacy obfuscation keyed by the
/// [`ProtocolState`].
#[derive(Debug, Clone)]
pub struct Netchan {
    config: NetchanConfig,
    state: ProtocolState,
    incoming_sequence: i32,
    outgoing_sequence: i32,
    assembler: FragmentAssembler,
}

impl Netchan {
    #[must_use]
    pub fn new(config: NetchanConfig, challenge: i32) -> Self {
        let assembler = FragmentAssembler::new(&config.wire_limits);
        Self {
            config,
            state: ProtocolState::new(challenge),
            incoming_sequence: 0,
            outgoing_sequence: 0,
            assembler,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &NetchanConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> &ProtocolState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ProtocolState {
        &mut self.state
    }

    #[must_use]
    pub const fn challenge(&self) -> i32 {
        self.state.challenge()
    }

    /// Sequence of the last accepted incoming packet.
    #[must_use]
    pub const fn incoming_sequence(&self) -> i32 {
        self.incoming_sequence
    }

    /// Lowest sequence the next outgoing packet may use.
    #[must_use]
    pub const fn outgoing_sequence(&self) -> i32 {
        self.outgoing_sequence
    }

    /// Clears sequences, fragments and command history.
    pub fn reset(&mut self, challenge: i32) {
        self.state.reset(challenge);
        self.incoming_sequence = 0;
        self.outgoing_sequence = 0;
        self.assembler.reset();
    }

    /// Marks the channel as connected; the first packet after the connect
    /// handshake carries sequence 1.
    pub fn set_initial_connected_state(&mut self) {
        self.outgoing_sequence = 1;
    }

    /// Processes one received datagram.
    ///
    /// Returns `Ok(None)` for a fragment that does not complete a payload and
    /// for a packet no newer than the last one accepted.
    pub fn process_incoming<'h>(
        &mut self,
        datagram: &[u8],
        huffman: &'h HuffmanContext,
    ) -> CodecResult<Option<IncomingPacket<'h>>> {
        let direction = self.config.side.incoming();
        let packet = wire::decode_packet(datagram, direction, &self.config.wire_limits)?;
        let sequence = packet.header.sequence;

        let payload = match packet.header.fragment {
            Some(fragment) => {
                let Some(payload) =
                    self.assembler
                        .process_fragment(packet.payload, fragment.start, sequence)
                else {
                    return Ok(None);
                };
                payload
            }
            None => packet.payload.to_vec(),
        };

        if sequence <= self.incoming_sequence {
            trace!(
                sequence,
                last = self.incoming_sequence,
                "dropping duplicate or stale packet"
            );
            return Ok(None);
        }

        let limit = self.config.codec_limits.max_message_bytes;
        if payload.len() > limit {
            return Err(CodecError::LimitsExceeded {
                kind: LimitKind::MessageBytes,
                limit,
                actual: payload.len(),
            });
        }

        self.incoming_sequence = sequence;

        let mut message = MessageCodec::from_vec(huffman, payload);
        let preamble = read_preamble_and_xor(&mut message, direction, sequence, &self.state);
        Ok(Some(IncomingPacket {
            sequence,
            preamble,
            message,
        }))
    }

    /// Obfuscates and frames `message` as `sequence`.
    ///
    /// The message must start with the preamble for this side's outgoing
    /// direction. Payloads of [`FRAGMENT_SIZE`] bytes or more are split into
    /// fragments; one datagram is returned per fragment.
    pub fn process_outgoing(
        &mut self,
        sequence: i32,
        message: &MessageCodec<'_>,
    ) -> CodecResult<Vec<Vec<u8>>> {
        if sequence < self.outgoing_sequence {
            warn!(
                sequence,
                expected = self.outgoing_sequence,
                "rejecting stale outgoing sequence"
            );
            return Err(CodecError::SequenceNotIncreasing {
                sequence,
                expected: self.outgoing_sequence,
            });
        }
        if message.is_overflowed() {
            return Err(CodecError::Overflow);
        }
        let limit = self.config.codec_limits.max_message_bytes;
        if message.cursize() > limit {
            return Err(CodecError::LimitsExceeded {
                kind: LimitKind::MessageBytes,
                limit,
                actual: message.cursize(),
            });
        }

        let direction = self.config.side.outgoing();
        let mut encoded = MessageCodec::from_bytes(message.huffman(), message.data());
        read_preamble_and_xor(&mut encoded, direction, sequence, &self.state);
        let payload = encoded.into_bytes();

        let qport = direction.has_qport().then_some(self.config.qport);
        let datagrams = if payload.len() >= FRAGMENT_SIZE {
            wire::split_fragments(&payload)?
                .into_iter()
                .map(|fragment| {
                    let header = PacketHeader::fragment(
                        sequence,
                        qport,
                        fragment.start,
                        fragment.data.len() as u16,
                    );
                    wire::encode_packet(&header, fragment.data)
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            vec![wire::encode_packet(&PacketHeader::whole(sequence, qport), &payload)?]
        };

        self.outgoing_sequence = sequence.wrapping_add(1);
        Ok(datagrams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(challenge: i32) -> (Netchan, Netchan) {
        let client = Netchan::new(NetchanConfig::new(Side::Client).with_qport(0x1234), challenge);
        let server = Netchan::new(NetchanConfig::new(Side::Server), challenge);
        (client, server)
    }

    fn server_message<'h>(ctx: &'h HuffmanContext, ack: i32, body: &[u8]) -> MessageCodec<'h> {
        let mut msg = MessageCodec::new(ctx, 16_384);
        msg.write_long(ack);
        msg.write_string(body);
        msg
    }

    fn client_message<'h>(ctx: &'h HuffmanContext, body: &[u8]) -> MessageCodec<'h> {
        let mut msg = MessageCodec::new(ctx, 16_384);
        msg.write_long(3);
        msg.write_long(2);
        msg.write_long(1);
        msg.write_string(body);
        msg
    }

    #[test]
    fn side_directions() {
        assert_eq!(Side::Client.incoming(), Direction::ServerToClient);
        assert_eq!(Side::Client.outgoing(), Direction::ClientToServer);
        assert_eq!(Side::Server.incoming(), Direction::ClientToServer);
        assert_eq!(Side::Server.outgoing(), Direction::ServerToClient);
    }

    #[test]
    fn server_to_client_roundtrip() {
        let ctx = HuffmanContext::new();
        let (mut client, mut server) = pair(0x0BAD_F00D);
        client.state_mut().set_reliable_command(1, "userinfo \"\\name\\Kyle\"");
        server.state_mut().set_reliable_command(1, "userinfo \"\\name\\Kyle\"");

        let msg = server_message(&ctx, 1, b"print \"hello\"");
        let datagrams = server.process_outgoing(1, &msg).unwrap();
        assert_eq!(datagrams.len(), 1);
        assert_eq!(server.outgoing_sequence(), 2);

        let mut packet = client.process_incoming(&datagrams[0], &ctx).unwrap().unwrap();
        assert_eq!(packet.sequence, 1);
        assert_eq!(packet.preamble, Preamble::FromServer { reliable_ack: 1 });
        assert_eq!(packet.message.read_string(false, false), b"print \"hello\"");
        assert_eq!(client.incoming_sequence(), 1);
    }

    #[test]
    fn client_to_server_roundtrip() {
        let ctx = HuffmanContext::new();
        let (mut client, mut server) = pair(77);
        client.state_mut().set_server_command(1, "cs 0 \"sv_hostname\"");
        server.state_mut().set_server_command(1, "cs 0 \"sv_hostname\"");

        let msg = client_message(&ctx, b"move");
        let datagrams = client.process_outgoing(5, &msg).unwrap();
        let header = wire::decode_packet(&datagrams[0], Direction::ClientToServer, &Limits::default())
            .unwrap()
            .header;
        assert_eq!(header.qport, Some(0x1234));

        let mut packet = server.process_incoming(&datagrams[0], &ctx).unwrap().unwrap();
        assert_eq!(
            packet.preamble,
            Preamble::FromClient {
                server_id: 3,
                message_ack: 2,
                reliable_ack: 1
            }
        );
        assert_eq!(packet.message.read_string(false, false), b"move");
    }

    #[test]
    fn body_is_obfuscated_on_the_wire() {
        let ctx = HuffmanContext::new();
        let (_, mut server) = pair(0x55);
        let msg = server_message(&ctx, 0, &[b'x'; 64]);
        let datagrams = server.process_outgoing(1, &msg).unwrap();
        let payload = &datagrams[0][wire::SEQUENCE_SIZE..];
        assert_eq!(payload.len(), msg.data().len());
        assert_ne!(&payload[CL_DECODE_START..], &msg.data()[CL_DECODE_START..]);
    }

    #[test]
    fn wrong_key_string_garbles_body() {
        let ctx = HuffmanContext::new();
        let (mut client, mut server) = pair(9);
        server.state_mut().set_reliable_command(0, "abc");
        client.state_mut().set_reliable_command(0, "xyz");

        let msg = server_message(&ctx, 0, b"configstrings follow");
        let datagrams = server.process_outgoing(1, &msg).unwrap();
        let mut packet = client.process_incoming(&datagrams[0], &ctx).unwrap().unwrap();
        assert_ne!(packet.message.read_string(false, false), b"configstrings follow");
    }

    #[test]
    fn duplicate_and_stale_packets_are_dropped() {
        let ctx = HuffmanContext::new();
        let (mut client, mut server) = pair(1);
        let msg = server_message(&ctx, 0, b"a");
        let first = server.process_outgoing(4, &msg).unwrap();
        let second = server.process_outgoing(5, &msg).unwrap();

        assert!(client.process_incoming(&second[0], &ctx).unwrap().is_some());
        assert!(client.process_incoming(&second[0], &ctx).unwrap().is_none());
        assert!(client.process_incoming(&first[0], &ctx).unwrap().is_none());
        assert_eq!(client.incoming_sequence(), 5);
    }

    #[test]
    fn stale_outgoing_sequence_is_rejected() {
        let ctx = HuffmanContext::new();
        let (_, mut server) = pair(1);
        let msg = server_message(&ctx, 0, b"a");
        server.process_outgoing(3, &msg).unwrap();
        let err = server.process_outgoing(2, &msg).unwrap_err();
        assert_eq!(
            err,
            CodecError::SequenceNotIncreasing {
                sequence: 2,
                expected: 4
            }
        );
        assert!(server.process_outgoing(4, &msg).is_ok());
    }

    #[test]
    fn overflowed_message_is_rejected() {
        let ctx = HuffmanContext::new();
        let (_, mut server) = pair(1);
        let mut msg = MessageCodec::new(&ctx, 2);
        msg.write_long(0);
        assert_eq!(server.process_outgoing(1, &msg), Err(CodecError::Overflow));
        assert_eq!(server.outgoing_sequence(), 0);
    }

    #[test]
    fn large_message_is_fragmented_and_reassembled() {
        let ctx = HuffmanContext::new();
        let (mut client, mut server) = pair(0x4242);
        let body: Vec<u8> = (0..3000u32).map(|i| b'a' + (i % 26) as u8).collect();
        let msg = server_message(&ctx, 0, &body);
        assert!(msg.cursize() >= FRAGMENT_SIZE);

        let datagrams = server.process_outgoing(9, &msg).unwrap();
        assert!(datagrams.len() > 1);

        let mut result = None;
        for datagram in &datagrams {
            assert!(result.is_none());
            result = client.process_incoming(datagram, &ctx).unwrap();
        }
        let mut packet = result.unwrap();
        assert_eq!(packet.sequence, 9);
        assert_eq!(packet.message.read_string(false, false), body);
    }

    #[test]
    fn incoming_message_limit_is_enforced() {
        let ctx = HuffmanContext::new();
        let (_, mut server) = pair(1);
        let mut config = NetchanConfig::new(Side::Client);
        config.codec_limits.max_message_bytes = 8;
        let mut client = Netchan::new(config, 1);

        let msg = server_message(&ctx, 0, &[b'z'; 64]);
        let datagrams = server.process_outgoing(1, &msg).unwrap();
        let err = client.process_incoming(&datagrams[0], &ctx).unwrap_err();
        assert!(matches!(err, CodecError::LimitsExceeded { .. }));
    }

    #[test]
    fn truncated_datagram_is_an_error() {
        let ctx = HuffmanContext::new();
        let (mut client, _) = pair(1);
        let err = client.process_incoming(&[1, 2], &ctx).unwrap_err();
        assert!(matches!(err, CodecError::Wire(_)));
    }

    #[test]
    fn reset_clears_sequences() {
        let ctx = HuffmanContext::new();
        let (mut client, mut server) = pair(1);
        let msg = server_message(&ctx, 0, b"a");
        let datagrams = server.process_outgoing(3, &msg).unwrap();
        client.process_incoming(&datagrams[0], &ctx).unwrap();
        client.set_initial_connected_state();
        assert_eq!(client.outgoing_sequence(), 1);

        client.reset(55);
        assert_eq!(client.incoming_sequence(), 0);
        assert_eq!(client.outgoing_sequence(), 0);
        assert_eq!(client.challenge(), 55);
    }

    #[test]
    fn preamble_reliable_ack() {
        assert_eq!(Preamble::FromServer { reliable_ack: 4 }.reliable_ack(), 4);
        let p = Preamble::FromClient {
            server_id: 1,
            message_ack: 2,
            reliable_ack: 3,
        };
        assert_eq!(p.reliable_ack(), 3);
    }
}
