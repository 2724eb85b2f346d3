//! Inspection and debugging tools for the jkanet codec.
//!
//! This crate backs the `jkanet-tools` binary:
//!
//! - Huffman-compress and decompress standalone buffers
//! - Report the framing and plaintext preamble of captured datagrams
//! - Decode entity delta runs into JSON
//! - Dump the field tables with their fingerprints
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Reports are plain serde types printed as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use codec::{CodecLimits, MessageCodec, Netchan, NetchanConfig, Preamble, Side};
use glob::Pattern;
use huffman::HuffmanContext;
use schema::{EntityState, FieldTable, GENTITYNUM_BITS, MAX_GENTITIES};
use serde::Serialize;
use tracing::debug;

/// Framing and preamble of one captured datagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub datagram_len: usize,
    pub sequence: i32,
    pub qport: Option<u16>,
    pub fragment: Option<FragmentReport>,
    pub payload_len: usize,
    /// Present for whole packets only; fragments carry no preamble of their own.
    pub preamble: Option<PreambleReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FragmentReport {
    pub start: u16,
    pub length: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreambleReport {
    FromServer {
        reliable_ack: i32,
    },
    FromClient {
        server_id: i32,
        message_ack: i32,
        reliable_ack: i32,
    },
}

impl From<Preamble> for PreambleReport {
    fn from(preamble: Preamble) -> Self {
        match preamble {
            Preamble::FromServer { reliable_ack } => Self::FromServer { reliable_ack },
            Preamble::FromClient {
                server_id,
                message_ack,
                reliable_ack,
            } => Self::FromClient {
                server_id,
                message_ack,
                reliable_ack,
            },
        }
    }
}

/// Inspects a datagram as received by `side`.
///
/// A whole packet is run through a fresh netchan keyed with `challenge` to
/// recover its preamble. Packets with sequence zero or below are reported
/// without one.
pub fn inspect_packet(
    datagram: &[u8],
    side: Side,
    challenge: i32,
    wire_limits: &wire::Limits,
    codec_limits: &CodecLimits,
) -> Result<InspectReport> {
    let packet = wire::decode_packet(datagram, side.incoming(), wire_limits)
        .context("decode packet header")?;
    let header = packet.header;

    let preamble = if header.is_fragmented() {
        None
    } else {
        let config = NetchanConfig {
            wire_limits: wire_limits.clone(),
            codec_limits: codec_limits.clone(),
            ..NetchanConfig::new(side)
        };
        let mut netchan = Netchan::new(config, challenge);
        let huffman = HuffmanContext::new();
        netchan
            .process_incoming(datagram, &huffman)
            .context("process packet")?
            .map(|incoming| incoming.preamble.into())
    };

    Ok(InspectReport {
        datagram_len: datagram.len(),
        sequence: header.sequence,
        qport: header.qport,
        fragment: header.fragment.map(|fragment| FragmentReport {
            start: fragment.start,
            length: fragment.length,
        }),
        payload_len: packet.payload.len(),
        preamble,
    })
}

/// Decodes a run of entity deltas against an all-zero baseline.
///
/// The run ends at the `MAX_GENTITIES - 1` terminator or when the message is
/// exhausted.
pub fn decode_entities(message: &[u8]) -> Vec<EntityState> {
    let huffman = HuffmanContext::new();
    let mut msg = MessageCodec::from_bytes(&huffman, message);
    let baseline = EntityState::default();
    let mut entities = Vec::new();

    for _ in 0..MAX_GENTITIES {
        let number = msg.read_bits(GENTITYNUM_BITS);
        if number == MAX_GENTITIES - 1 || msg.readcount() > msg.cursize() {
            break;
        }
        let entity = msg.read_delta_entity(&baseline, number);
        if msg.readcount() > msg.cursize() {
            debug!(number, "entity delta ran past the end of the message");
            break;
        }
        entities.push(entity);
    }
    entities
}

/// One networked field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub name: &'static str,
    pub bits: i32,
}

/// A field table and its wire fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    pub name: &'static str,
    pub fingerprint: String,
    pub active: usize,
    pub fields: Vec<FieldReport>,
}

fn table_report<T: 'static>(table: &FieldTable<T>) -> TableReport {
    TableReport {
        name: table.name,
        fingerprint: format!("{:016x}", schema::table_hash(table)),
        active: table.active,
        fields: table
            .active_fields()
            .iter()
            .map(|field| FieldReport {
                name: field.name,
                bits: field.bits,
            })
            .collect(),
    }
}

/// Reports every field table in wire order.
pub fn table_reports() -> Vec<TableReport> {
    vec![
        table_report(&schema::ENTITY_TABLE),
        table_report(&schema::PLAYER_TABLE),
        table_report(&schema::PILOT_TABLE),
        table_report(&schema::VEHICLE_TABLE),
    ]
}

/// Lists regular files in `dir`, optionally filtered by a glob matched
/// against the full path or the file name. Results are sorted by path.
pub fn collect_packet_paths(dir: &Path, glob: Option<&str>) -> Result<Vec<PathBuf>> {
    let pattern = glob
        .map(|value| Pattern::new(value).context("invalid glob pattern"))
        .transpose()?;

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}
