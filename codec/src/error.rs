//! Error types for codec operations.

use std::fmt;

use crate::connection::{ConnectionEvent, ConnectionState};

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors surfaced by the netchan and connection layers.
///
/// Message primitives never fail; they follow the legacy sentinel and sticky
/// overflow conventions instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CodecError {
    /// Wire format error.
    Wire(wire::DecodeError),

    /// Framing an outgoing packet failed.
    Encode(wire::EncodeError),

    /// An outgoing sequence was not newer than the last one sent.
    SequenceNotIncreasing { sequence: i32, expected: i32 },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// The message ran out of capacity while being written.
    Overflow,

    /// The connection state machine rejected an event.
    InvalidTransition {
        state: ConnectionState,
        event: ConnectionEvent,
    },
}

/// Specific codec limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    MessageBytes,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire(e) => write!(f, "wire error: {e}"),
            Self::Encode(e) => write!(f, "encode error: {e}"),
            Self::SequenceNotIncreasing { sequence, expected } => {
                write!(
                    f,
                    "outgoing sequence {sequence} is stale, expected at least {expected}"
                )
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::Overflow => write!(f, "message overflowed"),
            Self::InvalidTransition { state, event } => {
                write!(f, "event {event:?} is not valid in state {state:?}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MessageBytes => "message bytes",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(e) => Some(e),
            Self::Encode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wire::DecodeError> for CodecError {
    fn from(err: wire::DecodeError) -> Self {
        Self::Wire(err)
    }
}

impl From<wire::EncodeError> for CodecError {
    fn from(err: wire::EncodeError) -> Self {
        Self::Encode(err)
    }
}
