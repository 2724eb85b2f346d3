//! Fragment reassembly and splitting.

use tracing::{debug, trace};

use crate::error::EncodeError;
use crate::header::FRAGMENT_SIZE;
use crate::limits::Limits;

/// Reassembles in-order fragments into one payload.
///
/// Assembly is strictly sequential: a fragment is accepted only when its start
/// offset equals the number of bytes already collected. A fragment whose
/// length is not exactly [`FRAGMENT_SIZE`] completes the payload. Partial
/// payloads are never exposed.
#[derive(Debug, Clone)]
pub struct FragmentAssembler {
    sequence: i32,
    buffer: Vec<u8>,
    max_bytes: usize,
}

impl Default for FragmentAssembler {
    fn default() -> Self {
        Self::new(&Limits::default())
    }
}

impl FragmentAssembler {
    /// Creates an empty assembler bounded by `limits.max_reassembled_bytes`.
    #[must_use]
    pub fn new(limits: &Limits) -> Self {
        Self {
            sequence: 0,
            buffer: Vec::new(),
            max_bytes: limits.max_reassembled_bytes,
        }
    }

    /// Returns the sequence currently being assembled.
    #[must_use]
    pub const fn sequence(&self) -> i32 {
        self.sequence
    }

    /// Returns the number of bytes collected for the current sequence.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }

    /// Feeds one fragment.
    ///
    /// Returns the complete payload when `fragment` is the terminal piece.
    pub fn process_fragment(&mut self, fragment: &[u8], start: u16, sequence: i32) -> Option<Vec<u8>> {
        if sequence != self.sequence {
            if !self.buffer.is_empty() {
                debug!(
                    old = self.sequence,
                    new = sequence,
                    dropped = self.buffer.len(),
                    "fragment sequence changed, discarding partial payload"
                );
            }
            self.buffer.clear();
            self.sequence = sequence;
        }

        if usize::from(start) != self.buffer.len() {
            trace!(
                sequence,
                start,
                expected = self.buffer.len(),
                "discarding out-of-order fragment"
            );
            return None;
        }

        if self.buffer.len() + fragment.len() > self.max_bytes {
            debug!(
                sequence,
                limit = self.max_bytes,
                "reassembled payload exceeds limit, discarding"
            );
            self.buffer.clear();
            return None;
        }

        self.buffer.extend_from_slice(fragment);

        if fragment.len() != FRAGMENT_SIZE {
            return Some(std::mem::take(&mut self.buffer));
        }
        None
    }

    /// Discards any partial payload and forgets the sequence.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.sequence = 0;
    }
}

/// One outgoing fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub start: u16,
    pub data: &'a [u8],
}

/// Splits `payload` into [`FRAGMENT_SIZE`] pieces for transmission.
///
/// The last piece is always shorter than [`FRAGMENT_SIZE`], so a payload that
/// is an exact multiple ends with an empty fragment.
pub fn split_fragments(payload: &[u8]) -> Result<Vec<Fragment<'_>>, EncodeError> {
    if payload.len() > usize::from(u16::MAX) {
        return Err(EncodeError::LengthOverflow {
            length: payload.len(),
        });
    }

    let mut fragments: Vec<Fragment<'_>> = payload
        .chunks(FRAGMENT_SIZE)
        .enumerate()
        .map(|(i, data)| Fragment {
            start: (i * FRAGMENT_SIZE) as u16,
            data,
        })
        .collect();
    if payload.len() % FRAGMENT_SIZE == 0 {
        fragments.push(Fragment {
            start: payload.len() as u16,
            data: &[],
        });
    }
    Ok(fragments)
}
