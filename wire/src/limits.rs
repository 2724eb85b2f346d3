//! Configurable limits for bounded decoding.

use crate::header::MAX_PACKETLEN;

/// Wire-level limits for packet decoding and fragment reassembly.
///
/// Message body limits belong to the codec layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum datagram size in bytes.
    pub max_packet_bytes: usize,

    /// Maximum size of a reassembled fragmented payload in bytes.
    pub max_reassembled_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Headroom over the legacy MTU for sequence, qport and fragment headers.
            max_packet_bytes: MAX_PACKETLEN + 64,

            // Matches the largest legacy message buffer.
            max_reassembled_bytes: 49_152,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_packet_bytes: MAX_PACKETLEN + 64,
            max_reassembled_bytes: 8 * 1024,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_packet_bytes: usize::MAX,
            max_reassembled_bytes: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_fit_a_full_fragment() {
        let limits = Limits::default();
        assert!(limits.max_packet_bytes >= MAX_PACKETLEN);
        assert_eq!(limits.max_reassembled_bytes, 49_152);
    }

    #[test]
    fn testing_limits_smaller() {
        let test_limits = Limits::for_testing();
        let default_limits = Limits::default();
        assert!(test_limits.max_reassembled_bytes < default_limits.max_reassembled_bytes);
    }

    #[test]
    fn unlimited_limits() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_packet_bytes, usize::MAX);
        assert_eq!(limits.max_reassembled_bytes, usize::MAX);
    }

    #[test]
    fn limits_const_constructible() {
        const LIMITS: Limits = Limits::for_testing();
        assert_eq!(LIMITS.max_reassembled_bytes, 8 * 1024);
    }
}
