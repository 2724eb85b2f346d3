//! Limits for codec-level processing.

/// Largest message the legacy protocol produces or accepts.
pub const MAX_MSGLEN: usize = 49_152;

/// Codec-specific limits enforced by the netchan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum number of bytes in one message, incoming or outgoing.
    pub max_message_bytes: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_message_bytes: MAX_MSGLEN,
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_message_bytes: 4096,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_message_bytes: usize::MAX,
        }
    }
}
