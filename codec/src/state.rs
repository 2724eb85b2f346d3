//! Per-connection protocol state shared by both directions.

/// Number of slots in each command ring.
pub const MAX_RELIABLE_COMMANDS: usize = 128;

/// Challenge and command history used to key message obfuscation.
///
/// Both rings are indexed by command sequence modulo
/// [`MAX_RELIABLE_COMMANDS`]; negative sequences wrap the same way.
#[derive(Debug, Clone)]
pub struct ProtocolState {
    challenge: i32,
    reliable_commands: Vec<Vec<u8>>,
    server_commands: Vec<Vec<u8>>,
}

impl Default for ProtocolState {
    fn default() -> Self {
        Self::new(0)
    }
}

const fn slot(sequence: i32) -> usize {
    sequence.rem_euclid(MAX_RELIABLE_COMMANDS as i32) as usize
}

impl ProtocolState {
    #[must_use]
    pub fn new(challenge: i32) -> Self {
        Self {
            challenge,
            reliable_commands: vec![Vec::new(); MAX_RELIABLE_COMMANDS],
            server_commands: vec![Vec::new(); MAX_RELIABLE_COMMANDS],
        }
    }

    #[must_use]
    pub const fn challenge(&self) -> i32 {
        self.challenge
    }

    /// Returns the client reliable command stored for `sequence`.
    #[must_use]
    pub fn reliable_command(&self, sequence: i32) -> &[u8] {
        &self.reliable_commands[slot(sequence)]
    }

    pub fn set_reliable_command(&mut self, sequence: i32, command: impl Into<Vec<u8>>) {
        self.reliable_commands[slot(sequence)] = command.into();
    }

    /// Key for the usercmds of a client packet, hashed from the reliable
    /// command at `reliable_ack`.
    #[must_use]
    pub fn usercmd_key(&self, checksum_feed: i32, message_ack: i32, reliable_ack: i32) -> i32 {
        crate::usercmd::usercmd_key(
            checksum_feed,
            message_ack,
            self.reliable_command(reliable_ack),
        )
    }

    /// Returns the server command stored for `sequence`.
    #[must_use]
    pub fn server_command(&self, sequence: i32) -> &[u8] {
        &self.server_commands[slot(sequence)]
    }

    pub fn set_server_command(&mut self, sequence: i32, command: impl Into<Vec<u8>>) {
        self.server_commands[slot(sequence)] = command.into();
    }

    /// Clears both rings and installs a new challenge.
    pub fn reset(&mut self, challenge: i32) {
        self.challenge = challenge;
        self.reliable_commands.iter_mut().for_each(Vec::clear);
        self.server_commands.iter_mut().for_each(Vec::clear);
    }
}
