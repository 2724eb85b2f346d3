//! Client connection state machine.

use tracing::info;

use crate::error::{CodecError, CodecResult};
use crate::netchan::{Netchan, NetchanConfig};

/// Lifecycle of a client connection, in handshake order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConnectionState {
    Disconnected,
    /// Challenge requested, waiting for the response.
    Connecting,
    /// Connect sent with the challenge, waiting for the server to accept.
    Challenging,
    /// Netchan established, waiting for the gamestate.
    Connected,
    /// Gamestate received, waiting for the first snapshot.
    Primed,
    /// Receiving snapshots.
    Active,
}

/// Inputs driving [`Connection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionEvent {
    Connect,
    ChallengeReceived { challenge: i32 },
    ConnectResponse { challenge: i32 },
    GamestateReceived,
    SnapshotReceived,
    Disconnect,
}

/// A netchan plus the handshake state that governs it.
///
/// Disconnecting, or a connect response carrying the wrong challenge,
/// returns to [`ConnectionState::Disconnected`] and resets the netchan.
#[derive(Debug, Clone)]
pub struct Connection {
    state: ConnectionState,
    netchan: Netchan,
}

impl Connection {
    #[must_use]
    pub fn new(config: NetchanConfig) -> Self {
        Self {
            state: ConnectionState::Disconnected,
            netchan: Netchan::new(config, 0),
        }
    }

    #[must_use]
    pub const fn state(&self) -> ConnectionState {
        self.state
    }

    #[must_use]
    pub const fn netchan(&self) -> &Netchan {
        &self.netchan
    }

    pub fn netchan_mut(&mut self) -> &mut Netchan {
        &mut self.netchan
    }

    /// Applies `event`, returning the new state.
    ///
    /// Events that make no sense in the current state are rejected and leave
    /// the state unchanged.
    pub fn handle(&mut self, event: ConnectionEvent) -> CodecResult<ConnectionState> {
        use ConnectionEvent as E;
        use ConnectionState as S;

        let next = match (self.state, event) {
            (_, E::Disconnect) => {
                self.netchan.reset(0);
                S::Disconnected
            }
            (S::Disconnected, E::Connect) => S::Connecting,
            (S::Connecting, E::ChallengeReceived { challenge }) => {
                self.netchan.reset(challenge);
                S::Challenging
            }
            (S::Challenging, E::ConnectResponse { challenge }) => {
                if challenge == self.netchan.challenge() {
                    self.netchan.set_initial_connected_state();
                    S::Connected
                } else {
                    info!(
                        expected = self.netchan.challenge(),
                        received = challenge,
                        "connect response challenge mismatch"
                    );
                    self.netchan.reset(0);
                    S::Disconnected
                }
            }
            (S::Connected | S::Active, E::GamestateReceived) => S::Primed,
            (S::Primed | S::Active, E::SnapshotReceived) => S::Active,
            (state, event) => return Err(CodecError::InvalidTransition { state, event }),
        };

        if next != self.state {
            info!(from = ?self.state, to = ?next, "connection state changed");
        }
        self.state = next;
        Ok(next)
    }
}
