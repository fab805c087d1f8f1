//! Bluetooth connection tracking
//!
//! Decides when a connection-state report warrants a haptic alert.
//! Repeats of the same state stay silent, and so does the very first
//! report: the watch should not buzz at 3AM just to say Bluetooth is
//! still off.

use crate::vibration::{VibePattern, CONNECT_PATTERN, DISCONNECT_PATTERN};

/// Last recorded connection state.
///
/// Starts out `Unknown` so the first report after boot can never buzz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionState {
    Unknown,
    Connected,
    Disconnected,
}

/// Tri-state connection flag with buzz suppression.
#[derive(Debug)]
pub struct ConnectionTracker {
    last: ConnectionState,
}

impl ConnectionTracker {
    pub const fn new() -> Self {
        Self {
            last: ConnectionState::Unknown,
        }
    }

    /// Last recorded state.
    pub fn state(&self) -> ConnectionState {
        self.last
    }

    /// Record a connection report and return the pattern to enqueue,
    /// if this transition warrants one.
    ///
    /// Only known-state flips buzz: `Disconnected` to `Connected`
    /// plays the connect pattern, `Connected` to `Disconnected` the
    /// disconnect pattern. Everything else, including the first report
    /// out of `Unknown`, is silent.
    pub fn on_change(&mut self, connected: bool) -> Option<&'static VibePattern> {
        use ConnectionState::*;

        let next = if connected { Connected } else { Disconnected };
        let buzz = match (self.last, next) {
            (Disconnected, Connected) => Some(&CONNECT_PATTERN),
            (Connected, Disconnected) => Some(&DISCONNECT_PATTERN),
            _ => None,
        };
        self.last = next;
        buzz
    }
}

impl Default for ConnectionTracker {
    fn default() -> Self {
        Self::new()
    }
}
