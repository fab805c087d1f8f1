//! Host runtime seam
//!
//! The watchface is a client of a host-provided windowing and event
//! runtime. Inbound notifications arrive as [`Event`]s; everything the
//! face asks of the host (wall clock, settings, peeks, haptics) goes
//! through the [`Host`] trait, implemented once per platform binding.

use chrono::NaiveDateTime;

use crate::vibration::VibePattern;

/// Accelerometer axis reported by a tap event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelAxis {
    X,
    Y,
    Z,
}

/// Sign of the acceleration along the tapped axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapDirection {
    Positive,
    Negative,
}

/// Host notifications the face subscribes to.
///
/// One variant per subscription: minute tick, battery level change,
/// Bluetooth connection change, single-axis accelerometer tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Fired once per minute boundary.
    MinuteTick,
    /// Battery charge level changed.
    BatteryChange { percent: u8 },
    /// Bluetooth connection to the phone came up or went down.
    ConnectionChange { connected: bool },
    /// Single tap detected along one accelerometer axis.
    AccelTap {
        axis: AccelAxis,
        direction: TapDirection,
    },
}

/// Services the watchface consumes from the host runtime.
///
/// Every call is infallible by contract: the host either services it
/// or terminates the process, there is no error path for the face to
/// handle.
pub trait Host {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Whether the user's display format setting is 24-hour.
    fn clock_is_24h(&self) -> bool;

    /// Current phone connection state, read synchronously.
    fn peek_connection(&self) -> bool;

    /// Current battery charge in percent (0-100), read synchronously.
    fn peek_battery(&self) -> u8;

    /// Enqueue a vibration pattern on the host's haptic queue.
    ///
    /// Fire and forget; the queue is host-owned and there is no
    /// completion callback.
    fn enqueue_vibe(&mut self, pattern: &VibePattern);
}
