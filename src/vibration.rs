//! Vibration patterns
//!
//! The host haptic actuator plays ordered on/off duration sequences.
//! The face only ever enqueues one of the two fixed patterns below.

/// An ordered sequence of on/off durations in milliseconds.
///
/// The first segment is "on", segments then alternate off/on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VibePattern {
    segments: &'static [u32],
}

impl VibePattern {
    pub const fn new(segments: &'static [u32]) -> Self {
        Self { segments }
    }

    /// The on/off segments in play order.
    pub fn segments(&self) -> &[u32] {
        self.segments
    }

    /// Total playback time in milliseconds.
    pub fn total_ms(&self) -> u32 {
        self.segments.iter().sum()
    }
}

/// Short rattle played when the phone connection comes back.
pub static CONNECT_PATTERN: VibePattern =
    VibePattern::new(&[200, 100, 100, 100, 100, 100, 100, 100, 100]);

/// Long buzz played when the phone connection drops: on for 1000ms,
/// off for 500ms, five times.
pub static DISCONNECT_PATTERN: VibePattern =
    VibePattern::new(&[1000, 500, 1000, 500, 1000, 500, 1000, 500, 1000]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_start_with_an_on_segment() {
        assert_eq!(CONNECT_PATTERN.segments()[0], 200);
        assert_eq!(DISCONNECT_PATTERN.segments()[0], 1000);
    }

    #[test]
    fn disconnect_pattern_buzzes_five_times() {
        let on_count = DISCONNECT_PATTERN
            .segments()
            .iter()
            .step_by(2)
            .filter(|&&ms| ms == 1000)
            .count();
        assert_eq!(on_count, 5);
        assert_eq!(DISCONNECT_PATTERN.total_ms(), 7000);
    }
}
