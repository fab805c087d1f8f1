//! Battery meter
//!
//! A 2px bar-gauge across the screen: black background, dark-gray
//! track, white fill proportional to the latest reported charge.
//! Redraws are triggered by the battery-change notification, never on
//! a timer.

use embedded_graphics::{
    pixelcolor::{Rgb565, WebColors},
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

/// Width of the gauge track in pixels (the full screen width).
pub const TRACK_WIDTH: u32 = 144;

/// Battery bar region: stores the latest charge percent and paints the
/// three-layer bar.
#[derive(Debug)]
pub struct BatteryMeter {
    frame: Rectangle,
    percent: u8,
}

impl BatteryMeter {
    pub const fn new(frame: Rectangle) -> Self {
        Self { frame, percent: 0 }
    }

    /// Record a new charge level, clamped to 100.
    pub fn set_percent(&mut self, percent: u8) {
        self.percent = percent.min(100);
    }

    /// Latest recorded charge level.
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Filled-bar width in pixels: `round(percent / 100 * 144)`.
    pub fn fill_width(&self) -> u32 {
        (self.percent as u32 * TRACK_WIDTH + 50) / 100
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let height = self.frame.size.height;

        // Background, then the full track, then the fill on top.
        self.frame
            .into_styled(PrimitiveStyle::with_fill(Rgb565::BLACK))
            .draw(target)?;
        Rectangle::new(self.frame.top_left, Size::new(TRACK_WIDTH, height))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::CSS_DARK_GRAY))
            .draw(target)?;
        Rectangle::new(self.frame.top_left, Size::new(self.fill_width(), height))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::WHITE))
            .draw(target)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter_at(percent: u8) -> BatteryMeter {
        let mut meter = BatteryMeter::new(Rectangle::new(
            Point::new(0, 80),
            Size::new(TRACK_WIDTH, 2),
        ));
        meter.set_percent(percent);
        meter
    }

    #[test]
    fn fill_width_spans_the_track() {
        assert_eq!(meter_at(0).fill_width(), 0);
        assert_eq!(meter_at(100).fill_width(), TRACK_WIDTH);
    }

    #[test]
    fn fill_width_rounds_to_nearest() {
        // 50% of 144px is exactly 72
        assert_eq!(meter_at(50).fill_width(), 72);
        // 1% is 1.44px, rounds down
        assert_eq!(meter_at(1).fill_width(), 1);
        // 99% is 142.56px, rounds up
        assert_eq!(meter_at(99).fill_width(), 143);
    }

    #[test]
    fn fill_width_is_monotone_in_percent() {
        let mut prev = 0;
        for percent in 0..=100 {
            let width = meter_at(percent).fill_width();
            assert!(width >= prev, "width regressed at {percent}%");
            prev = width;
        }
    }

    #[test]
    fn out_of_range_levels_are_clamped() {
        assert_eq!(meter_at(255).percent(), 100);
        assert_eq!(meter_at(255).fill_width(), TRACK_WIDTH);
    }
}
