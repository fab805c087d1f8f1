//! The Pangoo face
//!
//! Fixed 144x168 layout, top to bottom: logo bitmap, battery bar, date
//! label, time label. All regions are created once at window load and
//! live for the lifetime of the face.

use chrono::{Datelike, NaiveDateTime, Timelike};
use embedded_graphics::{
    image::{Image, ImageRaw},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};
use profont::{PROFONT_14_POINT, PROFONT_24_POINT};

use super::Label;
use crate::battery::BatteryMeter;
use crate::host::{AccelAxis, TapDirection};

pub const SCREEN_WIDTH: u32 = 144;
pub const SCREEN_HEIGHT: u32 = 168;

/// Packaged background bitmap, 144x70 RGB565 big-endian.
const LOGO_DATA: &[u8] = include_bytes!("../../assets/pangoo_logo.raw");
const LOGO_WIDTH: u32 = 144;

const LOGO_FRAME: Rectangle = Rectangle::new(Point::new(0, 1), Size::new(SCREEN_WIDTH, 70));
const BATTERY_FRAME: Rectangle = Rectangle::new(Point::new(0, 80), Size::new(SCREEN_WIDTH, 2));
const DATE_FRAME: Rectangle = Rectangle::new(Point::new(0, 100), Size::new(SCREEN_WIDTH, 30));
const TIME_FRAME: Rectangle = Rectangle::new(
    Point::new(0, (SCREEN_HEIGHT - 56 - 1) as i32),
    Size::new(SCREEN_WIDTH, 56),
);

/// The watchface screen: owns every visual region.
pub struct PangooFace {
    logo: ImageRaw<'static, Rgb565>,
    battery: BatteryMeter,
    time_label: Label,
    date_label: Label,
}

impl PangooFace {
    pub fn new() -> Self {
        Self {
            logo: ImageRaw::new(LOGO_DATA, LOGO_WIDTH),
            battery: BatteryMeter::new(BATTERY_FRAME),
            time_label: Label::new(TIME_FRAME, &PROFONT_24_POINT, Rgb565::WHITE),
            date_label: Label::new(DATE_FRAME, &PROFONT_14_POINT, Rgb565::WHITE),
        }
    }

    /// Write the current time into the time label as "HH:MM".
    ///
    /// Zero-padded in both modes, matching strftime's `%H`/`%I`.
    pub fn set_time(&mut self, now: NaiveDateTime, is_24h: bool) {
        let hour = if is_24h {
            now.hour()
        } else {
            let (_, hour) = now.hour12();
            hour
        };
        self.time_label
            .set_fmt(format_args!("{:02}:{:02}", hour, now.minute()));
    }

    /// Write the current date into the date label as "Dow DD Mon".
    pub fn set_date(&mut self, now: NaiveDateTime) {
        let month = match now.month0() {
            0 => "Jan",
            1 => "Feb",
            2 => "Mar",
            3 => "Apr",
            4 => "May",
            5 => "Jun",
            6 => "Jul",
            7 => "Aug",
            8 => "Sep",
            9 => "Oct",
            10 => "Nov",
            11 => "Dec",
            _ => "",
        };
        self.date_label
            .set_fmt(format_args!("{} {:02} {}", now.weekday(), now.day(), month));
    }

    /// Overwrite the date label with the tap debug text.
    ///
    /// The text stays until the next minute tick rewrites the date.
    pub fn show_tap(&mut self, axis: AccelAxis, direction: TapDirection) {
        use AccelAxis::*;
        use TapDirection::*;

        self.date_label.set_text(match (axis, direction) {
            (X, Positive) => "X axis positive.",
            (X, Negative) => "X axis negative.",
            (Y, Positive) => "Y axis positive.",
            (Y, Negative) => "Y axis negative.",
            (Z, Positive) => "Z axis positive.",
            (Z, Negative) => "Z axis negative.",
        });
    }

    /// Record a new battery charge level.
    pub fn set_battery(&mut self, percent: u8) {
        self.battery.set_percent(percent);
    }

    pub fn battery(&self) -> &BatteryMeter {
        &self.battery
    }

    pub fn time_text(&self) -> &str {
        self.time_label.text()
    }

    pub fn date_text(&self) -> &str {
        self.date_label.text()
    }

    /// Paint the whole face: black window background, then logo,
    /// labels and battery bar.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        target.clear(Rgb565::BLACK)?;
        Image::new(&self.logo, LOGO_FRAME.top_left).draw(target)?;
        self.time_label.draw(target)?;
        self.date_label.draw(target)?;
        self.battery.draw(target)?;

        Ok(())
    }
}

impl Default for PangooFace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 3)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn time_is_zero_padded_in_24h_mode() {
        let mut face = PangooFace::new();
        face.set_time(at(7, 5), true);
        assert_eq!(face.time_text(), "07:05");
        face.set_time(at(23, 59), true);
        assert_eq!(face.time_text(), "23:59");
    }

    #[test]
    fn time_uses_the_12_hour_clock_when_set() {
        let mut face = PangooFace::new();
        face.set_time(at(19, 5), false);
        assert_eq!(face.time_text(), "07:05");
        // Midnight is 12 on the 12-hour clock
        face.set_time(at(0, 30), false);
        assert_eq!(face.time_text(), "12:30");
    }

    #[test]
    fn date_is_weekday_day_month_abbreviated() {
        let mut face = PangooFace::new();
        // 2024-03-03 was a Sunday
        face.set_date(at(12, 0));
        assert_eq!(face.date_text(), "Sun 03 Mar");

        let eve = NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        face.set_date(eve);
        assert_eq!(face.date_text(), "Wed 31 Dec");
    }

    #[test]
    fn tap_text_matches_axis_and_sign() {
        let cases = [
            (AccelAxis::X, TapDirection::Positive, "X axis positive."),
            (AccelAxis::X, TapDirection::Negative, "X axis negative."),
            (AccelAxis::Y, TapDirection::Positive, "Y axis positive."),
            (AccelAxis::Y, TapDirection::Negative, "Y axis negative."),
            (AccelAxis::Z, TapDirection::Positive, "Z axis positive."),
            (AccelAxis::Z, TapDirection::Negative, "Z axis negative."),
        ];

        let mut face = PangooFace::new();
        for (axis, direction, expected) in cases {
            face.show_tap(axis, direction);
            assert_eq!(face.date_text(), expected);
        }
    }

    #[test]
    fn next_date_write_replaces_tap_text() {
        let mut face = PangooFace::new();
        face.show_tap(AccelAxis::Z, TapDirection::Negative);
        face.set_date(at(12, 0));
        assert_eq!(face.date_text(), "Sun 03 Mar");
    }

    #[test]
    fn logo_data_covers_the_frame() {
        // 144x70 at 2 bytes per pixel
        assert_eq!(LOGO_DATA.len() as u32, LOGO_WIDTH * 70 * 2);
    }
}
