//! UI building blocks
//!
//! [`Label`] is a fixed-capacity text region; the face layout itself
//! lives in [`pangoo`].

use core::fmt::{self, Write};

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use heapless::String;

pub mod pangoo;

pub use pangoo::PangooFace;

/// Capacity of a label's text buffer. The longest face string is the
/// tap debug text at 16 bytes.
const LABEL_BUF: usize = 24;

/// A text region: bounded text buffer, frame, font and color.
///
/// Text is drawn horizontally centered at the top of the frame, with a
/// transparent background; the face clears the screen before drawing.
pub struct Label {
    frame: Rectangle,
    font: &'static MonoFont<'static>,
    color: Rgb565,
    text: String<LABEL_BUF>,
}

impl Label {
    pub fn new(frame: Rectangle, font: &'static MonoFont<'static>, color: Rgb565) -> Self {
        Self {
            frame,
            font,
            color,
            text: String::new(),
        }
    }

    /// Replace the label text, truncating at buffer capacity.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        let _ = self.text.push_str(&text[..text.len().min(LABEL_BUF)]);
    }

    /// Replace the label text with formatted output.
    pub fn set_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.text.clear();
        let _ = self.text.write_fmt(args);
    }

    /// Current label text.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let character_style = MonoTextStyle::new(self.font, self.color);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Top)
            .build();

        let anchor = Point::new(
            self.frame.top_left.x + self.frame.size.width as i32 / 2,
            self.frame.top_left.y,
        );
        Text::with_text_style(self.text.as_str(), anchor, character_style, text_style)
            .draw(target)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profont::PROFONT_14_POINT;

    fn label() -> Label {
        Label::new(
            Rectangle::new(Point::new(0, 100), Size::new(144, 30)),
            &PROFONT_14_POINT,
            Rgb565::WHITE,
        )
    }

    #[test]
    fn set_text_replaces_previous_content() {
        let mut label = label();
        label.set_text("Sun 03 Mar");
        label.set_text("X axis positive.");
        assert_eq!(label.text(), "X axis positive.");
    }

    #[test]
    fn overlong_text_is_truncated() {
        let mut label = label();
        label.set_text("this string is much longer than the buffer");
        assert_eq!(label.text().len(), LABEL_BUF);
    }

    #[test]
    fn set_fmt_writes_formatted_output() {
        let mut label = label();
        label.set_fmt(format_args!("{:02}:{:02}", 7, 5));
        assert_eq!(label.text(), "07:05");
    }
}
