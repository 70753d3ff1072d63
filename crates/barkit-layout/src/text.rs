//! Text measurement.
//!
//! Text layout is an opaque capability here: the overlay labels and
//! [`crate::TextBox`] only need a width and a line height. Hosts with a real
//! shaping backend implement [`TextMeasurer`]; [`SimpleTextMeasurer`] is the
//! fallback approximation.

use std::fmt;

/// Metrics of a single line of text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Total advance width of the run.
    pub width: f32,
    /// Total height (ascent + descent + leading).
    pub height: f32,
    /// Distance from baseline to top of highest glyph.
    pub ascent: f32,
    /// Distance from baseline to bottom of lowest glyph.
    pub descent: f32,
    /// Leading (line gap).
    pub leading: f32,
}

impl TextMetrics {
    /// Metrics with baseline values derived from the font size.
    pub fn with_font_size(font_size: f32) -> Self {
        let ascent = font_size * 0.82;
        let descent = font_size * 0.21;
        let leading = 0.0;

        Self {
            width: 0.0,
            height: ascent + descent + leading,
            ascent,
            descent,
            leading,
        }
    }
}

/// Measures single-line text runs.
pub trait TextMeasurer: fmt::Debug {
    fn measure(&self, text: &str, font_size: f32, font_weight: u16) -> TextMetrics;
}

/// Approximate measurement without a shaping backend.
///
/// Uses an average advance of half the font size per character; bold text
/// (weight >= 600) is ten percent wider.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleTextMeasurer;

impl TextMeasurer for SimpleTextMeasurer {
    fn measure(&self, text: &str, font_size: f32, font_weight: u16) -> TextMetrics {
        let mut avg_char_width = font_size * 0.5;
        if font_weight >= 600 {
            avg_char_width *= 1.1;
        }
        let width = text.chars().count() as f32 * avg_char_width;

        TextMetrics {
            width,
            ..TextMetrics::with_font_size(font_size)
        }
    }
}
