//! # BarKit Theme
//!
//! Typed configuration values for the BarKit layout engine and the
//! three-level override chain that resolves them
//! (explicit value → ambient theme → hard default).

pub mod axis;
pub mod theme;

pub use axis::{AxisConfig, AxisConfigBuilder};
pub use theme::{BarThemeData, ButtonBarConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building or resolving configuration.
///
/// These are precondition violations: the value is rejected, never clamped.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("Theme parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reject NaN, infinities and negative values.
pub fn check_non_negative(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(value)
}

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
    };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 1.0,
    };

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xff) as u8,
            g: ((argb >> 8) & 0xff) as u8,
            b: (argb & 0xff) as u8,
            a: ((argb >> 24) & 0xff) as f32 / 255.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A color stop in a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// The color at this stop.
    pub color: Color,
    /// Position along the gradient (0.0 to 1.0).
    pub position: f32,
}

impl ColorStop {
    pub fn new(color: Color, position: f32) -> Self {
        Self { color, position }
    }
}

/// How children are placed along the main axis of a row.
///
/// When a bar falls back to a column this is reinterpreted as a horizontal
/// (cross-axis) rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MainAxisAlignment {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Whether a row takes all available width or only what its children need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MainAxisSize {
    Min,
    #[default]
    Max,
}

/// Stacking order used when a bar overflows into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalDirection {
    /// First child on top.
    #[default]
    Down,
    /// First child at the bottom.
    Up,
}

/// Horizontal reading direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// How a button bar sizes itself vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutBehavior {
    /// Vertical padding of two padding units around the row.
    #[default]
    Padded,
    /// Minimum height of [`theme::CONSTRAINED_MIN_HEIGHT`], row centered.
    Constrained,
}

/// Insets on each side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    #[serde(default)]
    pub left: f32,
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub right: f32,
    #[serde(default)]
    pub bottom: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Reject negative or non-finite sides.
    pub fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        for side in [self.left, self.top, self.right, self.bottom] {
            check_non_negative(field, side)?;
        }
        Ok(())
    }
}
