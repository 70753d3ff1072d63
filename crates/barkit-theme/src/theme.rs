//! Button bar theme data and resolution.
//!
//! Every value goes through the same chain: the value set on the bar itself,
//! then the ambient theme, then a hard default. Text direction falls back to
//! the ambient directionality instead of a constant.

use crate::{
    check_non_negative, AxisConfig, ConfigError, EdgeInsets, LayoutBehavior, MainAxisAlignment,
    MainAxisSize, TextDirection, VerticalDirection,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default alignment of a button bar.
pub const DEFAULT_ALIGNMENT: MainAxisAlignment = MainAxisAlignment::End;
/// Default horizontal padding around each button (from the button theme).
pub const DEFAULT_BUTTON_PADDING_HORIZONTAL: f32 = 16.0;
/// Default minimum button width.
pub const DEFAULT_BUTTON_MIN_WIDTH: f32 = 64.0;
/// Default minimum button height.
pub const DEFAULT_BUTTON_HEIGHT: f32 = 36.0;
/// Minimum bar height for [`LayoutBehavior::Constrained`].
pub const CONSTRAINED_MIN_HEIGHT: f32 = 52.0;

/// Partially specified bar configuration.
///
/// Used both for values set directly on a bar and for the ambient theme.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarThemeData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<MainAxisAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_axis_size: Option<MainAxisSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_padding: Option<EdgeInsets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_min_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_direction: Option<VerticalDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_button_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_direction: Option<TextDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_behavior: Option<LayoutBehavior>,
}

impl BarThemeData {
    /// Parse theme data from JSON. Missing keys stay unset.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let data: BarThemeData = serde_json::from_str(json)?;
        Ok(data)
    }

    /// Serialize to pretty JSON, omitting unset keys.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Values from `self` win; unset values come from `fallback`.
    pub fn merge(&self, fallback: &BarThemeData) -> BarThemeData {
        BarThemeData {
            alignment: self.alignment.or(fallback.alignment),
            main_axis_size: self.main_axis_size.or(fallback.main_axis_size),
            button_padding: self.button_padding.or(fallback.button_padding),
            button_min_width: self.button_min_width.or(fallback.button_min_width),
            button_height: self.button_height.or(fallback.button_height),
            overflow_direction: self.overflow_direction.or(fallback.overflow_direction),
            overflow_button_spacing: self
                .overflow_button_spacing
                .or(fallback.overflow_button_spacing),
            text_direction: self.text_direction.or(fallback.text_direction),
            layout_behavior: self.layout_behavior.or(fallback.layout_behavior),
        }
    }
}

/// Fully resolved bar configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonBarConfig {
    pub alignment: MainAxisAlignment,
    pub main_axis_size: MainAxisSize,
    pub button_padding: EdgeInsets,
    pub button_min_width: f32,
    pub button_height: f32,
    pub overflow_direction: VerticalDirection,
    pub overflow_button_spacing: Option<f32>,
    pub text_direction: TextDirection,
    pub layout_behavior: LayoutBehavior,
}

impl Default for ButtonBarConfig {
    fn default() -> Self {
        Self {
            alignment: DEFAULT_ALIGNMENT,
            main_axis_size: MainAxisSize::Max,
            button_padding: EdgeInsets::symmetric(DEFAULT_BUTTON_PADDING_HORIZONTAL, 0.0),
            button_min_width: DEFAULT_BUTTON_MIN_WIDTH,
            button_height: DEFAULT_BUTTON_HEIGHT,
            overflow_direction: VerticalDirection::Down,
            overflow_button_spacing: None,
            text_direction: TextDirection::Ltr,
            layout_behavior: LayoutBehavior::Padded,
        }
    }
}

impl ButtonBarConfig {
    /// Resolve explicit values over the ambient theme over hard defaults.
    ///
    /// `ambient_direction` is the directionality of the surrounding tree; it
    /// is used when neither source sets a text direction.
    pub fn resolve(
        explicit: &BarThemeData,
        ambient: &BarThemeData,
        ambient_direction: TextDirection,
    ) -> Result<Self, ConfigError> {
        let merged = explicit.merge(ambient);
        let defaults = ButtonBarConfig::default();

        let button_padding = merged.button_padding.unwrap_or(defaults.button_padding);
        button_padding.validate("button_padding")?;

        let button_min_width = check_non_negative(
            "button_min_width",
            merged.button_min_width.unwrap_or(defaults.button_min_width),
        )?;
        let button_height = check_non_negative(
            "button_height",
            merged.button_height.unwrap_or(defaults.button_height),
        )?;
        let overflow_button_spacing = merged
            .overflow_button_spacing
            .map(|spacing| check_non_negative("overflow_button_spacing", spacing))
            .transpose()?;

        let config = ButtonBarConfig {
            alignment: merged.alignment.unwrap_or(defaults.alignment),
            main_axis_size: merged.main_axis_size.unwrap_or(defaults.main_axis_size),
            button_padding,
            button_min_width,
            button_height,
            overflow_direction: merged
                .overflow_direction
                .unwrap_or(defaults.overflow_direction),
            overflow_button_spacing,
            text_direction: merged.text_direction.unwrap_or(ambient_direction),
            layout_behavior: merged.layout_behavior.unwrap_or(defaults.layout_behavior),
        };

        debug!(?config, "resolved button bar config");
        Ok(config)
    }

    /// One quarter of the horizontal button padding.
    ///
    /// Buttons are separated by two units; the bar is inset by one unit.
    pub fn padding_unit(&self) -> f32 {
        self.button_padding.horizontal() / 4.0
    }

    /// Axis configuration for the row/column engine.
    pub fn axis_config(&self) -> Result<AxisConfig, ConfigError> {
        AxisConfig::new(
            self.alignment,
            self.main_axis_size,
            self.overflow_direction,
            self.overflow_button_spacing,
            self.text_direction,
        )
    }
}
