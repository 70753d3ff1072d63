//! Axis configuration consumed by the adaptive row/column engine.

use crate::{check_non_negative, ConfigError, MainAxisAlignment, MainAxisSize, TextDirection, VerticalDirection};

/// Validated axis configuration.
///
/// Fields are private so that an `AxisConfig` in hand always satisfies its
/// invariants: `overflow_button_spacing`, when set, is finite and >= 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisConfig {
    main_axis_alignment: MainAxisAlignment,
    main_axis_size: MainAxisSize,
    overflow_direction: VerticalDirection,
    overflow_button_spacing: Option<f32>,
    text_direction: TextDirection,
}

impl AxisConfig {
    pub fn new(
        main_axis_alignment: MainAxisAlignment,
        main_axis_size: MainAxisSize,
        overflow_direction: VerticalDirection,
        overflow_button_spacing: Option<f32>,
        text_direction: TextDirection,
    ) -> Result<Self, ConfigError> {
        if let Some(spacing) = overflow_button_spacing {
            check_non_negative("overflow_button_spacing", spacing)?;
        }
        Ok(Self {
            main_axis_alignment,
            main_axis_size,
            overflow_direction,
            overflow_button_spacing,
            text_direction,
        })
    }

    pub fn builder() -> AxisConfigBuilder {
        AxisConfigBuilder::default()
    }

    pub fn main_axis_alignment(&self) -> MainAxisAlignment {
        self.main_axis_alignment
    }

    pub fn main_axis_size(&self) -> MainAxisSize {
        self.main_axis_size
    }

    pub fn overflow_direction(&self) -> VerticalDirection {
        self.overflow_direction
    }

    pub fn overflow_button_spacing(&self) -> Option<f32> {
        self.overflow_button_spacing
    }

    pub fn text_direction(&self) -> TextDirection {
        self.text_direction
    }
}

/// Builder for [`AxisConfig`]. Validation happens in [`AxisConfigBuilder::build`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisConfigBuilder {
    main_axis_alignment: MainAxisAlignment,
    main_axis_size: MainAxisSize,
    overflow_direction: VerticalDirection,
    overflow_button_spacing: Option<f32>,
    text_direction: TextDirection,
}

impl AxisConfigBuilder {
    pub fn main_axis_alignment(mut self, alignment: MainAxisAlignment) -> Self {
        self.main_axis_alignment = alignment;
        self
    }

    pub fn main_axis_size(mut self, size: MainAxisSize) -> Self {
        self.main_axis_size = size;
        self
    }

    pub fn overflow_direction(mut self, direction: VerticalDirection) -> Self {
        self.overflow_direction = direction;
        self
    }

    pub fn overflow_button_spacing(mut self, spacing: f32) -> Self {
        self.overflow_button_spacing = Some(spacing);
        self
    }

    pub fn text_direction(mut self, direction: TextDirection) -> Self {
        self.text_direction = direction;
        self
    }

    pub fn build(self) -> Result<AxisConfig, ConfigError> {
        AxisConfig::new(
            self.main_axis_alignment,
            self.main_axis_size,
            self.overflow_direction,
            self.overflow_button_spacing,
            self.text_direction,
        )
    }
}
