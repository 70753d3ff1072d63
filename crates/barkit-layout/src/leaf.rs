//! Leaf render boxes.

use crate::text::{SimpleTextMeasurer, TextMeasurer, TextMetrics};
use crate::{BoxConstraints, Color, DisplayCommand, DisplayList, Offset, Rect, RenderBox, Size};

/// A box with a fixed preferred size, optionally filled with a color.
#[derive(Debug, Clone)]
pub struct FixedBox {
    preferred: Size,
    color: Option<Color>,
    size: Size,
}

impl FixedBox {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            preferred: Size::new(width, height),
            color: None,
            size: Size::ZERO,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn preferred(&self) -> Size {
        self.preferred
    }
}

impl RenderBox for FixedBox {
    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        self.preferred.width
    }

    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        self.preferred.width
    }

    fn min_intrinsic_height(&self, _width: f32) -> f32 {
        self.preferred.height
    }

    fn max_intrinsic_height(&self, _width: f32) -> f32 {
        self.preferred.height
    }

    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        self.size = constraints.constrain(self.preferred);
        self.size
    }

    fn size(&self) -> Size {
        self.size
    }

    fn paint(&mut self, list: &mut DisplayList, offset: Offset) {
        if let Some(color) = self.color {
            if !self.size.is_empty() {
                list.push(DisplayCommand::SolidColor(
                    color,
                    Rect::from_origin_size(offset, self.size),
                ));
            }
        }
    }
}

/// A single-line text label.
#[derive(Debug)]
pub struct TextBox {
    text: String,
    font_size: f32,
    font_weight: u16,
    color: Color,
    metrics: TextMetrics,
    size: Size,
}

impl TextBox {
    /// Label measured with [`SimpleTextMeasurer`].
    pub fn new(text: impl Into<String>, font_size: f32) -> Self {
        Self::with_measurer(text, font_size, 400, &SimpleTextMeasurer)
    }

    /// Label measured once, up front, with the given measurer.
    pub fn with_measurer(
        text: impl Into<String>,
        font_size: f32,
        font_weight: u16,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let text = text.into();
        let metrics = measurer.measure(&text, font_size, font_weight);
        Self {
            text,
            font_size,
            font_weight,
            color: Color::BLACK,
            metrics,
            size: Size::ZERO,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }
}

impl RenderBox for TextBox {
    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        // Single line: no break opportunities.
        self.metrics.width
    }

    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        self.metrics.width
    }

    fn min_intrinsic_height(&self, _width: f32) -> f32 {
        self.metrics.height
    }

    fn max_intrinsic_height(&self, _width: f32) -> f32 {
        self.metrics.height
    }

    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        self.size = constraints.constrain(Size::new(self.metrics.width, self.metrics.height));
        self.size
    }

    fn size(&self) -> Size {
        self.size
    }

    fn paint(&mut self, list: &mut DisplayList, offset: Offset) {
        if self.text.is_empty() {
            return;
        }
        let x = offset.x + (self.size.width - self.metrics.width) / 2.0;
        let y = offset.y + (self.size.height - self.metrics.height) / 2.0;
        list.push(DisplayCommand::Text {
            text: self.text.clone(),
            x,
            y,
            color: self.color,
            font_size: self.font_size,
            font_weight: self.font_weight,
        });
    }
}
