//! Button bar assembly.
//!
//! [`ButtonBar`] turns a resolved [`ButtonBarConfig`] into a padded
//! [`ButtonBarRow`]:
//!
//! - every child sits in a [`BarSlot`] with one padding unit on each side and
//!   the configured minimum button size
//! - the bar is inset by one unit horizontally, and either two units
//!   vertically (`Padded`) or centered in a 52px minimum height
//!   (`Constrained`)
//!
//! The padding unit is a quarter of the button padding's horizontal total.

use crate::bar::{ButtonBarRow, LayoutMode};
use crate::{BoxConstraints, DisplayList, Offset, RenderBox, Size};
use barkit_theme::theme::CONSTRAINED_MIN_HEIGHT;
use barkit_theme::{
    BarThemeData, ButtonBarConfig, ConfigError, EdgeInsets, LayoutBehavior, TextDirection,
};
use tracing::trace;

/// A child wrapped with horizontal padding and a minimum size.
#[derive(Debug)]
pub struct BarSlot {
    child: Box<dyn RenderBox>,
    padding: EdgeInsets,
    min_width: f32,
    min_height: f32,
    child_offset: Offset,
    size: Size,
}

impl BarSlot {
    pub fn new(child: Box<dyn RenderBox>, padding_unit: f32, min_width: f32, min_height: f32) -> Self {
        Self {
            child,
            padding: EdgeInsets::symmetric(padding_unit, 0.0),
            min_width,
            min_height,
            child_offset: Offset::ZERO,
            size: Size::ZERO,
        }
    }

    pub fn child(&self) -> &dyn RenderBox {
        self.child.as_ref()
    }

    /// Offset of the wrapped child inside the slot.
    pub fn child_offset(&self) -> Offset {
        self.child_offset
    }
}

impl RenderBox for BarSlot {
    fn min_intrinsic_width(&self, height: f32) -> f32 {
        self.child.min_intrinsic_width(height).max(self.min_width) + self.padding.horizontal()
    }

    fn max_intrinsic_width(&self, height: f32) -> f32 {
        self.child.max_intrinsic_width(height).max(self.min_width) + self.padding.horizontal()
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        let inner = (width - self.padding.horizontal()).max(0.0);
        self.child.min_intrinsic_height(inner).max(self.min_height)
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        let inner = (width - self.padding.horizontal()).max(0.0);
        self.child.max_intrinsic_height(inner).max(self.min_height)
    }

    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        let inner = constraints
            .deflate(&self.padding)
            .enforce_min(self.min_width, self.min_height);
        let child_size = self.child.layout(inner);

        self.size = constraints.constrain(Size::new(
            child_size.width + self.padding.horizontal(),
            child_size.height + self.padding.vertical(),
        ));
        self.child_offset = Offset::new(
            self.padding.left,
            (self.size.height - child_size.height) / 2.0,
        );
        self.size
    }

    fn size(&self) -> Size {
        self.size
    }

    fn paint(&mut self, list: &mut DisplayList, offset: Offset) {
        self.child.paint(list, offset + self.child_offset);
    }

    fn reassemble(&mut self) {
        self.child.reassemble();
    }
}

/// A themed, padded button bar.
#[derive(Debug)]
pub struct ButtonBar {
    config: ButtonBarConfig,
    row: ButtonBarRow,
    insets: EdgeInsets,
    row_offset: Offset,
    size: Size,
}

impl ButtonBar {
    /// Resolve `explicit` over `ambient` and build the bar.
    pub fn new(
        explicit: &BarThemeData,
        ambient: &BarThemeData,
        ambient_direction: TextDirection,
        children: Vec<Box<dyn RenderBox>>,
    ) -> Result<Self, ConfigError> {
        let config = ButtonBarConfig::resolve(explicit, ambient, ambient_direction)?;
        Self::from_config(config, children)
    }

    /// Build the bar from an already resolved configuration.
    pub fn from_config(
        config: ButtonBarConfig,
        children: Vec<Box<dyn RenderBox>>,
    ) -> Result<Self, ConfigError> {
        let unit = config.padding_unit();
        let slots: Vec<Box<dyn RenderBox>> = children
            .into_iter()
            .map(|child| {
                Box::new(BarSlot::new(
                    child,
                    unit,
                    config.button_min_width,
                    config.button_height,
                )) as Box<dyn RenderBox>
            })
            .collect();

        let row = ButtonBarRow::with_children(config.axis_config()?, slots);
        let insets = match config.layout_behavior {
            LayoutBehavior::Padded => EdgeInsets::symmetric(unit, 2.0 * unit),
            LayoutBehavior::Constrained => EdgeInsets::symmetric(unit, 0.0),
        };

        Ok(Self {
            config,
            row,
            insets,
            row_offset: Offset::ZERO,
            size: Size::ZERO,
        })
    }

    pub fn config(&self) -> &ButtonBarConfig {
        &self.config
    }

    pub fn row(&self) -> &ButtonBarRow {
        &self.row
    }

    /// Offset of the inner row inside the bar.
    pub fn row_offset(&self) -> Offset {
        self.row_offset
    }

    pub fn layout_mode(&self) -> Option<LayoutMode> {
        self.row.layout_mode()
    }

    pub fn overflow(&self) -> f32 {
        self.row.overflow()
    }

    fn min_height(&self) -> f32 {
        match self.config.layout_behavior {
            LayoutBehavior::Padded => 0.0,
            LayoutBehavior::Constrained => CONSTRAINED_MIN_HEIGHT,
        }
    }
}

impl RenderBox for ButtonBar {
    fn min_intrinsic_width(&self, height: f32) -> f32 {
        self.row.min_intrinsic_width(height) + self.insets.horizontal()
    }

    fn max_intrinsic_width(&self, height: f32) -> f32 {
        self.row.max_intrinsic_width(height) + self.insets.horizontal()
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        let inner = (width - self.insets.horizontal()).max(0.0);
        (self.row.min_intrinsic_height(inner) + self.insets.vertical()).max(self.min_height())
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        let inner = (width - self.insets.horizontal()).max(0.0);
        (self.row.max_intrinsic_height(inner) + self.insets.vertical()).max(self.min_height())
    }

    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        let outer = constraints.enforce_min(0.0, self.min_height());
        let inner = outer.deflate(&self.insets);
        let row_constraints = match self.config.layout_behavior {
            LayoutBehavior::Padded => inner,
            LayoutBehavior::Constrained => inner.loosen(),
        };

        let row_size = self.row.layout(row_constraints);
        self.size = outer.constrain(Size::new(
            row_size.width + self.insets.horizontal(),
            row_size.height + self.insets.vertical(),
        ));

        let free_height = self.size.height - self.insets.vertical() - row_size.height;
        self.row_offset = Offset::new(
            self.insets.left,
            self.insets.top + (free_height / 2.0).max(0.0),
        );

        trace!(
            behavior = ?self.config.layout_behavior,
            width = self.size.width,
            height = self.size.height,
            row_x = self.row_offset.x,
            row_y = self.row_offset.y,
            "button bar assembled"
        );
        self.size
    }

    fn size(&self) -> Size {
        self.size
    }

    fn paint(&mut self, list: &mut DisplayList, offset: Offset) {
        self.row.paint(list, offset + self.row_offset);
    }

    fn reassemble(&mut self) {
        self.row.reassemble();
    }
}
