//! Adaptive row/column layout for button bars.
//!
//! A [`ButtonBarRow`] lays its children out in a single horizontal row when
//! their max intrinsic widths fit in the available width. When they do not,
//! it stacks them vertically instead and reinterprets the main-axis
//! alignment as a horizontal rule for each stacked child.
//!
//! The algorithm:
//! 1. Probe max intrinsic widths in child order, stopping as soon as the
//!    running total exceeds the max width (column mode)
//! 2. Row mode: tight-width layout, main-axis distribution, vertical centering
//! 3. Column mode: stack in overflow direction, align each child horizontally,
//!    record how far the stack exceeds the max height
//! 4. Paint: clip and hand the overflow to the [`OverflowIndicator`]

use crate::intrinsic_cache::IntrinsicWidthTable;
use crate::overflow::OverflowIndicator;
use crate::{
    AxisConfig, BarChild, BoxConstraints, ChildId, DisplayCommand, DisplayList,
    MainAxisAlignment, MainAxisSize, Offset, Rect, RenderBox, Size, TextDirection,
    VerticalDirection,
};
use tracing::{debug, trace};

/// Overflow at or below this amount is treated as rounding noise.
pub const OVERFLOW_EPSILON: f32 = 1e-3;

/// Arrangement chosen by the last layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Row,
    Column,
}

/// A row of children that falls back to a column when it runs out of width.
#[derive(Debug)]
pub struct ButtonBarRow {
    children: Vec<BarChild>,
    next_id: u64,
    config: AxisConfig,
    size: Size,
    mode: Option<LayoutMode>,
    overflow: f32,
    indicator: Option<OverflowIndicator>,
}

impl ButtonBarRow {
    /// Empty bar. Debug builds get an overflow indicator reporting through
    /// `tracing`.
    pub fn new(config: AxisConfig) -> Self {
        Self {
            children: Vec::new(),
            next_id: 1,
            config,
            size: Size::ZERO,
            mode: None,
            overflow: 0.0,
            indicator: OverflowIndicator::for_debug_build("ButtonBarRow"),
        }
    }

    /// Bar with the given children, in order.
    pub fn with_children(config: AxisConfig, children: Vec<Box<dyn RenderBox>>) -> Self {
        let mut bar = Self::new(config);
        for child in children {
            bar.push(child);
        }
        bar
    }

    /// Replace (or remove, with `None`) the overflow indicator.
    pub fn with_overflow_indicator(mut self, indicator: Option<OverflowIndicator>) -> Self {
        self.indicator = indicator;
        self
    }

    /// The installed overflow indicator, if any.
    pub fn overflow_indicator(&self) -> Option<&OverflowIndicator> {
        self.indicator.as_ref()
    }

    /// Axis configuration used by the next layout pass.
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// New configuration; takes effect on the next layout pass.
    pub fn set_config(&mut self, config: AxisConfig) {
        self.config = config;
    }

    /// Append a child and return its id.
    pub fn push(&mut self, child: Box<dyn RenderBox>) -> ChildId {
        let id = ChildId(self.next_id);
        self.next_id += 1;
        self.children.push(BarChild::new(id, child));
        id
    }

    /// Remove a child by id.
    pub fn remove(&mut self, id: ChildId) -> Option<Box<dyn RenderBox>> {
        let index = self.children.iter().position(|child| child.id == id)?;
        Some(self.children.remove(index).render)
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn children(&self) -> &[BarChild] {
        &self.children
    }

    pub fn child(&self, id: ChildId) -> Option<&BarChild> {
        self.children.iter().find(|child| child.id == id)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Mode chosen by the last layout pass, `None` before the first one.
    pub fn layout_mode(&self) -> Option<LayoutMode> {
        self.mode
    }

    /// Vertical excess of the last pass. Always zero in row mode.
    pub fn overflow(&self) -> f32 {
        self.overflow
    }

    /// True if the last pass overflowed by more than [`OVERFLOW_EPSILON`].
    pub fn has_overflow(&self) -> bool {
        self.overflow > OVERFLOW_EPSILON
    }

    fn spacing(&self) -> f32 {
        self.config.overflow_button_spacing().unwrap_or(0.0)
    }

    fn total_spacing(&self) -> f32 {
        self.spacing() * self.children.len().saturating_sub(1) as f32
    }

    /// Single forward walk over max intrinsic widths.
    ///
    /// Returns the table and `true` for row mode. The walk stops at the first
    /// child that pushes the total past `max_width`.
    fn measure_children(&self, max_width: f32) -> (IntrinsicWidthTable, bool) {
        let mut widths = IntrinsicWidthTable::with_capacity(self.children.len());
        for child in &self.children {
            let width = child.render.max_intrinsic_width(f32::INFINITY);
            widths.store(child.id, width);
            if widths.total() > max_width {
                trace!(
                    child = %child.id,
                    measured = widths.len(),
                    total = widths.total(),
                    max_width,
                    "children exceed max width"
                );
                return (widths, false);
            }
        }
        (widths, true)
    }

    fn layout_row(&mut self, constraints: BoxConstraints, widths: &mut IntrinsicWidthTable) -> Size {
        let total_width = widths.total();

        let mut cross_size: f32 = 0.0;
        for child in &mut self.children {
            // Row mode is only chosen after every child was measured.
            let cached = widths.lookup(child.id);
            debug_assert!(cached.is_some(), "row layout for unmeasured child {}", child.id);
            let width = cached.unwrap_or_else(|| child.render.max_intrinsic_width(f32::INFINITY));
            let child_size = child
                .render
                .layout(BoxConstraints::tight_width(width, constraints.max_height));
            cross_size = cross_size.max(child_size.height);
        }

        let main_size = match self.config.main_axis_size() {
            MainAxisSize::Min => total_width,
            MainAxisSize::Max if constraints.has_bounded_width() => constraints.max_width,
            MainAxisSize::Max => total_width,
        };
        let size = constraints.constrain(Size::new(main_size, cross_size));
        self.overflow = 0.0;

        let remaining = (size.width - total_width).max(0.0);
        let (leading, between) =
            distribute_main_axis(self.config.main_axis_alignment(), remaining, self.children.len());

        match self.config.text_direction() {
            TextDirection::Ltr => {
                let mut x = leading;
                for child in &mut self.children {
                    let child_size = child.render.size();
                    child.offset = Offset::new(x, (size.height - child_size.height) / 2.0);
                    x += child_size.width + between;
                }
            }
            TextDirection::Rtl => {
                let mut x = size.width - leading;
                for child in &mut self.children {
                    let child_size = child.render.size();
                    x -= child_size.width;
                    child.offset = Offset::new(x, (size.height - child_size.height) / 2.0);
                    x -= between;
                }
            }
        }

        let (lookups, hits) = widths.stats();
        trace!(
            total_width,
            remaining,
            leading,
            between,
            lookups,
            hits,
            "row layout"
        );
        size
    }

    fn layout_column(&mut self, constraints: BoxConstraints) -> Size {
        let child_constraints = BoxConstraints::with_max_width(constraints.max_width);
        let spacing = self.spacing();
        let alignment = self.config.main_axis_alignment();
        let direction = self.config.text_direction();

        let order: Vec<usize> = match self.config.overflow_direction() {
            VerticalDirection::Down => (0..self.children.len()).collect(),
            VerticalDirection::Up => (0..self.children.len()).rev().collect(),
        };

        let mut y = 0.0;
        for (position, &index) in order.iter().enumerate() {
            let child = &mut self.children[index];
            let child_size = child.render.layout(child_constraints);
            let x = column_child_x(alignment, direction, constraints.max_width, child_size.width);
            child.offset = Offset::new(x, y);
            trace!(child = %child.id, x, y, height = child_size.height, "stacked child");

            y += child_size.height;
            if position + 1 < order.len() {
                y += spacing;
            }
        }

        let size = constraints.constrain(Size::new(constraints.max_width, y));
        self.overflow = (y - constraints.max_height).max(0.0);
        size
    }

    fn paint_children(&mut self, list: &mut DisplayList, offset: Offset) {
        for child in &mut self.children {
            child.render.paint(list, offset + child.offset);
        }
    }

    /// Children's max intrinsic widths at unbounded height, summed.
    fn total_intrinsic_width(&self) -> f32 {
        self.children
            .iter()
            .map(|child| child.render.max_intrinsic_width(f32::INFINITY))
            .sum()
    }
}

/// Leading and between space for a row with `remaining` free space.
fn distribute_main_axis(alignment: MainAxisAlignment, remaining: f32, count: usize) -> (f32, f32) {
    let n = count as f32;
    match alignment {
        MainAxisAlignment::Start => (0.0, 0.0),
        MainAxisAlignment::End => (remaining, 0.0),
        MainAxisAlignment::Center => (remaining / 2.0, 0.0),
        MainAxisAlignment::SpaceBetween => {
            if count > 1 {
                (0.0, remaining / (n - 1.0))
            } else {
                (0.0, 0.0)
            }
        }
        MainAxisAlignment::SpaceAround => {
            if count > 0 {
                (remaining / (2.0 * n), remaining / n)
            } else {
                (0.0, 0.0)
            }
        }
        MainAxisAlignment::SpaceEvenly => {
            let space = remaining / (n + 1.0);
            (space, space)
        }
    }
}

/// Horizontal offset of a stacked child.
fn column_child_x(
    alignment: MainAxisAlignment,
    direction: TextDirection,
    available: f32,
    child_width: f32,
) -> f32 {
    let trailing = available - child_width;
    match alignment {
        MainAxisAlignment::Center => trailing / 2.0,
        MainAxisAlignment::End => match direction {
            TextDirection::Ltr => trailing,
            TextDirection::Rtl => 0.0,
        },
        MainAxisAlignment::Start
        | MainAxisAlignment::SpaceBetween
        | MainAxisAlignment::SpaceAround
        | MainAxisAlignment::SpaceEvenly => match direction {
            TextDirection::Ltr => 0.0,
            TextDirection::Rtl => trailing,
        },
    }
}

impl RenderBox for ButtonBarRow {
    fn min_intrinsic_width(&self, height: f32) -> f32 {
        // The column fallback only ever needs the widest child.
        self.children
            .iter()
            .map(|child| child.render.min_intrinsic_width(height))
            .fold(0.0, f32::max)
    }

    fn max_intrinsic_width(&self, height: f32) -> f32 {
        self.children
            .iter()
            .map(|child| child.render.max_intrinsic_width(height))
            .sum()
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        if self.total_intrinsic_width() <= width {
            self.children
                .iter()
                .map(|child| {
                    let child_width = child.render.max_intrinsic_width(f32::INFINITY);
                    child.render.min_intrinsic_height(child_width)
                })
                .fold(0.0, f32::max)
        } else {
            self.children
                .iter()
                .map(|child| child.render.min_intrinsic_height(width))
                .sum::<f32>()
                + self.total_spacing()
        }
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        if self.total_intrinsic_width() <= width {
            self.children
                .iter()
                .map(|child| {
                    let child_width = child.render.max_intrinsic_width(f32::INFINITY);
                    child.render.max_intrinsic_height(child_width)
                })
                .fold(0.0, f32::max)
        } else {
            self.children
                .iter()
                .map(|child| child.render.max_intrinsic_height(width))
                .sum::<f32>()
                + self.total_spacing()
        }
    }

    fn layout(&mut self, constraints: BoxConstraints) -> Size {
        let (mut widths, fits) = self.measure_children(constraints.max_width);
        let mode = if fits { LayoutMode::Row } else { LayoutMode::Column };

        if self.mode != Some(mode) {
            debug!(
                ?mode,
                previous = ?self.mode,
                max_width = constraints.max_width,
                "button bar layout mode changed"
            );
        }

        self.size = match mode {
            LayoutMode::Row => self.layout_row(constraints, &mut widths),
            LayoutMode::Column => self.layout_column(constraints),
        };
        self.mode = Some(mode);

        trace!(
            ?mode,
            children = self.children.len(),
            width = self.size.width,
            height = self.size.height,
            overflow = self.overflow,
            "button bar layout"
        );
        self.size
    }

    fn size(&self) -> Size {
        self.size
    }

    fn paint(&mut self, list: &mut DisplayList, offset: Offset) {
        if !self.has_overflow() {
            self.paint_children(list, offset);
            return;
        }
        if self.size.is_empty() {
            return;
        }

        list.push(DisplayCommand::PushClip(Rect::from_origin_size(offset, self.size)));
        self.paint_children(list, offset);
        list.push(DisplayCommand::PopClip);

        let container = Rect::from_origin_size(Offset::ZERO, self.size);
        let overflow_rect = Rect::new(0.0, 0.0, 0.0, self.size.height + self.overflow);
        if let Some(indicator) = &mut self.indicator {
            indicator.paint(list, offset, container, overflow_rect);
        }
    }

    fn reassemble(&mut self) {
        if let Some(indicator) = &mut self.indicator {
            indicator.reassemble();
        }
        for child in &mut self.children {
            child.render.reassemble();
        }
    }
}
