//! The render box seam between containers and their children.

use crate::{BoxConstraints, DisplayList, Offset, Size};
use std::fmt;

/// A node in the render tree that can be measured, laid out, and painted.
pub trait RenderBox: fmt::Debug {
    /// Smallest width the box can take without overflowing, at `height`.
    fn min_intrinsic_width(&self, height: f32) -> f32;

    /// Width the box would take given unlimited width, at `height`.
    fn max_intrinsic_width(&self, height: f32) -> f32;

    /// Smallest height the box needs at `width`.
    fn min_intrinsic_height(&self, width: f32) -> f32;

    /// Height the box would take at `width` given unlimited height.
    fn max_intrinsic_height(&self, width: f32) -> f32;

    /// Lay the box out within `constraints` and return its size.
    fn layout(&mut self, constraints: BoxConstraints) -> Size;

    /// Size from the last layout pass.
    fn size(&self) -> Size;

    /// Append paint commands with the box's top-left corner at `offset`.
    fn paint(&mut self, list: &mut DisplayList, offset: Offset);

    /// Re-arm any one-shot debug instrumentation (e.g. after a hot reload).
    fn reassemble(&mut self) {}
}

/// Stable identity of a child within its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChildId(pub u64);

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A child slot: the child itself plus the offset its parent assigned.
#[derive(Debug)]
pub struct BarChild {
    pub id: ChildId,
    pub render: Box<dyn RenderBox>,
    /// Position relative to the parent's top-left corner.
    pub offset: Offset,
}

impl BarChild {
    pub fn new(id: ChildId, render: Box<dyn RenderBox>) -> Self {
        Self {
            id,
            render,
            offset: Offset::ZERO,
        }
    }

    pub fn size(&self) -> Size {
        self.render.size()
    }

    /// Rectangle occupied by the child in its parent's coordinates.
    pub fn rect(&self) -> crate::Rect {
        crate::Rect::from_origin_size(self.offset, self.render.size())
    }
}
