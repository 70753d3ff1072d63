//! Box constraints for constraint-based layout.
//!
//! Constraints flow down the tree as min/max bounds; sizes flow back up.
//! A `max_*` of `f32::INFINITY` means unbounded on that axis.

use crate::Size;
use barkit_theme::EdgeInsets;

/// Min/max bounds a box must size itself within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxConstraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Default for BoxConstraints {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl BoxConstraints {
    /// Unbounded constraints (infinite max, zero min).
    pub const UNBOUNDED: Self = Self {
        min_width: 0.0,
        max_width: f32::INFINITY,
        min_height: 0.0,
        max_height: f32::INFINITY,
    };

    pub fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        debug_assert!(min_width >= 0.0 && min_width <= max_width, "bad width bounds");
        debug_assert!(min_height >= 0.0 && min_height <= max_height, "bad height bounds");
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Exact size required.
    pub fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Exact width, height anywhere from zero to `max_height`.
    pub fn tight_width(width: f32, max_height: f32) -> Self {
        Self::new(width, width, 0.0, max_height)
    }

    /// Zero minimums with the given maximums.
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self::new(0.0, max_width, 0.0, max_height)
    }

    /// Constrained width, unbounded height.
    pub fn with_max_width(max_width: f32) -> Self {
        Self::new(0.0, max_width, 0.0, f32::INFINITY)
    }

    /// Clamp a width to these bounds.
    pub fn constrain_width(&self, width: f32) -> f32 {
        width.max(self.min_width).min(self.max_width)
    }

    /// Clamp a height to these bounds.
    pub fn constrain_height(&self, height: f32) -> f32 {
        height.max(self.min_height).min(self.max_height)
    }

    /// Constrain a size to these bounds.
    pub fn constrain(&self, size: Size) -> Size {
        debug_assert!(!size.width.is_nan(), "NaN width in layout");
        debug_assert!(!size.height.is_nan(), "NaN height in layout");
        Size::new(
            self.constrain_width(size.width),
            self.constrain_height(size.height),
        )
    }

    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    /// Whether these are tight constraints (min == max).
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Shrink constraints by insets. Never goes below zero.
    pub fn deflate(&self, insets: &EdgeInsets) -> Self {
        let horizontal = insets.horizontal();
        let vertical = insets.vertical();
        let min_width = (self.min_width - horizontal).max(0.0);
        let min_height = (self.min_height - vertical).max(0.0);
        Self {
            min_width,
            max_width: (self.max_width - horizontal).max(min_width),
            min_height,
            max_height: (self.max_height - vertical).max(min_height),
        }
    }

    /// Raise the minimums to at least `min_width`/`min_height`, staying
    /// within the maximums.
    pub fn enforce_min(&self, min_width: f32, min_height: f32) -> Self {
        Self {
            min_width: self.min_width.max(min_width).min(self.max_width),
            max_width: self.max_width,
            min_height: self.min_height.max(min_height).min(self.max_height),
            max_height: self.max_height,
        }
    }

    /// Drop the minimums, keep the maximums.
    pub fn loosen(&self) -> Self {
        Self::loose(self.max_width, self.max_height)
    }
}
