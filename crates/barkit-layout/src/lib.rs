//! # BarKit Layout
//!
//! Layout engine for button bars.
//!
//! ## Design Goals
//!
//! 1. **Adaptive bar**: Lay children out in one row when they fit, fall back
//!    to a column when they do not
//! 2. **Directional geometry**: Mirror row placement for right-to-left text
//! 3. **Overflow accounting**: Track vertical excess and flag it visually in
//!    debug builds
//! 4. **Display list**: Generate paint commands for a host renderer

pub mod bar;
pub mod button_bar;
pub mod constraints;
pub mod intrinsic_cache;
pub mod leaf;
pub mod overflow;
pub mod render_box;
pub mod text;

pub use bar::{ButtonBarRow, LayoutMode, OVERFLOW_EPSILON};
pub use button_bar::{BarSlot, ButtonBar};
pub use constraints::BoxConstraints;
pub use intrinsic_cache::IntrinsicWidthTable;
pub use leaf::{FixedBox, TextBox};
pub use overflow::{
    calculate_overflow_regions, format_pixels, OverflowIndicator, OverflowRegion, OverflowSide,
    RelativeOverflow,
};
pub use render_box::{BarChild, ChildId, RenderBox};
pub use text::{SimpleTextMeasurer, TextMeasurer, TextMetrics};

pub use barkit_theme::{
    AxisConfig, Color, ColorStop, MainAxisAlignment, MainAxisSize, TextDirection,
    VerticalDirection,
};

use std::ops::{Add, Neg, Sub};

/// A 2D offset (or point) in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset::new(-self.x, -self.y)
    }
}

/// A 2D size in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A 2D rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Rectangle with the given origin and size.
    pub fn from_origin_size(origin: Offset, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center_left(&self) -> Offset {
        Offset::new(self.x, self.y + self.height / 2.0)
    }

    pub fn center_right(&self) -> Offset {
        Offset::new(self.right(), self.y + self.height / 2.0)
    }

    pub fn top_center(&self) -> Offset {
        Offset::new(self.x + self.width / 2.0, self.y)
    }

    pub fn bottom_center(&self) -> Offset {
        Offset::new(self.x + self.width / 2.0, self.bottom())
    }

    /// Same rectangle moved by `offset`.
    pub fn shift(&self, offset: Offset) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// True if `other` lies entirely inside this rectangle (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Build a 2D affine matrix that rotates by `radians` and then translates to
/// `(tx, ty)`.
///
/// The matrix is [a, b, c, d, e, f] representing:
/// | a c e |
/// | b d f |
/// | 0 0 1 |
pub fn translate_rotate_matrix(tx: f32, ty: f32, radians: f32) -> [f32; 6] {
    let (sin, cos) = radians.sin_cos();
    [cos, sin, -sin, cos, tx, ty]
}

/// A paint command for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCommand {
    /// Fill a rectangle with a solid color.
    SolidColor(Color, Rect),
    /// Fill a rectangle with a linear gradient running from `start` to `end`.
    /// With `repeating`, the stops tile along the gradient line.
    LinearGradient {
        rect: Rect,
        start: Offset,
        end: Offset,
        stops: Vec<ColorStop>,
        repeating: bool,
    },
    /// Draw a single line of text with its top-left corner at (x, y).
    Text {
        text: String,
        x: f32,
        y: f32,
        color: Color,
        font_size: f32,
        font_weight: u16,
    },
    /// Push clip rect.
    PushClip(Rect),
    /// Pop clip rect.
    PopClip,
    /// Push a 2D transform matrix, see [`translate_rotate_matrix`].
    PushTransform { matrix: [f32; 6] },
    /// Pop a transform matrix.
    PopTransform,
}

/// A display list of paint commands.
#[derive(Debug, Default, Clone)]
pub struct DisplayList {
    pub commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Texts drawn by this list, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DisplayCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
