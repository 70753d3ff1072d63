//! Debug overflow indicator.
//!
//! Given a container rectangle and a child rectangle that extends past it,
//! paints a yellow and black striped band against every overflowing edge,
//! labels each band with the overflow amount, and files one diagnostic
//! report through a [`DiagnosticSink`].
//!
//! The indicator is a capability object: a container owns an
//! `Option<OverflowIndicator>` and calls [`OverflowIndicator::paint`] from its
//! own paint step. Reporting is latched; after the first report the
//! indicator stays quiet until [`OverflowIndicator::reassemble`] re-arms it.

use crate::text::{SimpleTextMeasurer, TextMeasurer};
use crate::{
    translate_rotate_matrix, Color, ColorStop, DisplayCommand, DisplayList, Offset, Rect, Size,
};
use barkit_common::{Diagnostic, DiagnosticSink, TracingSink};
use smallvec::SmallVec;
use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Fraction of the container's width/height covered by a marker band.
pub const INDICATOR_FRACTION: f32 = 0.1;
/// Font size of the overflow labels.
pub const INDICATOR_FONT_SIZE: f32 = 7.5;
/// Gap between a side band's outer edge and its label.
pub const INDICATOR_LABEL_PADDING: f32 = 1.0;
/// Font weight of the overflow labels.
pub const INDICATOR_FONT_WEIGHT: u16 = 800;
/// Side length of one stripe tile.
pub const STRIPE_TILE: f32 = 10.0;

const STRIPE_BLACK: u32 = 0xBF00_0000;
const STRIPE_YELLOW: u32 = 0xBFFF_FF00;
const LABEL_COLOR: u32 = 0xFF90_0000;

/// Edge of the container that content overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowSide {
    Left,
    Top,
    Bottom,
    Right,
}

impl OverflowSide {
    /// Upper-case name used in labels.
    pub fn label(self) -> &'static str {
        match self {
            OverflowSide::Left => "LEFT",
            OverflowSide::Top => "TOP",
            OverflowSide::Bottom => "BOTTOM",
            OverflowSide::Right => "RIGHT",
        }
    }

    fn index(self) -> usize {
        match self {
            OverflowSide::Left => 0,
            OverflowSide::Top => 1,
            OverflowSide::Bottom => 2,
            OverflowSide::Right => 3,
        }
    }
}

impl fmt::Display for OverflowSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverflowSide::Left => "left",
            OverflowSide::Top => "top",
            OverflowSide::Bottom => "bottom",
            OverflowSide::Right => "right",
        };
        f.write_str(name)
    }
}

/// How far a child rectangle sticks out of a container, per edge.
///
/// Positive values overflow; zero or negative values are inside.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RelativeOverflow {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RelativeOverflow {
    pub fn between(container: Rect, child: Rect) -> Self {
        Self {
            left: container.x - child.x,
            top: container.y - child.y,
            right: child.right() - container.right(),
            bottom: child.bottom() - container.bottom(),
        }
    }

    /// True if any edge overflows.
    pub fn any(&self) -> bool {
        self.left > 0.0 || self.top > 0.0 || self.right > 0.0 || self.bottom > 0.0
    }

    /// Overflowing edges with their amounts, in report order.
    pub fn edges(&self) -> SmallVec<[(OverflowSide, f32); 4]> {
        let mut edges = SmallVec::new();
        if self.left > 0.0 {
            edges.push((OverflowSide::Left, self.left));
        }
        if self.top > 0.0 {
            edges.push((OverflowSide::Top, self.top));
        }
        if self.bottom > 0.0 {
            edges.push((OverflowSide::Bottom, self.bottom));
        }
        if self.right > 0.0 {
            edges.push((OverflowSide::Right, self.right));
        }
        edges
    }
}

/// One marker band and its label, in container coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct OverflowRegion {
    pub rect: Rect,
    pub label: String,
    /// Point the label is centered on (before rotation).
    pub label_offset: Offset,
    /// Label rotation in radians.
    pub rotation: f32,
    pub side: OverflowSide,
}

/// Format an overflow amount for a label.
///
/// At least 10 → no decimals; above 1 → one decimal; otherwise three
/// significant digits.
pub fn format_pixels(value: f32) -> String {
    if value >= 10.0 || !value.is_finite() {
        format!("{value:.0}")
    } else if value > 1.0 {
        format!("{value:.1}")
    } else if value <= 0.0 {
        "0".to_string()
    } else {
        // Rounding to three digits can carry into the next decade
        // (0.9996 -> 1.00), so take the exponent after rounding.
        let rounded = format!("{value:.2e}");
        let exponent = rounded
            .split_once('e')
            .and_then(|(_, exp)| exp.parse::<i32>().ok())
            .unwrap_or_else(|| value.log10().floor() as i32);
        let decimals = (2 - exponent).clamp(0, 20) as usize;
        format!("{value:.decimals$}")
    }
}

/// Marker regions for every overflowing edge of `container`.
///
/// Rects and anchors are relative to the container's top-left corner.
pub fn calculate_overflow_regions(
    overflow: &RelativeOverflow,
    container: Rect,
) -> SmallVec<[OverflowRegion; 4]> {
    let mut regions = SmallVec::new();
    let label_inset = INDICATOR_FONT_SIZE + INDICATOR_LABEL_PADDING;

    if overflow.left > 0.0 {
        let rect = Rect::new(
            0.0,
            0.0,
            container.width * INDICATOR_FRACTION,
            container.height,
        );
        regions.push(OverflowRegion {
            rect,
            label: overflow_label(OverflowSide::Left, overflow.left),
            label_offset: rect.center_left() + Offset::new(label_inset, 0.0),
            rotation: FRAC_PI_2,
            side: OverflowSide::Left,
        });
    }
    if overflow.right > 0.0 {
        let rect = Rect::new(
            container.width * (1.0 - INDICATOR_FRACTION),
            0.0,
            container.width * INDICATOR_FRACTION,
            container.height,
        );
        regions.push(OverflowRegion {
            rect,
            label: overflow_label(OverflowSide::Right, overflow.right),
            label_offset: rect.center_right() - Offset::new(label_inset, 0.0),
            rotation: -FRAC_PI_2,
            side: OverflowSide::Right,
        });
    }
    if overflow.top > 0.0 {
        let rect = Rect::new(
            0.0,
            0.0,
            container.width,
            container.height * INDICATOR_FRACTION,
        );
        regions.push(OverflowRegion {
            rect,
            label: overflow_label(OverflowSide::Top, overflow.top),
            label_offset: rect.top_center(),
            rotation: 0.0,
            side: OverflowSide::Top,
        });
    }
    if overflow.bottom > 0.0 {
        let rect = Rect::new(
            0.0,
            container.height * (1.0 - INDICATOR_FRACTION),
            container.width,
            container.height * INDICATOR_FRACTION,
        );
        regions.push(OverflowRegion {
            rect,
            label: overflow_label(OverflowSide::Bottom, overflow.bottom),
            label_offset: rect.bottom_center() - Offset::new(0.0, INDICATOR_FONT_SIZE),
            rotation: 0.0,
            side: OverflowSide::Bottom,
        });
    }

    regions
}

fn overflow_label(side: OverflowSide, amount: f32) -> String {
    format!("{} OVERFLOWED BY {} PIXELS", side.label(), format_pixels(amount))
}

/// Cached layout of one side's label.
#[derive(Debug, Clone)]
struct LabelLayout {
    text: String,
    size: Size,
}

/// Paints overflow markers and files a one-shot diagnostic.
pub struct OverflowIndicator {
    owner: String,
    sink: Arc<dyn DiagnosticSink>,
    measurer: Box<dyn TextMeasurer>,
    hints: Vec<String>,
    report_needed: bool,
    labels: [Option<LabelLayout>; 4],
    label_layouts: usize,
}

impl fmt::Debug for OverflowIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverflowIndicator")
            .field("owner", &self.owner)
            .field("report_needed", &self.report_needed)
            .field("label_layouts", &self.label_layouts)
            .finish_non_exhaustive()
    }
}

impl OverflowIndicator {
    /// Indicator for `owner` (used in the report text) reporting to `sink`.
    pub fn new(owner: impl Into<String>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            owner: owner.into(),
            sink,
            measurer: Box::new(SimpleTextMeasurer),
            hints: Vec::new(),
            report_needed: true,
            labels: Default::default(),
            label_layouts: 0,
        }
    }

    /// Indicator that reports through `tracing`, present only in debug builds.
    pub fn for_debug_build(owner: impl Into<String>) -> Option<Self> {
        if cfg!(debug_assertions) {
            Some(Self::new(owner, Arc::new(TracingSink)))
        } else {
            None
        }
    }

    pub fn with_measurer(mut self, measurer: Box<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    /// Extra lines appended to every report.
    pub fn with_hints(mut self, hints: Vec<String>) -> Self {
        self.hints = hints;
        self
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// True until the next overflow is reported.
    pub fn is_report_pending(&self) -> bool {
        self.report_needed
    }

    /// How many times a label has been (re)measured.
    pub fn label_layout_count(&self) -> usize {
        self.label_layouts
    }

    /// Re-arm the one-shot report.
    pub fn reassemble(&mut self) {
        self.report_needed = true;
    }

    /// Paint markers for `child_rect` overflowing `container_rect`.
    ///
    /// Both rects are in the container's coordinate space; `offset` is where
    /// the container's origin lands in the display list. Returns the number
    /// of marker regions painted.
    pub fn paint(
        &mut self,
        list: &mut DisplayList,
        offset: Offset,
        container_rect: Rect,
        child_rect: Rect,
    ) -> usize {
        let overflow = RelativeOverflow::between(container_rect, child_rect);
        if !overflow.any() {
            return 0;
        }

        let regions = calculate_overflow_regions(&overflow, container_rect);
        for region in &regions {
            list.push(stripe_command(region.rect.shift(offset)));
            self.paint_label(list, offset, region);
        }

        if self.report_needed {
            self.report_needed = false;
            self.report(&overflow);
        }

        regions.len()
    }

    fn paint_label(&mut self, list: &mut DisplayList, offset: Offset, region: &OverflowRegion) {
        let slot = &mut self.labels[region.side.index()];
        let stale = slot
            .as_ref()
            .map_or(true, |layout| layout.text != region.label);
        if stale {
            let metrics =
                self.measurer
                    .measure(&region.label, INDICATOR_FONT_SIZE, INDICATOR_FONT_WEIGHT);
            *slot = Some(LabelLayout {
                text: region.label.clone(),
                size: Size::new(metrics.width, metrics.height),
            });
            self.label_layouts += 1;
        }
        let Some(layout) = slot.as_ref() else {
            return;
        };

        let anchor = region.label_offset + offset;
        let center_offset = Offset::new(-layout.size.width / 2.0, 0.0);

        list.push(DisplayCommand::PushTransform {
            matrix: translate_rotate_matrix(anchor.x, anchor.y, region.rotation),
        });
        list.push(DisplayCommand::SolidColor(
            Color::WHITE,
            Rect::from_origin_size(center_offset, layout.size),
        ));
        list.push(DisplayCommand::Text {
            text: layout.text.clone(),
            x: center_offset.x,
            y: center_offset.y,
            color: Color::from_argb(LABEL_COLOR),
            font_size: INDICATOR_FONT_SIZE,
            font_weight: INDICATOR_FONT_WEIGHT,
        });
        list.push(DisplayCommand::PopTransform);
    }

    fn report(&self, overflow: &RelativeOverflow) {
        let parts: Vec<String> = overflow
            .edges()
            .iter()
            .map(|(side, amount)| format!("{} pixels on the {}", format_pixels(*amount), side))
            .collect();
        let joined = match parts.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
            Some((last, _)) => last.clone(),
            None => return,
        };

        let summary = format!("A {} overflowed by {}.", self.owner, joined);
        warn!(owner = %self.owner, "{summary}");

        let mut diagnostic = Diagnostic::new(self.owner.clone(), summary).with_hint(format!(
            "The overflowing edge of the {} has been marked in the rendering with a yellow and black striped pattern.",
            self.owner
        ));
        for hint in &self.hints {
            diagnostic = diagnostic.with_hint(hint.clone());
        }
        self.sink.report(diagnostic);
    }
}

fn stripe_command(rect: Rect) -> DisplayCommand {
    let black = Color::from_argb(STRIPE_BLACK);
    let yellow = Color::from_argb(STRIPE_YELLOW);
    DisplayCommand::LinearGradient {
        rect,
        start: Offset::ZERO,
        end: Offset::new(STRIPE_TILE, STRIPE_TILE),
        stops: vec![
            ColorStop::new(black, 0.25),
            ColorStop::new(yellow, 0.25),
            ColorStop::new(yellow, 0.75),
            ColorStop::new(black, 0.75),
        ],
        repeating: true,
    }
}
