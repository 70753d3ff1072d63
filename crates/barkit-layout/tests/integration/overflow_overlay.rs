//! Overflow overlay integration tests
//!
//! These tests verify that the overlay:
//! - Emits one marker region per overflowing edge and none otherwise
//! - Formats labels with the documented precision
//! - Reports once per overflow episode, re-armed by `reassemble`

use crate::support::*;
use barkit_common::{MemorySink, Severity};
use barkit_layout::{
    calculate_overflow_regions, format_pixels, AxisConfig, BoxConstraints, DisplayCommand,
    DisplayList, Offset, OverflowIndicator, OverflowSide, Rect, RelativeOverflow, RenderBox,
};
use std::sync::Arc;

fn overflowing_column() -> (barkit_layout::ButtonBarRow, MemorySink) {
    // Two 40px children stacked in 50px: 30px past the bottom.
    let (mut bar, sink) = recording_bar(AxisConfig::default(), &[(200.0, 40.0), (200.0, 40.0)]);
    bar.layout(BoxConstraints::new(0.0, 300.0, 0.0, 50.0));
    (bar, sink)
}

fn gradient_count(list: &DisplayList) -> usize {
    list.commands
        .iter()
        .filter(|c| matches!(c, DisplayCommand::LinearGradient { .. }))
        .count()
}

// ============================================================================
// Regions
// ============================================================================

#[test]
fn test_no_regions_when_contained() {
    let container = Rect::new(0.0, 0.0, 200.0, 100.0);
    for child in [container, Rect::new(10.0, 10.0, 50.0, 50.0)] {
        let overflow = RelativeOverflow::between(container, child);
        assert!(!overflow.any());
        assert!(calculate_overflow_regions(&overflow, container).is_empty());
    }
}

#[test]
fn test_one_region_per_overflowing_edge() {
    let container = Rect::new(0.0, 0.0, 200.0, 100.0);
    let cases = [
        (Rect::new(0.0, 0.0, 200.0, 130.0), vec![OverflowSide::Bottom]),
        (Rect::new(-5.0, 0.0, 210.0, 100.0), vec![OverflowSide::Left, OverflowSide::Right]),
        (
            Rect::new(-1.0, -1.0, 202.0, 102.0),
            vec![
                OverflowSide::Left,
                OverflowSide::Right,
                OverflowSide::Top,
                OverflowSide::Bottom,
            ],
        ),
    ];

    for (child, sides) in cases {
        let overflow = RelativeOverflow::between(container, child);
        let regions = calculate_overflow_regions(&overflow, container);
        let found: Vec<OverflowSide> = regions.iter().map(|r| r.side).collect();
        assert_eq!(found, sides);
    }
}

#[test]
fn test_region_bands_are_a_tenth_of_the_container() {
    let container = Rect::new(0.0, 0.0, 200.0, 100.0);
    let overflow = RelativeOverflow::between(container, Rect::new(-3.0, 0.0, 200.0, 120.0));
    let regions = calculate_overflow_regions(&overflow, container);

    let left = regions.iter().find(|r| r.side == OverflowSide::Left).unwrap();
    assert_near(left.rect.width, 20.0, 1e-4);
    assert_eq!(left.rect.height, 100.0);
    assert_near(left.rotation, std::f32::consts::FRAC_PI_2, 1e-6);

    let bottom = regions.iter().find(|r| r.side == OverflowSide::Bottom).unwrap();
    assert_near(bottom.rect.y, 90.0, 1e-4);
    assert_near(bottom.rect.height, 10.0, 1e-4);
    assert_eq!(bottom.rect.width, 200.0);
    assert_eq!(bottom.rotation, 0.0);
    assert_eq!(bottom.label, "BOTTOM OVERFLOWED BY 20 PIXELS");
}

#[test]
fn test_label_precision() {
    assert_eq!(format_pixels(12.0), "12");
    assert_eq!(format_pixels(3.456), "3.5");
    assert_eq!(format_pixels(0.456), "0.456");
}

// ============================================================================
// Painting through the bar
// ============================================================================

#[test]
fn test_overflowing_bar_paints_marker_and_label() {
    let (mut bar, _sink) = overflowing_column();
    assert_eq!(bar.overflow(), 30.0);

    let mut list = DisplayList::new();
    bar.paint(&mut list, Offset::new(10.0, 10.0));

    assert_eq!(gradient_count(&list), 1);
    assert!(list.texts().contains(&"BOTTOM OVERFLOWED BY 30 PIXELS"));
    assert!(matches!(list.commands[0], DisplayCommand::PushClip(_)));
    assert!(list
        .commands
        .iter()
        .any(|c| matches!(c, DisplayCommand::PushTransform { .. })));
}

#[test]
fn test_fitting_bar_paints_no_marker() {
    let (mut bar, sink) = recording_bar(AxisConfig::default(), &[(100.0, 40.0)]);
    bar.layout(BoxConstraints::new(0.0, 300.0, 0.0, 50.0));

    let mut list = DisplayList::new();
    bar.paint(&mut list, Offset::ZERO);

    assert_eq!(gradient_count(&list), 0);
    assert!(list
        .commands
        .iter()
        .all(|c| !matches!(c, DisplayCommand::PushClip(_))));
    assert!(sink.is_empty());
}

#[test]
fn test_report_is_one_shot_until_reassemble() {
    let (mut bar, sink) = overflowing_column();

    for _ in 0..3 {
        bar.paint(&mut DisplayList::new(), Offset::ZERO);
    }
    assert_eq!(sink.len(), 1);

    let report = &sink.reports()[0];
    assert_eq!(report.source, "ButtonBarRow");
    assert_eq!(report.severity, Severity::Warning);
    assert_eq!(
        report.summary,
        "A ButtonBarRow overflowed by 30 pixels on the bottom."
    );
    assert!(!report.hints.is_empty());

    bar.reassemble();
    bar.paint(&mut DisplayList::new(), Offset::ZERO);
    bar.paint(&mut DisplayList::new(), Offset::ZERO);
    assert_eq!(sink.len(), 2);
}

#[test]
fn test_label_layout_is_cached_across_paints() {
    let (mut bar, _sink) = overflowing_column();
    for _ in 0..4 {
        bar.paint(&mut DisplayList::new(), Offset::ZERO);
    }

    let indicator = bar.overflow_indicator().unwrap();
    assert_eq!(indicator.label_layout_count(), 1);
    assert!(!indicator.is_report_pending());
}

#[test]
fn test_standalone_indicator_reports_every_edge() {
    let sink = MemorySink::new();
    let mut indicator = OverflowIndicator::new("Panel", Arc::new(sink.clone()))
        .with_hints(vec!["Consider a scroll view.".to_string()]);

    let container = Rect::new(0.0, 0.0, 100.0, 100.0);
    let child = Rect::new(-2.5, 0.0, 112.5, 100.0);
    let painted = indicator.paint(&mut DisplayList::new(), Offset::ZERO, container, child);

    assert_eq!(painted, 2);
    let report = &sink.reports()[0];
    assert_eq!(
        report.summary,
        "A Panel overflowed by 2.5 pixels on the left and 10 pixels on the right."
    );
    assert_eq!(report.hints.last().map(String::as_str), Some("Consider a scroll view."));
}
