//! Adaptive layout integration tests
//!
//! These tests drive a [`ButtonBarRow`] through full layout passes and check:
//! - The single forward row/column decision
//! - Main-axis distribution for every alignment, in both text directions
//! - Column stacking order, spacing and the overflow amount

use crate::support::*;
use barkit_layout::{
    AxisConfig, BoxConstraints, ButtonBarRow, LayoutMode, MainAxisAlignment, MainAxisSize, Rect,
    RenderBox, Size, TextDirection, VerticalDirection,
};

const ALL_ALIGNMENTS: [MainAxisAlignment; 6] = [
    MainAxisAlignment::Start,
    MainAxisAlignment::End,
    MainAxisAlignment::Center,
    MainAxisAlignment::SpaceBetween,
    MainAxisAlignment::SpaceAround,
    MainAxisAlignment::SpaceEvenly,
];

fn config(alignment: MainAxisAlignment, direction: TextDirection) -> AxisConfig {
    AxisConfig::builder()
        .main_axis_alignment(alignment)
        .text_direction(direction)
        .build()
        .unwrap()
}

fn three_hundreds() -> [(f32, f32); 3] {
    [(100.0, 36.0), (100.0, 36.0), (100.0, 36.0)]
}

// ============================================================================
// Mode decision
// ============================================================================

#[test]
fn test_row_when_sum_fits() {
    for max_width in [300.0, 301.0, 1000.0] {
        let mut bar = quiet_bar(AxisConfig::default(), &three_hundreds());
        layout_loose(&mut bar, max_width);
        assert_eq!(bar.layout_mode(), Some(LayoutMode::Row), "max_width {max_width}");
    }
}

#[test]
fn test_column_when_any_prefix_exceeds() {
    // The first child alone exceeds; so does the sum of the first two.
    let cases: [(&[(f32, f32)], f32); 3] = [
        (&[(260.0, 20.0), (10.0, 20.0)], 250.0),
        (&[(130.0, 20.0), (130.0, 20.0), (1.0, 20.0)], 250.0),
        (&[(100.0, 20.0), (100.0, 20.0), (100.0, 20.0)], 299.5),
    ];
    for (sizes, max_width) in cases {
        let mut bar = quiet_bar(AxisConfig::default(), sizes);
        layout_loose(&mut bar, max_width);
        assert_eq!(bar.layout_mode(), Some(LayoutMode::Column), "sizes {sizes:?}");
    }
}

#[test]
fn test_layout_is_idempotent() {
    for max_width in [400.0, 250.0] {
        let mut bar = quiet_bar(
            config(MainAxisAlignment::SpaceAround, TextDirection::Rtl),
            &[(70.0, 20.0), (90.0, 44.0), (50.0, 30.0)],
        );
        let constraints = BoxConstraints::new(0.0, max_width, 0.0, 60.0);

        let first_size = bar.layout(constraints);
        let first_rects = child_rects(&bar);
        let first_overflow = bar.overflow();

        let second_size = bar.layout(constraints);
        assert_eq!(first_size, second_size);
        assert_eq!(first_rects, child_rects(&bar));
        assert_eq!(first_overflow, bar.overflow());
    }
}

#[test]
fn test_mode_switches_with_width() {
    let mut bar = quiet_bar(AxisConfig::default(), &three_hundreds());

    layout_loose(&mut bar, 400.0);
    assert_eq!(bar.layout_mode(), Some(LayoutMode::Row));

    layout_loose(&mut bar, 250.0);
    assert_eq!(bar.layout_mode(), Some(LayoutMode::Column));

    layout_loose(&mut bar, 400.0);
    assert_eq!(bar.layout_mode(), Some(LayoutMode::Row));
    assert_eq!(bar.overflow(), 0.0);
}

// ============================================================================
// Row mode
// ============================================================================

#[test]
fn test_row_distribution_for_every_alignment() {
    // Widths sum to 180 in a 300 wide row: 120 to distribute.
    let sizes = [(60.0, 20.0), (80.0, 30.0), (40.0, 10.0)];
    let expected = [
        (MainAxisAlignment::Start, 0.0, 0.0),
        (MainAxisAlignment::End, 120.0, 0.0),
        (MainAxisAlignment::Center, 60.0, 0.0),
        (MainAxisAlignment::SpaceBetween, 0.0, 60.0),
        (MainAxisAlignment::SpaceAround, 20.0, 40.0),
        (MainAxisAlignment::SpaceEvenly, 30.0, 30.0),
    ];

    for (alignment, leading, between) in expected {
        let mut bar = quiet_bar(config(alignment, TextDirection::Ltr), &sizes);
        layout_loose(&mut bar, 300.0);
        assert_eq!(bar.layout_mode(), Some(LayoutMode::Row));

        let rects = child_rects(&bar);
        assert_near(rects[0].x, leading, 1e-4);
        for pair in rects.windows(2) {
            assert_near(pair[1].x - pair[0].right(), between, 1e-4);
        }
    }
}

#[test]
fn test_row_space_adds_up_to_main_size() {
    let sizes = [(60.0, 20.0), (80.0, 30.0), (40.0, 10.0)];
    let widths: f32 = sizes.iter().map(|(w, _)| w).sum();

    for alignment in ALL_ALIGNMENTS {
        let mut bar = quiet_bar(config(alignment, TextDirection::Ltr), &sizes);
        let size = bar.layout(BoxConstraints::loose(300.0, f32::INFINITY));
        let rects = child_rects(&bar);

        let leading = rects[0].x;
        let between: f32 = rects.windows(2).map(|p| p[1].x - p[0].right()).sum();
        let trailing = size.width - rects[rects.len() - 1].right();
        let expected_trailing = match alignment {
            MainAxisAlignment::SpaceAround => leading,
            MainAxisAlignment::SpaceEvenly => leading,
            MainAxisAlignment::Center => leading,
            MainAxisAlignment::Start => 120.0,
            MainAxisAlignment::End | MainAxisAlignment::SpaceBetween => 0.0,
        };

        assert_near(leading + widths + between + trailing, size.width, 1e-3);
        assert_near(trailing, expected_trailing, 1e-3);
        assert_disjoint(&rects);
        assert_all_inside(Rect::from_origin_size(Default::default(), size), &rects);
    }
}

#[test]
fn test_rtl_mirrors_ltr() {
    let sizes = [(60.0, 20.0), (80.0, 30.0), (40.0, 10.0)];

    for alignment in ALL_ALIGNMENTS {
        let mut ltr = quiet_bar(config(alignment, TextDirection::Ltr), &sizes);
        let mut rtl = quiet_bar(config(alignment, TextDirection::Rtl), &sizes);
        let width = ltr.layout(BoxConstraints::loose(300.0, f32::INFINITY)).width;
        rtl.layout(BoxConstraints::loose(300.0, f32::INFINITY));

        for (l, r) in child_rects(&ltr).iter().zip(child_rects(&rtl)) {
            assert_near(r.x, width - l.right(), 1e-3);
            assert_eq!(r.y, l.y);
        }
    }
}

#[test]
fn test_row_children_centered_vertically() {
    let mut bar = quiet_bar(
        AxisConfig::default(),
        &[(50.0, 20.0), (50.0, 40.0), (50.0, 30.0)],
    );
    let size = bar.layout(BoxConstraints::loose(400.0, f32::INFINITY));

    assert_eq!(size.height, 40.0);
    assert_eq!(child_ys(&bar), vec![10.0, 0.0, 5.0]);
}

#[test]
fn test_row_min_size_shrink_wraps() {
    let config = AxisConfig::builder()
        .main_axis_size(MainAxisSize::Min)
        .main_axis_alignment(MainAxisAlignment::Center)
        .build()
        .unwrap();
    let mut bar = quiet_bar(config, &[(60.0, 20.0), (40.0, 20.0)]);

    let size = bar.layout(BoxConstraints::loose(400.0, f32::INFINITY));
    assert_eq!(size, Size::new(100.0, 20.0));
    assert_eq!(child_xs(&bar), vec![0.0, 60.0]);
}

// ============================================================================
// Column mode
// ============================================================================

#[test]
fn test_up_reverses_stacking_and_preserves_heights() {
    let sizes = [(100.0, 30.0), (100.0, 40.0), (100.0, 50.0)];
    let down_config = AxisConfig::default();
    let up_config = AxisConfig::builder()
        .overflow_direction(VerticalDirection::Up)
        .build()
        .unwrap();

    let mut down = quiet_bar(down_config, &sizes);
    let mut up = quiet_bar(up_config, &sizes);
    let down_size = down.layout(BoxConstraints::loose(250.0, f32::INFINITY));
    let up_size = up.layout(BoxConstraints::loose(250.0, f32::INFINITY));

    assert_eq!(down_size, up_size);
    assert_eq!(down_size.height, 120.0);

    let mut down_heights: Vec<f32> = child_rects(&down).iter().map(|r| r.height).collect();
    let mut up_heights: Vec<f32> = child_rects(&up).iter().map(|r| r.height).collect();
    down_heights.sort_by(f32::total_cmp);
    up_heights.sort_by(f32::total_cmp);
    assert_eq!(down_heights, up_heights);

    assert_eq!(child_ys(&down), vec![0.0, 30.0, 70.0]);
    assert_eq!(child_ys(&up), vec![90.0, 50.0, 0.0]);
    assert_disjoint(&child_rects(&up));
}

#[test]
fn test_column_spacing_between_children_only() {
    let config = AxisConfig::builder()
        .overflow_button_spacing(8.0)
        .build()
        .unwrap();
    let mut bar = quiet_bar(config, &[(200.0, 30.0), (200.0, 30.0)]);

    let size = bar.layout(BoxConstraints::loose(300.0, f32::INFINITY));
    assert_eq!(bar.layout_mode(), Some(LayoutMode::Column));
    assert_eq!(child_ys(&bar), vec![0.0, 38.0]);
    assert_eq!(size.height, 68.0);
}

#[test]
fn test_column_horizontal_rule() {
    let sizes = [(200.0, 20.0), (120.0, 20.0)];
    let cases = [
        (MainAxisAlignment::Start, TextDirection::Ltr, 0.0),
        (MainAxisAlignment::Start, TextDirection::Rtl, 180.0),
        (MainAxisAlignment::End, TextDirection::Ltr, 180.0),
        (MainAxisAlignment::End, TextDirection::Rtl, 0.0),
        (MainAxisAlignment::Center, TextDirection::Ltr, 90.0),
        (MainAxisAlignment::Center, TextDirection::Rtl, 90.0),
        (MainAxisAlignment::SpaceBetween, TextDirection::Ltr, 0.0),
        (MainAxisAlignment::SpaceEvenly, TextDirection::Rtl, 180.0),
    ];

    for (alignment, direction, expected_x) in cases {
        let mut bar = quiet_bar(config(alignment, direction), &sizes);
        layout_loose(&mut bar, 300.0);
        assert_eq!(bar.layout_mode(), Some(LayoutMode::Column));
        assert_eq!(
            bar.children()[1].offset.x,
            expected_x,
            "{alignment:?} {direction:?}"
        );
    }
}

#[test]
fn test_overflow_scalar_in_column_mode() {
    let config = AxisConfig::builder()
        .overflow_button_spacing(5.0)
        .build()
        .unwrap();
    let mut bar = quiet_bar(config, &[(200.0, 30.0), (200.0, 40.0), (200.0, 50.0)]);

    let size = bar.layout(BoxConstraints::new(0.0, 300.0, 0.0, 100.0));
    assert_eq!(bar.layout_mode(), Some(LayoutMode::Column));
    // 30 + 40 + 50 + 2 * 5 = 130 stacked in 100.
    assert_eq!(size, Size::new(300.0, 100.0));
    assert_eq!(bar.overflow(), 30.0);
    assert!(bar.has_overflow());

    let size = bar.layout(BoxConstraints::new(0.0, 300.0, 0.0, 200.0));
    assert_eq!(size.height, 130.0);
    assert_eq!(bar.overflow(), 0.0);
}

#[test]
fn test_overflow_is_zero_in_row_mode() {
    let mut bar = quiet_bar(AxisConfig::default(), &[(100.0, 80.0), (100.0, 80.0)]);
    bar.layout(BoxConstraints::new(0.0, 400.0, 0.0, 50.0));

    assert_eq!(bar.layout_mode(), Some(LayoutMode::Row));
    assert_eq!(bar.overflow(), 0.0);
    assert!(!bar.has_overflow());
}

// ============================================================================
// Degenerate input
// ============================================================================

#[test]
fn test_zero_children() {
    let mut bar = ButtonBarRow::new(AxisConfig::default()).with_overflow_indicator(None);
    let size = bar.layout(BoxConstraints::loose(300.0, 100.0));
    assert_eq!(size, Size::new(300.0, 0.0));
    assert_eq!(bar.layout_mode(), Some(LayoutMode::Row));

    let size = bar.layout(BoxConstraints::new(0.0, 300.0, 24.0, 100.0));
    assert_eq!(size, Size::new(300.0, 24.0));
}

#[test]
fn test_zero_size_constraints() {
    let mut bar = quiet_bar(AxisConfig::default(), &[(40.0, 20.0)]);
    let size = bar.layout(BoxConstraints::tight(Size::ZERO));

    assert_eq!(size, Size::ZERO);
    assert_eq!(bar.layout_mode(), Some(LayoutMode::Column));
    assert_eq!(bar.overflow(), 20.0);
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_three_buttons_too_wide_stack_flush_right() {
    let mut bar = quiet_bar(
        config(MainAxisAlignment::End, TextDirection::Ltr),
        &three_hundreds(),
    );
    let size = bar.layout(BoxConstraints::loose(250.0, f32::INFINITY));

    assert_eq!(bar.layout_mode(), Some(LayoutMode::Column));
    assert_eq!(size, Size::new(250.0, 108.0));
    assert_eq!(child_xs(&bar), vec![150.0, 150.0, 150.0]);
    assert_eq!(child_ys(&bar), vec![0.0, 36.0, 72.0]);
    assert_eq!(bar.overflow(), 0.0);
}

#[test]
fn test_three_buttons_space_between_in_row() {
    let mut bar = quiet_bar(
        config(MainAxisAlignment::SpaceBetween, TextDirection::Ltr),
        &three_hundreds(),
    );
    let size = bar.layout(BoxConstraints::loose(400.0, f32::INFINITY));

    assert_eq!(bar.layout_mode(), Some(LayoutMode::Row));
    assert_eq!(size, Size::new(400.0, 36.0));
    assert_eq!(child_xs(&bar), vec![0.0, 150.0, 300.0]);
    for child in bar.children() {
        assert_eq!(child.size().width, 100.0);
    }
}
