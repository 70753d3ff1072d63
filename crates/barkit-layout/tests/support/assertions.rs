//! Custom assertions for layout tests.

use barkit_layout::Rect;

/// Assert that two lengths match within tolerance.
#[track_caller]
pub fn assert_near(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Length mismatch: expected {}, got {} (tolerance: {})",
        expected,
        actual,
        tolerance
    );
}

/// Assert that every rect lies inside `container`.
#[track_caller]
pub fn assert_all_inside(container: Rect, rects: &[Rect]) {
    for (index, rect) in rects.iter().enumerate() {
        assert!(
            container.contains_rect(rect),
            "Rect {} {:?} escapes container {:?}",
            index,
            rect,
            container
        );
    }
}

/// Assert that no two rects share any area.
#[track_caller]
pub fn assert_disjoint(rects: &[Rect]) {
    for (i, a) in rects.iter().enumerate() {
        for (j, b) in rects.iter().enumerate().skip(i + 1) {
            let overlaps =
                a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom();
            assert!(!overlaps, "Rects {} {:?} and {} {:?} overlap", i, a, j, b);
        }
    }
}
