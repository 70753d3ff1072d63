//! Themed bar integration tests
//!
//! A [`ButtonBar`] built from explicit and ambient theme data, laid out and
//! painted with text children.

use crate::support::*;
use barkit_layout::{
    BoxConstraints, ButtonBar, DisplayList, LayoutMode, Offset, RenderBox, Size, TextBox,
    TextDirection,
};
use barkit_theme::{BarThemeData, ConfigError, LayoutBehavior, MainAxisAlignment};

fn labels(texts: &[&str]) -> Vec<Box<dyn RenderBox>> {
    texts
        .iter()
        .map(|t| Box::new(TextBox::new(*t, 14.0)) as Box<dyn RenderBox>)
        .collect()
}

#[test]
fn test_ambient_theme_applies_when_explicit_unset() {
    let ambient = BarThemeData::from_json(r#"{ "alignment": "start", "buttonHeight": 40 }"#).unwrap();
    let mut bar = ButtonBar::new(
        &BarThemeData::default(),
        &ambient,
        TextDirection::Ltr,
        labels(&["OK"]),
    )
    .unwrap();

    let size = bar.layout(BoxConstraints::loose(400.0, f32::INFINITY));
    assert_eq!(bar.config().alignment, MainAxisAlignment::Start);
    assert_eq!(bar.config().button_height, 40.0);
    // 40px button plus two padding units (8px each) above and below.
    assert_eq!(size, Size::new(400.0, 72.0));
    assert_eq!(bar.row().children()[0].offset.x, 0.0);
}

#[test]
fn test_explicit_value_beats_ambient() {
    let explicit = BarThemeData {
        alignment: Some(MainAxisAlignment::Center),
        ..Default::default()
    };
    let ambient = BarThemeData {
        alignment: Some(MainAxisAlignment::Start),
        text_direction: Some(TextDirection::Rtl),
        ..Default::default()
    };
    let bar = ButtonBar::new(&explicit, &ambient, TextDirection::Ltr, labels(&["OK"])).unwrap();

    assert_eq!(bar.config().alignment, MainAxisAlignment::Center);
    assert_eq!(bar.config().text_direction, TextDirection::Rtl);
}

#[test]
fn test_ambient_direction_is_last_resort() {
    let bar = ButtonBar::new(
        &BarThemeData::default(),
        &BarThemeData::default(),
        TextDirection::Rtl,
        labels(&["OK", "Cancel"]),
    )
    .unwrap();
    assert_eq!(bar.config().text_direction, TextDirection::Rtl);
}

#[test]
fn test_negative_spacing_rejected_at_construction() {
    let explicit = BarThemeData {
        overflow_button_spacing: Some(-4.0),
        ..Default::default()
    };
    let err = ButtonBar::new(
        &explicit,
        &BarThemeData::default(),
        TextDirection::Ltr,
        labels(&["OK"]),
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Negative { .. }));
}

#[test]
fn test_narrow_bar_stacks_labels_and_paints_them() {
    let explicit = BarThemeData {
        layout_behavior: Some(LayoutBehavior::Constrained),
        overflow_button_spacing: Some(4.0),
        ..Default::default()
    };
    let mut bar = ButtonBar::new(
        &explicit,
        &BarThemeData::default(),
        TextDirection::Ltr,
        labels(&["Discard draft", "Save as template", "Send now"]),
    )
    .unwrap();

    let size = bar.layout(BoxConstraints::loose(160.0, f32::INFINITY));
    assert_eq!(bar.layout_mode(), Some(LayoutMode::Column));
    assert!(size.height >= 52.0);
    assert_near(size.width, 160.0, 1e-4);

    let mut list = DisplayList::new();
    bar.paint(&mut list, Offset::ZERO);
    assert_eq!(
        list.texts(),
        vec!["Discard draft", "Save as template", "Send now"]
    );
}
