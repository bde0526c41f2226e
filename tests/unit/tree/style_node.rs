use super::*;
use crate::tree::node::{ComputedStyleReader, StyleReader};

#[test]
fn only_elements_report_a_style() {
    let el = StyleNode::element("div", "1s", "250ms");
    assert_eq!(
        el.computed_transition(),
        Some(TransitionStyle::new("1s", "250ms"))
    );
    assert!(StyleNode::text("hi").computed_transition().is_none());
    assert!(StyleNode::comment("note").computed_transition().is_none());
}

#[test]
fn children_keep_document_order() {
    let tree = StyleNode::element("ul", "0s", "0s").with_children([
        StyleNode::element("li", "1s", "0s"),
        StyleNode::text("\n"),
        StyleNode::element("li", "2s", "0s"),
    ]);
    let kinds: Vec<bool> = tree.child_nodes().map(StyleNode::is_element).collect();
    assert_eq!(kinds, vec![true, false, true]);
}

#[test]
fn json_defaults_fill_missing_times() {
    let tree = StyleNode::from_json_str(
        r#"{
            "type": "element",
            "tag": "section",
            "transition_duration": "1s",
            "children": [
                { "type": "text", "data": "hello" },
                { "type": "element" }
            ]
        }"#,
    )
    .unwrap();

    let style = ComputedStyleReader.transition_style(&tree).unwrap();
    assert_eq!(style.duration, "1s");
    assert_eq!(style.delay, "0s");
    assert_eq!(tree.children.len(), 2);
    assert_eq!(
        tree.children[1].computed_transition(),
        Some(TransitionStyle::default())
    );
}

#[test]
fn json_roundtrip_preserves_tree() {
    let tree = StyleNode::element("div", "1s", "0s")
        .with_child(StyleNode::element("span", "1s", "500ms").with_child(StyleNode::text("x")));
    let json = tree.to_json_string().unwrap();
    assert_eq!(StyleNode::from_json_str(&json).unwrap(), tree);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = StyleNode::from_json_str(r#"{ "type": "widget" }"#).unwrap_err();
    assert!(matches!(err, SettleError::Serde(_)));
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = StyleNode::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, SettleError::Validation(_)));
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn transition_style_sums_duration_and_delay() {
    let style = TransitionStyle::new("1s", "500ms");
    assert_eq!(style.duration_ms(), 1000.0);
    assert_eq!(style.delay_ms(), 500.0);
    assert_eq!(style.total_ms(), 1500.0);
    assert_eq!(TransitionStyle::new("auto", "junk").total_ms(), 0.0);
}
