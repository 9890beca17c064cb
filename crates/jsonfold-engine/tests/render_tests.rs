use jsonfold_engine::{render_document, render_fragment, RenderOptions};
use jsonfold_types::{Document, JsonValue, NodeKind};
use serde_json::json;

fn value(v: serde_json::Value) -> JsonValue {
    JsonValue::from(v)
}

fn options(levels: u32) -> RenderOptions {
    RenderOptions {
        default_open_levels: levels,
    }
}

fn block_states(doc: &Document) -> Vec<(u32, bool)> {
    doc.blocks()
        .into_iter()
        .map(|id| (doc.block_depth(id), doc.is_collapsed(id)))
        .collect()
}

#[test]
fn object_with_primitive_array_renders_one_open_block() {
    let fragment = render_fragment(&value(json!({"a": 1, "b": [1, 2, 3]})), &options(3));

    // One expanded object block holding both entry rows.
    assert!(fragment.contains("data-role=\"block\" data-depth=\"0\""));
    assert!(!fragment.contains("collapsed"));
    assert!(fragment.contains("Object "));
    assert!(fragment.contains("<span class=\"item-count\">2 items</span>"));
    assert!(fragment.contains("<th>a</th>"));
    assert!(fragment.contains("<td class=\"number-cell\" data-role=\"cell\">1</td>"));

    // The array value is a compact inline row, not a nested block.
    assert!(fragment.contains("<table class=\"array-table\">"));
    let blocks = fragment.matches("data-role=\"block\"").count();
    assert_eq!(blocks, 1);
}

#[test]
fn empty_array_renders_a_marker_not_a_table() {
    let fragment = render_fragment(&value(json!([])), &options(3));
    assert!(fragment.contains("<div class=\"empty-array\">[]</div>"));
    assert!(!fragment.contains("<table"));
}

#[test]
fn top_level_date_string_formats_without_time_suffix() {
    let fragment = render_fragment(
        &value(json!("2024-01-01T00:00:00.000Z")),
        &options(3),
    );
    assert!(fragment.contains("Mon, Jan 1, 2024"));
    assert!(!fragment.contains("12:00"));
}

#[test]
fn top_level_plain_string_is_not_tabled() {
    let fragment = render_fragment(&value(json!("just text")), &options(3));
    assert!(fragment.contains("<div class=\"plain-string\">just text</div>"));
}

#[test]
fn default_collapse_law_holds_per_depth() {
    let nested = value(json!({"a": {"b": {"c": {"d": 1}}}}));
    let doc = render_document(&nested, &options(2));
    assert_eq!(
        block_states(&doc),
        vec![(0, false), (1, false), (2, true), (3, true)]
    );
}

#[test]
fn every_nested_block_is_one_deeper_than_its_parent() {
    let doc = render_document(
        &value(json!({
            "list": [{"x": {"y": 1}}, {"x": {"y": 2}}],
            "map": {"inner": {"leaf": [1, {"deep": true}]}}
        })),
        &options(10),
    );

    for id in doc.blocks() {
        let depth = doc.block_depth(id);
        match doc.enclosing_block(id) {
            Some(parent) => assert_eq!(depth, doc.block_depth(parent) + 1),
            None => assert_eq!(depth, 0),
        }
    }
}

#[test]
fn mixed_array_gets_value_column_and_union_headers() {
    let fragment = render_fragment(
        &value(json!([42, {"name": "a"}, {"name": "b", "extra": true}])),
        &options(3),
    );
    assert!(fragment.contains("<thead><tr data-role=\"row\"><th>Value</th><th>name</th><th>extra</th></tr></thead>"));
    assert!(fragment.contains("Array "));
    assert!(fragment.contains("3 items"));
}

#[test]
fn rendering_is_idempotent() {
    let input = value(json!({
        "s": "text with https://example.com inside",
        "n": 1.25,
        "flag": false,
        "nested": [{"a": null}, {"b": ""}]
    }));
    assert_eq!(
        render_fragment(&input, &options(3)),
        render_fragment(&input, &options(3))
    );
}

#[test]
fn urls_become_anchors_and_text_survives() {
    let fragment = render_fragment(
        &value(json!({"link": "see https://example.com/x?y=1 for details"})),
        &options(3),
    );
    assert!(fragment.contains(
        "<a href=\"https://example.com/x?y=1\" target=\"_blank\" rel=\"noopener noreferrer\">"
    ));
    assert!(fragment.contains("see "));
    assert!(fragment.contains(" for details"));
}

#[test]
fn markup_significant_values_are_escaped() {
    let fragment = render_fragment(
        &value(json!({"payload": "<script>alert(1)</script>"})),
        &options(3),
    );
    assert!(!fragment.contains("<script>alert"));
    assert!(fragment.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[test]
fn booleans_render_as_glyphs_not_words() {
    let fragment = render_fragment(&value(json!({"on": true, "off": false})), &options(3));
    assert!(fragment.contains("<td class=\"boolean-cell\" data-role=\"cell\">✓</td>"));
    assert!(fragment.contains("<td class=\"boolean-cell\" data-role=\"cell\">•</td>"));
    assert!(!fragment.contains(">true<"));
    assert!(!fragment.contains(">false<"));
}

#[test]
fn empty_string_value_gets_its_marker() {
    let fragment = render_fragment(&value(json!({"s": ""})), &options(3));
    assert!(fragment.contains("<span class=\"empty-string\">&quot;&quot;</span>"));
}

#[test]
fn document_starts_with_the_indicator_line() {
    let doc = render_document(&value(json!({"a": 1})), &options(3));
    let indicator = doc.indicator().expect("indicator present");
    let NodeKind::Indicator { text } = doc.kind(indicator) else {
        panic!("expected indicator");
    };
    assert!(text.contains("fold level (current: 3)"));
    assert!(text.contains("Folding Mode: normal"));
}

#[test]
fn page_embeds_stylesheet_and_script() {
    let page = jsonfold_engine::render_page(&value(json!({"a": 1})), &options(3));
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<style>"));
    assert!(page.contains("data-role=\"fold-toggle\""));
    assert!(page.contains("DOMContentLoaded"));
}
