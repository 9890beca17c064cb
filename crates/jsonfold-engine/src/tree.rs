use crate::classify::{classify, is_iso_date_like};
use crate::format::{format_date, format_date_string, format_primitive};
use jsonfold_types::{Block, Cell, CellBody, CellKind, JsonValue, RenderNode, Row, Table};

/// The only documented configuration knob: how many nesting levels start
/// expanded. Blocks at `depth >= default_open_levels` begin collapsed.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub default_open_levels: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            default_open_levels: 3,
        }
    }
}

/// Render the document root. Top-level scalars get plain markers instead of a
/// table; an undefined root becomes an inline error marker. Never fails.
pub fn render_root(value: &JsonValue, options: &RenderOptions) -> RenderNode {
    let open_levels = options.default_open_levels.max(1);
    match value {
        JsonValue::Undefined => RenderNode::Error("Error: Invalid JSON data".to_string()),
        JsonValue::String(s) if is_iso_date_like(s) => {
            RenderNode::PlainDate(format_date_string(s))
        }
        JsonValue::String(s) => RenderNode::PlainString(s.clone()),
        JsonValue::Date(d) => RenderNode::PlainDate(format_date(d)),
        _ => render(value, 0, open_levels),
    }
}

/// Recursively render a value at the given depth. Each descent into a nested
/// object/array increments depth by exactly 1; a block's initial collapse
/// state is fixed here and never recomputed.
pub fn render(value: &JsonValue, depth: u32, open_levels: u32) -> RenderNode {
    match value {
        JsonValue::Array(items) => render_array(items, depth, open_levels),
        JsonValue::Object(entries) => render_object(entries, depth, open_levels),
        primitive => RenderNode::Cell(Cell {
            kind: classify(primitive),
            body: format_primitive(primitive),
        }),
    }
}

fn render_array(items: &[JsonValue], depth: u32, open_levels: u32) -> RenderNode {
    if items.is_empty() {
        return RenderNode::EmptyArray;
    }

    if items.iter().all(JsonValue::is_primitive) {
        let cells = items
            .iter()
            .map(|item| Cell {
                kind: classify(item),
                body: format_primitive(item),
            })
            .collect();
        return RenderNode::InlineRow(cells);
    }

    let headers = column_headers(items);
    let rows = items
        .iter()
        .map(|item| Row::Items(array_row(item, &headers, depth, open_levels)))
        .collect();

    RenderNode::Block(Block {
        is_array: true,
        item_count: items.len(),
        depth,
        collapsed: depth >= open_levels,
        table: Table { headers, rows },
    })
}

/// Union of all object keys across elements in order of first appearance,
/// plus a synthetic `Value` column if any element is a non-object primitive.
fn column_headers(items: &[JsonValue]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for item in items {
        match item {
            JsonValue::Object(entries) => {
                for (key, _) in entries {
                    if !headers.iter().any(|h| h == key) {
                        headers.push(key.clone());
                    }
                }
            }
            _ => {
                if !headers.iter().any(|h| h == "Value") {
                    headers.push("Value".to_string());
                }
            }
        }
    }
    headers
}

fn array_row(item: &JsonValue, headers: &[String], depth: u32, open_levels: u32) -> Vec<Cell> {
    headers
        .iter()
        .map(|header| match item {
            JsonValue::Object(entries) => entries
                .iter()
                .find(|(key, _)| key == header)
                .map(|(_, value)| value_cell(value, depth, open_levels))
                .unwrap_or(Cell {
                    kind: CellKind::Undefined,
                    body: CellBody::Empty,
                }),
            primitive if header == "Value" => value_cell(primitive, depth, open_levels),
            _ => Cell {
                kind: CellKind::Undefined,
                body: CellBody::Empty,
            },
        })
        .collect()
}

fn render_object(entries: &[(String, JsonValue)], depth: u32, open_levels: u32) -> RenderNode {
    let rows = entries
        .iter()
        .map(|(key, value)| Row::Entry {
            key: key.clone(),
            cell: value_cell(value, depth, open_levels),
        })
        .collect();

    RenderNode::Block(Block {
        is_array: false,
        item_count: entries.len(),
        depth,
        collapsed: depth >= open_levels,
        table: Table {
            headers: Vec::new(),
            rows,
        },
    })
}

/// One data cell: primitives defer to the classifier/formatter, complex
/// values descend one level deeper.
fn value_cell(value: &JsonValue, depth: u32, open_levels: u32) -> Cell {
    let kind = classify(value);
    let body = if kind == CellKind::Complex {
        CellBody::Nested(Box::new(render(value, depth + 1, open_levels)))
    } else {
        format_primitive(value)
    };
    Cell { kind, body }
}
