use crate::tree::RenderOptions;
use jsonfold_types::{
    indicator_text, Block, Cell, CellBody, Document, NodeId, NodeKind, RenderNode, Row, Segment,
    Table,
};

/// Lower a render tree into the structural document the interaction layer
/// operates on. Every collapsible block carries its depth and collapse flag as
/// typed markers; the controller reads those back and nothing else.
pub fn build_document(node: &RenderNode, options: &RenderOptions) -> Document {
    let mut doc = Document::new();
    let root = doc.root();
    let open_levels = options.default_open_levels.max(1);
    doc.push(
        root,
        NodeKind::Indicator {
            text: indicator_text(open_levels, false, false),
        },
    );
    emit(&mut doc, root, node);
    doc
}

fn emit(doc: &mut Document, parent: NodeId, node: &RenderNode) {
    match node {
        RenderNode::Cell(cell) => emit_cell(doc, parent, cell),
        RenderNode::InlineRow(cells) => {
            let table = doc.push(parent, NodeKind::Table { inline: true });
            let row = doc.push(
                table,
                NodeKind::Row {
                    header: false,
                    selected: false,
                },
            );
            for cell in cells {
                emit_cell(doc, row, cell);
            }
        }
        RenderNode::Block(block) => emit_block(doc, parent, block),
        RenderNode::EmptyArray => {
            doc.push(parent, NodeKind::EmptyArray);
        }
        RenderNode::Error(text) => {
            doc.push(parent, NodeKind::ErrorMarker { text: text.clone() });
        }
        RenderNode::PlainString(text) => {
            doc.push(
                parent,
                NodeKind::Plain {
                    date: false,
                    text: text.clone(),
                },
            );
        }
        RenderNode::PlainDate(text) => {
            doc.push(
                parent,
                NodeKind::Plain {
                    date: true,
                    text: text.clone(),
                },
            );
        }
    }
}

fn emit_block(doc: &mut Document, parent: NodeId, block: &Block) {
    let id = doc.push(
        parent,
        NodeKind::Block {
            depth: block.depth,
            is_array: block.is_array,
            item_count: block.item_count,
            collapsed: block.collapsed,
            fullscreen: false,
        },
    );

    let header = doc.push(id, NodeKind::Header);
    let toggle = doc.push(header, NodeKind::FoldToggle);
    doc.push(
        toggle,
        NodeKind::Text {
            text: if block.collapsed { "▶" } else { "▼" }.to_string(),
        },
    );
    doc.push(
        header,
        NodeKind::Text {
            text: if block.is_array { "Array " } else { "Object " }.to_string(),
        },
    );
    doc.push(
        header,
        NodeKind::ItemCount {
            count: block.item_count,
        },
    );
    doc.push(header, NodeKind::FullscreenToggle);

    let content = doc.push(id, NodeKind::Content);
    emit_table(doc, content, &block.table);
}

fn emit_table(doc: &mut Document, parent: NodeId, table: &Table) {
    let id = doc.push(parent, NodeKind::Table { inline: false });

    if !table.headers.is_empty() {
        let header_row = doc.push(
            id,
            NodeKind::Row {
                header: true,
                selected: false,
            },
        );
        for header in &table.headers {
            doc.push(
                header_row,
                NodeKind::KeyCell {
                    text: header.clone(),
                },
            );
        }
    }

    for row in &table.rows {
        let row_id = doc.push(
            id,
            NodeKind::Row {
                header: false,
                selected: false,
            },
        );
        match row {
            Row::Entry { key, cell } => {
                doc.push(row_id, NodeKind::KeyCell { text: key.clone() });
                emit_cell(doc, row_id, cell);
            }
            Row::Items(cells) => {
                for cell in cells {
                    emit_cell(doc, row_id, cell);
                }
            }
        }
    }
}

fn emit_cell(doc: &mut Document, parent: NodeId, cell: &Cell) {
    let id = doc.push(parent, NodeKind::Cell { kind: cell.kind });
    match &cell.body {
        CellBody::Text(segments) => {
            for segment in segments {
                match segment {
                    Segment::Text(text) => {
                        doc.push(id, NodeKind::Text { text: text.clone() });
                    }
                    Segment::Link(href) => {
                        doc.push(id, NodeKind::Link { href: href.clone() });
                    }
                }
            }
        }
        CellBody::EmptyString => {
            doc.push(id, NodeKind::EmptyString);
        }
        CellBody::Empty => {}
        CellBody::Nested(inner) => emit(doc, id, inner),
    }
}
