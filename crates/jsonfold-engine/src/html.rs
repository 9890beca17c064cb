use jsonfold_types::{Document, NodeId, NodeKind};

/// Serialize a structural document to markup. Static mapping of node kinds to
/// tags and classes; `data-role`/`data-depth` attributes are the
/// machine-readable contract the client script keys off.
pub fn write_html(doc: &Document) -> String {
    let mut out = String::new();
    write_node(doc, doc.root(), &mut out);
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    match doc.kind(id) {
        NodeKind::Root => {
            out.push_str("<div class=\"json-viewer-table\" data-role=\"root\">");
            write_children(doc, id, out);
            out.push_str("</div>");
        }
        NodeKind::Indicator { text } => {
            out.push_str("<div class=\"fold-level-indicator\" data-role=\"indicator\">");
            out.push_str(&escape(text));
            out.push_str("</div>");
        }
        NodeKind::Block {
            depth,
            collapsed,
            fullscreen,
            ..
        } => {
            out.push_str("<div class=\"block");
            if *collapsed {
                out.push_str(" collapsed");
            }
            if *fullscreen {
                out.push_str(" fullscreen");
            }
            out.push_str(&format!(
                "\" data-role=\"block\" data-depth=\"{}\">",
                depth
            ));
            write_children(doc, id, out);
            out.push_str("</div>");
        }
        NodeKind::Header => {
            out.push_str("<div class=\"block-header\" data-role=\"header\">");
            write_children(doc, id, out);
            out.push_str("</div>");
        }
        NodeKind::FoldToggle => {
            out.push_str("<span class=\"toggle-indicator\" data-role=\"fold-toggle\">");
            write_children(doc, id, out);
            out.push_str("</span>");
        }
        NodeKind::ItemCount { count } => {
            out.push_str(&format!("<span class=\"item-count\">{} items</span>", count));
        }
        NodeKind::FullscreenToggle => {
            out.push_str(
                "<span class=\"fullscreen-button\" data-role=\"fullscreen-toggle\" \
                 title=\"Toggle fullscreen\">⛶</span>",
            );
        }
        NodeKind::Content => {
            out.push_str("<div class=\"content\">");
            write_children(doc, id, out);
            out.push_str("</div>");
        }
        NodeKind::Table { inline } => {
            let class = if *inline { "array-table" } else { "data-table" };
            out.push_str(&format!("<table class=\"{}\">", class));
            write_table_rows(doc, id, out);
            out.push_str("</table>");
        }
        NodeKind::Row { selected, .. } => {
            out.push_str("<tr data-role=\"row\"");
            if *selected {
                out.push_str(" class=\"selected\"");
            }
            out.push('>');
            write_children(doc, id, out);
            out.push_str("</tr>");
        }
        NodeKind::KeyCell { text } => {
            out.push_str("<th>");
            out.push_str(&escape(text));
            out.push_str("</th>");
        }
        NodeKind::Cell { kind } => {
            // Cells usually sit in rows; a bare top-level primitive renders
            // the same class on a div instead.
            let in_row = doc
                .parent(id)
                .is_some_and(|p| matches!(doc.kind(p), NodeKind::Row { .. }));
            let tag = if in_row { "td" } else { "div" };
            out.push_str(&format!(
                "<{} class=\"{}-cell\" data-role=\"cell\">",
                tag,
                kind.as_str()
            ));
            write_children(doc, id, out);
            out.push_str(&format!("</{}>", tag));
        }
        NodeKind::Text { text } => out.push_str(&escape(text)),
        NodeKind::Link { href } => {
            out.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape(href),
                escape(href)
            ));
        }
        NodeKind::EmptyString => {
            out.push_str("<span class=\"empty-string\">&quot;&quot;</span>");
        }
        NodeKind::EmptyArray => {
            out.push_str("<div class=\"empty-array\">[]</div>");
        }
        NodeKind::ErrorMarker { text } => {
            out.push_str("<div class=\"error-marker\">");
            out.push_str(&escape(text));
            out.push_str("</div>");
        }
        NodeKind::Plain { date, text } => {
            let class = if *date { "plain-date" } else { "plain-string" };
            out.push_str(&format!("<div class=\"{}\">", class));
            out.push_str(&escape(text));
            out.push_str("</div>");
        }
    }
}

fn write_children(doc: &Document, id: NodeId, out: &mut String) {
    for &child in doc.children(id) {
        write_node(doc, child, out);
    }
}

/// Group a table's header rows into `<thead>` and the rest into `<tbody>`.
fn write_table_rows(doc: &Document, table: NodeId, out: &mut String) {
    let rows: Vec<NodeId> = doc.children(table).to_vec();
    let header_rows: Vec<NodeId> = rows
        .iter()
        .copied()
        .filter(|&r| matches!(doc.kind(r), NodeKind::Row { header: true, .. }))
        .collect();
    let body_rows: Vec<NodeId> = rows
        .iter()
        .copied()
        .filter(|&r| matches!(doc.kind(r), NodeKind::Row { header: false, .. }))
        .collect();

    if !header_rows.is_empty() {
        out.push_str("<thead>");
        for row in header_rows {
            write_node(doc, row, out);
        }
        out.push_str("</thead>");
    }
    out.push_str("<tbody>");
    for row in body_rows {
        write_node(doc, row, out);
    }
    out.push_str("</tbody>");
}

/// Escape text for element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
