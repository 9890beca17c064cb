// Engine module - classification, tree rendering and markup serialization
// This layer sits between the in-memory value (types) and the host document

pub mod classify;
pub mod document;
pub mod format;
pub mod html;
pub mod tree;

pub use classify::{classify, is_iso_date_like};
pub use document::build_document;
pub use format::{format_date, format_date_string, format_primitive, linkify};
pub use html::{escape, write_html};
pub use tree::{render, render_root, RenderOptions};

use jsonfold_types::{Document, JsonValue, RenderNode};

/// Embedded stylesheet, spliced into the page shell.
pub const STYLESHEET: &str = include_str!("assets/style.css");
/// Embedded client script: the browser twin of the jsonfold-view controller.
pub const CLIENT_SCRIPT: &str = include_str!("assets/viewer.js");

// Façade API - stable entry points for the CLI and host documents

/// Render a value to its output tree.
pub fn render_value(value: &JsonValue, options: &RenderOptions) -> RenderNode {
    render_root(value, options)
}

/// Render a value to the structural document the interaction layer consumes.
pub fn render_document(value: &JsonValue, options: &RenderOptions) -> Document {
    build_document(&render_root(value, options), options)
}

/// Render a value to a markup fragment (no document shell).
pub fn render_fragment(value: &JsonValue, options: &RenderOptions) -> String {
    write_html(&render_document(value, options))
}

/// Render a complete self-contained HTML page: fragment plus the embedded
/// stylesheet and client script.
pub fn render_page(value: &JsonValue, options: &RenderOptions) -> String {
    let fragment = render_fragment(value, options);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <style>{STYLESHEET}</style>\n<script>{CLIENT_SCRIPT}</script>\n\
         </head>\n<body>\n{fragment}\n</body>\n</html>\n"
    )
}
