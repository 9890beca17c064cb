use crate::value::CellKind;

/// Output tree of one render pass. Built bottom-up, serialized to markup, then
/// discarded; interaction never feeds back into it.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// A classified, formatted primitive.
    Cell(Cell),
    /// Homogeneous-primitive array rendered as one horizontal row, no block
    /// wrapper around it.
    InlineRow(Vec<Cell>),
    /// Collapsible rendering of one nested object or array.
    Block(Block),
    /// Explicit `[]` marker; an empty array is not an empty table.
    EmptyArray,
    /// Inline error marker for inputs the renderer refuses to table-ize
    /// (top-level undefined). Rendering itself never fails.
    Error(String),
    /// Top-level plain string, rendered outside any table.
    PlainString(String),
    /// Top-level date value, rendered outside any table.
    PlainDate(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub is_array: bool,
    pub item_count: usize,
    /// 0 at the root, +1 per descent into a nested object/array.
    pub depth: u32,
    /// Fixed at creation time: `depth >= default_open_levels`. Interactive
    /// changes toggle presentation state only, never this tree.
    pub collapsed: bool,
    pub table: Table,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column headers; empty for object tables (keys sit in row header cells).
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// One object entry: key in a header cell, value in a data cell.
    Entry { key: String, cell: Cell },
    /// One array element row, one cell per column header.
    Items(Vec<Cell>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub kind: CellKind,
    pub body: CellBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellBody {
    /// Formatted primitive: literal text interleaved with detected links.
    Text(Vec<Segment>),
    /// Nested object/array rendered recursively.
    Nested(Box<RenderNode>),
    /// Cell for a key this row's element does not have.
    Empty,
    /// Visually distinct marker for the empty string.
    EmptyString,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Text(String),
    /// An `http(s)://` run; becomes an anchor opening in a new tab.
    Link(String),
}

impl Cell {
    pub fn text(kind: CellKind, text: impl Into<String>) -> Self {
        Cell {
            kind,
            body: CellBody::Text(vec![Segment::Text(text.into())]),
        }
    }
}
