pub mod dom;
pub mod node;
pub mod value;

pub use dom::{indicator_text, Document, NodeId, NodeKind};
pub use node::{Block, Cell, CellBody, RenderNode, Row, Segment, Table};
pub use value::{CellKind, JsonValue};
