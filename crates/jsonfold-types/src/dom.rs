use crate::value::CellKind;

/// Index into a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Typed structural marker attached to every rendered node. The interaction
/// layer discovers structure through these markers only; it never inspects
/// class strings or the engine's render tree.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Document-level container; fullscreen blocks are re-parented here.
    Root,
    /// Status line showing the current fold level and folding mode.
    Indicator { text: String },
    Block {
        depth: u32,
        is_array: bool,
        item_count: usize,
        collapsed: bool,
        fullscreen: bool,
    },
    /// Clickable block header strip.
    Header,
    /// The `▶`/`▼` control inside a header.
    FoldToggle,
    ItemCount { count: usize },
    /// The `⛶` control inside a header.
    FullscreenToggle,
    /// Block body holding the table.
    Content,
    Table {
        /// Compact horizontal listing of a homogeneous-primitive array.
        inline: bool,
    },
    Row { header: bool, selected: bool },
    /// Object key or column header.
    KeyCell { text: String },
    Cell { kind: CellKind },
    Text { text: String },
    Link { href: String },
    EmptyString,
    EmptyArray,
    ErrorMarker { text: String },
    Plain { date: bool, text: String },
}

#[derive(Debug, Clone)]
struct DomNode {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Mutable arena tree of structural nodes. Node ids stay valid for the life of
/// the document; detaching keeps the node allocated so fullscreen re-parenting
/// can move it back.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<DomNode>,
}

impl Document {
    pub fn new() -> Self {
        Document {
            nodes: vec![DomNode {
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(DomNode {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn kind_mut(&mut self, id: NodeId) -> &mut NodeKind {
        &mut self.nodes[id.0].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Walk from `id` toward the root, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.parent(id);
        std::iter::from_fn(move || {
            let next = current?;
            current = self.parent(next);
            Some(next)
        })
    }

    /// All nodes below `id` in document (pre-)order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        out
    }

    /// Remove `id` from its parent's child list and return the prior
    /// (parent, index) position. The node itself stays alive.
    pub fn detach(&mut self, id: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.nodes[id.0].parent.take()?;
        let index = self.nodes[parent.0]
            .children
            .iter()
            .position(|&c| c == id)?;
        self.nodes[parent.0].children.remove(index);
        Some((parent, index))
    }

    /// Re-insert a detached node under `parent` at `index` (clamped to the
    /// current child count).
    pub fn attach(&mut self, id: NodeId, parent: NodeId, index: usize) {
        let index = index.min(self.nodes[parent.0].children.len());
        self.nodes[parent.0].children.insert(index, id);
        self.nodes[id.0].parent = Some(parent);
    }

    pub fn append(&mut self, id: NodeId, parent: NodeId) {
        let end = self.nodes[parent.0].children.len();
        self.attach(id, parent, end);
    }

    // --- typed accessors used by the interaction layer ---

    pub fn is_block(&self, id: NodeId) -> bool {
        matches!(self.kind(id), NodeKind::Block { .. })
    }

    pub fn is_row(&self, id: NodeId) -> bool {
        matches!(self.kind(id), NodeKind::Row { .. })
    }

    /// A block's nesting depth; a node without a depth marker reads as 0.
    pub fn block_depth(&self, id: NodeId) -> u32 {
        match self.kind(id) {
            NodeKind::Block { depth, .. } => *depth,
            _ => 0,
        }
    }

    pub fn is_collapsed(&self, id: NodeId) -> bool {
        matches!(self.kind(id), NodeKind::Block { collapsed: true, .. })
    }

    pub fn set_collapsed(&mut self, id: NodeId, value: bool) {
        if let NodeKind::Block { collapsed, .. } = self.kind_mut(id) {
            *collapsed = value;
        }
        self.sync_fold_toggle(id, value);
    }

    pub fn is_fullscreen(&self, id: NodeId) -> bool {
        matches!(self.kind(id), NodeKind::Block { fullscreen: true, .. })
    }

    pub fn set_fullscreen(&mut self, id: NodeId, value: bool) {
        if let NodeKind::Block { fullscreen, .. } = self.kind_mut(id) {
            *fullscreen = value;
        }
    }

    pub fn set_selected(&mut self, id: NodeId, value: bool) {
        if let NodeKind::Row { selected, .. } = self.kind_mut(id) {
            *selected = value;
        }
    }

    /// Every block in the document, in document order.
    pub fn blocks(&self) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&id| self.is_block(id))
            .collect()
    }

    /// Nearest ancestor block of a node, if any.
    pub fn enclosing_block(&self, id: NodeId) -> Option<NodeId> {
        self.ancestors(id).find(|&a| self.is_block(a))
    }

    /// Nearest ancestor row of a node, if any.
    pub fn enclosing_row(&self, id: NodeId) -> Option<NodeId> {
        self.ancestors(id).find(|&a| self.is_row(a))
    }

    /// Nearest ancestor table of a node, if any.
    pub fn enclosing_table(&self, id: NodeId) -> Option<NodeId> {
        self.ancestors(id)
            .find(|&a| matches!(self.kind(a), NodeKind::Table { .. }))
    }

    pub fn indicator(&self) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|&id| matches!(self.kind(id), NodeKind::Indicator { .. }))
    }

    pub fn set_indicator_text(&mut self, text: String) {
        if let Some(id) = self.indicator()
            && let NodeKind::Indicator { text: current } = self.kind_mut(id)
        {
            *current = text;
        }
    }

    /// Keep a block's `▶`/`▼` glyph in step with its collapsed flag.
    fn sync_fold_toggle(&mut self, block: NodeId, collapsed: bool) {
        let toggle = self
            .descendants(block)
            .into_iter()
            .find(|&id| matches!(self.kind(id), NodeKind::FoldToggle));
        if let Some(toggle) = toggle {
            let glyph = if collapsed { "▶" } else { "▼" };
            if let Some(&text_node) = self.children(toggle).first()
                && let NodeKind::Text { text } = self.kind_mut(text_node)
            {
                *text = glyph.to_string();
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Status-line wording. Shared by the renderer (initial text) and the
/// interaction layer (recomputed after every transition) so the two never
/// drift apart.
pub fn indicator_text(open_levels: u32, recursive: bool, selected: bool) -> String {
    let adjust = if selected {
        format!("Press 1-10 to adjust fold level relative to selection (current: {open_levels})")
    } else {
        format!("Press 1-10 to adjust fold level (current: {open_levels})")
    };
    let mode = if recursive {
        "Folding Mode: recursive (recursive folding active)"
    } else {
        "Folding Mode: normal (hold Shift for recursive)"
    };
    format!("{adjust} | {mode} | Navigation: ↑↓ between rows | Fullscreen: F")
}
