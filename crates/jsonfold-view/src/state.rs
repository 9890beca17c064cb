use jsonfold_types::NodeId;

/// Whether a fold toggle affects one block or cascades to everything inside
/// it. Recursive mode is transient: held modifier only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldingMode {
    Normal,
    Recursive,
}

/// Record of an active fullscreen block. Target and restore position live in
/// one struct so they are set and cleared together; a stale pair cannot
/// exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fullscreen {
    pub target: NodeId,
    pub original_parent: NodeId,
    pub original_index: usize,
}

/// The controller's whole mutable state: one instance per document, mutated
/// only by input handlers, never persisted across loads.
#[derive(Debug)]
pub struct InteractionState {
    pub folding_mode: FoldingMode,
    /// Depth threshold for fold-level adjustment, clamped to 1..=10.
    pub open_levels: u32,
    pub selected_row: Option<NodeId>,
    pub fullscreen: Option<Fullscreen>,
}

impl InteractionState {
    pub fn new(open_levels: u32) -> Self {
        InteractionState {
            folding_mode: FoldingMode::Normal,
            open_levels: open_levels.clamp(1, 10),
            selected_row: None,
            fullscreen: None,
        }
    }
}
