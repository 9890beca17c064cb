use crate::state::{FoldingMode, Fullscreen, InteractionState};
use jsonfold_types::{indicator_text, Document, NodeId, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    /// `1`-`9` select that level; `0` maps to level 10.
    Digit(u8),
    F,
    Escape,
    Shift,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Click(NodeId),
    Key(Key),
    KeyRelease(Key),
}

/// Side requests a transition emits for the host to act on. Scrolling is
/// fire-and-forget; no later transition depends on its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    EnsureVisible(NodeId),
}

/// What a click resolved to, walking self-then-ancestors. The two header
/// controls never trigger each other or row selection.
enum ControlRole {
    FullscreenToggle(NodeId),
    FoldHeader(NodeId),
    Row(NodeId),
    None,
}

/// The interaction state machine. Every handler runs to completion
/// synchronously; guard clauses make missing structure a no-op, never a
/// panic.
#[derive(Debug)]
pub struct Controller {
    state: InteractionState,
}

impl Controller {
    pub fn new(open_levels: u32) -> Self {
        Controller {
            state: InteractionState::new(open_levels),
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn handle(&mut self, doc: &mut Document, input: Input) -> Vec<Effect> {
        let effects = match input {
            Input::Click(target) => self.on_click(doc, target),
            Input::Key(key) => self.on_key(doc, key),
            Input::KeyRelease(Key::Shift) => {
                self.state.folding_mode = FoldingMode::Normal;
                Vec::new()
            }
            Input::KeyRelease(_) => Vec::new(),
        };
        self.update_indicator(doc);
        effects
    }

    // --- click dispatch ---

    fn on_click(&mut self, doc: &mut Document, target: NodeId) -> Vec<Effect> {
        match resolve_control(doc, target) {
            ControlRole::FullscreenToggle(block) => self.toggle_fullscreen(doc, block),
            ControlRole::FoldHeader(block) => self.toggle_fold(doc, block),
            ControlRole::Row(row) => self.toggle_selection(doc, row),
            ControlRole::None => {}
        }
        Vec::new()
    }

    fn toggle_fold(&mut self, doc: &mut Document, block: NodeId) {
        let collapsed = !doc.is_collapsed(block);
        doc.set_collapsed(block, collapsed);

        if self.state.folding_mode == FoldingMode::Recursive {
            // Cascading override: every nested block takes the parent's new
            // state, regardless of its own.
            for child in doc.descendants(block) {
                if doc.is_block(child) {
                    doc.set_collapsed(child, collapsed);
                }
            }
        }
    }

    fn toggle_selection(&mut self, doc: &mut Document, row: NodeId) {
        if let Some(previous) = self.state.selected_row.take() {
            doc.set_selected(previous, false);
            if previous == row {
                return;
            }
        }
        doc.set_selected(row, true);
        self.state.selected_row = Some(row);
    }

    fn move_selection(&mut self, doc: &mut Document, row: NodeId) {
        if let Some(previous) = self.state.selected_row.take() {
            doc.set_selected(previous, false);
        }
        doc.set_selected(row, true);
        self.state.selected_row = Some(row);
    }

    // --- keyboard ---

    fn on_key(&mut self, doc: &mut Document, key: Key) -> Vec<Effect> {
        match key {
            Key::ArrowUp => self.navigate(doc, -1),
            Key::ArrowDown => self.navigate(doc, 1),
            Key::F => {
                if let Some(row) = self.state.selected_row
                    && let Some(block) = doc.enclosing_block(row)
                {
                    self.toggle_fullscreen(doc, block);
                }
                Vec::new()
            }
            Key::Escape => {
                if self.state.fullscreen.is_some() {
                    self.exit_fullscreen(doc);
                }
                Vec::new()
            }
            Key::Shift => {
                self.state.folding_mode = FoldingMode::Recursive;
                Vec::new()
            }
            Key::Digit(digit) => {
                let level = if digit == 0 { 10 } else { u32::from(digit) };
                if (1..=10).contains(&level) {
                    self.state.open_levels = level;
                    self.apply_fold_level(doc);
                }
                Vec::new()
            }
        }
    }

    /// Move selection to the adjacent row within the same immediate table.
    /// No-op at the edges or without a selection.
    fn navigate(&mut self, doc: &mut Document, direction: i32) -> Vec<Effect> {
        let Some(row) = self.state.selected_row else {
            return Vec::new();
        };
        let Some(table) = doc.enclosing_table(row) else {
            return Vec::new();
        };

        let rows: Vec<NodeId> = doc
            .children(table)
            .iter()
            .copied()
            .filter(|&r| doc.is_row(r))
            .collect();
        let Some(index) = rows.iter().position(|&r| r == row) else {
            return Vec::new();
        };

        let target = if direction < 0 {
            index.checked_sub(1).and_then(|i| rows.get(i))
        } else {
            rows.get(index + 1)
        };
        let Some(&next) = target else {
            return Vec::new();
        };

        self.move_selection(doc, next);
        vec![Effect::EnsureVisible(next)]
    }

    /// Three-tier fold-level precedence: selected row (local zero-point) over
    /// fullscreen target (its own depth as zero-point) over document-wide
    /// absolute depths.
    fn apply_fold_level(&mut self, doc: &mut Document) {
        let open = i64::from(self.state.open_levels);

        if let Some(row) = self.state.selected_row {
            let blocks: Vec<NodeId> = doc
                .descendants(row)
                .into_iter()
                .filter(|&id| doc.is_block(id))
                .collect();
            // A selected row without blocks absorbs the keypress; it does not
            // fall through to the wider tiers.
            if blocks.is_empty() {
                return;
            }

            let direct: Vec<NodeId> = blocks
                .iter()
                .copied()
                .filter(|&b| doc.enclosing_row(b) == Some(row))
                .collect();
            let zero_pool: &[NodeId] = if direct.is_empty() { &blocks } else { &direct };
            let zero = zero_pool
                .iter()
                .map(|&b| i64::from(doc.block_depth(b)))
                .min()
                .unwrap_or(0);

            for block in blocks {
                let relative = i64::from(doc.block_depth(block)) - zero;
                doc.set_collapsed(block, relative >= open);
            }
        } else if let Some(fullscreen) = self.state.fullscreen {
            let zero = i64::from(doc.block_depth(fullscreen.target));
            for block in doc.descendants(fullscreen.target) {
                if doc.is_block(block) {
                    let relative = i64::from(doc.block_depth(block)) - zero;
                    doc.set_collapsed(block, relative >= open);
                }
            }
        } else {
            for block in doc.blocks() {
                doc.set_collapsed(block, i64::from(doc.block_depth(block)) >= open);
            }
        }
    }

    // --- fullscreen ---

    fn toggle_fullscreen(&mut self, doc: &mut Document, block: NodeId) {
        if self.state.fullscreen.map(|f| f.target) == Some(block) {
            self.exit_fullscreen(doc);
            return;
        }
        // Only one block may be fullscreen at a time.
        if self.state.fullscreen.is_some() {
            self.exit_fullscreen(doc);
        }

        let Some((parent, index)) = doc.detach(block) else {
            return;
        };
        let root = doc.root();
        doc.append(block, root);
        doc.set_fullscreen(block, true);
        self.state.fullscreen = Some(Fullscreen {
            target: block,
            original_parent: parent,
            original_index: index,
        });
    }

    fn exit_fullscreen(&mut self, doc: &mut Document) {
        let Some(fullscreen) = self.state.fullscreen.take() else {
            return;
        };
        doc.set_fullscreen(fullscreen.target, false);
        doc.detach(fullscreen.target);
        doc.attach(
            fullscreen.target,
            fullscreen.original_parent,
            fullscreen.original_index,
        );
    }

    fn update_indicator(&self, doc: &mut Document) {
        doc.set_indicator_text(indicator_text(
            self.state.open_levels,
            self.state.folding_mode == FoldingMode::Recursive,
            self.state.selected_row.is_some(),
        ));
    }
}

fn resolve_control(doc: &Document, target: NodeId) -> ControlRole {
    for id in std::iter::once(target).chain(doc.ancestors(target)) {
        match doc.kind(id) {
            NodeKind::FullscreenToggle => {
                return match doc.enclosing_block(id) {
                    Some(block) => ControlRole::FullscreenToggle(block),
                    None => ControlRole::None,
                };
            }
            NodeKind::Header => {
                return match doc.enclosing_block(id) {
                    Some(block) => ControlRole::FoldHeader(block),
                    None => ControlRole::None,
                };
            }
            NodeKind::Row { .. } => return ControlRole::Row(id),
            _ => {}
        }
    }
    ControlRole::None
}
