//! Undo/redo stacks for queue commands

use super::command::{Command, QueueState};

/// Linear, single-branch edit history
///
/// Maintains two stacks:
/// - `undo`: executed commands, most recent last
/// - `redo`: undone commands, most recently undone last
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<Command>,
    redo: Vec<Command>,

    /// Maximum undo depth (None = unbounded)
    limit: Option<usize>,
}

impl History {
    /// Create an unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `limit` undoable commands
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            limit,
        }
    }

    /// Push an already executed command
    ///
    /// A new edit starts a new timeline, so the redo stack is cleared.
    pub fn record(&mut self, command: Command) {
        self.redo.clear();
        self.undo.push(command);

        if let Some(limit) = self.limit {
            while self.undo.len() > limit {
                let dropped = self.undo.remove(0);
                log::warn!("History limit {} reached, dropping '{}'", limit, dropped.label());
            }
        }
    }

    /// Invert the most recent command; returns false if there was nothing to undo
    pub fn undo(&mut self, state: &mut QueueState) -> bool {
        let Some(mut command) = self.undo.pop() else {
            return false;
        };

        log::debug!("Undo: {}", command.label());
        command.undo(state);
        self.redo.push(command);
        true
    }

    /// Re-apply the most recently undone command; returns false if there was nothing to redo
    pub fn redo(&mut self, state: &mut QueueState) -> bool {
        let Some(mut command) = self.redo.pop() else {
            return false;
        };

        log::debug!("Redo: {}", command.label());
        command.execute(state);
        self.undo.push(command);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Label of the command `undo` would invert next
    pub fn next_undo_label(&self) -> Option<String> {
        self.undo.last().map(Command::label)
    }

    /// Label of the command `redo` would re-apply next
    pub fn next_redo_label(&self) -> Option<String> {
        self.redo.last().map(Command::label)
    }

    /// Forget all history
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
