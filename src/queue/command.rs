//! Reversible queue mutations

use crate::media::{same_item, Item, Watchable};

/// Mutable state of a watch queue that commands operate on
#[derive(Debug)]
pub struct QueueState {
    pub(crate) name: String,

    /// Queued items in insertion order (duplicates allowed)
    pub(crate) items: Vec<Item>,

    /// Index of the next item `next()` hands out; always `<= items.len()`
    pub(crate) next_index: usize,
}

impl QueueState {
    /// Create an empty state with the cursor at the start
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            next_index: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn next_index(&self) -> usize {
        self.next_index
    }
}

/// One reversible mutation of a [`QueueState`]
///
/// Each variant carries exactly what it needs to re-apply and invert
/// itself, so redo after undo replays the same change rather than
/// recomputing it from current state.
#[derive(Debug, Clone)]
pub enum Command {
    /// Replace the queue name
    Rename { previous: String, name: String },

    /// Append an item to the end of the queue
    Add { item: Item },

    /// Remove the item at `index`
    Remove {
        index: usize,
        /// Filled in on execute
        removed: Option<Item>,
        /// Whether execute moved the cursor back by one
        cursor_shifted: bool,
    },

    /// Move the cursor forward, wrapping to 0 at the end
    Advance,

    /// Move the cursor back to 0
    ResetCursor { previous: usize },
}

impl Command {
    pub fn rename(previous: impl Into<String>, name: impl Into<String>) -> Self {
        Command::Rename {
            previous: previous.into(),
            name: name.into(),
        }
    }

    pub fn add(item: Item) -> Self {
        Command::Add { item }
    }

    /// Caller guarantees `index` is in range when the command first executes
    pub fn remove(index: usize) -> Self {
        Command::Remove {
            index,
            removed: None,
            cursor_shifted: false,
        }
    }

    pub fn advance() -> Self {
        Command::Advance
    }

    pub fn reset_cursor() -> Self {
        Command::ResetCursor { previous: 0 }
    }

    /// Apply the forward mutation
    pub fn execute(&mut self, state: &mut QueueState) {
        match self {
            Command::Rename { name, .. } => {
                state.name = name.clone();
            }
            Command::Add { item } => {
                state.items.push(item.clone());
            }
            Command::Remove {
                index,
                removed,
                cursor_shifted,
            } => {
                // Removing an already consumed item pulls the cursor back with it
                *cursor_shifted = *index < state.next_index;
                if *cursor_shifted {
                    state.next_index -= 1;
                }
                *removed = Some(state.items.remove(*index));
            }
            Command::Advance => {
                state.next_index += 1;
                if state.next_index >= state.items.len() {
                    state.next_index = 0;
                }
            }
            Command::ResetCursor { previous } => {
                *previous = state.next_index;
                state.next_index = 0;
            }
        }
    }

    /// Apply the inverse mutation
    ///
    /// `Advance` is not a true inverse: it wraps forward but clamps at 0
    /// going back.
    pub fn undo(&mut self, state: &mut QueueState) {
        match self {
            Command::Rename { previous, .. } => {
                state.name = previous.clone();
            }
            Command::Add { item } => {
                if let Some(pos) = state.items.iter().rposition(|i| same_item(i, item)) {
                    state.items.remove(pos);
                }
                state.next_index = state.next_index.min(state.items.len());
            }
            Command::Remove {
                index,
                removed,
                cursor_shifted,
            } => {
                if let Some(item) = removed.take() {
                    state.items.insert(*index, item);
                    if *cursor_shifted {
                        state.next_index += 1;
                    }
                }
            }
            Command::Advance => {
                state.next_index = state.next_index.saturating_sub(1);
            }
            Command::ResetCursor { previous } => {
                state.next_index = *previous;
            }
        }
    }

    /// Short description for logs and undo/redo menus
    pub fn label(&self) -> String {
        match self {
            Command::Rename { name, .. } => format!("rename to '{}'", name),
            Command::Add { item } => format!("add '{}'", item.title()),
            Command::Remove { index, .. } => format!("remove item {}", index),
            Command::Advance => "advance cursor".to_string(),
            Command::ResetCursor { .. } => "reset cursor".to_string(),
        }
    }
}
