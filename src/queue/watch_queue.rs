//! The watch queue itself

use super::command::{Command, QueueState};
use super::config::QueueConfig;
use super::history::History;
use crate::error::{Error, Result};
use crate::media::{Item, Watchable};
use crate::notify::{WatchChannel, WatchObserver};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Observer half of a queue: remembers the last watched item
///
/// Kept behind its own `Rc` so the channel can hold it while the queue
/// itself stays an ordinary owned value.
#[derive(Debug, Default)]
struct WatchedSlot {
    last: RefCell<Option<Item>>,
}

impl WatchObserver for WatchedSlot {
    fn on_watched(&self, item: &Item) {
        log::debug!("Last watched is now '{}'", item.title());
        *self.last.borrow_mut() = Some(Rc::clone(item));
    }
}

/// Point-in-time view of a queue, for display and comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    pub name: String,

    /// Item titles in queue order
    pub titles: Vec<String>,

    /// Cursor position (index of the next item)
    pub cursor: usize,

    pub remaining: usize,
    pub valid: usize,
    pub last_watched: Option<String>,
}

/// Ordered queue of watchables with a consumption cursor and undo/redo
///
/// All mutations go through [`Command`]s recorded on the queue's
/// [`History`]. Watch events are tracked separately and never enter the
/// edit history.
#[derive(Debug)]
pub struct WatchQueue {
    state: QueueState,
    history: History,
    watched: Rc<WatchedSlot>,
}

impl WatchQueue {
    /// Create an empty queue with unbounded history
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, QueueConfig::default())
    }

    /// Create an empty queue using `config`
    pub fn with_config(name: impl Into<String>, config: QueueConfig) -> Self {
        Self {
            state: QueueState::new(name),
            history: History::with_limit(config.history_limit),
            watched: Rc::new(WatchedSlot::default()),
        }
    }

    pub fn name(&self) -> &str {
        self.state.name()
    }

    /// Rename the queue
    pub fn set_name(&mut self, name: impl Into<String>) {
        let command = Command::rename(self.state.name.clone(), name);
        self.apply(command);
    }

    /// Append an item to the end of the queue
    pub fn add_item(&mut self, item: Item) {
        self.apply(Command::add(item));
    }

    /// Remove and return the item at `index`
    ///
    /// Removing an item before the cursor moves the cursor back by one so
    /// it keeps pointing at the same upcoming item.
    pub fn remove_item(&mut self, index: usize) -> Result<Item> {
        let len = self.state.items.len();
        let item = self
            .state
            .items
            .get(index)
            .cloned()
            .ok_or(Error::IndexOutOfRange { index, len })?;

        self.apply(Command::remove(index));
        Ok(item)
    }

    /// Hand out the item at the cursor and advance it
    ///
    /// The cursor wraps to 0 after the last item, so consumption is cyclic.
    /// Undoing an advance moves the cursor back but never below 0.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Item> {
        if self.remaining_count() == 0 {
            return Err(Error::NothingRemaining);
        }

        let item = Rc::clone(&self.state.items[self.state.next_index]);
        self.apply(Command::advance());
        Ok(item)
    }

    /// Move the cursor back to the first item
    pub fn reset(&mut self) {
        self.apply(Command::reset_cursor());
    }

    /// Undo the most recent edit; returns false if there was nothing to undo
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.state)
    }

    /// Redo the most recently undone edit; returns false if there was nothing to redo
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.state)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Description of the edit `undo()` would revert
    pub fn undo_label(&self) -> Option<String> {
        self.history.next_undo_label()
    }

    /// Description of the edit `redo()` would re-apply
    pub fn redo_label(&self) -> Option<String> {
        self.history.next_redo_label()
    }

    /// Number of items whose media is currently playable
    pub fn valid_count(&self) -> usize {
        self.state.items.iter().filter(|i| i.is_valid()).count()
    }

    pub fn total_count(&self) -> usize {
        self.state.items.len()
    }

    /// Items left before the cursor reaches the end
    pub fn remaining_count(&self) -> usize {
        self.total_count() - self.state.next_index
    }

    /// Index of the item `next()` returns
    pub fn cursor(&self) -> usize {
        self.state.next_index
    }

    pub fn is_empty(&self) -> bool {
        self.state.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.state.items.get(index)
    }

    /// Iterate over the queued items in order
    ///
    /// The borrow keeps the queue unchanged for as long as the iterator
    /// lives; call again to start over.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.state.items.iter()
    }

    /// Item most recently reported on a channel this queue observes
    pub fn last_watched(&self) -> Option<Item> {
        self.watched.last.borrow().clone()
    }

    /// Handle to register this queue on a [`WatchChannel`]
    pub fn observer(&self) -> Rc<dyn WatchObserver> {
        self.watched.clone()
    }

    /// Start tracking watch events reported on `channel`
    pub fn subscribe(&self, channel: &WatchChannel) {
        channel.register_observer(self.observer());
    }

    /// Stop tracking watch events reported on `channel`
    pub fn unsubscribe(&self, channel: &WatchChannel) -> bool {
        channel.unregister_observer(&self.observer())
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            name: self.name().to_string(),
            titles: self.iter().map(|i| i.title().to_string()).collect(),
            cursor: self.cursor(),
            remaining: self.remaining_count(),
            valid: self.valid_count(),
            last_watched: self.last_watched().map(|i| i.title().to_string()),
        }
    }

    fn apply(&mut self, mut command: Command) {
        log::debug!("Execute: {}", command.label());
        command.execute(&mut self.state);
        self.history.record(command);
    }
}

impl WatchObserver for WatchQueue {
    /// Record `item` as last watched; not part of the undo history
    fn on_watched(&self, item: &Item) {
        self.watched.on_watched(item);
    }
}

impl<'a> IntoIterator for &'a WatchQueue {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
