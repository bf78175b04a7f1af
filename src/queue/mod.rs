//! Watch queue with undo/redo history
//!
//! Every mutation of a [`WatchQueue`] is expressed as a [`Command`] that
//! knows how to apply and invert itself. Executed commands are kept on a
//! [`History`] so edits can be undone and redone in linear order.

mod command;
mod config;
mod history;
mod watch_queue;

pub use command::{Command, QueueState};
pub use config::QueueConfig;
pub use history::History;
pub use watch_queue::{QueueSnapshot, WatchQueue};
