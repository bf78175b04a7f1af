//! Watch Queue - undoable queue of videos and shows
//!
//! This library keeps an ordered queue of watchable media with a
//! consumption cursor, linear undo/redo history, and a notification
//! channel that reports which item was watched last.

pub mod error;
pub mod media;
pub mod notify;
pub mod queue;

pub use error::{Error, Result};
pub use media::{Item, Watchable};
pub use notify::{WatchChannel, WatchObserver};
pub use queue::{QueueConfig, WatchQueue};
