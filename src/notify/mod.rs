//! Watch notifications
//!
//! A [`WatchChannel`] is created once per session and handed to every
//! watchable item. Items report themselves on it when watched, and the
//! channel fans each event out to its registered observers.

mod channel;

pub use channel::{WatchChannel, WatchObserver};
