//! Error types for queue and playback operations

use thiserror::Error;

/// Precondition violations reported by the queue and by watchable items
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index outside `0..len` was passed to a positional operation
    #[error("index {index} out of range for watch queue of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// `next()` was called with no items left before the cursor wraps
    #[error("no items remaining in watch queue")]
    NothingRemaining,

    /// `watch()` was called on an item whose media is not ready
    #[error("'{title}' is not playable")]
    NotPlayable { title: String },
}

pub type Result<T> = std::result::Result<T, Error>;
