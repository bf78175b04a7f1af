//! Queue configuration

/// Configuration for a watch queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueConfig {
    /// Maximum number of undoable commands to keep (None = unbounded)
    ///
    /// When the limit is exceeded the oldest command is dropped and can
    /// no longer be undone.
    pub history_limit: Option<usize>,
}

impl QueueConfig {
    /// Create a configuration with unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` undoable commands
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}
