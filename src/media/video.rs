use super::{is_readable_file, Watchable};
use crate::error::{Error, Result};
use crate::notify::WatchChannel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Spoken language of a video or show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    French,
    Spanish,
    German,
    Japanese,
    Other(String),
}

impl Language {
    /// Get human-readable language name
    pub fn name(&self) -> &str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Japanese => "Japanese",
            Language::Other(name) => name,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A standalone movie backed by a single media file
pub struct Video {
    /// Path to the media file
    path: PathBuf,

    /// Movie title
    title: String,

    /// Spoken language
    language: Language,

    /// Producing studio
    studio: String,

    /// Where watch events are reported
    channel: Rc<WatchChannel>,
}

impl Video {
    /// Create a new video that reports to `channel` when watched
    pub fn new(
        path: impl Into<PathBuf>,
        title: impl Into<String>,
        language: Language,
        studio: impl Into<String>,
        channel: Rc<WatchChannel>,
    ) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            language,
            studio: studio.into(),
            channel,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn studio(&self) -> &str {
        &self.studio
    }
}

impl fmt::Debug for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Video")
            .field("path", &self.path)
            .field("title", &self.title)
            .field("language", &self.language)
            .field("studio", &self.studio)
            .finish()
    }
}

impl Watchable for Video {
    fn title(&self) -> &str {
        &self.title
    }

    fn is_valid(&self) -> bool {
        is_readable_file(&self.path)
    }

    fn watch(self: Rc<Self>) -> Result<()> {
        if !self.is_valid() {
            return Err(Error::NotPlayable {
                title: self.title.clone(),
            });
        }

        log::info!("Now watching {} ({:?})", self.title, self.path);

        let channel = Rc::clone(&self.channel);
        channel.report_watched(self);
        Ok(())
    }
}
