use super::{is_readable_file, Language, Watchable};
use crate::error::{Error, Result};
use crate::notify::WatchChannel;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// One episode of a show, playable on its own
pub struct Episode {
    path: PathBuf,
    title: String,

    /// Position in the show (1-based)
    number: u32,

    show_title: String,
    channel: Rc<WatchChannel>,
}

impl Episode {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn show_title(&self) -> &str {
        &self.show_title
    }
}

impl fmt::Debug for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Episode")
            .field("show", &self.show_title)
            .field("number", &self.number)
            .field("title", &self.title)
            .field("path", &self.path)
            .finish()
    }
}

impl Watchable for Episode {
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

        log::info!(
            "Now watching {} episode {}: {}",
            self.show_title,
            self.number,
            self.title
        );

        let channel = Rc::clone(&self.channel);
        channel.report_watched(self);
        Ok(())
    }
}

/// A show made of an ordered sequence of episodes
pub struct Show {
    title: String,
    language: Language,
    studio: String,

    /// Episodes in airing order
    episodes: Vec<Rc<Episode>>,

    channel: Rc<WatchChannel>,
}

impl Show {
    /// Create a show with no episodes
    pub fn new(
        title: impl Into<String>,
        language: Language,
        studio: impl Into<String>,
        channel: Rc<WatchChannel>,
    ) -> Self {
        Self {
            title: title.into(),
            language,
            studio: studio.into(),
            episodes: Vec::new(),
            channel,
        }
    }

    /// Append a new episode numbered after the existing ones
    pub fn create_and_add_episode(
        &mut self,
        path: impl Into<PathBuf>,
        title: impl Into<String>,
    ) -> Rc<Episode> {
        let episode = Rc::new(Episode {
            path: path.into(),
            title: title.into(),
            number: self.episodes.len() as u32 + 1,
            show_title: self.title.clone(),
            channel: Rc::clone(&self.channel),
        });

        self.episodes.push(Rc::clone(&episode));
        episode
    }

    /// Get an episode by position (0-based)
    pub fn episode(&self, index: usize) -> Option<&Rc<Episode>> {
        self.episodes.get(index)
    }

    pub fn episodes(&self) -> impl Iterator<Item = &Rc<Episode>> {
        self.episodes.iter()
    }

    pub fn episode_count(&self) -> usize {
        self.episodes.len()
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn studio(&self) -> &str {
        &self.studio
    }
}

impl fmt::Debug for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Show")
            .field("title", &self.title)
            .field("language", &self.language)
            .field("studio", &self.studio)
            .field("episodes", &self.episodes)
            .finish()
    }
}

impl Watchable for Show {
    fn title(&self) -> &str {
        &self.title
    }

    /// A show is playable once it has episodes and every one of them is
    fn is_valid(&self) -> bool {
        !self.episodes.is_empty() && self.episodes.iter().all(|e| e.is_valid())
    }

    fn watch(self: Rc<Self>) -> Result<()> {
        if !self.is_valid() {
            return Err(Error::NotPlayable {
                title: self.title.clone(),
            });
        }

        log::info!(
            "Now watching {} ({} episodes)",
            self.title,
            self.episodes.len()
        );

        for episode in &self.episodes {
            Rc::clone(episode).watch()?;
        }

        let channel = Rc::clone(&self.channel);
        channel.report_watched(self);
        Ok(())
    }
}
