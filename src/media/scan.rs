//! Directory scanning for video files

use super::{Language, Video};
use crate::notify::WatchChannel;
use anyhow::{Context, Result};
use std::path::Path;
use std::rc::Rc;
use walkdir::WalkDir;

/// File extensions treated as playable video
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "webm", "m4v"];

/// Build a video for every media file found under `dir`
///
/// Videos are returned sorted by path and titled after their file stem.
/// Entries that cannot be read are skipped with a warning.
pub fn scan_videos(
    dir: &Path,
    language: &Language,
    studio: &str,
    channel: &Rc<WatchChannel>,
) -> Result<Vec<Rc<Video>>> {
    let metadata = std::fs::metadata(dir)
        .with_context(|| format!("Failed to read video directory: {:?}", dir))?;
    if !metadata.is_dir() {
        anyhow::bail!("Not a directory: {:?}", dir);
    }

    log::info!("Scanning {:?} for videos", dir);

    let mut videos = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_video_extension(entry.path()) {
            continue;
        }

        let title = entry
            .path()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        log::debug!("Found video: {:?}", entry.path());
        videos.push(Rc::new(Video::new(
            entry.path(),
            title,
            language.clone(),
            studio,
            Rc::clone(channel),
        )));
    }

    log::info!("Found {} videos", videos.len());
    Ok(videos)
}

fn has_video_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
