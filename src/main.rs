use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::rc::Rc;
use watchqueue::media::{scan_videos, Language, Show, Video};
use watchqueue::{Item, QueueConfig, WatchChannel, WatchQueue, Watchable};

#[derive(Parser, Debug)]
#[command(name = "watchqueue")]
#[command(about = "Walk through an undoable watch queue session", long_about = None)]
struct Args {
    /// Initial name of the watch queue
    #[arg(short = 'n', long, default_value = "Initial name")]
    name: String,

    /// Directory to scan for video files
    #[arg(short = 'd', long, default_value = "~/Videos")]
    videos: String,

    /// Keep at most this many undoable edits
    #[arg(long)]
    history_limit: Option<usize>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let channel = Rc::new(WatchChannel::new());

    let mut config = QueueConfig::new();
    if let Some(limit) = args.history_limit {
        config = config.with_history_limit(limit);
    }

    // Expand ~ in paths
    let videos_dir = PathBuf::from(shellexpand::tilde(&args.videos).as_ref());
    let videos = match scan_videos(&videos_dir, &Language::English, "Local", &channel) {
        Ok(videos) => videos,
        Err(e) => {
            log::warn!("{:#}", e);
            Vec::new()
        }
    };
    let (movies, show) = demo_media(&videos, &channel);

    let mut list = WatchQueue::with_config(args.name.clone(), config);
    log::info!("Created list '{}'", list.name());

    list.set_name("Second name");
    log::info!("Renamed list: '{}'", list.name());
    list.undo();
    log::info!("After undo: '{}'", list.name());
    list.redo();
    log::info!("After redo: '{}'", list.name());

    for movie in &movies {
        list.add_item(Rc::clone(movie));
    }
    list.add_item(show);
    log::info!("Added {} items ({} playable)", list.total_count(), list.valid_count());

    list.undo();
    log::info!("Undid adding the show, size: {}", list.total_count());
    list.redo();
    log::info!("Redid adding the show, size: {}", list.total_count());

    let removed = list.remove_item(2)?;
    log::info!("Removed '{}', list is now: {}", removed.title(), titles(&list));
    list.undo();
    log::info!("Undid removal, list is now: {}", titles(&list));

    for _ in 0..2 {
        let next = list.next()?;
        log::info!(
            "Next: '{}' ({} remaining)",
            next.title(),
            list.remaining_count()
        );
    }
    list.undo();
    log::info!("Undid next, {} remaining", list.remaining_count());

    list.reset();
    log::info!("Reset cursor, {} remaining", list.remaining_count());
    list.undo();
    log::info!("Undid reset, {} remaining", list.remaining_count());

    list.subscribe(&channel);
    for movie in movies.iter().take(2) {
        if let Err(e) = Rc::clone(movie).watch() {
            log::warn!("{}", e);
        }
        match list.last_watched() {
            Some(last) => log::info!("Last watched: '{}'", last.title()),
            None => log::info!("Nothing watched yet"),
        }
    }

    log::info!("Final state: {:?}", list.snapshot());
    Ok(())
}

/// Three movies and a three-episode show, backed by scanned files when available
fn demo_media(videos: &[Rc<Video>], channel: &Rc<WatchChannel>) -> (Vec<Item>, Item) {
    let path_for = |i: usize| -> PathBuf {
        if videos.is_empty() {
            PathBuf::new()
        } else {
            videos[i % videos.len()].path().to_path_buf()
        }
    };

    let languages = [Language::English, Language::French, Language::Spanish];
    let movies: Vec<Item> = languages
        .into_iter()
        .enumerate()
        .map(|(i, language)| {
            Rc::new(Video::new(
                path_for(i),
                format!("movie {}", i + 1),
                language,
                format!("studio {}", i + 1),
                Rc::clone(channel),
            )) as Item
        })
        .collect();

    let mut show = Show::new("show 1", Language::English, "tv show studio 1", Rc::clone(channel));
    for i in 0..3 {
        show.create_and_add_episode(path_for(i), format!("show 1 episode {}", i + 1));
    }

    if videos.is_empty() {
        log::warn!("No videos found, demo items will not be playable");
    }

    let show: Item = Rc::new(show);
    (movies, show)
}

fn titles(list: &WatchQueue) -> String {
    list.iter()
        .map(|item| item.title())
        .collect::<Vec<_>>()
        .join(", ")
}
