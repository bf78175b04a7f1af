use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;
use watchqueue::media::{same_item, Language, Show, Video};
use watchqueue::{Error, Item, QueueConfig, WatchChannel, WatchQueue, Watchable};

/// Create a playable video backed by a real file in `dir`
fn create_video(dir: &TempDir, title: &str, channel: &Rc<WatchChannel>) -> Item {
    let path = dir.path().join(format!("{}.mp4", title));
    fs::write(&path, b"dummy video data").expect("Failed to write dummy video");
    Rc::new(Video::new(
        path,
        title,
        Language::English,
        "Test Studio",
        Rc::clone(channel),
    ))
}

/// Create a video whose file does not exist
fn create_missing_video(title: &str, channel: &Rc<WatchChannel>) -> Item {
    Rc::new(Video::new(
        PathBuf::from("/tmp/watchqueue-missing").join(title),
        title,
        Language::French,
        "Test Studio",
        Rc::clone(channel),
    ))
}

fn titles(list: &WatchQueue) -> Vec<String> {
    list.iter().map(|i| i.title().to_string()).collect()
}

/// Queue "A" holding X, Y, Z
fn create_xyz() -> (TempDir, Rc<WatchChannel>, WatchQueue) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let channel = Rc::new(WatchChannel::new());
    let mut list = WatchQueue::new("A");
    for title in ["X", "Y", "Z"] {
        list.add_item(create_video(&dir, title, &channel));
    }
    (dir, channel, list)
}

#[test]
fn test_new_queue_is_empty() {
    let list = WatchQueue::new("Empty");

    assert_eq!(list.name(), "Empty");
    assert_eq!(list.total_count(), 0);
    assert_eq!(list.remaining_count(), 0);
    assert_eq!(list.valid_count(), 0);
    assert!(list.is_empty());
    assert!(list.last_watched().is_none());
    assert!(!list.can_undo());
    assert!(!list.can_redo());
}

#[test]
fn test_walkthrough_example() {
    let (_dir, _channel, mut list) = create_xyz();
    assert_eq!(list.total_count(), 3);

    let removed = list.remove_item(1).unwrap();
    assert_eq!(removed.title(), "Y");
    assert_eq!(list.total_count(), 2);
    assert_eq!(titles(&list), vec!["X", "Z"]);

    assert!(list.undo());
    assert_eq!(titles(&list), vec!["X", "Y", "Z"]);

    assert_eq!(list.next().unwrap().title(), "X");
    assert_eq!(list.next().unwrap().title(), "Y");
    assert_eq!(list.remaining_count(), 1);

    list.undo();
    assert_eq!(list.remaining_count(), 2);
}

#[test]
fn test_undo_restores_prior_state_for_any_edit_sequence() {
    let (dir, channel, mut list) = create_xyz();
    list.next().unwrap();
    list.next().unwrap();
    let before = list.snapshot();
    let depth_before = 5;

    list.set_name("B");
    list.add_item(create_video(&dir, "W", &channel));
    list.remove_item(0).unwrap();
    list.set_name("C");
    list.remove_item(2).unwrap();
    list.add_item(create_missing_video("V", &channel));
    assert_ne!(list.snapshot(), before);

    for _ in 0..6 {
        assert!(list.undo());
    }

    assert_eq!(list.snapshot(), before);
    assert_eq!(list.cursor(), 2);
    assert!(list.can_undo());

    // Remaining history belongs to the setup edits
    for _ in 0..depth_before {
        assert!(list.undo());
    }
    assert!(!list.undo());
    assert!(list.is_empty());
    assert_eq!(list.name(), "A");
}

#[test]
fn test_redo_reproduces_state_before_undo() {
    let (dir, channel, mut list) = create_xyz();
    list.next().unwrap();

    let steps: Vec<Box<dyn Fn(&mut WatchQueue)>> = vec![
        Box::new(|l: &mut WatchQueue| l.set_name("Renamed")),
        Box::new(|l: &mut WatchQueue| {
            l.remove_item(0).unwrap();
        }),
        Box::new(|l: &mut WatchQueue| l.reset()),
        Box::new(|l: &mut WatchQueue| {
            l.next().unwrap();
        }),
    ];

    for step in steps {
        step(&mut list);
        let after = list.snapshot();
        list.undo();
        list.redo();
        assert_eq!(list.snapshot(), after);
    }

    let item = create_video(&dir, "W", &channel);
    list.add_item(Rc::clone(&item));
    let after = list.snapshot();
    list.undo();
    assert!(list.iter().all(|i| !same_item(i, &item)));
    list.redo();
    assert_eq!(list.snapshot(), after);
}

#[test]
fn test_mutation_clears_redo() {
    let (dir, channel, mut list) = create_xyz();

    list.set_name("B");
    list.undo();
    assert!(list.can_redo());
    assert_eq!(list.redo_label().as_deref(), Some("rename to 'B'"));

    list.add_item(create_video(&dir, "W", &channel));
    assert!(!list.can_redo());
    assert!(!list.redo());
    assert_eq!(list.name(), "A");
    assert_eq!(list.total_count(), 4);
}

#[test]
fn test_empty_history_undo_redo_are_noops() {
    let mut list = WatchQueue::new("A");

    assert!(!list.undo());
    assert!(!list.redo());
    assert_eq!(list.name(), "A");
    assert!(list.undo_label().is_none());
}

#[test]
fn test_next_wraps_to_first_item() {
    let (_dir, _channel, mut list) = create_xyz();
    let first = Rc::clone(list.get(0).unwrap());

    let mut last = None;
    for _ in 0..=list.total_count() {
        last = Some(list.next().unwrap());
    }

    assert!(same_item(&last.unwrap(), &first));
    assert_eq!(list.cursor(), 1);
}

#[test]
fn test_remaining_is_zero_only_at_end() {
    let (_dir, _channel, mut list) = create_xyz();

    assert_eq!(list.remaining_count(), 3);
    list.next().unwrap();
    list.next().unwrap();
    assert_eq!(list.remaining_count(), 1);

    // Consuming the last item wraps the cursor instead of reaching the end
    list.next().unwrap();
    assert_eq!(list.cursor(), 0);
    assert_eq!(list.remaining_count(), 3);

    let mut empty = WatchQueue::new("Empty");
    assert_eq!(empty.remaining_count(), 0);
    assert_eq!(empty.cursor(), empty.total_count());
    assert_eq!(empty.next().unwrap_err(), Error::NothingRemaining);
    assert!(!empty.can_undo());
}

#[test]
fn test_undo_next_clamps_at_zero() {
    let (_dir, _channel, mut list) = create_xyz();

    list.next().unwrap();
    list.next().unwrap();
    assert_eq!(list.cursor(), 2);

    list.undo();
    list.undo();
    assert_eq!(list.cursor(), 0);

    // Advance that wrapped: undo clamps instead of restoring the last index
    let mut single = WatchQueue::new("single");
    let dir = TempDir::new().unwrap();
    let channel = Rc::new(WatchChannel::new());
    single.add_item(create_video(&dir, "only", &channel));
    single.next().unwrap();
    assert_eq!(single.cursor(), 0);
    single.next().unwrap();
    single.next().unwrap();

    for _ in 0..3 {
        single.undo();
        assert_eq!(single.cursor(), 0);
    }
}

#[test]
fn test_remove_before_cursor_shifts_cursor_back() {
    let (_dir, _channel, mut list) = create_xyz();
    list.next().unwrap();
    list.next().unwrap();
    assert_eq!(list.cursor(), 2);

    let removed = list.remove_item(0).unwrap();
    assert_eq!(removed.title(), "X");
    assert_eq!(list.cursor(), 1);
    assert_eq!(list.get(list.cursor()).unwrap().title(), "Z");

    list.undo();
    assert_eq!(titles(&list), vec!["X", "Y", "Z"]);
    assert_eq!(list.cursor(), 2);
    assert!(same_item(list.get(0).unwrap(), &removed));
}

#[test]
fn test_remove_adjacent_to_cursor_round_trips() {
    let (_dir, _channel, mut list) = create_xyz();
    list.next().unwrap();
    list.next().unwrap();

    list.remove_item(1).unwrap();
    assert_eq!(list.cursor(), 1);
    assert_eq!(titles(&list), vec!["X", "Z"]);

    list.undo();
    assert_eq!(list.cursor(), 2);
    assert_eq!(titles(&list), vec!["X", "Y", "Z"]);

    list.redo();
    assert_eq!(list.cursor(), 1);
    assert_eq!(titles(&list), vec!["X", "Z"]);
}

#[test]
fn test_remove_out_of_range_is_rejected() {
    let (_dir, _channel, mut list) = create_xyz();
    let before = list.snapshot();
    let label = list.undo_label();

    let err = list.remove_item(3).unwrap_err();
    assert_eq!(err, Error::IndexOutOfRange { index: 3, len: 3 });
    assert_eq!(list.snapshot(), before);
    assert_eq!(list.undo_label(), label);
}

#[test]
fn test_reset_and_undo() {
    let (_dir, _channel, mut list) = create_xyz();
    list.next().unwrap();
    list.next().unwrap();

    list.reset();
    assert_eq!(list.remaining_count(), 3);
    assert_eq!(list.undo_label().as_deref(), Some("reset cursor"));

    list.undo();
    assert_eq!(list.remaining_count(), 1);
}

#[test]
fn test_duplicates_allowed_and_undo_add_keeps_earlier_copy() {
    let (_dir, _channel, mut list) = create_xyz();
    let x = Rc::clone(list.get(0).unwrap());

    list.add_item(Rc::clone(&x));
    assert_eq!(titles(&list), vec!["X", "Y", "Z", "X"]);

    list.undo();
    assert_eq!(titles(&list), vec!["X", "Y", "Z"]);
    assert!(same_item(list.get(0).unwrap(), &x));
}

#[test]
fn test_valid_count_tracks_file_presence() {
    let dir = TempDir::new().unwrap();
    let channel = Rc::new(WatchChannel::new());
    let mut list = WatchQueue::new("Mixed");

    list.add_item(create_video(&dir, "present", &channel));
    list.add_item(create_missing_video("absent", &channel));
    assert_eq!(list.total_count(), 2);
    assert_eq!(list.valid_count(), 1);

    fs::remove_file(dir.path().join("present.mp4")).unwrap();
    assert_eq!(list.valid_count(), 0);
}

#[test]
fn test_iteration_is_restartable() {
    let (_dir, _channel, list) = create_xyz();

    let first: Vec<&str> = list.iter().map(|i| i.title()).collect();
    let second: Vec<&str> = (&list).into_iter().map(|i| i.title()).collect();
    assert_eq!(first, vec!["X", "Y", "Z"]);
    assert_eq!(first, second);

    let mut count = 0;
    for _ in &list {
        count += 1;
    }
    assert_eq!(count, 3);
}

#[test]
fn test_watch_updates_last_watched() {
    let (_dir, channel, list) = create_xyz();
    list.subscribe(&channel);
    assert_eq!(channel.observer_count(), 1);

    Rc::clone(list.get(0).unwrap()).watch().unwrap();
    assert_eq!(list.last_watched().unwrap().title(), "X");

    Rc::clone(list.get(1).unwrap()).watch().unwrap();
    assert_eq!(list.last_watched().unwrap().title(), "Y");
    assert_eq!(channel.recently_watched().unwrap().title(), "Y");
}

#[test]
fn test_watch_events_are_not_undoable() {
    let (dir, channel, mut list) = create_xyz();
    list.subscribe(&channel);

    list.set_name("B");
    let depth_label = list.undo_label();

    Rc::clone(list.get(2).unwrap()).watch().unwrap();
    assert_eq!(list.undo_label(), depth_label);

    list.add_item(create_video(&dir, "W", &channel));
    list.remove_item(0).unwrap();

    while list.undo() {}
    assert!(list.is_empty());
    assert_eq!(list.last_watched().unwrap().title(), "Z");

    while list.redo() {}
    assert_eq!(list.last_watched().unwrap().title(), "Z");
}

#[test]
fn test_direct_observer_call_records_item() {
    use watchqueue::WatchObserver;

    let (_dir, _channel, list) = create_xyz();
    let z = Rc::clone(list.get(2).unwrap());
    let label = list.undo_label();

    list.on_watched(&z);
    assert!(same_item(&list.last_watched().unwrap(), &z));
    assert_eq!(list.undo_label(), label);
}

#[test]
fn test_unsubscribed_queue_ignores_events() {
    let (_dir, channel, list) = create_xyz();
    list.subscribe(&channel);
    list.subscribe(&channel);
    assert_eq!(channel.observer_count(), 1);

    assert!(list.unsubscribe(&channel));
    Rc::clone(list.get(0).unwrap()).watch().unwrap();

    assert!(list.last_watched().is_none());
    assert_eq!(channel.recently_watched().unwrap().title(), "X");
}

#[test]
fn test_each_queue_tracks_its_own_channel() {
    let dir = TempDir::new().unwrap();
    let home = Rc::new(WatchChannel::new());
    let work = Rc::new(WatchChannel::new());
    let mut home_list = WatchQueue::new("home");
    let work_list = WatchQueue::new("work");
    home_list.subscribe(&home);
    work_list.subscribe(&work);

    let movie = create_video(&dir, "movie", &home);
    home_list.add_item(Rc::clone(&movie));
    movie.watch().unwrap();

    assert_eq!(home_list.last_watched().unwrap().title(), "movie");
    assert!(work_list.last_watched().is_none());
}

#[test]
fn test_invalid_item_cannot_be_watched() {
    let channel = Rc::new(WatchChannel::new());
    let list = WatchQueue::new("A");
    list.subscribe(&channel);

    let ghost = create_missing_video("ghost", &channel);
    let err = ghost.watch().unwrap_err();

    assert_eq!(
        err,
        Error::NotPlayable {
            title: "ghost".to_string()
        }
    );
    assert!(list.last_watched().is_none());
}

#[test]
fn test_show_in_queue() {
    let dir = TempDir::new().unwrap();
    let channel = Rc::new(WatchChannel::new());
    let mut list = WatchQueue::new("Shows");
    list.subscribe(&channel);

    let mut show = Show::new("show 1", Language::Japanese, "tv studio", Rc::clone(&channel));
    for i in 1..=3 {
        let path = dir.path().join(format!("ep{}.mkv", i));
        fs::write(&path, b"episode").unwrap();
        show.create_and_add_episode(path, format!("show 1 episode {}", i));
    }
    let episode = Rc::clone(show.episode(1).unwrap());
    let show: Item = Rc::new(show);

    list.add_item(Rc::clone(&show));
    list.add_item(episode.clone());
    assert_eq!(list.valid_count(), 2);

    episode.watch().unwrap();
    assert_eq!(list.last_watched().unwrap().title(), "show 1 episode 2");

    list.next().unwrap().watch().unwrap();
    assert!(same_item(&list.last_watched().unwrap(), &show));
}

#[test]
fn test_history_limit_bounds_undo() {
    let config = QueueConfig::new().with_history_limit(2);
    let mut list = WatchQueue::with_config("A", config);

    list.set_name("B");
    list.set_name("C");
    list.set_name("D");

    assert!(list.undo());
    assert!(list.undo());
    assert!(!list.undo());
    assert_eq!(list.name(), "B");
}

#[test]
fn test_snapshot_reports_state() {
    let (_dir, channel, mut list) = create_xyz();
    list.subscribe(&channel);
    list.next().unwrap().watch().unwrap();

    let snapshot = list.snapshot();
    assert_eq!(snapshot.name, "A");
    assert_eq!(snapshot.titles, vec!["X", "Y", "Z"]);
    assert_eq!(snapshot.cursor, 1);
    assert_eq!(snapshot.remaining, 2);
    assert_eq!(snapshot.valid, 3);
    assert_eq!(snapshot.last_watched.as_deref(), Some("X"));
}
