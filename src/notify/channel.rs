use crate::media::{Item, Watchable};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Receives "item watched" events from a [`WatchChannel`]
pub trait WatchObserver {
    fn on_watched(&self, item: &Item);
}

/// Publish/subscribe hub for watch events
///
/// Single-threaded: observers and the recently watched slot live behind
/// `RefCell`s and the channel is shared as `Rc<WatchChannel>`.
#[derive(Default)]
pub struct WatchChannel {
    /// Registered observers, in registration order
    observers: RefCell<Vec<Rc<dyn WatchObserver>>>,

    /// Most recently reported item; overwritten, never cleared
    recently_watched: RefCell<Option<Item>>,
}

impl WatchChannel {
    /// Create a channel with no observers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; registering the same observer twice is a no-op
    pub fn register_observer(&self, observer: Rc<dyn WatchObserver>) {
        let mut observers = self.observers.borrow_mut();
        if observers.iter().any(|o| same_observer(o, &observer)) {
            log::debug!("Observer already registered");
            return;
        }
        observers.push(observer);
        log::debug!("Registered observer ({} total)", observers.len());
    }

    /// Remove an observer, returning whether it was registered
    pub fn unregister_observer(&self, observer: &Rc<dyn WatchObserver>) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|o| !same_observer(o, observer));
        let removed = observers.len() != before;
        if removed {
            log::debug!("Unregistered observer ({} left)", observers.len());
        }
        removed
    }

    /// Record `item` as most recently watched and notify every observer
    pub fn report_watched(&self, item: Item) {
        *self.recently_watched.borrow_mut() = Some(Rc::clone(&item));

        // Observers may register or unregister others while being notified
        let observers: Vec<Rc<dyn WatchObserver>> = self.observers.borrow().clone();
        log::debug!(
            "Reporting '{}' to {} observer(s)",
            item.title(),
            observers.len()
        );

        for observer in observers {
            observer.on_watched(&item);
        }
    }

    /// Most recently reported item, if any
    pub fn recently_watched(&self) -> Option<Item> {
        self.recently_watched.borrow().clone()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }
}

impl fmt::Debug for WatchChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchChannel")
            .field("observers", &self.observer_count())
            .field(
                "recently_watched",
                &self.recently_watched.borrow().as_ref().map(|i| i.title().to_string()),
            )
            .finish()
    }
}

fn same_observer(a: &Rc<dyn WatchObserver>, b: &Rc<dyn WatchObserver>) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}
