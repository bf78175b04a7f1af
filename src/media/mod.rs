//! Watchable media items
//!
//! This module defines the capability contract every queue entry
//! satisfies, plus the concrete movie, show and episode types.

mod scan;
mod show;
mod video;

pub use scan::scan_videos;
pub use show::{Episode, Show};
pub use video::{Language, Video};

use crate::error::Result;
use std::fmt;
use std::fs::File;
use std::path::Path;
use std::rc::Rc;

/// Something that can be queued and played
pub trait Watchable: fmt::Debug {
    /// Title shown to the user
    fn title(&self) -> &str;

    /// Whether the underlying media is ready to be played
    fn is_valid(&self) -> bool;

    /// Play the item and report it on its notification channel
    ///
    /// Returns [`crate::Error::NotPlayable`] without reporting anything
    /// when `is_valid()` is false.
    fn watch(self: Rc<Self>) -> Result<()>;
}

/// Shared handle to a queued item; the queue never owns its lifecycle
pub type Item = Rc<dyn Watchable>;

/// Identity comparison for shared items
pub fn same_item(a: &Item, b: &Item) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}

/// A media file is playable when it is a regular file we can open
pub(crate) fn is_readable_file(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}
