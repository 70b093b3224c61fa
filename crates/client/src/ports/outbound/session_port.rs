//! Session Port - who is looking at the page
//!
//! The session provider is an external collaborator (the auth layer). The
//! client only needs to ask it for the current viewer.

use blogs_domain::Viewer;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait SessionPort: Send + Sync {
    /// The signed-in viewer, or `None` for anonymous browsing.
    fn current_viewer(&self) -> Option<Viewer>;
}
