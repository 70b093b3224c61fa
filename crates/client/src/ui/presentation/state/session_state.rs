//! Session state using Dioxus signals
//!
//! Holds the signed-in viewer. Components read it explicitly and pass the
//! viewer down to the like services; nothing below the UI reads it on its own.

use dioxus::prelude::*;

use blogs_domain::{Viewer, ViewerId};

#[derive(Clone, Copy)]
pub struct SessionState {
    /// Current viewer, `None` when browsing anonymously
    pub viewer: Signal<Option<Viewer>>,
}

impl SessionState {
    pub fn new(viewer: Option<Viewer>) -> Self {
        Self {
            viewer: Signal::new(viewer),
        }
    }

    pub fn viewer(&self) -> Option<Viewer> {
        self.viewer.read().clone()
    }

    pub fn viewer_id(&self) -> Option<ViewerId> {
        self.viewer.read().as_ref().map(|v| v.id.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.viewer.read().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.viewer.read().as_ref().is_some_and(Viewer::is_admin)
    }

    pub fn set_viewer(&mut self, viewer: Option<Viewer>) {
        self.viewer.set(viewer);
    }
}

pub fn use_session_state() -> SessionState {
    use_context::<SessionState>()
}
