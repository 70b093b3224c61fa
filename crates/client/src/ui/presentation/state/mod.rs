//! Signal-backed UI state shared through Dioxus context

pub mod session_state;

pub use session_state::{use_session_state, SessionState};
