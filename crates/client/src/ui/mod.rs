use dioxus::prelude::*;

pub mod presentation;
pub mod routes;

pub use routes::Route;

use presentation::state::SessionState;
use presentation::Services;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `src/main.rs`).
    let services = use_context::<Services>();

    // Signals must be created inside an active Dioxus runtime.
    use_context_provider(move || SessionState::new(services.session.current_viewer()));

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 text-gray-900",
            Router::<Route> {}
        }
    }
}
