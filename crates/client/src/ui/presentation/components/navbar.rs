use dioxus::prelude::*;

use crate::presentation::state::use_session_state;
use crate::routes::Route;

#[component]
pub fn Navbar() -> Element {
    let mut session = use_session_state();
    let viewer_name = session.viewer().map(|v| v.display_name().to_string());
    let is_admin = session.is_admin();

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200",
            div {
                class: "max-w-5xl mx-auto px-4 h-14 flex items-center justify-between",
                Link {
                    to: Route::Home {},
                    class: "text-xl font-bold text-gray-900",
                    "Blogs"
                }
                div {
                    class: "flex items-center gap-4 text-sm",
                    Link { to: Route::Home {}, class: "text-gray-600 hover:text-gray-900", "Home" }
                    if is_admin {
                        Link { to: Route::CreatePost {}, class: "text-gray-600 hover:text-gray-900", "create" }
                    }
                    if let Some(name) = viewer_name {
                        span { class: "text-gray-500", "Signed in as {name}" }
                        button {
                            r#type: "button",
                            class: "text-gray-600 hover:text-gray-900",
                            onclick: move |_| {
                                tracing::info!("Signing out of this window");
                                session.set_viewer(None);
                            },
                            "Sign out"
                        }
                    } else {
                        span { class: "text-gray-400", "Not signed in" }
                    }
                }
            }
        }
    }
}
