use dioxus::prelude::*;

/// Placeholder card shown while the post list loads
#[component]
pub fn PostCardSkeleton() -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow p-5 animate-pulse",
            div { class: "flex items-center gap-3 mb-4",
                div { class: "w-10 h-10 rounded-full bg-gray-200" }
                div { class: "h-4 w-24 bg-gray-200 rounded" }
            }
            div { class: "h-5 w-3/4 bg-gray-200 rounded mb-3" }
            div { class: "h-4 w-full bg-gray-200 rounded mb-2" }
            div { class: "h-4 w-5/6 bg-gray-200 rounded" }
        }
    }
}
