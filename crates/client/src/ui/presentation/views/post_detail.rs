use dioxus::prelude::*;

use blogs_domain::{Post, PostId};

use crate::presentation::components::{LikeButton, MarkdownContent};
use crate::presentation::services::use_post_service;
use crate::presentation::view_models::{Loadable, PostDetailModel, LOADING_POST, POST_NOT_FOUND};
use crate::routes::Route;

/// Single post page.
///
/// Loads once per mount; the route keys this view by id.
#[component]
pub fn PostDetailView(id: String) -> Element {
    let post_service = use_post_service();
    let mut page = use_signal(|| Loadable::<Post>::Loading);

    use_effect(move || {
        let post_service = post_service.clone();
        let id = id.clone();
        spawn(async move {
            let Ok(post_id) = PostId::new(id.as_str()) else {
                page.set(Loadable::Missing);
                return;
            };
            match post_service.get_post(&post_id).await {
                Ok(Some(post)) => page.set(Loadable::Ready(post)),
                Ok(None) => page.set(Loadable::Missing),
                Err(e) => {
                    tracing::error!(post_id = %post_id, error = %e, "Failed to fetch post");
                    page.set(Loadable::Missing);
                }
            }
        });
    });

    let current = page.read().clone();
    match current {
        Loadable::Loading => rsx! {
            div { class: "max-w-3xl mx-auto px-4 py-16 text-center text-gray-500", "{LOADING_POST}" }
        },
        Loadable::Missing => rsx! {
            div {
                class: "max-w-3xl mx-auto px-4 py-16 text-center",
                h1 { class: "text-2xl font-bold mb-4", "{POST_NOT_FOUND}" }
                Link { to: Route::Home {}, class: "text-blue-600 hover:underline", "Back to home" }
            }
        },
        Loadable::Ready(post) => {
            let detail = PostDetailModel::new(&post);
            rsx! {
                article {
                    class: "max-w-3xl mx-auto px-4 py-8",
                    h1 { class: "text-4xl font-bold mb-6", "{detail.title}" }
                    div {
                        class: "flex items-center gap-3 mb-8",
                        img {
                            class: "w-12 h-12 rounded-full object-cover",
                            src: "{detail.author.image}",
                            alt: "{detail.author.avatar_alt}",
                        }
                        div {
                            p { class: "font-medium", "{detail.author.name}" }
                            p { class: "text-sm text-gray-500", "{detail.date_label}" }
                        }
                    }
                    MarkdownContent { content: detail.content.clone() }
                    div {
                        class: "flex items-center gap-6 border-t border-gray-200 mt-8 pt-4 text-gray-600",
                        LikeButton {
                            key: "{detail.id}",
                            post_id: post.id.clone(),
                            initial_likes: detail.like_count,
                        }
                        span { class: "text-sm", "💬 {detail.comment_count}" }
                    }
                    section {
                        class: "mt-8",
                        h2 { class: "text-xl font-semibold", "Comments ({detail.comment_count})" }
                    }
                }
            }
        }
    }
}
