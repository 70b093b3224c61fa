use dioxus::prelude::*;

use blogs_domain::Post;

use crate::presentation::components::{PostCard, PostCardSkeleton};
use crate::presentation::services::use_post_service;
use crate::presentation::view_models::{Loadable, HOME_SKELETON_CARDS, NO_BLOGS_FOUND};

/// Home page: every post as a card
#[component]
pub fn HomeView() -> Element {
    let post_service = use_post_service();
    let mut posts = use_signal(|| Loadable::<Vec<Post>>::Loading);

    use_effect(move || {
        let post_service = post_service.clone();
        spawn(async move {
            match post_service.list_posts().await {
                Ok(list) => posts.set(Loadable::Ready(list)),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to fetch posts");
                    posts.set(Loadable::Missing);
                }
            }
        });
    });

    let content = match &*posts.read() {
        Loadable::Loading => rsx! {
            for i in 0..HOME_SKELETON_CARDS {
                PostCardSkeleton { key: "{i}" }
            }
        },
        Loadable::Ready(list) if !list.is_empty() => rsx! {
            for post in list.iter().cloned() {
                PostCard { key: "{post.id}", post }
            }
        },
        _ => rsx! {
            p { class: "col-span-full text-center text-gray-500 py-12", "{NO_BLOGS_FOUND}" }
        },
    };

    rsx! {
        main {
            class: "max-w-5xl mx-auto px-4 py-8",
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                {content}
            }
        }
    }
}
