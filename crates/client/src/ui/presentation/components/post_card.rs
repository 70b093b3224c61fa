use chrono::Utc;
use dioxus::prelude::*;

use blogs_domain::Post;

use crate::presentation::components::LikeButton;
use crate::presentation::view_models::PostCardModel;
use crate::routes::Route;

/// A post in the home page grid
#[component]
pub fn PostCard(post: Post) -> Element {
    let card = PostCardModel::new(&post, Utc::now());

    rsx! {
        article {
            class: "bg-white rounded-lg shadow hover:shadow-md transition-shadow p-5 flex flex-col",
            div {
                class: "flex items-center gap-3 mb-4",
                img {
                    class: "w-10 h-10 rounded-full object-cover",
                    src: "{card.author.image}",
                    alt: "{card.author.avatar_alt}",
                }
                div {
                    p { class: "text-sm font-medium text-gray-900", "{card.author.name}" }
                    p { class: "text-xs text-gray-500", "{card.date_label}" }
                }
            }
            Link {
                to: Route::PostDetail { id: card.id.clone() },
                class: "flex-1",
                h2 { class: "text-lg font-semibold text-gray-900 mb-2", "{card.title}" }
                p { class: "text-sm text-gray-600", "{card.excerpt}" }
            }
            div {
                class: "flex items-center gap-4 mt-4 text-gray-500",
                LikeButton {
                    key: "{card.id}",
                    post_id: post.id.clone(),
                    initial_likes: card.like_count,
                }
                span { class: "text-sm", "💬 {card.comment_count}" }
            }
        }
    }
}
