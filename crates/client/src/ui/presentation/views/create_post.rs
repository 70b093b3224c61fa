//! Admin editor for new posts, with a side-by-side preview.

use dioxus::prelude::*;

use crate::application::forms::{CreatePostForm, Notice};
use crate::presentation::components::MarkdownContent;
use crate::presentation::services::use_post_service;
use crate::presentation::state::use_session_state;
use crate::routes::Route;

#[component]
pub fn CreatePostView() -> Element {
    let session = use_session_state();
    let post_service = use_post_service();
    let navigator = use_navigator();

    let mut editor = use_signal(CreatePostForm::default);
    let mut notice = use_signal(|| None::<Notice>);

    if !session.is_admin() {
        return rsx! {
            div {
                class: "max-w-3xl mx-auto px-4 py-16 text-center text-gray-500",
                "Only admins can create posts."
            }
        };
    }

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let Some(submission) = editor.write().begin_submit() else {
            return;
        };
        notice.set(Some(Notice::creating()));

        let post_service = post_service.clone();
        spawn(async move {
            let result = post_service
                .create_post(&submission.title, &submission.content, submission.published)
                .await;
            let outcome = editor.write().finish_submit(&result);
            notice.set(Some(outcome));
            if result.is_ok() {
                navigator.push(Route::Home {});
            }
        });
    };

    let current = editor.read().clone();
    let grid_class = if current.preview {
        "grid grid-cols-1 lg:grid-cols-2 gap-8"
    } else {
        "grid grid-cols-1"
    };
    let preview_label = current.preview_button_label();
    let preview_title = current.preview_title().to_string();
    let preview_content = current.preview_content().to_string();

    rsx! {
        main {
            class: "max-w-4xl mx-auto px-4 py-8",
            div {
                class: "flex items-center justify-between mb-8",
                h1 { class: "text-3xl font-bold", "Create New Post" }
                button {
                    r#type: "button",
                    class: "px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-100",
                    onclick: move |_| editor.write().toggle_preview(),
                    "{preview_label}"
                }
            }

            if let Some(n) = notice.read().clone() {
                NoticeBanner { notice: n }
            }

            div {
                class: "{grid_class}",
                section {
                    class: "bg-white rounded-lg shadow p-6",
                    h2 { class: "text-lg font-semibold mb-4", "Write Post" }
                    form {
                        class: "space-y-6",
                        onsubmit,
                        div {
                            class: "space-y-2",
                            label { r#for: "title", class: "block text-sm font-medium", "Title" }
                            input {
                                id: "title",
                                class: "w-full border border-gray-300 rounded-lg px-3 py-2",
                                value: "{current.title}",
                                placeholder: "Enter post title...",
                                oninput: move |e| editor.write().title = e.value(),
                            }
                        }
                        div {
                            class: "space-y-2",
                            label { r#for: "content", class: "block text-sm font-medium", "Content (Markdown)" }
                            textarea {
                                id: "content",
                                class: "w-full min-h-80 border border-gray-300 rounded-lg px-3 py-2 font-mono",
                                rows: "20",
                                value: "{current.content}",
                                placeholder: "Write your post in markdown...",
                                oninput: move |e| editor.write().content = e.value(),
                            }
                        }
                        label {
                            class: "flex items-center gap-2 text-sm",
                            input {
                                r#type: "checkbox",
                                id: "published",
                                checked: current.published,
                                onchange: move |e| editor.write().published = e.checked(),
                            }
                            "Publish immediately"
                        }
                        button {
                            r#type: "submit",
                            class: "w-full px-4 py-2 bg-gray-900 text-white rounded-lg disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: !current.can_submit(),
                            if current.submitting { "Creating..." } else { "Create blog" }
                        }
                    }
                }
                if current.preview {
                    section {
                        class: "bg-white rounded-lg shadow p-6",
                        h2 { class: "text-lg font-semibold mb-4", "Preview" }
                        h2 { class: "text-2xl font-bold mb-4", "{preview_title}" }
                        MarkdownContent { content: preview_content }
                    }
                }
            }
        }
    }
}

#[component]
fn NoticeBanner(notice: Notice) -> Element {
    let class = match notice {
        Notice::Loading(_) => "bg-blue-50 text-blue-800",
        Notice::Success(_) => "bg-green-50 text-green-800",
        Notice::Error(_) => "bg-red-50 text-red-800",
    };

    let message = notice.message();

    rsx! {
        div { class: "mb-6 px-4 py-3 rounded-lg {class}", "{message}" }
    }
}
