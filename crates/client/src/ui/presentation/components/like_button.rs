//! Like button
//!
//! Owns one [`LikeController`](crate::application::services::LikeController)
//! for as long as it is mounted. Hosts must key it by post id so a new post
//! gets a fresh controller instead of inheriting the old one's state.

use std::sync::Arc;

use dioxus::prelude::*;

use blogs_domain::PostId;

use crate::presentation::services::use_services;
use crate::presentation::state::use_session_state;
use crate::presentation::view_models::LikeButtonModel;

#[component]
pub fn LikeButton(post_id: PostId, initial_likes: u32) -> Element {
    let services = use_services();
    let session = use_session_state();

    let controller =
        use_hook(|| Arc::new(services.like_controller(post_id.clone(), initial_likes)));
    let mut like_state = use_signal(|| controller.state());

    {
        let controller = controller.clone();
        use_drop(move || controller.dispose());
    }

    // Re-resolve the status on mount and whenever the viewer changes
    {
        let controller = controller.clone();
        use_effect(move || {
            let viewer_id = session.viewer_id();
            let controller = controller.clone();
            spawn(async move {
                let state = controller.refresh_status(viewer_id.as_ref()).await;
                like_state.set(state);
            });
        });
    }

    let model = LikeButtonModel::new(&like_state.read(), session.is_signed_in());
    let heart_class = if model.filled {
        "text-red-500"
    } else {
        "text-gray-400"
    };
    let heart = if model.filled { "♥" } else { "♡" };

    let onclick = move |_: MouseEvent| {
        let viewer = session.viewer();
        let Some(permit) = controller.try_begin_toggle(viewer.as_ref()) else {
            return;
        };
        like_state.set(controller.state());

        let controller = controller.clone();
        spawn(async move {
            let outcome = controller.finish_toggle(permit).await;
            tracing::debug!(?outcome, "Like toggle finished");
            like_state.set(controller.state());
        });
    };

    rsx! {
        button {
            r#type: "button",
            class: "flex items-center gap-1 text-sm transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
            disabled: model.disabled,
            "aria-label": model.aria_label,
            onclick,
            span { class: "{heart_class} text-lg", "{heart}" }
            span { "{model.count_label}" }
        }
    }
}
