//! Router configuration

use dioxus::prelude::*;

use crate::presentation::components::Navbar;
use crate::presentation::views::{CreatePostView, HomeView, PostDetailView};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavbarLayout)]
        #[route("/")]
        Home {},
        #[route("/blogs/:id")]
        PostDetail { id: String },
        #[route("/admin/create")]
        CreatePost {},
}

#[component]
fn NavbarLayout() -> Element {
    rsx! {
        Navbar {}
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! { HomeView {} }
}

/// Keyed by id so navigating between posts mounts a fresh page
#[component]
fn PostDetail(id: String) -> Element {
    rsx! {
        PostDetailView { key: "{id}", id: id.clone() }
    }
}

#[component]
fn CreatePost() -> Element {
    rsx! { CreatePostView {} }
}
