//! Blogs client crate.
//!
//! UI, application services and infrastructure adapters for the blog
//! reader. The like toggle lives in `application::services::likes`.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::presentation;
pub use ui::routes;

pub use ui::app;
pub use ui::Route;
