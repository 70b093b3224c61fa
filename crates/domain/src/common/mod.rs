//! Common utility functions shared by the domain and the client.
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Minimal dependencies** - only chrono for datetime utilities

pub mod datetime;
pub mod string;

pub use datetime::{format_long_date, format_relative_date};
pub use string::{excerpt, none_if_blank};
