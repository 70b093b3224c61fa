//! Application layer - Use cases and orchestration

pub mod converters;
pub mod error;
pub mod forms;
pub mod services;

pub use error::{ServiceError, DEFAULT_REQUEST_TIMEOUT_MS};
