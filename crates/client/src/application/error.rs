//! Service layer error types
//!
//! Only failures that are shown to the user travel as `ServiceError`.
//! Like-related failures are logged and swallowed inside the like services.

use blogs_domain::DomainError;
use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Default bound on a single API call in milliseconds (10 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Errors that can occur in service operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The API call failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Input was rejected before anything was sent
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The API answered with data the client cannot represent
    #[error("Invalid post payload: {0}")]
    InvalidPayload(String),
}
