//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with the blog API and the session
//! provider without depending on concrete implementations.

pub mod blog_api_port;
pub mod session_port;

pub use blog_api_port::{ApiError, BlogApiPort};
pub use session_port::SessionPort;

#[cfg(any(test, feature = "testing"))]
pub use blog_api_port::MockBlogApiPort;
#[cfg(any(test, feature = "testing"))]
pub use session_port::MockSessionPort;
