//! Shared types for the dispatch API
//!
//! Domain models and the unified error system, used by the server and by
//! any client that talks to it.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Employee, Order, OrderDetail};
