//! HTTP API
//!
//! - [`health`] - health checks
//! - [`employees`] - employee management
//! - [`orders`] - order management
//!
//! Every resource uses the same shape: `GET`, `POST`, `PUT` and `DELETE` on
//! one path, with the target selected by an optional `?id=` query parameter.

pub mod extract;

pub mod employees;
pub mod health;
pub mod orders;

pub use extract::{IdParam, Payload};
