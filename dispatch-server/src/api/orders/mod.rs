//! Order API Module
//!
//! | Path | Method | Query | Meaning |
//! |------|--------|-------|---------|
//! | /orders | GET | optional `id` | list with the employee joined (404 when empty) |
//! | /orders | POST | - | create, employee must exist |
//! | /orders | PUT | `id` | sparse update |
//! | /orders | DELETE | `id` | delete |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/orders",
        get(handler::list)
            .post(handler::create)
            .put(handler::update)
            .delete(handler::delete),
    )
}
