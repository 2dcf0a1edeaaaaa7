//! Employee API Module
//!
//! | Path | Method | Query | Meaning |
//! |------|--------|-------|---------|
//! | /employees | GET | optional `id` | list (404 when empty) |
//! | /employees | POST | - | create |
//! | /employees | PUT | `id` | sparse update |
//! | /employees | DELETE | `id` | delete unless orders reference it |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/employees",
        get(handler::list)
            .post(handler::create)
            .put(handler::update)
            .delete(handler::delete),
    )
}
