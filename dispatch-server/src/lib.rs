//! Dispatch Server - employee and order management over HTTP
//!
//! # Module layout
//!
//! ```text
//! dispatch-server/src/
//! ├── core/          # config, state, server, lifecycle errors
//! ├── api/           # HTTP handlers and extractors
//! ├── routes/        # router assembly and middleware stack
//! ├── middleware/    # request logging
//! ├── utils/         # logger, validation policy
//! └── db/            # SQLite pool, sessions, repositories
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod utils;

pub use core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use routes::build_app;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and start logging
///
/// A missing `.env` file is not an error.
pub fn setup_environment() -> Result<Config, ServerError> {
    match dotenv::dotenv() {
        Err(e) if !e.not_found() => {
            return Err(ServerError::Internal(anyhow::anyhow!(
                "Failed to read .env file: {e}"
            )));
        }
        _ => {}
    }

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____  _                 __       __
   / __ \(_)________  ____ _/ /______/ /_
  / / / / / ___/ __ \/ __ `/ __/ ___/ __ \
 / /_/ / (__  ) /_/ / /_/ / /_/ /__/ / / /
/_____/_/____/ .___/\__,_/\__/\___/_/ /_/
            /_/
    "#
    );
}
