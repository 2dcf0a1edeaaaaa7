use std::time::Instant;

use crate::core::{Config, Result};
use crate::db::DbService;

/// Server state shared with every handler through axum's `State`
///
/// Cheap to clone: the pool is reference counted.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | configuration (immutable) |
/// | db | persistence gateway |
/// | started_at | process start, for uptime reporting |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self {
            config,
            db,
            started_at: Instant::now(),
        }
    }

    /// Open the database described by `config` and build the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        Ok(Self::new(config.clone(), db))
    }

    /// State backed by a private in-memory database
    pub async fn in_memory() -> Result<Self> {
        let db = DbService::in_memory().await?;
        Ok(Self::new(Config::default(), db))
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
