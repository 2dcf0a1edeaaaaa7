//! Per-request unit of work
//!
//! A [`Session`] is one SQLite transaction. Repository functions run against
//! it through `Deref<Target = SqliteConnection>`; nothing is visible to other
//! requests until [`Session::commit`]. Dropping an uncommitted session rolls
//! the transaction back and returns the connection to the pool.

use std::ops::{Deref, DerefMut};

use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

use super::RepoResult;

pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    /// Acquire a connection and open a deferred (read) transaction on it
    pub async fn begin(pool: &SqlitePool) -> RepoResult<Self> {
        let tx = pool.begin().await?;
        tracing::debug!("Session opened");
        Ok(Self { tx })
    }

    /// Acquire a connection and take the write lock up front
    ///
    /// `BEGIN IMMEDIATE` makes concurrent writers queue on `busy_timeout`
    /// instead of failing to upgrade a stale WAL read snapshot.
    pub async fn begin_write(pool: &SqlitePool) -> RepoResult<Self> {
        let tx = pool.begin_with("BEGIN IMMEDIATE").await?;
        tracing::debug!("Write session opened");
        Ok(Self { tx })
    }

    /// Flush every pending change in one atomic commit
    pub async fn commit(self) -> RepoResult<()> {
        self.tx.commit().await?;
        tracing::debug!("Session committed");
        Ok(())
    }

    /// Discard pending changes
    ///
    /// A failed rollback is only logged: the connection is closed by the pool
    /// and the transaction never becomes visible either way.
    pub async fn rollback(self) {
        if let Err(e) = self.tx.rollback().await {
            tracing::warn!(error = %e, "Session rollback failed");
        } else {
            tracing::debug!("Session rolled back");
        }
    }
}

impl Deref for Session {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.tx
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.tx
    }
}
