//! Bounded SQLite connection pool backed by `r2d2`.
//!
//! # Responsibility
//! - Migrate the schema once before any pooled connection is handed out.
//! - Cap open connections, time out blocked checkouts, retire old connections.
//!
//! # Invariants
//! - Every pooled connection has `foreign_keys=ON` and the busy timeout set.
//! - In-memory pools hold exactly one connection plus an anchor that keeps the
//!   shared database alive, so writers queue on the pool instead of failing
//!   with a shared-cache table lock.

use super::open::{
    configure_connection, open_connection, open_shared_memory, shared_memory_uri,
    SHARED_MEMORY_FLAGS,
};
use super::{ConnectionTarget, DbError, DbResult};
use log::{debug, info, warn};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Connection handed out by [`ConnectionPool::get`]; returned on drop.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

const MIN_BUILD_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolOptions {
    pub size: u32,
    /// Maximum connection age. `None` keeps connections forever.
    pub recycle: Option<Duration>,
    /// How long a checkout waits for a free connection.
    pub timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            size: 5,
            recycle: Some(Duration::from_secs(3600)),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Snapshot of pool occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    pub open: u32,
    pub idle: u32,
}

/// Shared handle to a connection pool. Clones refer to the same pool.
#[derive(Clone)]
pub struct ConnectionPool {
    inner: r2d2::Pool<SqliteConnectionManager>,
    options: PoolOptions,
    _anchor: Option<Arc<Mutex<Connection>>>,
}

impl ConnectionPool {
    /// Opens a pool for `target`, running migrations once up front.
    ///
    /// # Errors
    /// - `Sqlite` when the first connection cannot be opened or migrated.
    /// - `UnsupportedSchemaVersion` when the file was written by a newer build.
    /// - `PoolTimeout` when the pool cannot fill its idle connections in time.
    pub fn open(target: &ConnectionTarget, echo: bool, options: PoolOptions) -> DbResult<Self> {
        let (manager, options, anchor) = match target {
            ConnectionTarget::File(path) => {
                drop(open_connection(target, echo)?);
                let options = PoolOptions {
                    size: options.size.max(1),
                    ..options
                };
                (SqliteConnectionManager::file(path), options, None)
            }
            ConnectionTarget::Memory => {
                let name = format!("biodal-{}", uuid::Uuid::new_v4());
                let anchor = open_shared_memory(&name, echo)?;
                if options.size > 1 {
                    info!(
                        "event=pool_size_capped module=db mode=memory requested_size={} size=1",
                        options.size
                    );
                }
                let manager = SqliteConnectionManager::file(shared_memory_uri(&name))
                    .with_flags(SHARED_MEMORY_FLAGS);
                let options = PoolOptions { size: 1, ..options };
                (manager, options, Some(Arc::new(Mutex::new(anchor))))
            }
        };

        let manager = manager.with_init(move |conn| configure_connection(conn, echo));
        let started_at = Instant::now();
        let inner = r2d2::Pool::builder()
            .max_size(options.size)
            .max_lifetime(options.recycle.filter(|recycle| !recycle.is_zero()))
            .connection_timeout(options.timeout.max(MIN_BUILD_TIMEOUT))
            .build(manager)
            .map_err(|err| pool_error(options.size, started_at, err))?;

        debug!(
            "event=pool_open module=db status=ok size={} recycle_secs={} timeout_ms={}",
            options.size,
            options.recycle.map_or(0, |recycle| recycle.as_secs()),
            options.timeout.as_millis()
        );

        Ok(Self {
            inner,
            options,
            _anchor: anchor,
        })
    }

    /// Effective options; in-memory pools report a size of 1.
    pub fn options(&self) -> PoolOptions {
        self.options
    }

    pub fn status(&self) -> PoolStatus {
        let state = self.inner.state();
        PoolStatus {
            open: state.connections,
            idle: state.idle_connections,
        }
    }

    /// Checks out a connection, waiting up to `PoolOptions::timeout`.
    ///
    /// # Errors
    /// - `PoolTimeout` when every connection stays checked out, or when no
    ///   replacement connection could be opened in time.
    pub fn get(&self) -> DbResult<PooledConnection> {
        let started_at = Instant::now();
        self.inner
            .get_timeout(self.options.timeout)
            .map_err(|err| pool_error(self.options.size, started_at, err))
    }
}

fn pool_error(size: u32, started_at: Instant, source: r2d2::Error) -> DbError {
    let waited = started_at.elapsed();
    warn!(
        "event=pool_checkout module=db status=error error_code=pool_timeout size={} waited_ms={} error={}",
        size,
        waited.as_millis(),
        source
    );
    DbError::PoolTimeout {
        size,
        waited,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::{ConnectionPool, PoolOptions, PoolStatus};
    use crate::db::{ConnectionTarget, DbError};
    use std::time::Duration;

    fn options(size: u32, timeout: Duration) -> PoolOptions {
        PoolOptions {
            size,
            recycle: None,
            timeout,
        }
    }

    fn file_pool(size: u32, timeout: Duration) -> (tempfile::TempDir, ConnectionPool) {
        let dir = tempfile::tempdir().unwrap();
        let target = ConnectionTarget::File(dir.path().join("pool.db"));
        let pool = ConnectionPool::open(&target, false, options(size, timeout)).unwrap();
        (dir, pool)
    }

    #[test]
    fn released_connections_are_reused() {
        let (_dir, pool) = file_pool(1, Duration::from_millis(50));
        drop(pool.get().unwrap());
        assert_eq!(pool.status(), PoolStatus { open: 1, idle: 1 });

        let _conn = pool.get().unwrap();
        assert_eq!(pool.status(), PoolStatus { open: 1, idle: 0 });
    }

    #[test]
    fn exhausted_pool_times_out() {
        let (_dir, pool) = file_pool(1, Duration::from_millis(50));
        let _held = pool.get().unwrap();

        let error = pool.get().err().unwrap();
        assert!(matches!(error, DbError::PoolTimeout { size: 1, .. }));
    }

    #[test]
    fn waiting_checkout_gets_connection_released_by_another_thread() {
        let (_dir, pool) = file_pool(1, Duration::from_secs(5));
        let held = pool.get().unwrap();

        let releaser = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            drop(held);
        });
        let _conn = pool.get().unwrap();
        releaser.join().unwrap();
    }

    #[test]
    fn pooled_connections_are_configured() {
        let (_dir, pool) = file_pool(2, Duration::from_millis(50));
        let conn = pool.get().unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn memory_pool_holds_a_single_connection() {
        let pool =
            ConnectionPool::open(&ConnectionTarget::Memory, false, options(5, Duration::from_millis(50)))
                .unwrap();
        assert_eq!(pool.options().size, 1);

        let writer = pool.get().unwrap();
        writer
            .execute("INSERT INTO app_users (auth0_id) VALUES ('auth0|pool')", [])
            .unwrap();
        assert!(matches!(pool.get(), Err(DbError::PoolTimeout { size: 1, .. })));
        drop(writer);

        let reader = pool.get().unwrap();
        let count: i64 = reader
            .query_row("SELECT COUNT(*) FROM app_users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
