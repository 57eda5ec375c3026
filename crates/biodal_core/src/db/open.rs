//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file, private in-memory or shared in-memory connections.
//! - Configure connection pragmas and optional statement echo.
//! - Trigger schema migrations before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON`.
//! - Returned connections have migrations fully applied.

use super::migrations::apply_migrations;
use super::DbResult;
use crate::logging::sanitize_message;
use log::{debug, error, info};
use rusqlite::{Connection, OpenFlags};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_ECHO_CHARS: usize = 400;

/// Where connections point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
    File(PathBuf),
    /// Private in-memory database. Pools share one database across their
    /// connections through a named shared cache.
    Memory,
}

impl ConnectionTarget {
    fn mode(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Memory => "memory",
        }
    }
}

/// Opens a connection to `target` and applies all pending migrations.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_connection(target: &ConnectionTarget, echo: bool) -> DbResult<Connection> {
    let opened = match target {
        ConnectionTarget::File(path) => Connection::open(path),
        ConnectionTarget::Memory => Connection::open_in_memory(),
    };
    finish_open(opened, target.mode(), echo)
}

pub(crate) const SHARED_MEMORY_FLAGS: OpenFlags = OpenFlags::SQLITE_OPEN_READ_WRITE
    .union(OpenFlags::SQLITE_OPEN_CREATE)
    .union(OpenFlags::SQLITE_OPEN_URI)
    .union(OpenFlags::SQLITE_OPEN_NO_MUTEX);

pub(crate) fn shared_memory_uri(name: &str) -> String {
    format!("file:{name}?mode=memory&cache=shared")
}

/// Opens a connection to the named shared-cache in-memory database.
///
/// The database lives as long as at least one connection to `name` is open.
pub(crate) fn open_shared_memory(name: &str, echo: bool) -> DbResult<Connection> {
    let opened = Connection::open_with_flags(shared_memory_uri(name), SHARED_MEMORY_FLAGS);
    finish_open(opened, "shared_memory", echo)
}

fn finish_open(
    opened: rusqlite::Result<Connection>,
    mode: &str,
    echo: bool,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    debug!("event=db_open module=db status=start mode={mode}");

    let mut conn = match opened {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_open_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&mut conn, echo) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={} echo={} duration_ms={}",
                mode,
                echo,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_bootstrap_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection, echo: bool) -> DbResult<()> {
    configure_connection(conn, echo)?;
    apply_migrations(conn)?;
    Ok(())
}

/// Per-connection settings; pooled connections get these on open.
pub(crate) fn configure_connection(conn: &mut Connection, echo: bool) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    if echo {
        conn.trace(Some(echo_statement));
    }
    Ok(())
}

fn echo_statement(sql: &str) {
    debug!(
        "event=sql_echo module=db sql={}",
        sanitize_message(sql, MAX_ECHO_CHARS)
    );
}

#[cfg(test)]
mod tests {
    use super::{open_connection, open_shared_memory, ConnectionTarget};

    #[test]
    fn connections_enable_foreign_keys() {
        let conn = open_connection(&ConnectionTarget::Memory, false).unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn shared_memory_connections_see_the_same_database() {
        let name = format!("open-test-{}", uuid::Uuid::new_v4());
        let first = open_shared_memory(&name, false).unwrap();
        let second = open_shared_memory(&name, true).unwrap();

        first
            .execute(
                "INSERT INTO app_users (auth0_id, email) VALUES ('auth0|shared', NULL)",
                [],
            )
            .unwrap();
        let count: i64 = second
            .query_row("SELECT COUNT(*) FROM app_users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
