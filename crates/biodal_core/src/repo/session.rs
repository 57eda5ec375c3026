//! Transaction scoping for DAL operations.
//!
//! # Invariants
//! - A joined session is never committed or rolled back by the callee.
//! - An owned scope ends in exactly one commit or one rollback.
//! - A failing rollback is logged and never replaces the original error.

use super::RepoResult;
use crate::db::ConnectionPool;
use log::{debug, warn};
use rusqlite::{Connection, TransactionBehavior};
use std::time::Instant;

/// Handle to an open transaction.
///
/// Sessions are cheap to copy; every copy refers to the same transaction.
#[derive(Debug, Clone, Copy)]
pub struct Session<'a> {
    conn: &'a Connection,
}

impl<'a> Session<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Connection the transaction runs on, for statements outside the DAL.
    pub fn connection(&self) -> &'a Connection {
        self.conn
    }
}

/// Runs `op` in a fresh `IMMEDIATE` transaction on a pooled connection.
pub(crate) fn run_in_transaction<T, F>(pool: &ConnectionPool, op: F) -> RepoResult<T>
where
    F: FnOnce(Session<'_>) -> RepoResult<T>,
{
    let started_at = Instant::now();
    let mut conn = pool.get()?;
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    match op(Session::new(&tx)) {
        Ok(value) => {
            tx.commit()?;
            debug!(
                "event=session_commit module=repo status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(value)
        }
        Err(err) => {
            match tx.rollback() {
                Ok(()) => warn!(
                    "event=session_rollback module=repo status=ok duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                ),
                Err(rollback_err) => warn!(
                    "event=session_rollback module=repo status=error error_code=rollback_failed error={} rollback_error={}",
                    err, rollback_err
                ),
            }
            Err(err)
        }
    }
}

/// Joins `session` when given, otherwise opens a transaction for `op`.
pub(crate) fn session_scope<T, F>(
    pool: &ConnectionPool,
    session: Option<Session<'_>>,
    op: F,
) -> RepoResult<T>
where
    F: FnOnce(Session<'_>) -> RepoResult<T>,
{
    match session {
        Some(session) => op(session),
        None => run_in_transaction(pool, op),
    }
}
