//! SQLite-backed [`RecordStore`].

use super::session::{run_in_transaction, session_scope, Session};
use super::{lookup, upsert, Attr, RecordStore, RepoResult};
use crate::config::DbConfig;
use crate::db::{ConnectionPool, ConnectionTarget, PoolOptions};
use crate::model::{Record, RecordId};
use crate::repo::RepoError;
use log::info;
use rusqlite::types::Value;

/// Data-access entry point owning a connection pool.
///
/// Cloning is cheap; clones share the pool.
#[derive(Clone)]
pub struct SqliteRepository {
    pool: ConnectionPool,
    expire_on_commit: bool,
}

impl SqliteRepository {
    /// Opens the pool described by `config` and migrates the schema.
    ///
    /// # Errors
    /// - `InvalidArguments` when the URL or pool settings are unusable.
    /// - `Db` when the database cannot be opened or migrated.
    pub fn open(config: &DbConfig) -> RepoResult<Self> {
        let target = config
            .target()
            .map_err(|err| RepoError::InvalidArguments(err.to_string()))?;
        let options = config
            .pool_options()
            .map_err(|err| RepoError::InvalidArguments(err.to_string()))?;

        info!(
            "event=repo_open module=repo status=start url={} pool_size={} expire_on_commit={}",
            config.redacted_url(),
            options.size,
            config.expire_on_commit
        );
        let pool = ConnectionPool::open(&target, config.echo, options)?;
        Ok(Self::with_pool(pool, config.expire_on_commit))
    }

    /// Opens a private in-memory database with default pool settings.
    pub fn open_in_memory() -> RepoResult<Self> {
        let pool = ConnectionPool::open(&ConnectionTarget::Memory, false, PoolOptions::default())?;
        Ok(Self::with_pool(pool, false))
    }

    pub fn with_pool(pool: ConnectionPool, expire_on_commit: bool) -> Self {
        Self {
            pool,
            expire_on_commit,
        }
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn expire_on_commit(&self) -> bool {
        self.expire_on_commit
    }

    fn scope<T, F>(&self, session: Option<Session<'_>>, op: F) -> RepoResult<T>
    where
        F: FnOnce(Session<'_>) -> RepoResult<T>,
    {
        session_scope(&self.pool, session, op)
    }

    /// Returns `record` with `id` set, re-read from storage when
    /// `expire_on_commit` is on.
    fn refreshed<R: Record + Clone>(
        &self,
        session: Session<'_>,
        record: &R,
        id: RecordId,
    ) -> RepoResult<R> {
        if self.expire_on_commit {
            return lookup::get::<R>(session.connection(), id)?.ok_or_else(|| {
                RepoError::NoMatchingRecord {
                    table: R::table().qualified_name(),
                    key: format!("id={id}"),
                }
            });
        }
        let mut stored = record.clone();
        stored.set_id(id);
        Ok(stored)
    }
}

impl RecordStore for SqliteRepository {
    fn transaction<T, F>(&self, op: F) -> RepoResult<T>
    where
        F: FnOnce(Session<'_>) -> RepoResult<T>,
    {
        run_in_transaction(&self.pool, op)
    }

    fn get<R: Record>(&self, session: Option<Session<'_>>, id: RecordId) -> RepoResult<Option<R>> {
        self.scope(session, |session| lookup::get::<R>(session.connection(), id))
    }

    fn get_by_attrs<R: Record>(
        &self,
        session: Option<Session<'_>>,
        attrs: &[Attr<'_>],
    ) -> RepoResult<Option<R>> {
        self.scope(session, |session| {
            lookup::get_by_attrs::<R>(session.connection(), attrs)
        })
    }

    fn bulk_get_by_attrs<R: Record>(
        &self,
        session: Option<Session<'_>>,
        attrs: &[(&str, Vec<Value>)],
        sort: bool,
    ) -> RepoResult<Vec<R>> {
        self.scope(session, |session| {
            lookup::bulk_get_by_attrs::<R>(session.connection(), attrs, sort)
        })
    }

    fn iodi<R: Record>(&self, session: Option<Session<'_>>, record: &R) -> RepoResult<RecordId> {
        let values = record.insert_values();
        self.scope(session, |session| {
            upsert::iodi(session.connection(), R::table(), &values)
        })
    }

    fn iodi_record<R: Record + Clone>(
        &self,
        session: Option<Session<'_>>,
        record: &R,
    ) -> RepoResult<R> {
        let values = record.insert_values();
        self.scope(session, |session| {
            let id = upsert::iodi(session.connection(), R::table(), &values)?;
            self.refreshed(session, record, id)
        })
    }

    fn iodi_batch<R: Record>(
        &self,
        session: Option<Session<'_>>,
        records: &[R],
    ) -> RepoResult<Vec<RecordId>> {
        let rows: Vec<Vec<Value>> = records.iter().map(Record::insert_values).collect();
        self.scope(session, |session| {
            upsert::iodi_batch(session.connection(), R::table(), &rows)
        })
    }

    fn iodu<R: Record>(
        &self,
        session: Option<Session<'_>>,
        record: &R,
        update_columns: &[&str],
    ) -> RepoResult<RecordId> {
        let values = record.insert_values();
        self.scope(session, |session| {
            upsert::iodu(session.connection(), R::table(), &values, update_columns)
        })
    }

    fn iodu_record<R: Record + Clone>(
        &self,
        session: Option<Session<'_>>,
        record: &R,
        update_columns: &[&str],
    ) -> RepoResult<R> {
        let values = record.insert_values();
        self.scope(session, |session| {
            let id = upsert::iodu(session.connection(), R::table(), &values, update_columns)?;
            self.refreshed(session, record, id)
        })
    }

    fn update_attrs<R: Record>(
        &self,
        session: Option<Session<'_>>,
        id: RecordId,
        attrs: &[Attr<'_>],
    ) -> RepoResult<bool> {
        self.scope(session, |session| {
            lookup::update_attrs(session.connection(), R::table(), id, attrs)
        })
    }

    fn delete<R: Record>(&self, session: Option<Session<'_>>, id: RecordId) -> RepoResult<bool> {
        self.scope(session, |session| {
            lookup::delete(session.connection(), R::table(), id)
        })
    }
}
