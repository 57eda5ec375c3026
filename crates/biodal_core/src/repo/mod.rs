//! Generic data-access layer over the record schema.
//!
//! # Responsibility
//! - Provide idempotent insert (IODI), upsert (IODU), lookup, update and
//!   delete for any [`Record`] type.
//! - Scope every operation to a transaction, either the caller's or a
//!   fresh one that commits or rolls back exactly once.
//!
//! # Invariants
//! - Column names reaching SQL always come from table descriptors; caller
//!   supplied names are validated against them first.
//! - Argument errors are raised before any statement runs.
//! - Errors are propagated unchanged; nothing is retried.

use crate::db::DbError;
use crate::model::{Record, RecordId};
use rusqlite::types::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod lookup;
mod session;
mod sqlite_repo;
mod upsert;
mod validate;

pub use session::Session;
pub use sqlite_repo::SqliteRepository;
pub use validate::ensure_equal_lengths;

/// Upper bound on bound parameters per statement; batches are chunked below it.
pub const MAX_BIND_PARAMS: usize = 32_000;

pub type RepoResult<T> = Result<T, RepoError>;

/// One `(column, value)` filter or assignment.
pub type Attr<'a> = (&'a str, Value);

#[derive(Debug)]
pub enum RepoError {
    /// Store-level failure: connectivity, constraint violation, pool timeout.
    Db(DbError),
    /// Caller supplied arguments that cannot be executed.
    InvalidArguments(String),
    /// A lookup expected at most one row and found several.
    MultipleResults { table: String },
    /// A conditional insert neither inserted nor found the row by its key.
    NoMatchingRecord { table: String, key: String },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidArguments(message) => write!(f, "invalid arguments: {message}"),
            Self::MultipleResults { table } => {
                write!(f, "lookup on `{table}` matched more than one row")
            }
            Self::NoMatchingRecord { table, key } => write!(
                f,
                "row in `{table}` was neither inserted nor found by key {key}"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidArguments(_)
            | Self::MultipleResults { .. }
            | Self::NoMatchingRecord { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Record-level data access.
///
/// Every method takes an optional [`Session`]. With `Some`, the operation
/// joins that transaction and never commits or rolls back itself. With
/// `None`, it runs in a transaction of its own.
pub trait RecordStore {
    /// Runs `op` inside one transaction: commit on `Ok`, rollback on `Err`.
    fn transaction<T, F>(&self, op: F) -> RepoResult<T>
    where
        F: FnOnce(Session<'_>) -> RepoResult<T>;

    fn get<R: Record>(&self, session: Option<Session<'_>>, id: RecordId) -> RepoResult<Option<R>>;

    /// Fails with `MultipleResults` when more than one row matches.
    fn get_by_attrs<R: Record>(
        &self,
        session: Option<Session<'_>>,
        attrs: &[Attr<'_>],
    ) -> RepoResult<Option<R>>;

    /// Rows whose columns fall in the given value sets; optionally ordered by
    /// natural key then id.
    fn bulk_get_by_attrs<R: Record>(
        &self,
        session: Option<Session<'_>>,
        attrs: &[(&str, Vec<Value>)],
        sort: bool,
    ) -> RepoResult<Vec<R>>;

    /// Inserts `record` unless its natural key exists; returns the row id either way.
    fn iodi<R: Record>(&self, session: Option<Session<'_>>, record: &R) -> RepoResult<RecordId>;

    /// Like [`RecordStore::iodi`], returning the record with its id set.
    fn iodi_record<R: Record + Clone>(
        &self,
        session: Option<Session<'_>>,
        record: &R,
    ) -> RepoResult<R>;

    /// Batch IODI; ids come back in input order.
    fn iodi_batch<R: Record>(
        &self,
        session: Option<Session<'_>>,
        records: &[R],
    ) -> RepoResult<Vec<RecordId>>;

    /// Inserts `record`, or updates `update_columns` on the existing row.
    fn iodu<R: Record>(
        &self,
        session: Option<Session<'_>>,
        record: &R,
        update_columns: &[&str],
    ) -> RepoResult<RecordId>;

    fn iodu_record<R: Record + Clone>(
        &self,
        session: Option<Session<'_>>,
        record: &R,
        update_columns: &[&str],
    ) -> RepoResult<R>;

    /// Returns whether a row was changed.
    fn update_attrs<R: Record>(
        &self,
        session: Option<Session<'_>>,
        id: RecordId,
        attrs: &[Attr<'_>],
    ) -> RepoResult<bool>;

    /// Returns whether a row was removed.
    fn delete<R: Record>(&self, session: Option<Session<'_>>, id: RecordId) -> RepoResult<bool>;
}

/// Runs `op` in `session` when given, otherwise in a new transaction of `store`.
///
/// Lets multi-step operations compose into a caller-owned transaction.
pub fn with_session<S, T, F>(store: &S, session: Option<Session<'_>>, op: F) -> RepoResult<T>
where
    S: RecordStore,
    F: FnOnce(Session<'_>) -> RepoResult<T>,
{
    match session {
        Some(session) => op(session),
        None => store.transaction(op),
    }
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn transaction<T, F>(&self, op: F) -> RepoResult<T>
    where
        F: FnOnce(Session<'_>) -> RepoResult<T>,
    {
        (**self).transaction(op)
    }

    fn get<R: Record>(&self, session: Option<Session<'_>>, id: RecordId) -> RepoResult<Option<R>> {
        (**self).get(session, id)
    }

    fn get_by_attrs<R: Record>(
        &self,
        session: Option<Session<'_>>,
        attrs: &[Attr<'_>],
    ) -> RepoResult<Option<R>> {
        (**self).get_by_attrs(session, attrs)
    }

    fn bulk_get_by_attrs<R: Record>(
        &self,
        session: Option<Session<'_>>,
        attrs: &[(&str, Vec<Value>)],
        sort: bool,
    ) -> RepoResult<Vec<R>> {
        (**self).bulk_get_by_attrs(session, attrs, sort)
    }

    fn iodi<R: Record>(&self, session: Option<Session<'_>>, record: &R) -> RepoResult<RecordId> {
        (**self).iodi(session, record)
    }

    fn iodi_record<R: Record + Clone>(
        &self,
        session: Option<Session<'_>>,
        record: &R,
    ) -> RepoResult<R> {
        (**self).iodi_record(session, record)
    }

    fn iodi_batch<R: Record>(
        &self,
        session: Option<Session<'_>>,
        records: &[R],
    ) -> RepoResult<Vec<RecordId>> {
        (**self).iodi_batch(session, records)
    }

    fn iodu<R: Record>(
        &self,
        session: Option<Session<'_>>,
        record: &R,
        update_columns: &[&str],
    ) -> RepoResult<RecordId> {
        (**self).iodu(session, record, update_columns)
    }

    fn iodu_record<R: Record + Clone>(
        &self,
        session: Option<Session<'_>>,
        record: &R,
        update_columns: &[&str],
    ) -> RepoResult<R> {
        (**self).iodu_record(session, record, update_columns)
    }

    fn update_attrs<R: Record>(
        &self,
        session: Option<Session<'_>>,
        id: RecordId,
        attrs: &[Attr<'_>],
    ) -> RepoResult<bool> {
        (**self).update_attrs::<R>(session, id, attrs)
    }

    fn delete<R: Record>(&self, session: Option<Session<'_>>, id: RecordId) -> RepoResult<bool> {
        (**self).delete::<R>(session, id)
    }
}
