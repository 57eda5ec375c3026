//! Typed records mapped onto schema tables.
//!
//! # Responsibility
//! - Define one owned record type per table.
//! - Map records to and from positional SQL values.
//!
//! # Invariants
//! - `Record::values()` follows `Table::columns` order exactly.
//! - Fingerprints are derived from current field values, never cached, so
//!   they cannot go stale after a field assignment.
//! - Records are plain owned values and stay readable after the session
//!   that produced them has closed.

pub mod app;
pub mod clinical_trial;
pub mod fingerprint;
pub mod literature;
pub mod topic;

use crate::schema::Table;
use rusqlite::types::Value;
use rusqlite::Row;

/// Surrogate primary key assigned by the store.
pub type RecordId = i64;

/// Mapping between one record type and its table descriptor.
pub trait Record: Sized {
    fn table() -> &'static Table;

    /// `None` until the record has been stored or loaded.
    fn id(&self) -> Option<RecordId>;

    fn set_id(&mut self, id: RecordId);

    /// Field values in `Table::columns` order, without the fingerprint.
    fn values(&self) -> Vec<Value>;

    /// Builds a record from a row selected with `Table::select_columns()`.
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Current fingerprint, or `None` when the table is not fingerprinted.
    fn fingerprint(&self) -> Option<String> {
        fingerprint::for_values(Self::table(), &self.values())
    }

    /// Values in `Table::insert_columns()` order.
    fn insert_values(&self) -> Vec<Value> {
        let mut values = self.values();
        if let Some(fingerprint) = fingerprint::for_values(Self::table(), &values) {
            values.push(Value::Text(fingerprint));
        }
        values
    }
}
