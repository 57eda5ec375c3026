//! Conditional insert statements keyed on a table's natural key.
//!
//! # Invariants
//! - IODI never modifies an existing row.
//! - IODU only touches the validated update columns.
//! - Batch ids are returned in input order; duplicate inputs share one id.

use super::lookup::{find_id_by_key, find_ids_by_keys, KeyValue};
use super::validate::{ensure_mutable_columns, ensure_row_width};
use super::{RepoError, RepoResult, MAX_BIND_PARAMS};
use crate::model::RecordId;
use crate::schema::Table;
use log::debug;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension};

/// Inserts `values` unless the natural key exists, then returns the row id.
///
/// # Errors
/// - `NoMatchingRecord` when nothing was inserted and no row carries the key.
pub(crate) fn iodi(conn: &Connection, table: &Table, values: &[Value]) -> RepoResult<RecordId> {
    ensure_row_width(table, values)?;

    let sql = format!(
        "{} ON CONFLICT ({}) DO NOTHING RETURNING id",
        insert_prefix(table, 1),
        table.unique.join(", ")
    );
    let inserted = conn
        .prepare_cached(&sql)?
        .query_row(params_from_iter(values), |row| row.get::<_, RecordId>(0))
        .optional()?;

    if let Some(id) = inserted {
        debug!(
            "event=iodi module=repo status=ok table={} outcome=inserted",
            table.qualified_name()
        );
        return Ok(id);
    }

    let key = key_values(table, values);
    match find_id_by_key(conn, table, &key)? {
        Some(id) => {
            debug!(
                "event=iodi module=repo status=ok table={} outcome=existing",
                table.qualified_name()
            );
            Ok(id)
        }
        None => Err(no_matching_record(table, &key)),
    }
}

/// Inserts `values`, or overwrites `update_columns` on the conflicting row.
///
/// An empty `update_columns` behaves like [`iodi`].
pub(crate) fn iodu(
    conn: &Connection,
    table: &Table,
    values: &[Value],
    update_columns: &[&str],
) -> RepoResult<RecordId> {
    if update_columns.is_empty() {
        return iodi(conn, table, values);
    }
    ensure_row_width(table, values)?;
    ensure_mutable_columns(table, update_columns.iter().copied())?;

    let assignments = update_columns
        .iter()
        .map(|column| format!("{column} = excluded.{column}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "{} ON CONFLICT ({}) DO UPDATE SET {assignments} RETURNING id",
        insert_prefix(table, 1),
        table.unique.join(", ")
    );

    let id = conn
        .prepare_cached(&sql)?
        .query_row(params_from_iter(values), |row| row.get::<_, RecordId>(0))?;
    debug!(
        "event=iodu module=repo status=ok table={} columns={}",
        table.qualified_name(),
        update_columns.len()
    );
    Ok(id)
}

/// Batch IODI over rows laid out as `table.insert_columns()`.
pub(crate) fn iodi_batch(
    conn: &Connection,
    table: &Table,
    rows: &[Vec<Value>],
) -> RepoResult<Vec<RecordId>> {
    for row in rows {
        ensure_row_width(table, row)?;
    }
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let width = table.insert_columns().len();
    let rows_per_statement = (MAX_BIND_PARAMS / width).max(1);
    let mut inserted = 0;
    for chunk in rows.chunks(rows_per_statement) {
        let sql = format!(
            "{} ON CONFLICT ({}) DO NOTHING",
            insert_prefix(table, chunk.len()),
            table.unique.join(", ")
        );
        inserted += conn.execute(&sql, params_from_iter(chunk.iter().flatten()))?;
    }

    let keys: Vec<Vec<Value>> = rows.iter().map(|row| key_values(table, row)).collect();
    let found = find_ids_by_keys(conn, table, &keys)?;

    let ids = keys
        .iter()
        .map(|key| {
            found
                .get(&KeyValue::of(key))
                .copied()
                .ok_or_else(|| no_matching_record(table, key))
        })
        .collect::<RepoResult<Vec<_>>>()?;

    debug!(
        "event=iodi_batch module=repo status=ok table={} rows={} inserted={}",
        table.qualified_name(),
        rows.len(),
        inserted
    );
    Ok(ids)
}

/// `INSERT INTO t (cols) VALUES (?, ...), ...` for `rows` rows.
fn insert_prefix(table: &Table, rows: usize) -> String {
    let columns = table.insert_columns();
    let row = format!("({})", vec!["?"; columns.len()].join(", "));
    format!(
        "INSERT INTO {} ({}) VALUES {}",
        table.qualified_name(),
        columns.join(", "),
        vec![row; rows].join(", ")
    )
}

fn key_values(table: &Table, values: &[Value]) -> Vec<Value> {
    table
        .key_positions()
        .into_iter()
        .map(|position| values.get(position).cloned().unwrap_or(Value::Null))
        .collect()
}

fn no_matching_record(table: &Table, key: &[Value]) -> RepoError {
    RepoError::NoMatchingRecord {
        table: table.qualified_name(),
        key: format!("{}={key:?}", table.unique.join(",")),
    }
}

#[cfg(test)]
mod tests {
    use super::insert_prefix;
    use crate::schema::topic;

    #[test]
    fn insert_prefix_repeats_row_placeholders() {
        assert_eq!(
            insert_prefix(&topic::SYNONYMS, 2),
            "INSERT INTO topic_synonyms (synonym, fingerprint) VALUES (?, ?), (?, ?)"
        );
    }
}
