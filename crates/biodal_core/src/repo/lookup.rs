//! Reads, attribute updates and deletes by id or attribute values.

use super::validate::{ensure_filter_columns, ensure_mutable_columns};
use super::{Attr, RepoError, RepoResult, MAX_BIND_PARAMS};
use crate::model::{Record, RecordId};
use crate::schema::{Table, ID_COLUMN};
use log::debug;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::collections::HashMap;

/// Hashable form of a natural-key tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct KeyValue(Vec<KeyPart>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum KeyPart {
    Null,
    Integer(i64),
    Real(u64),
    Text(String),
    Blob(Vec<u8>),
}

impl KeyValue {
    pub(crate) fn of(values: &[Value]) -> Self {
        Self(
            values
                .iter()
                .map(|value| match value {
                    Value::Null => KeyPart::Null,
                    Value::Integer(number) => KeyPart::Integer(*number),
                    Value::Real(number) => KeyPart::Real(number.to_bits()),
                    Value::Text(text) => KeyPart::Text(text.clone()),
                    Value::Blob(bytes) => KeyPart::Blob(bytes.clone()),
                })
                .collect(),
        )
    }
}

fn select_prefix(table: &Table) -> String {
    format!(
        "SELECT {} FROM {}",
        table.select_columns().join(", "),
        table.qualified_name()
    )
}

pub(crate) fn get<R: Record>(conn: &Connection, id: RecordId) -> RepoResult<Option<R>> {
    let table = R::table();
    let sql = format!("{} WHERE {ID_COLUMN} = ?1", select_prefix(table));
    let record = conn
        .prepare_cached(&sql)?
        .query_row(params![id], R::from_row)
        .optional()?;
    Ok(record)
}

/// Single-row lookup; `NULL` values match `NULL` columns.
pub(crate) fn get_by_attrs<R: Record>(
    conn: &Connection,
    attrs: &[Attr<'_>],
) -> RepoResult<Option<R>> {
    let table = R::table();
    if attrs.is_empty() {
        return Err(RepoError::InvalidArguments(format!(
            "lookup on `{}` needs at least one attribute",
            table.qualified_name()
        )));
    }
    ensure_filter_columns(table, attrs.iter().map(|(name, _)| *name))?;

    let filters = attrs
        .iter()
        .map(|(name, _)| format!("{name} IS ?"))
        .collect::<Vec<_>>()
        .join(" AND ");
    let sql = format!("{} WHERE {filters} LIMIT 2", select_prefix(table));

    let mut stmt = conn.prepare_cached(&sql)?;
    let mut rows = stmt
        .query_map(params_from_iter(attrs.iter().map(|(_, value)| value)), R::from_row)?
        .collect::<rusqlite::Result<Vec<R>>>()?;

    if rows.len() > 1 {
        return Err(RepoError::MultipleResults {
            table: table.qualified_name(),
        });
    }
    Ok(rows.pop())
}

/// All rows whose columns fall within the given value sets.
///
/// An empty value set matches nothing and a `NULL` member matches `NULL`.
/// With `sort`, rows are ordered by the natural key, then by id.
pub(crate) fn bulk_get_by_attrs<R: Record>(
    conn: &Connection,
    attrs: &[(&str, Vec<Value>)],
    sort: bool,
) -> RepoResult<Vec<R>> {
    let table = R::table();
    ensure_filter_columns(table, attrs.iter().map(|(name, _)| *name))?;
    if attrs.iter().any(|(_, values)| values.is_empty()) {
        return Ok(Vec::new());
    }

    let bound: usize = attrs.iter().map(|(_, values)| values.len()).sum();
    if bound > MAX_BIND_PARAMS {
        return Err(RepoError::InvalidArguments(format!(
            "bulk lookup on `{}` binds {bound} values, limit is {MAX_BIND_PARAMS}",
            table.qualified_name()
        )));
    }

    let mut sql = select_prefix(table);
    if !attrs.is_empty() {
        let filters = attrs
            .iter()
            .map(|(name, values)| value_set_filter(name, values))
            .collect::<Vec<_>>()
            .join(" AND ");
        sql.push_str(&format!(" WHERE {filters}"));
    }
    if sort {
        sql.push_str(&format!(" ORDER BY {}, {ID_COLUMN}", table.unique.join(", ")));
    }

    let bound_values = attrs
        .iter()
        .flat_map(|(_, values)| values.iter())
        .filter(|value| !matches!(value, Value::Null));
    let mut stmt = conn.prepare(&sql)?;
    let records = stmt
        .query_map(params_from_iter(bound_values), R::from_row)?
        .collect::<rusqlite::Result<Vec<R>>>()?;

    debug!(
        "event=bulk_get module=repo status=ok table={} rows={}",
        table.qualified_name(),
        records.len()
    );
    Ok(records)
}

/// `IN` filter for one value set. `NULL` members match `NULL` columns, the
/// same way `get_by_attrs` compares with `IS`; they are not bound.
fn value_set_filter(name: &str, values: &[Value]) -> String {
    let present = values
        .iter()
        .filter(|value| !matches!(value, Value::Null))
        .count();
    let matches_null = present < values.len();

    match (present, matches_null) {
        (0, _) => format!("{name} IS NULL"),
        (count, false) => format!("{name} IN ({})", vec!["?"; count].join(", ")),
        (count, true) => format!(
            "({name} IN ({}) OR {name} IS NULL)",
            vec!["?"; count].join(", ")
        ),
    }
}

/// Overwrites mutable columns of one row; returns whether a row changed.
pub(crate) fn update_attrs(
    conn: &Connection,
    table: &Table,
    id: RecordId,
    attrs: &[Attr<'_>],
) -> RepoResult<bool> {
    if attrs.is_empty() {
        return Err(RepoError::InvalidArguments(format!(
            "update on `{}` needs at least one attribute",
            table.qualified_name()
        )));
    }
    ensure_mutable_columns(table, attrs.iter().map(|(name, _)| *name))?;

    let assignments = attrs
        .iter()
        .map(|(name, _)| format!("{name} = ?"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "UPDATE {} SET {assignments} WHERE {ID_COLUMN} = ?",
        table.qualified_name()
    );

    let id_value = Value::Integer(id);
    let changed = conn.execute(
        &sql,
        params_from_iter(attrs.iter().map(|(_, value)| value).chain([&id_value])),
    )?;
    Ok(changed > 0)
}

pub(crate) fn delete(conn: &Connection, table: &Table, id: RecordId) -> RepoResult<bool> {
    let sql = format!(
        "DELETE FROM {} WHERE {ID_COLUMN} = ?1",
        table.qualified_name()
    );
    let removed = conn.prepare_cached(&sql)?.execute(params![id])?;
    debug!(
        "event=delete module=repo status=ok table={} removed={}",
        table.qualified_name(),
        removed
    );
    Ok(removed > 0)
}

/// Id of the row carrying natural key `key`.
pub(crate) fn find_id_by_key(
    conn: &Connection,
    table: &Table,
    key: &[Value],
) -> RepoResult<Option<RecordId>> {
    let filters = table
        .unique
        .iter()
        .map(|column| format!("{column} = ?"))
        .collect::<Vec<_>>()
        .join(" AND ");
    let sql = format!(
        "SELECT {ID_COLUMN} FROM {} WHERE {filters}",
        table.qualified_name()
    );
    let id = conn
        .prepare_cached(&sql)?
        .query_row(params_from_iter(key), |row| row.get::<_, RecordId>(0))
        .optional()?;
    Ok(id)
}

/// Ids of the rows carrying any of `keys`, keyed by natural key.
pub(crate) fn find_ids_by_keys(
    conn: &Connection,
    table: &Table,
    keys: &[Vec<Value>],
) -> RepoResult<HashMap<KeyValue, RecordId>> {
    let width = table.unique.len();
    let target = if width == 1 {
        table.unique.join("")
    } else {
        format!("({})", table.unique.join(", "))
    };
    let tuple = format!("({})", vec!["?"; width].join(", "));

    let mut found = HashMap::with_capacity(keys.len());
    for chunk in keys.chunks((MAX_BIND_PARAMS / width.max(1)).max(1)) {
        let sql = format!(
            "SELECT {ID_COLUMN}, {} FROM {} WHERE {target} IN (VALUES {})",
            table.unique.join(", "),
            table.qualified_name(),
            vec![tuple.as_str(); chunk.len()].join(", ")
        );
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(chunk.iter().flatten()))?;
        while let Some(row) = rows.next()? {
            let id: RecordId = row.get(0)?;
            let key = (1..=width)
                .map(|index| row.get::<_, Value>(index))
                .collect::<rusqlite::Result<Vec<_>>>()?;
            found.insert(KeyValue::of(&key), id);
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::{value_set_filter, KeyValue};
    use rusqlite::types::Value;

    #[test]
    fn null_members_become_is_null() {
        let text = || Value::Text("x".to_string());
        assert_eq!(value_set_filter("name", &[text(), text()]), "name IN (?, ?)");
        assert_eq!(value_set_filter("name", &[Value::Null]), "name IS NULL");
        assert_eq!(
            value_set_filter("name", &[text(), Value::Null]),
            "(name IN (?) OR name IS NULL)"
        );
    }

    #[test]
    fn key_value_distinguishes_types() {
        let text = KeyValue::of(&[Value::Text("1".to_string())]);
        let integer = KeyValue::of(&[Value::Integer(1)]);
        assert_ne!(text, integer);
        assert_eq!(integer, KeyValue::of(&[Value::Integer(1)]));
    }
}
