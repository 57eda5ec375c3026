//! Argument checks that run before any statement touches the store.

use super::{RepoError, RepoResult};
use crate::schema::{Table, ID_COLUMN};
use rusqlite::types::Value;

/// Checks that parallel argument sequences have one length.
///
/// `sequences` pairs each argument name with its length.
pub fn ensure_equal_lengths(sequences: &[(&str, usize)]) -> RepoResult<()> {
    let Some((first_name, first_len)) = sequences.first() else {
        return Ok(());
    };

    let mismatched: Vec<String> = sequences
        .iter()
        .filter(|(_, len)| len != first_len)
        .map(|(name, len)| format!("{name}={len}"))
        .collect();
    if mismatched.is_empty() {
        return Ok(());
    }

    Err(RepoError::InvalidArguments(format!(
        "parallel arguments differ in length: {first_name}={first_len}, {}",
        mismatched.join(", ")
    )))
}

/// Checks a bound row against the table's insert layout.
pub(crate) fn ensure_row_width(table: &Table, values: &[Value]) -> RepoResult<()> {
    let expected = table.insert_columns().len();
    if values.len() != expected {
        return Err(RepoError::InvalidArguments(format!(
            "`{}` expects {expected} values, got {}",
            table.qualified_name(),
            values.len()
        )));
    }
    Ok(())
}

/// Checks that every name can be used as a lookup filter.
pub(crate) fn ensure_filter_columns<'a>(
    table: &Table,
    names: impl IntoIterator<Item = &'a str>,
) -> RepoResult<()> {
    for name in names {
        if !table.is_selectable(name) {
            return Err(unknown_column(table, name));
        }
    }
    Ok(())
}

/// Checks that every name may be overwritten on an existing row.
///
/// Natural keys, the surrogate id and fingerprint inputs are immutable.
pub(crate) fn ensure_mutable_columns<'a>(
    table: &Table,
    names: impl IntoIterator<Item = &'a str>,
) -> RepoResult<()> {
    for name in names {
        if name == ID_COLUMN || table.is_key_column(name) {
            return Err(RepoError::InvalidArguments(format!(
                "`{name}` is part of the key of `{}` and cannot be updated",
                table.qualified_name()
            )));
        }
        if table.is_fingerprint_input(name) {
            return Err(RepoError::InvalidArguments(format!(
                "`{name}` feeds the fingerprint of `{}` and cannot be updated",
                table.qualified_name()
            )));
        }
        if table.column(name).is_none() {
            return Err(unknown_column(table, name));
        }
    }
    Ok(())
}

fn unknown_column(table: &Table, name: &str) -> RepoError {
    RepoError::InvalidArguments(format!(
        "`{}` has no column `{name}`",
        table.qualified_name()
    ))
}

#[cfg(test)]
mod tests {
    use super::{ensure_equal_lengths, ensure_filter_columns, ensure_mutable_columns};
    use crate::repo::RepoError;
    use crate::schema::{app, literature};

    #[test]
    fn equal_lengths_pass_and_mismatch_names_the_offenders() {
        ensure_equal_lengths(&[("a", 2), ("b", 2)]).unwrap();
        ensure_equal_lengths(&[]).unwrap();

        let error = ensure_equal_lengths(&[("fore_names", 2), ("last_names", 3)]).unwrap_err();
        match error {
            RepoError::InvalidArguments(message) => assert!(message.contains("last_names=3")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn filters_accept_id_fingerprint_and_columns() {
        ensure_filter_columns(&literature::KEYWORDS, ["id", "fingerprint", "keyword"]).unwrap();
        assert!(ensure_filter_columns(&app::USERS, ["fingerprint"]).is_err());
        assert!(ensure_filter_columns(&app::USERS, ["email; DROP TABLE"]).is_err());
    }

    #[test]
    fn keys_and_fingerprint_inputs_are_immutable() {
        ensure_mutable_columns(&app::USERS, ["email"]).unwrap();
        assert!(ensure_mutable_columns(&app::USERS, ["auth0_id"]).is_err());
        assert!(ensure_mutable_columns(&literature::AUTHORS, ["last_name"]).is_err());
        assert!(ensure_mutable_columns(&literature::AUTHORS, ["fingerprint"]).is_err());
        ensure_mutable_columns(&literature::CITATION_MESH_TERMS, ["is_major"]).unwrap();
    }
}
