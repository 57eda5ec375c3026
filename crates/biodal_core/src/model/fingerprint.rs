//! Content fingerprints for records without an external identifier.
//!
//! # Invariants
//! - Field order is by field name, never by construction order.
//! - Missing values hash as the `none` sentinel instead of being skipped.
//! - Output is always `FINGERPRINT_BYTES * 2` lowercase hex characters.

use crate::schema::Table;
use rusqlite::types::Value;

/// Digest size in bytes (128 bits).
pub const FINGERPRINT_BYTES: usize = 16;

/// Text used for `NULL` field values.
pub const MISSING_VALUE: &str = "none";

/// Computes a fingerprint from `(field name, field text)` pairs.
///
/// Pairs are sorted by field name, values joined with one space,
/// lower-cased, UTF-8 encoded and hashed with BLAKE3 in extended-output mode
/// truncated to 16 bytes.
pub fn compute<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    let mut fields: Vec<(&str, String)> = fields.into_iter().collect();
    fields.sort_by(|left, right| left.0.cmp(right.0));

    let joined = fields
        .into_iter()
        .map(|(_, value)| value)
        .collect::<Vec<_>>()
        .join(" ");

    digest(joined.to_lowercase().as_bytes())
}

/// Computes the fingerprint of `values` laid out as `table.columns`.
///
/// Returns `None` when the table declares no fingerprint fields.
pub fn for_values(table: &Table, values: &[Value]) -> Option<String> {
    if !table.has_fingerprint() {
        return None;
    }

    let fields = table.fingerprint.iter().map(|name| {
        let text = table
            .columns
            .iter()
            .position(|column| column.name == *name)
            .and_then(|index| values.get(index))
            .map_or_else(|| MISSING_VALUE.to_string(), value_text);
        (*name, text)
    });

    Some(compute(fields))
}

/// Stringifies one stored value for hashing.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => MISSING_VALUE.to_string(),
        Value::Integer(number) => number.to_string(),
        Value::Real(number) => number.to_string(),
        Value::Text(text) => text.clone(),
        Value::Blob(bytes) => hex::encode(bytes),
    }
}

fn digest(bytes: &[u8]) -> String {
    let mut output = [0_u8; FINGERPRINT_BYTES];
    let mut hasher = blake3::Hasher::new();
    hasher.update(bytes);
    hasher.finalize_xof().fill(&mut output);
    hex::encode(output)
}

#[cfg(test)]
mod tests {
    use super::{compute, for_values, value_text, FINGERPRINT_BYTES};
    use crate::schema::literature;
    use rusqlite::types::Value;

    #[test]
    fn output_is_fixed_size_lowercase_hex() {
        let fingerprint = compute([("name", "Aspirin".to_string())]);
        assert_eq!(fingerprint.len(), FINGERPRINT_BYTES * 2);
        assert!(fingerprint
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn order_of_construction_does_not_matter() {
        let forward = compute([("a", "one".to_string()), ("b", "two".to_string())]);
        let backward = compute([("b", "two".to_string()), ("a", "one".to_string())]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn sorting_is_by_field_name_not_value() {
        let first = compute([("a", "zeta".to_string()), ("b", "alpha".to_string())]);
        let swapped = compute([("a", "alpha".to_string()), ("b", "zeta".to_string())]);
        assert_ne!(first, swapped);
    }

    #[test]
    fn hashing_is_case_insensitive() {
        let upper = compute([("keyword", "Breast Neoplasms".to_string())]);
        let lower = compute([("keyword", "breast neoplasms".to_string())]);
        assert_eq!(upper, lower);
    }

    #[test]
    fn missing_values_use_sentinel() {
        assert_eq!(value_text(&Value::Null), "none");
        assert_eq!(value_text(&Value::Integer(7)), "7");
        assert_eq!(value_text(&Value::Blob(vec![0x0a, 0xff])), "0aff");

        let values = vec![
            Value::Null,
            Value::Text("Smith".to_string()),
            Value::Null,
            Value::Null,
            Value::Null,
        ];
        let partial = for_values(&literature::AUTHORS, &values).unwrap();
        assert_eq!(partial, for_values(&literature::AUTHORS, &values).unwrap());

        let with_name = vec![
            Value::Text("John".to_string()),
            Value::Text("Smith".to_string()),
            Value::Null,
            Value::Null,
            Value::Null,
        ];
        assert_ne!(partial, for_values(&literature::AUTHORS, &with_name).unwrap());
    }

    #[test]
    fn tables_without_fingerprint_return_none() {
        assert!(for_values(&literature::CITATIONS, &[]).is_none());
    }
}
