//! Constraint and index naming convention.
//!
//! Names are pure functions of table metadata so that DDL, migrations and
//! tests agree without a shared registry.

use super::Table;

pub fn primary_key_name(table: &Table) -> String {
    format!("pk_{}", table.qualified_name())
}

pub fn unique_constraint_name(table: &Table) -> String {
    format!("uq_{}_{}", table.qualified_name(), table.unique.join("_"))
}

pub fn foreign_key_name(table: &Table, column: &str, referenced: &Table) -> String {
    format!(
        "fk_{}_{}_{}",
        table.qualified_name(),
        column,
        referenced.qualified_name()
    )
}

pub fn index_name(table: &Table, column: &str) -> String {
    format!("ix_{}_{}", table.qualified_name(), column)
}
