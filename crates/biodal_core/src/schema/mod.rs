//! Typed table descriptors for every persisted record.
//!
//! # Responsibility
//! - Declare tables, columns, natural keys and fingerprint fields as data.
//! - Derive DDL and constraint names from descriptors with pure functions.
//!
//! # Invariants
//! - Every table has a surrogate `id` primary key and exactly one natural key.
//! - Natural-key columns are never nullable, so `ON CONFLICT` always fires.
//! - Fingerprinted tables carry a trailing `fingerprint` column.
//! - Namespaces are listed in foreign-key dependency order.

pub mod app;
pub mod clinical_trial;
pub mod literature;
pub mod naming;
pub mod topic;

/// Name of the column that stores a record fingerprint.
pub const FINGERPRINT_COLUMN: &str = "fingerprint";

/// Name of the surrogate primary key column.
pub const ID_COLUMN: &str = "id";

/// Logical schema grouping. Rendered as a table-name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Medical topic taxonomy (descriptors, concepts, terms).
    Topic,
    /// Biomedical literature metadata.
    Literature,
    /// Clinical-trial registry data.
    ClinicalTrial,
    /// Application data (users and their preferences).
    App,
}

impl Namespace {
    /// All namespaces, ordered so that referenced tables come first.
    pub const ALL: [Namespace; 4] = [
        Namespace::Topic,
        Namespace::Literature,
        Namespace::ClinicalTrial,
        Namespace::App,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::Literature => "lit",
            Self::ClinicalTrial => "ct",
            Self::App => "app",
        }
    }

    /// Tables of this namespace in creation order.
    pub fn tables(self) -> &'static [&'static Table] {
        match self {
            Self::Topic => topic::TABLES,
            Self::Literature => literature::TABLES,
            Self::ClinicalTrial => clinical_trial::TABLES,
            Self::App => app::TABLES,
        }
    }
}

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    /// Stored as `0`/`1`.
    Boolean,
}

impl ColumnType {
    pub fn sql(self) -> &'static str {
        match self {
            Self::Integer | Self::Boolean => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
        }
    }
}

/// One non-surrogate column of a table.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    /// Target table when this column is a many-to-one reference to `id`.
    pub references: Option<&'static Table>,
}

impl Column {
    pub const fn text(name: &'static str) -> Self {
        Self::new(name, ColumnType::Text)
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, ColumnType::Integer)
    }

    pub const fn real(name: &'static str) -> Self {
        Self::new(name, ColumnType::Real)
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, ColumnType::Boolean)
    }

    /// Integer reference to the `id` of `table`.
    pub const fn foreign_key(name: &'static str, table: &'static Table) -> Self {
        Self {
            name,
            ty: ColumnType::Integer,
            nullable: false,
            references: Some(table),
        }
    }

    pub const fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            references: None,
        }
    }
}

/// Descriptor of one persisted record type.
#[derive(Debug)]
pub struct Table {
    pub namespace: Namespace,
    /// Unqualified table name; see [`Table::qualified_name`].
    pub name: &'static str,
    /// Columns other than `id` and `fingerprint`, in binding order.
    pub columns: &'static [Column],
    /// Natural key used as the `ON CONFLICT` target.
    pub unique: &'static [&'static str],
    /// Columns contributing to the fingerprint. Empty when not fingerprinted.
    pub fingerprint: &'static [&'static str],
}

impl Table {
    pub fn qualified_name(&self) -> String {
        format!("{}_{}", self.namespace.prefix(), self.name)
    }

    pub fn has_fingerprint(&self) -> bool {
        !self.fingerprint.is_empty()
    }

    /// Insertable column names: declared columns plus `fingerprint` when present.
    pub fn insert_columns(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.columns.iter().map(|column| column.name).collect();
        if self.has_fingerprint() {
            names.push(FINGERPRINT_COLUMN);
        }
        names
    }

    /// Every selectable column name, starting with `id`.
    pub fn select_columns(&self) -> Vec<&'static str> {
        let mut names = vec![ID_COLUMN];
        names.extend(self.insert_columns());
        names
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Returns whether `name` can be used in a lookup filter.
    pub fn is_selectable(&self, name: &str) -> bool {
        name == ID_COLUMN
            || (name == FINGERPRINT_COLUMN && self.has_fingerprint())
            || self.column(name).is_some()
    }

    pub fn is_key_column(&self, name: &str) -> bool {
        self.unique.contains(&name)
    }

    pub fn is_fingerprint_input(&self, name: &str) -> bool {
        name == FINGERPRINT_COLUMN || self.fingerprint.contains(&name)
    }

    /// Positions of the natural-key columns inside [`Table::insert_columns`].
    pub fn key_positions(&self) -> Vec<usize> {
        let columns = self.insert_columns();
        self.unique
            .iter()
            .filter_map(|key| columns.iter().position(|name| name == key))
            .collect()
    }

    /// Foreign-key columns together with their referenced tables.
    pub fn references(&self) -> impl Iterator<Item = (&Column, &'static Table)> + '_ {
        self.columns
            .iter()
            .filter_map(|column| column.references.map(|table| (column, table)))
    }
}

/// Builds the `CREATE TABLE` statement for `table`.
pub fn create_table_sql(table: &Table) -> String {
    let mut lines = vec![format!(
        "{ID_COLUMN} INTEGER NOT NULL CONSTRAINT {} PRIMARY KEY AUTOINCREMENT",
        naming::primary_key_name(table)
    )];

    for column in table.columns {
        let null = if column.nullable { "" } else { " NOT NULL" };
        lines.push(format!("{} {}{null}", column.name, column.ty.sql()));
    }
    if table.has_fingerprint() {
        lines.push(format!("{FINGERPRINT_COLUMN} TEXT NOT NULL"));
    }

    lines.push(format!(
        "CONSTRAINT {} UNIQUE ({})",
        naming::unique_constraint_name(table),
        table.unique.join(", ")
    ));
    for (column, referenced) in table.references() {
        lines.push(format!(
            "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({ID_COLUMN})",
            naming::foreign_key_name(table, column.name, referenced),
            column.name,
            referenced.qualified_name()
        ));
    }

    format!(
        "CREATE TABLE {} (\n    {}\n)",
        table.qualified_name(),
        lines.join(",\n    ")
    )
}

/// Builds the secondary index statements for `table` (one per foreign key).
pub fn create_index_sql(table: &Table) -> Vec<String> {
    table
        .references()
        .map(|(column, _)| {
            format!(
                "CREATE INDEX {} ON {} ({})",
                naming::index_name(table, column.name),
                table.qualified_name(),
                column.name
            )
        })
        .collect()
}

/// All DDL statements for one namespace, in dependency order.
pub fn namespace_ddl(namespace: Namespace) -> Vec<String> {
    let mut statements = Vec::new();
    for table in namespace.tables() {
        statements.push(create_table_sql(table));
        statements.extend(create_index_sql(table));
    }
    statements
}

/// Iterates every table of every namespace.
pub fn all_tables() -> impl Iterator<Item = &'static Table> {
    Namespace::ALL
        .into_iter()
        .flat_map(|namespace| namespace.tables().iter().copied())
}

#[cfg(test)]
mod tests {
    use super::{all_tables, create_table_sql, topic, Namespace};

    #[test]
    fn qualified_name_uses_namespace_prefix() {
        assert_eq!(topic::DESCRIPTORS.qualified_name(), "topic_descriptors");
        assert_eq!(Namespace::ClinicalTrial.prefix(), "ct");
    }

    #[test]
    fn fingerprinted_tables_append_fingerprint_column() {
        let columns = topic::SYNONYMS.insert_columns();
        assert_eq!(columns, vec!["synonym", "fingerprint"]);
        assert_eq!(topic::SYNONYMS.key_positions(), vec![1]);
    }

    #[test]
    fn create_table_sql_declares_named_constraints() {
        let sql = create_table_sql(&topic::DESCRIPTOR_TREE_NUMBERS);
        assert!(sql.contains("CONSTRAINT pk_topic_descriptor_tree_numbers PRIMARY KEY"));
        assert!(sql.contains(
            "CONSTRAINT uq_topic_descriptor_tree_numbers_descriptor_id_tree_number_id UNIQUE"
        ));
        assert!(sql.contains("REFERENCES topic_descriptors (id)"));
    }

    #[test]
    fn every_table_has_a_non_nullable_natural_key() {
        for table in all_tables() {
            assert!(!table.unique.is_empty(), "{} has no key", table.qualified_name());
            for key in table.unique {
                assert!(
                    table.is_selectable(key),
                    "{} key `{key}` is not a column",
                    table.qualified_name()
                );
                if let Some(column) = table.column(key) {
                    assert!(!column.nullable, "{} key `{key}` is nullable", table.qualified_name());
                }
            }
            for field in table.fingerprint {
                assert!(table.column(field).is_some(), "{} fingerprint field `{field}`", table.qualified_name());
            }
        }
    }

    #[test]
    fn references_point_to_earlier_tables() {
        let mut seen: Vec<String> = Vec::new();
        for table in all_tables() {
            for (_, referenced) in table.references() {
                assert!(
                    seen.contains(&referenced.qualified_name()),
                    "{} references {} before it is created",
                    table.qualified_name(),
                    referenced.qualified_name()
                );
            }
            seen.push(table.qualified_name());
        }
    }
}
