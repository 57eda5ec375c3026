use biodal_core::db::migrations::latest_version;
use biodal_core::db::{open_connection, ConnectionTarget, DbError};
use biodal_core::schema::{all_tables, Namespace};
use biodal_core::{DbConfig, RepoError, SqliteRepository};
use rusqlite::Connection;

#[test]
fn in_memory_connection_applies_all_migrations() {
    let conn = open_connection(&ConnectionTarget::Memory, false).unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_eq!(latest_version() as usize, Namespace::ALL.len());
    for table in all_tables() {
        assert_table_exists(&conn, &table.qualified_name());
    }
}

#[test]
fn constraint_names_are_persisted() {
    let conn = open_connection(&ConnectionTarget::Memory, false).unwrap();
    let sql: String = conn
        .query_row(
            "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = 'ct_study_sponsors'",
            [],
            |row| row.get(0),
        )
        .unwrap();

    assert!(sql.contains("CONSTRAINT pk_ct_study_sponsors PRIMARY KEY"));
    assert!(sql.contains("CONSTRAINT uq_ct_study_sponsors_study_id_sponsor_id_role UNIQUE"));
    assert!(sql.contains("FOREIGN KEY (sponsor_id) REFERENCES ct_sponsors (id)"));
    assert_index_exists(&conn, "ix_ct_study_sponsors_study_id");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("biodal.db");
    let target = ConnectionTarget::File(path.clone());

    let conn_first = open_connection(&target, false).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_connection(&target, false).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "app_users");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_connection(&ConnectionTarget::File(path.clone()), false).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }

    let repo_err = SqliteRepository::open(&DbConfig::sqlite_file(&path)).err().unwrap();
    assert!(matches!(
        repo_err,
        RepoError::Db(DbError::UnsupportedSchemaVersion { .. })
    ));
}

#[test]
fn repository_rejects_unsupported_url_scheme() {
    let config = DbConfig {
        url_template: "postgresql://{user}@{host}/{database}".to_string(),
        ..DbConfig::default()
    };
    let err = SqliteRepository::open(&config).err().unwrap();
    assert!(matches!(err, RepoError::InvalidArguments(_)));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    assert_master_entry(conn, "table", table_name);
}

fn assert_index_exists(conn: &Connection, index_name: &str) {
    assert_master_entry(conn, "index", index_name);
}

fn assert_master_entry(conn: &Connection, kind: &str, name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = ?1 AND name = ?2
            );",
            [kind, name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "{kind} {name} does not exist");
}
