//! SQLite migration registry and executor.
//!
//! # Responsibility
//! - Register one migration per namespace, in foreign-key dependency order.
//! - Apply pending migrations atomically.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.
//! - A namespace migration only references tables created by earlier ones.

use crate::db::{DbError, DbResult};
use crate::schema::{namespace_ddl, Namespace};
use log::info;
use rusqlite::{Connection, TransactionBehavior};

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    namespace: Namespace,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        namespace: Namespace::Topic,
    },
    Migration {
        version: 2,
        namespace: Namespace::Literature,
    },
    Migration {
        version: 3,
        namespace: Namespace::ClinicalTrial,
    },
    Migration {
        version: 4,
        namespace: Namespace::App,
    },
];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided connection.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(());
    }

    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    // Another connection may have migrated while this one waited for the lock.
    let locked_version = current_user_version(&tx)?;
    for migration in MIGRATIONS {
        if migration.version <= locked_version {
            continue;
        }

        for statement in namespace_ddl(migration.namespace) {
            tx.execute_batch(&statement)?;
        }
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
        info!(
            "event=db_migrate module=db status=ok version={} namespace={}",
            migration.version,
            migration.namespace.prefix()
        );
    }
    tx.commit()?;

    Ok(())
}

/// Reads the schema version recorded in `PRAGMA user_version`.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::{apply_migrations, current_user_version, latest_version, MIGRATIONS};
    use crate::schema::Namespace;
    use rusqlite::Connection;

    #[test]
    fn migrations_follow_namespace_dependency_order() {
        let order: Vec<Namespace> = MIGRATIONS.iter().map(|migration| migration.namespace).collect();
        assert_eq!(order, Namespace::ALL.to_vec());
        assert!(MIGRATIONS
            .windows(2)
            .all(|pair| pair[0].version < pair[1].version));
    }

    #[test]
    fn apply_migrations_reaches_latest_version() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        assert_eq!(current_user_version(&conn).unwrap(), latest_version());

        apply_migrations(&mut conn).unwrap();
        assert_eq!(current_user_version(&conn).unwrap(), latest_version());
    }
}
