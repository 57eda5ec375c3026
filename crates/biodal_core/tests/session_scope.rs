use biodal_core::model::app::User;
use biodal_core::model::literature::Keyword;
use biodal_core::{
    AppService, DbConfig, DbError, RecordStore, RepoError, SqliteRepository,
};
use std::sync::mpsc;
use std::time::Duration;
use tempfile::TempDir;

fn open_repo(pool_size: u32, pool_timeout_secs: u64) -> (TempDir, SqliteRepository) {
    let dir = tempfile::tempdir().unwrap();
    let config = DbConfig {
        pool_size,
        pool_timeout_secs,
        ..DbConfig::sqlite_file(dir.path().join("session.db"))
    };
    (dir, SqliteRepository::open(&config).unwrap())
}

#[test]
fn transaction_commits_all_operations_together() {
    let (_dir, repo) = open_repo(2, 5);
    let app = AppService::new(&repo);

    let (user, config) = repo
        .transaction(|session| {
            let user = app.iodi_user(Some(session), "auth0|ivy", None)?;
            let config =
                app.iodu_user_config(Some(session), user, serde_json::json!({ "theme": "dark" }))?;
            Ok((user, config))
        })
        .unwrap();

    let stored = app.get_user_config(None, user).unwrap().unwrap();
    assert_eq!(stored.id, Some(config));
    assert_eq!(stored.settings["theme"], "dark");
}

#[test]
fn failing_transaction_rolls_back_and_returns_original_error() {
    let (_dir, repo) = open_repo(2, 5);
    let app = AppService::new(&repo);

    let err = repo
        .transaction(|session| {
            app.iodi_user(Some(session), "auth0|jack", None)?;
            Err::<(), _>(RepoError::InvalidArguments("abort".to_string()))
        })
        .unwrap_err();

    match err {
        RepoError::InvalidArguments(message) => assert_eq!(message, "abort"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(app.get_user_by_auth0_id(None, "auth0|jack").unwrap().is_none());
}

#[test]
fn joined_operation_failure_rolls_back_outer_transaction() {
    let (_dir, repo) = open_repo(2, 5);
    let app = AppService::new(&repo);

    let err = repo
        .transaction(|session| {
            app.iodi_user(Some(session), "auth0|kate", None)?;
            // Study 42 does not exist, so the foreign key rejects the bookmark.
            app.bookmark_study(Some(session), 1, 42)?;
            Ok(())
        })
        .unwrap_err();

    assert!(matches!(err, RepoError::Db(DbError::Sqlite(_))));
    assert!(app.get_user_by_auth0_id(None, "auth0|kate").unwrap().is_none());
}

#[test]
fn operations_without_session_commit_independently() {
    let (_dir, repo) = open_repo(1, 5);
    let app = AppService::new(&repo);

    let user = app.iodi_user(None, "auth0|liam", None).unwrap();
    assert!(app.bookmark_study(None, user, 42).is_err());

    let stored = app.get_user_by_auth0_id(None, "auth0|liam").unwrap().unwrap();
    assert_eq!(stored.id, Some(user));
}

#[test]
fn records_stay_readable_after_session_closes() {
    let (_dir, repo) = open_repo(1, 5);

    let user = repo
        .transaction(|session| {
            let id = repo.iodi(Some(session), &User::new("auth0|mia", None))?;
            repo.get::<User>(Some(session), id)
        })
        .unwrap()
        .unwrap();

    assert_eq!(user.auth0_id, "auth0|mia");
    assert_eq!(repo.pool().status().idle, 1);
}

#[test]
fn unjoined_call_inside_transaction_waits_for_its_own_connection() {
    let (_dir, repo) = open_repo(1, 0);

    let err = repo
        .transaction(|_session| repo.get::<User>(None, 1))
        .unwrap_err();

    assert!(matches!(
        err,
        RepoError::Db(DbError::PoolTimeout { size: 1, .. })
    ));
    assert_eq!(repo.pool().status().open, 1);
}

#[test]
fn delete_user_removes_owned_rows_in_one_transaction() {
    let (_dir, repo) = open_repo(2, 5);
    let app = AppService::new(&repo);

    let user = app.iodi_user(None, "auth0|noah", None).unwrap();
    app.iodu_user_config(None, user, serde_json::json!({ "page_size": 50 }))
        .unwrap();

    assert!(app.delete_user(None, user).unwrap());
    assert!(app.get_user_config(None, user).unwrap().is_none());
    assert!(app.get_user_by_auth0_id(None, "auth0|noah").unwrap().is_none());
}

#[test]
fn repository_delete_does_not_cascade() {
    let (_dir, repo) = open_repo(2, 5);
    let app = AppService::new(&repo);

    let user = app.iodi_user(None, "auth0|olive", None).unwrap();
    app.iodu_user_config(None, user, serde_json::json!({})).unwrap();

    let err = repo.delete::<User>(None, user).unwrap_err();
    assert!(matches!(err, RepoError::Db(DbError::Sqlite(_))));
    assert!(app.get_user_config(None, user).unwrap().is_some());
}

fn keyword_count(repo: &SqliteRepository) -> i64 {
    repo.transaction(|session| {
        let count = session
            .connection()
            .query_row("SELECT COUNT(*) FROM lit_keywords", [], |row| row.get(0))?;
        Ok(count)
    })
    .unwrap()
}

fn writer_waits_for_open_transaction(repo: &SqliteRepository) {
    let (started_tx, started_rx) = mpsc::channel();

    std::thread::scope(|scope| {
        let holder = scope.spawn(move || {
            repo.transaction(|session| {
                let id = repo.iodi(Some(session), &Keyword::new("held"))?;
                started_tx.send(()).unwrap();
                std::thread::sleep(Duration::from_millis(300));
                Ok(id)
            })
        });

        started_rx.recv().unwrap();
        let second = repo.iodi(None, &Keyword::new("second")).unwrap();
        let held = holder.join().unwrap().unwrap();
        assert_ne!(held, second);
    });

    assert_eq!(keyword_count(repo), 2);
}

fn parallel_writers_share_rows(repo: &SqliteRepository) {
    std::thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|worker| {
                scope.spawn(move || {
                    (0..10)
                        .map(|n| {
                            let keyword = format!("term-{}", (worker + n) % 12);
                            repo.iodi(None, &Keyword::new(keyword)).unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for worker in workers {
            assert_eq!(worker.join().unwrap().len(), 10);
        }
    });

    assert_eq!(keyword_count(repo), 12);
}

#[test]
fn file_writer_waits_for_open_transaction() {
    let (_dir, repo) = open_repo(2, 5);
    writer_waits_for_open_transaction(&repo);
}

#[test]
fn memory_writer_waits_for_open_transaction() {
    let repo = SqliteRepository::open(&DbConfig::in_memory()).unwrap();
    assert_eq!(repo.pool().options().size, 1);
    writer_waits_for_open_transaction(&repo);
}

#[test]
fn file_parallel_writers_share_rows() {
    let (_dir, repo) = open_repo(4, 10);
    parallel_writers_share_rows(&repo);
}

#[test]
fn memory_parallel_writers_share_rows() {
    let repo = SqliteRepository::open(&DbConfig::in_memory()).unwrap();
    parallel_writers_share_rows(&repo);
}
