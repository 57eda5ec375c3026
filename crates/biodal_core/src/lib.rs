//! Data-access layer for biomedical literature, clinical-trial and
//! medical-topic records.
//!
//! Records are de-duplicated on write by natural key or content fingerprint,
//! so repeated imports of the same source data are idempotent.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schema;
pub mod service;

pub use config::{load_config, AppConfig, ConfigError, DbConfig, LoggingConfig};
pub use db::{ConnectionPool, ConnectionTarget, DbError, DbResult, PoolOptions};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status, LoggingError};
pub use model::{Record, RecordId};
pub use repo::{
    ensure_equal_lengths, with_session, Attr, RecordStore, RepoError, RepoResult, Session,
    SqliteRepository,
};
pub use service::app_service::AppService;
pub use service::literature_service::{AuthorColumns, LiteratureService};
pub use service::topic_service::TopicService;
pub use service::trial_service::TrialService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
