//! Application records: users, their settings and bookmarks.

use super::{Record, RecordId};
use crate::schema::{app, Table};
use rusqlite::types::{Type, Value};
use rusqlite::{Row, Statement};
use serde::{Deserialize, Serialize};

/// Application user keyed by the identity provider subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<RecordId>,
    pub auth0_id: String,
    pub email: Option<String>,
}

impl User {
    pub fn new(auth0_id: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: None,
            auth0_id: auth0_id.into(),
            email,
        }
    }

    pub const MUTABLE_COLUMNS: &'static [&'static str] = &["email"];
}

impl Record for User {
    fn table() -> &'static Table {
        &app::USERS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.auth0_id.clone().into(), self.email.clone().into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            auth0_id: row.get("auth0_id")?,
            email: row.get("email")?,
        })
    }
}

/// Free-form JSON settings document, one per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    pub id: Option<RecordId>,
    pub user_id: RecordId,
    pub settings: serde_json::Value,
}

impl UserConfig {
    pub fn new(user_id: RecordId, settings: serde_json::Value) -> Self {
        Self {
            id: None,
            user_id,
            settings,
        }
    }

    pub const MUTABLE_COLUMNS: &'static [&'static str] = &["settings"];
}

impl Record for UserConfig {
    fn table() -> &'static Table {
        &app::USER_CONFIGS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.user_id.into(), self.settings.to_string().into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let raw: String = row.get("settings")?;
        let settings = match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(err) => {
                let stmt: &Statement<'_> = row.as_ref();
                return Err(rusqlite::Error::FromSqlConversionFailure(
                    stmt.column_index("settings")?,
                    Type::Text,
                    Box::new(err),
                ));
            }
        };

        Ok(Self {
            id: Some(row.get("id")?),
            user_id: row.get("user_id")?,
            settings,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStudyBookmark {
    pub id: Option<RecordId>,
    pub user_id: RecordId,
    pub study_id: RecordId,
}

impl UserStudyBookmark {
    pub fn new(user_id: RecordId, study_id: RecordId) -> Self {
        Self {
            id: None,
            user_id,
            study_id,
        }
    }
}

impl Record for UserStudyBookmark {
    fn table() -> &'static Table {
        &app::USER_STUDY_BOOKMARKS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.user_id.into(), self.study_id.into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            user_id: row.get("user_id")?,
            study_id: row.get("study_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCitationBookmark {
    pub id: Option<RecordId>,
    pub user_id: RecordId,
    pub citation_id: RecordId,
}

impl UserCitationBookmark {
    pub fn new(user_id: RecordId, citation_id: RecordId) -> Self {
        Self {
            id: None,
            user_id,
            citation_id,
        }
    }
}

impl Record for UserCitationBookmark {
    fn table() -> &'static Table {
        &app::USER_CITATION_BOOKMARKS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.user_id.into(), self.citation_id.into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            user_id: row.get("user_id")?,
            citation_id: row.get("citation_id")?,
        })
    }
}
