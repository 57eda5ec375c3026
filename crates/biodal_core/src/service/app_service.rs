//! Application use-case service: users, settings and bookmarks.
//!
//! # Invariants
//! - A user has at most one settings document; writing it again replaces it.
//! - Deleting a user removes its settings and bookmarks in the same
//!   transaction.

use crate::model::app::{User, UserCitationBookmark, UserConfig, UserStudyBookmark};
use crate::model::RecordId;
use crate::repo::{with_session, RecordStore, RepoResult, Session};
use log::info;
use rusqlite::types::Value;

pub struct AppService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> AppService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Registers a user once; later calls return the existing id unchanged.
    pub fn iodi_user(
        &self,
        session: Option<Session<'_>>,
        auth0_id: &str,
        email: Option<String>,
    ) -> RepoResult<RecordId> {
        self.store.iodi(session, &User::new(auth0_id, email))
    }

    pub fn get_user_by_auth0_id(
        &self,
        session: Option<Session<'_>>,
        auth0_id: &str,
    ) -> RepoResult<Option<User>> {
        self.store
            .get_by_attrs(session, &[("auth0_id", Value::from(auth0_id.to_string()))])
    }

    /// Creates or replaces the settings document of `user_id`.
    pub fn iodu_user_config(
        &self,
        session: Option<Session<'_>>,
        user_id: RecordId,
        settings: serde_json::Value,
    ) -> RepoResult<RecordId> {
        self.store.iodu(
            session,
            &UserConfig::new(user_id, settings),
            UserConfig::MUTABLE_COLUMNS,
        )
    }

    pub fn get_user_config(
        &self,
        session: Option<Session<'_>>,
        user_id: RecordId,
    ) -> RepoResult<Option<UserConfig>> {
        self.store.get_by_attrs(session, &[("user_id", Value::from(user_id))])
    }

    pub fn bookmark_study(
        &self,
        session: Option<Session<'_>>,
        user_id: RecordId,
        study_id: RecordId,
    ) -> RepoResult<RecordId> {
        self.store
            .iodi(session, &UserStudyBookmark::new(user_id, study_id))
    }

    pub fn bookmark_citation(
        &self,
        session: Option<Session<'_>>,
        user_id: RecordId,
        citation_id: RecordId,
    ) -> RepoResult<RecordId> {
        self.store
            .iodi(session, &UserCitationBookmark::new(user_id, citation_id))
    }

    /// Study bookmarks of `user_id`, ordered by study.
    pub fn list_study_bookmarks(
        &self,
        session: Option<Session<'_>>,
        user_id: RecordId,
    ) -> RepoResult<Vec<UserStudyBookmark>> {
        self.store
            .bulk_get_by_attrs(session, &[("user_id", vec![Value::from(user_id)])], true)
    }

    /// Deletes a user together with its settings and bookmarks.
    pub fn delete_user(&self, session: Option<Session<'_>>, user_id: RecordId) -> RepoResult<bool> {
        with_session(&self.store, session, |session| {
            let owned_by_user = [("user_id", vec![Value::from(user_id)])];

            let configs: Vec<UserConfig> =
                self.store
                    .bulk_get_by_attrs(Some(session), &owned_by_user, false)?;
            for config in configs.iter().filter_map(|config| config.id) {
                self.store.delete::<UserConfig>(Some(session), config)?;
            }

            let studies: Vec<UserStudyBookmark> =
                self.store
                    .bulk_get_by_attrs(Some(session), &owned_by_user, false)?;
            for bookmark in studies.iter().filter_map(|bookmark| bookmark.id) {
                self.store.delete::<UserStudyBookmark>(Some(session), bookmark)?;
            }

            let citations: Vec<UserCitationBookmark> =
                self.store
                    .bulk_get_by_attrs(Some(session), &owned_by_user, false)?;
            for bookmark in citations.iter().filter_map(|bookmark| bookmark.id) {
                self.store
                    .delete::<UserCitationBookmark>(Some(session), bookmark)?;
            }

            let removed = self.store.delete::<User>(Some(session), user_id)?;
            info!(
                "event=user_delete module=service status=ok removed={} configs={} bookmarks={}",
                removed,
                configs.len(),
                studies.len() + citations.len()
            );
            Ok(removed)
        })
    }
}
