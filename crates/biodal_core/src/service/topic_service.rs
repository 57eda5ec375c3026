//! Medical-topic taxonomy service.
//!
//! # Responsibility
//! - Load descriptors, qualifiers, concepts and terms keyed by their UI,
//!   replacing attributes on re-import.
//! - Link taxonomy entries idempotently.

use crate::model::topic::{
    Concept, ConceptTerm, Descriptor, DescriptorConcept, DescriptorSynonym, DescriptorTreeNumber,
    Qualifier, Synonym, Term, TreeNumber,
};
use crate::model::RecordId;
use crate::repo::{RecordStore, RepoResult, Session};
use rusqlite::types::Value;

pub struct TopicService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> TopicService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn iodu_descriptor(
        &self,
        session: Option<Session<'_>>,
        descriptor: &Descriptor,
    ) -> RepoResult<RecordId> {
        self.store
            .iodu(session, descriptor, Descriptor::MUTABLE_COLUMNS)
    }

    pub fn iodu_qualifier(
        &self,
        session: Option<Session<'_>>,
        qualifier: &Qualifier,
    ) -> RepoResult<RecordId> {
        self.store.iodu(session, qualifier, Qualifier::MUTABLE_COLUMNS)
    }

    pub fn iodu_concept(
        &self,
        session: Option<Session<'_>>,
        concept: &Concept,
    ) -> RepoResult<RecordId> {
        self.store.iodu(session, concept, Concept::MUTABLE_COLUMNS)
    }

    pub fn iodu_term(&self, session: Option<Session<'_>>, term: &Term) -> RepoResult<RecordId> {
        self.store.iodu(session, term, Term::MUTABLE_COLUMNS)
    }

    /// Ids of `tree_numbers`, in input order.
    pub fn iodi_tree_numbers(
        &self,
        session: Option<Session<'_>>,
        tree_numbers: &[String],
    ) -> RepoResult<Vec<RecordId>> {
        let records: Vec<TreeNumber> = tree_numbers.iter().map(TreeNumber::new).collect();
        self.store.iodi_batch(session, &records)
    }

    /// Ids of `synonyms`, in input order.
    pub fn iodi_synonyms(
        &self,
        session: Option<Session<'_>>,
        synonyms: &[String],
    ) -> RepoResult<Vec<RecordId>> {
        let records: Vec<Synonym> = synonyms.iter().map(Synonym::new).collect();
        self.store.iodi_batch(session, &records)
    }

    pub fn link_descriptor_tree_number(
        &self,
        session: Option<Session<'_>>,
        descriptor_id: RecordId,
        tree_number_id: RecordId,
    ) -> RepoResult<RecordId> {
        self.store.iodi(
            session,
            &DescriptorTreeNumber::new(descriptor_id, tree_number_id),
        )
    }

    pub fn link_descriptor_concept(
        &self,
        session: Option<Session<'_>>,
        descriptor_id: RecordId,
        concept_id: RecordId,
        is_preferred: bool,
    ) -> RepoResult<RecordId> {
        self.store.iodi(
            session,
            &DescriptorConcept::new(descriptor_id, concept_id, is_preferred),
        )
    }

    pub fn link_concept_term(
        &self,
        session: Option<Session<'_>>,
        concept_id: RecordId,
        term_id: RecordId,
        is_preferred: bool,
    ) -> RepoResult<RecordId> {
        self.store
            .iodi(session, &ConceptTerm::new(concept_id, term_id, is_preferred))
    }

    pub fn link_descriptor_synonym(
        &self,
        session: Option<Session<'_>>,
        descriptor_id: RecordId,
        synonym_id: RecordId,
    ) -> RepoResult<RecordId> {
        self.store
            .iodi(session, &DescriptorSynonym::new(descriptor_id, synonym_id))
    }

    pub fn get_descriptor_by_ui(
        &self,
        session: Option<Session<'_>>,
        ui: &str,
    ) -> RepoResult<Option<Descriptor>> {
        self.store
            .get_by_attrs(session, &[("ui", Value::from(ui.to_string()))])
    }

    /// Descriptors with any of `uis`, ordered by UI. Unknown UIs are skipped.
    pub fn bulk_get_descriptors_by_ui(
        &self,
        session: Option<Session<'_>>,
        uis: &[String],
    ) -> RepoResult<Vec<Descriptor>> {
        let values: Vec<Value> = uis.iter().cloned().map(Value::from).collect();
        self.store
            .bulk_get_by_attrs(session, &[("ui", values)], true)
    }
}
