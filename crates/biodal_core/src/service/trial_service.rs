//! Clinical-trial registry service.
//!
//! # Responsibility
//! - Store studies keyed by NCT id, replacing attributes on re-import.
//! - De-duplicate shared entities (sponsors, conditions, sites, contacts)
//!   by content and link them to studies.
//! - Cross-link studies to literature citations and topic descriptors.

use crate::model::clinical_trial::{
    Condition, Contact, Eligibility, Facility, Intervention, Location, Outcome, ReferenceType,
    Sponsor, SponsorRole, Study, StudyCondition, StudyDescriptor, StudyDescriptorType,
    StudyIntervention, StudyLocation, StudyOutcome, StudyReference, StudySponsor,
};
use crate::model::RecordId;
use crate::repo::{RecordStore, RepoResult, Session};
use rusqlite::types::Value;

pub struct TrialService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> TrialService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn iodu_study(&self, session: Option<Session<'_>>, study: &Study) -> RepoResult<RecordId> {
        self.store.iodu(session, study, Study::MUTABLE_COLUMNS)
    }

    pub fn iodi_eligibility(
        &self,
        session: Option<Session<'_>>,
        eligibility: &Eligibility,
    ) -> RepoResult<RecordId> {
        self.store.iodi(session, eligibility)
    }

    pub fn iodi_sponsor(
        &self,
        session: Option<Session<'_>>,
        sponsor: &Sponsor,
    ) -> RepoResult<RecordId> {
        self.store.iodi(session, sponsor)
    }

    pub fn link_study_sponsor(
        &self,
        session: Option<Session<'_>>,
        study_id: RecordId,
        sponsor_id: RecordId,
        role: SponsorRole,
    ) -> RepoResult<RecordId> {
        self.store
            .iodi(session, &StudySponsor::new(study_id, sponsor_id, role))
    }

    /// Ids of `conditions`, in input order.
    pub fn iodi_conditions(
        &self,
        session: Option<Session<'_>>,
        conditions: &[String],
    ) -> RepoResult<Vec<RecordId>> {
        let records: Vec<Condition> = conditions.iter().map(Condition::new).collect();
        self.store.iodi_batch(session, &records)
    }

    pub fn link_study_condition(
        &self,
        session: Option<Session<'_>>,
        study_id: RecordId,
        condition_id: RecordId,
    ) -> RepoResult<RecordId> {
        self.store
            .iodi(session, &StudyCondition::new(study_id, condition_id))
    }

    pub fn iodi_intervention(
        &self,
        session: Option<Session<'_>>,
        intervention: &Intervention,
    ) -> RepoResult<RecordId> {
        self.store.iodi(session, intervention)
    }

    pub fn link_study_intervention(
        &self,
        session: Option<Session<'_>>,
        study_id: RecordId,
        intervention_id: RecordId,
    ) -> RepoResult<RecordId> {
        self.store
            .iodi(session, &StudyIntervention::new(study_id, intervention_id))
    }

    pub fn iodi_outcome(
        &self,
        session: Option<Session<'_>>,
        outcome: &Outcome,
    ) -> RepoResult<RecordId> {
        self.store.iodi(session, outcome)
    }

    pub fn link_study_outcome(
        &self,
        session: Option<Session<'_>>,
        study_id: RecordId,
        outcome_id: RecordId,
    ) -> RepoResult<RecordId> {
        self.store
            .iodi(session, &StudyOutcome::new(study_id, outcome_id))
    }

    pub fn iodi_facility(
        &self,
        session: Option<Session<'_>>,
        facility: &Facility,
    ) -> RepoResult<RecordId> {
        self.store.iodi(session, facility)
    }

    pub fn iodi_contact(
        &self,
        session: Option<Session<'_>>,
        contact: &Contact,
    ) -> RepoResult<RecordId> {
        self.store.iodi(session, contact)
    }

    pub fn iodi_location(
        &self,
        session: Option<Session<'_>>,
        location: &Location,
    ) -> RepoResult<RecordId> {
        self.store.iodi(session, location)
    }

    pub fn link_study_location(
        &self,
        session: Option<Session<'_>>,
        study_id: RecordId,
        location_id: RecordId,
    ) -> RepoResult<RecordId> {
        self.store
            .iodi(session, &StudyLocation::new(study_id, location_id))
    }

    pub fn link_study_reference(
        &self,
        session: Option<Session<'_>>,
        study_id: RecordId,
        citation_id: RecordId,
        reference_type: ReferenceType,
    ) -> RepoResult<RecordId> {
        self.store.iodi(
            session,
            &StudyReference::new(study_id, citation_id, reference_type),
        )
    }

    pub fn link_study_descriptor(
        &self,
        session: Option<Session<'_>>,
        study_id: RecordId,
        descriptor_id: RecordId,
        study_descriptor_type: StudyDescriptorType,
    ) -> RepoResult<RecordId> {
        self.store.iodi(
            session,
            &StudyDescriptor::new(study_id, descriptor_id, study_descriptor_type),
        )
    }

    pub fn get_study_by_nct_id(
        &self,
        session: Option<Session<'_>>,
        nct_id: &str,
    ) -> RepoResult<Option<Study>> {
        self.store
            .get_by_attrs(session, &[("nct_id", Value::from(nct_id.to_string()))])
    }
}
