//! Clinical-trial records.
//!
//! # Responsibility
//! - Model registry studies and the shared entities they link to.
//! - Map enumerated link attributes to their stored lowercase text.
//!
//! # Invariants
//! - `Study` is keyed by `nct_id`; everything a study points at without an
//!   external identifier (sponsors, conditions, facilities, ...) is keyed
//!   by fingerprint.

use super::{Record, RecordId};
use crate::schema::{clinical_trial, Table};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, Value, ValueRef};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// Role of a sponsor on a study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SponsorRole {
    Lead,
    Collaborator,
}

impl SponsorRole {
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Collaborator => "collaborator",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "lead" => Some(Self::Lead),
            "collaborator" => Some(Self::Collaborator),
            _ => None,
        }
    }
}

impl FromSql for SponsorRole {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Self::parse(text)
            .ok_or_else(|| FromSqlError::Other(format!("invalid sponsor role `{text}`").into()))
    }
}

/// Whether a linked citation is background or reports the study's results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceType {
    Standard,
    Results,
}

impl ReferenceType {
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Results => "results",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "standard" => Some(Self::Standard),
            "results" => Some(Self::Results),
            _ => None,
        }
    }
}

impl FromSql for ReferenceType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Self::parse(text)
            .ok_or_else(|| FromSqlError::Other(format!("invalid reference type `{text}`").into()))
    }
}

/// Which part of a study a topic descriptor was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyDescriptorType {
    Condition,
    Intervention,
}

impl StudyDescriptorType {
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Condition => "condition",
            Self::Intervention => "intervention",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "condition" => Some(Self::Condition),
            "intervention" => Some(Self::Intervention),
            _ => None,
        }
    }
}

impl FromSql for StudyDescriptorType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Self::parse(text).ok_or_else(|| {
            FromSqlError::Other(format!("invalid study descriptor type `{text}`").into())
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    pub id: Option<RecordId>,
    pub gender: Option<String>,
    pub minimum_age: Option<String>,
    pub maximum_age: Option<String>,
    pub healthy_volunteers: Option<bool>,
    pub criteria: Option<String>,
}

impl Record for Eligibility {
    fn table() -> &'static Table {
        &clinical_trial::ELIGIBILITIES
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.gender.clone().into(),
            self.minimum_age.clone().into(),
            self.maximum_age.clone().into(),
            self.healthy_volunteers.into(),
            self.criteria.clone().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            gender: row.get("gender")?,
            minimum_age: row.get("minimum_age")?,
            maximum_age: row.get("maximum_age")?,
            healthy_volunteers: row.get("healthy_volunteers")?,
            criteria: row.get("criteria")?,
        })
    }
}

/// Registered clinical study keyed by its NCT identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Study {
    pub id: Option<RecordId>,
    pub nct_id: String,
    pub org_study_id: Option<String>,
    pub brief_title: String,
    pub official_title: Option<String>,
    pub acronym: Option<String>,
    pub brief_summary: Option<String>,
    pub detailed_description: Option<String>,
    pub overall_status: Option<String>,
    pub phase: Option<String>,
    pub study_type: Option<String>,
    pub start_date: Option<String>,
    pub completion_date: Option<String>,
    pub enrollment: Option<i64>,
    pub eligibility_id: Option<RecordId>,
}

impl Study {
    pub fn new(nct_id: impl Into<String>, brief_title: impl Into<String>) -> Self {
        Self {
            id: None,
            nct_id: nct_id.into(),
            org_study_id: None,
            brief_title: brief_title.into(),
            official_title: None,
            acronym: None,
            brief_summary: None,
            detailed_description: None,
            overall_status: None,
            phase: None,
            study_type: None,
            start_date: None,
            completion_date: None,
            enrollment: None,
            eligibility_id: None,
        }
    }

    /// Everything but `nct_id`: a re-imported study replaces its attributes.
    pub const MUTABLE_COLUMNS: &'static [&'static str] = &[
        "org_study_id",
        "brief_title",
        "official_title",
        "acronym",
        "brief_summary",
        "detailed_description",
        "overall_status",
        "phase",
        "study_type",
        "start_date",
        "completion_date",
        "enrollment",
        "eligibility_id",
    ];
}

impl Record for Study {
    fn table() -> &'static Table {
        &clinical_trial::STUDIES
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.nct_id.clone().into(),
            self.org_study_id.clone().into(),
            self.brief_title.clone().into(),
            self.official_title.clone().into(),
            self.acronym.clone().into(),
            self.brief_summary.clone().into(),
            self.detailed_description.clone().into(),
            self.overall_status.clone().into(),
            self.phase.clone().into(),
            self.study_type.clone().into(),
            self.start_date.clone().into(),
            self.completion_date.clone().into(),
            self.enrollment.into(),
            self.eligibility_id.into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            nct_id: row.get("nct_id")?,
            org_study_id: row.get("org_study_id")?,
            brief_title: row.get("brief_title")?,
            official_title: row.get("official_title")?,
            acronym: row.get("acronym")?,
            brief_summary: row.get("brief_summary")?,
            detailed_description: row.get("detailed_description")?,
            overall_status: row.get("overall_status")?,
            phase: row.get("phase")?,
            study_type: row.get("study_type")?,
            start_date: row.get("start_date")?,
            completion_date: row.get("completion_date")?,
            enrollment: row.get("enrollment")?,
            eligibility_id: row.get("eligibility_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: Option<RecordId>,
    pub name: String,
    /// Agency class as reported by the registry (`NIH`, `Industry`, ...).
    pub agency_class: Option<String>,
}

impl Sponsor {
    pub fn new(name: impl Into<String>, agency_class: Option<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            agency_class,
        }
    }
}

impl Record for Sponsor {
    fn table() -> &'static Table {
        &clinical_trial::SPONSORS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.name.clone().into(), self.agency_class.clone().into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            name: row.get("name")?,
            agency_class: row.get("agency_class")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySponsor {
    pub id: Option<RecordId>,
    pub study_id: RecordId,
    pub sponsor_id: RecordId,
    pub role: SponsorRole,
}

impl StudySponsor {
    pub fn new(study_id: RecordId, sponsor_id: RecordId, role: SponsorRole) -> Self {
        Self {
            id: None,
            study_id,
            sponsor_id,
            role,
        }
    }
}

impl Record for StudySponsor {
    fn table() -> &'static Table {
        &clinical_trial::STUDY_SPONSORS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.study_id.into(),
            self.sponsor_id.into(),
            self.role.as_db_str().to_string().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            study_id: row.get("study_id")?,
            sponsor_id: row.get("sponsor_id")?,
            role: row.get("role")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub id: Option<RecordId>,
    pub condition: String,
}

impl Condition {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            id: None,
            condition: condition.into(),
        }
    }
}

impl Record for Condition {
    fn table() -> &'static Table {
        &clinical_trial::CONDITIONS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.condition.clone().into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            condition: row.get("condition")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyCondition {
    pub id: Option<RecordId>,
    pub study_id: RecordId,
    pub condition_id: RecordId,
}

impl StudyCondition {
    pub fn new(study_id: RecordId, condition_id: RecordId) -> Self {
        Self {
            id: None,
            study_id,
            condition_id,
        }
    }
}

impl Record for StudyCondition {
    fn table() -> &'static Table {
        &clinical_trial::STUDY_CONDITIONS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.study_id.into(), self.condition_id.into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            study_id: row.get("study_id")?,
            condition_id: row.get("condition_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intervention {
    pub id: Option<RecordId>,
    /// Registry category (`Drug`, `Device`, `Behavioral`, ...).
    pub intervention_type: String,
    pub name: String,
    pub description: Option<String>,
}

impl Intervention {
    pub fn new(intervention_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            intervention_type: intervention_type.into(),
            name: name.into(),
            description: None,
        }
    }
}

impl Record for Intervention {
    fn table() -> &'static Table {
        &clinical_trial::INTERVENTIONS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.intervention_type.clone().into(),
            self.name.clone().into(),
            self.description.clone().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            intervention_type: row.get("intervention_type")?,
            name: row.get("name")?,
            description: row.get("description")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyIntervention {
    pub id: Option<RecordId>,
    pub study_id: RecordId,
    pub intervention_id: RecordId,
}

impl StudyIntervention {
    pub fn new(study_id: RecordId, intervention_id: RecordId) -> Self {
        Self {
            id: None,
            study_id,
            intervention_id,
        }
    }
}

impl Record for StudyIntervention {
    fn table() -> &'static Table {
        &clinical_trial::STUDY_INTERVENTIONS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.study_id.into(), self.intervention_id.into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            study_id: row.get("study_id")?,
            intervention_id: row.get("intervention_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub id: Option<RecordId>,
    /// `primary`, `secondary` or `other`.
    pub outcome_type: String,
    pub measure: String,
    pub time_frame: Option<String>,
    pub description: Option<String>,
}

impl Outcome {
    pub fn new(outcome_type: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            id: None,
            outcome_type: outcome_type.into(),
            measure: measure.into(),
            time_frame: None,
            description: None,
        }
    }
}

impl Record for Outcome {
    fn table() -> &'static Table {
        &clinical_trial::OUTCOMES
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.outcome_type.clone().into(),
            self.measure.clone().into(),
            self.time_frame.clone().into(),
            self.description.clone().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            outcome_type: row.get("outcome_type")?,
            measure: row.get("measure")?,
            time_frame: row.get("time_frame")?,
            description: row.get("description")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyOutcome {
    pub id: Option<RecordId>,
    pub study_id: RecordId,
    pub outcome_id: RecordId,
}

impl StudyOutcome {
    pub fn new(study_id: RecordId, outcome_id: RecordId) -> Self {
        Self {
            id: None,
            study_id,
            outcome_id,
        }
    }
}

impl Record for StudyOutcome {
    fn table() -> &'static Table {
        &clinical_trial::STUDY_OUTCOMES
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.study_id.into(), self.outcome_id.into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            study_id: row.get("study_id")?,
            outcome_id: row.get("outcome_id")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub id: Option<RecordId>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

impl Record for Facility {
    fn table() -> &'static Table {
        &clinical_trial::FACILITIES
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.city.clone().into(),
            self.state.clone().into(),
            self.zip_code.clone().into(),
            self.country.clone().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            name: row.get("name")?,
            city: row.get("city")?,
            state: row.get("state")?,
            zip_code: row.get("zip_code")?,
            country: row.get("country")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Option<RecordId>,
    pub name_first: Option<String>,
    pub name_middle: Option<String>,
    pub name_last: Option<String>,
    pub degrees: Option<String>,
    pub phone: Option<String>,
    pub phone_ext: Option<String>,
    pub email: Option<String>,
}

impl Record for Contact {
    fn table() -> &'static Table {
        &clinical_trial::CONTACTS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.name_first.clone().into(),
            self.name_middle.clone().into(),
            self.name_last.clone().into(),
            self.degrees.clone().into(),
            self.phone.clone().into(),
            self.phone_ext.clone().into(),
            self.email.clone().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            name_first: row.get("name_first")?,
            name_middle: row.get("name_middle")?,
            name_last: row.get("name_last")?,
            degrees: row.get("degrees")?,
            phone: row.get("phone")?,
            phone_ext: row.get("phone_ext")?,
            email: row.get("email")?,
        })
    }
}

/// A facility as staffed for recruitment, with optional contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: Option<RecordId>,
    pub facility_id: RecordId,
    /// Recruitment status at this site.
    pub status: Option<String>,
    pub contact_primary_id: Option<RecordId>,
    pub contact_backup_id: Option<RecordId>,
}

impl Location {
    pub fn new(facility_id: RecordId) -> Self {
        Self {
            id: None,
            facility_id,
            status: None,
            contact_primary_id: None,
            contact_backup_id: None,
        }
    }
}

impl Record for Location {
    fn table() -> &'static Table {
        &clinical_trial::LOCATIONS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.facility_id.into(),
            self.status.clone().into(),
            self.contact_primary_id.into(),
            self.contact_backup_id.into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            facility_id: row.get("facility_id")?,
            status: row.get("status")?,
            contact_primary_id: row.get("contact_primary_id")?,
            contact_backup_id: row.get("contact_backup_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyLocation {
    pub id: Option<RecordId>,
    pub study_id: RecordId,
    pub location_id: RecordId,
}

impl StudyLocation {
    pub fn new(study_id: RecordId, location_id: RecordId) -> Self {
        Self {
            id: None,
            study_id,
            location_id,
        }
    }
}

impl Record for StudyLocation {
    fn table() -> &'static Table {
        &clinical_trial::STUDY_LOCATIONS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.study_id.into(), self.location_id.into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            study_id: row.get("study_id")?,
            location_id: row.get("location_id")?,
        })
    }
}

/// Link from a study to a literature citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyReference {
    pub id: Option<RecordId>,
    pub study_id: RecordId,
    pub citation_id: RecordId,
    pub reference_type: ReferenceType,
}

impl StudyReference {
    pub fn new(study_id: RecordId, citation_id: RecordId, reference_type: ReferenceType) -> Self {
        Self {
            id: None,
            study_id,
            citation_id,
            reference_type,
        }
    }
}

impl Record for StudyReference {
    fn table() -> &'static Table {
        &clinical_trial::STUDY_REFERENCES
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.study_id.into(),
            self.citation_id.into(),
            self.reference_type.as_db_str().to_string().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            study_id: row.get("study_id")?,
            citation_id: row.get("citation_id")?,
            reference_type: row.get("reference_type")?,
        })
    }
}

/// Link from a study to a topic descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyDescriptor {
    pub id: Option<RecordId>,
    pub study_id: RecordId,
    pub descriptor_id: RecordId,
    pub study_descriptor_type: StudyDescriptorType,
}

impl StudyDescriptor {
    pub fn new(
        study_id: RecordId,
        descriptor_id: RecordId,
        study_descriptor_type: StudyDescriptorType,
    ) -> Self {
        Self {
            id: None,
            study_id,
            descriptor_id,
            study_descriptor_type,
        }
    }
}

impl Record for StudyDescriptor {
    fn table() -> &'static Table {
        &clinical_trial::STUDY_DESCRIPTORS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.study_id.into(),
            self.descriptor_id.into(),
            self.study_descriptor_type.as_db_str().to_string().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            study_id: row.get("study_id")?,
            descriptor_id: row.get("descriptor_id")?,
            study_descriptor_type: row.get("study_descriptor_type")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ReferenceType, SponsorRole, StudyDescriptorType};

    #[test]
    fn enum_db_text_roundtrips() {
        for role in [SponsorRole::Lead, SponsorRole::Collaborator] {
            assert_eq!(SponsorRole::parse(role.as_db_str()), Some(role));
        }
        for kind in [ReferenceType::Standard, ReferenceType::Results] {
            assert_eq!(ReferenceType::parse(kind.as_db_str()), Some(kind));
        }
        for kind in [StudyDescriptorType::Condition, StudyDescriptorType::Intervention] {
            assert_eq!(StudyDescriptorType::parse(kind.as_db_str()), Some(kind));
        }
        assert_eq!(SponsorRole::parse("Lead"), None);
    }
}
