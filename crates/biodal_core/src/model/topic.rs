//! Medical-topic records.

use super::{Record, RecordId};
use crate::schema::{topic, Table};
use rusqlite::types::Value;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// Topic heading keyed by its registry UI (e.g. `D001943`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub id: Option<RecordId>,
    pub ui: String,
    pub name: String,
    /// Scope note.
    pub note: Option<String>,
    pub date_created: Option<String>,
    pub date_revised: Option<String>,
    pub date_established: Option<String>,
}

impl Descriptor {
    pub fn new(ui: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            ui: ui.into(),
            name: name.into(),
            note: None,
            date_created: None,
            date_revised: None,
            date_established: None,
        }
    }

    /// Columns refreshed when the same UI is imported again.
    pub const MUTABLE_COLUMNS: &'static [&'static str] = &[
        "name",
        "note",
        "date_created",
        "date_revised",
        "date_established",
    ];
}

impl Record for Descriptor {
    fn table() -> &'static Table {
        &topic::DESCRIPTORS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.ui.clone().into(),
            self.name.clone().into(),
            self.note.clone().into(),
            self.date_created.clone().into(),
            self.date_revised.clone().into(),
            self.date_established.clone().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            ui: row.get("ui")?,
            name: row.get("name")?,
            note: row.get("note")?,
            date_created: row.get("date_created")?,
            date_revised: row.get("date_revised")?,
            date_established: row.get("date_established")?,
        })
    }
}

/// Subheading that refines a descriptor (e.g. `Q000188` drug therapy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualifier {
    pub id: Option<RecordId>,
    pub ui: String,
    pub name: String,
    pub note: Option<String>,
}

impl Qualifier {
    pub fn new(ui: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            ui: ui.into(),
            name: name.into(),
            note: None,
        }
    }

    pub const MUTABLE_COLUMNS: &'static [&'static str] = &["name", "note"];
}

impl Record for Qualifier {
    fn table() -> &'static Table {
        &topic::QUALIFIERS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.ui.clone().into(),
            self.name.clone().into(),
            self.note.clone().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            ui: row.get("ui")?,
            name: row.get("name")?,
            note: row.get("note")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNumber {
    pub id: Option<RecordId>,
    pub tree_number: String,
}

impl TreeNumber {
    pub fn new(tree_number: impl Into<String>) -> Self {
        Self {
            id: None,
            tree_number: tree_number.into(),
        }
    }
}

impl Record for TreeNumber {
    fn table() -> &'static Table {
        &topic::TREE_NUMBERS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.tree_number.clone().into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            tree_number: row.get("tree_number")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorTreeNumber {
    pub id: Option<RecordId>,
    pub descriptor_id: RecordId,
    pub tree_number_id: RecordId,
}

impl DescriptorTreeNumber {
    pub fn new(descriptor_id: RecordId, tree_number_id: RecordId) -> Self {
        Self {
            id: None,
            descriptor_id,
            tree_number_id,
        }
    }
}

impl Record for DescriptorTreeNumber {
    fn table() -> &'static Table {
        &topic::DESCRIPTOR_TREE_NUMBERS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.descriptor_id.into(), self.tree_number_id.into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            descriptor_id: row.get("descriptor_id")?,
            tree_number_id: row.get("tree_number_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub id: Option<RecordId>,
    pub ui: String,
    pub name: String,
    pub casn1_name: Option<String>,
    pub registry_number: Option<String>,
    pub scope_note: Option<String>,
}

impl Concept {
    pub fn new(ui: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            ui: ui.into(),
            name: name.into(),
            casn1_name: None,
            registry_number: None,
            scope_note: None,
        }
    }

    pub const MUTABLE_COLUMNS: &'static [&'static str] =
        &["name", "casn1_name", "registry_number", "scope_note"];
}

impl Record for Concept {
    fn table() -> &'static Table {
        &topic::CONCEPTS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.ui.clone().into(),
            self.name.clone().into(),
            self.casn1_name.clone().into(),
            self.registry_number.clone().into(),
            self.scope_note.clone().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            ui: row.get("ui")?,
            name: row.get("name")?,
            casn1_name: row.get("casn1_name")?,
            registry_number: row.get("registry_number")?,
            scope_note: row.get("scope_note")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorConcept {
    pub id: Option<RecordId>,
    pub descriptor_id: RecordId,
    pub concept_id: RecordId,
    pub is_preferred: bool,
}

impl DescriptorConcept {
    pub fn new(descriptor_id: RecordId, concept_id: RecordId, is_preferred: bool) -> Self {
        Self {
            id: None,
            descriptor_id,
            concept_id,
            is_preferred,
        }
    }
}

impl Record for DescriptorConcept {
    fn table() -> &'static Table {
        &topic::DESCRIPTOR_CONCEPTS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.descriptor_id.into(),
            self.concept_id.into(),
            self.is_preferred.into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            descriptor_id: row.get("descriptor_id")?,
            concept_id: row.get("concept_id")?,
            is_preferred: row.get("is_preferred")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: Option<RecordId>,
    pub ui: String,
    pub name: String,
    pub lexical_tag: Option<String>,
}

impl Term {
    pub fn new(ui: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            ui: ui.into(),
            name: name.into(),
            lexical_tag: None,
        }
    }

    pub const MUTABLE_COLUMNS: &'static [&'static str] = &["name", "lexical_tag"];
}

impl Record for Term {
    fn table() -> &'static Table {
        &topic::TERMS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.ui.clone().into(),
            self.name.clone().into(),
            self.lexical_tag.clone().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            ui: row.get("ui")?,
            name: row.get("name")?,
            lexical_tag: row.get("lexical_tag")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptTerm {
    pub id: Option<RecordId>,
    pub concept_id: RecordId,
    pub term_id: RecordId,
    pub is_preferred: bool,
}

impl ConceptTerm {
    pub fn new(concept_id: RecordId, term_id: RecordId, is_preferred: bool) -> Self {
        Self {
            id: None,
            concept_id,
            term_id,
            is_preferred,
        }
    }
}

impl Record for ConceptTerm {
    fn table() -> &'static Table {
        &topic::CONCEPT_TERMS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.concept_id.into(),
            self.term_id.into(),
            self.is_preferred.into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            concept_id: row.get("concept_id")?,
            term_id: row.get("term_id")?,
            is_preferred: row.get("is_preferred")?,
        })
    }
}

/// Free-text entry term, de-duplicated by fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    pub id: Option<RecordId>,
    pub synonym: String,
}

impl Synonym {
    pub fn new(synonym: impl Into<String>) -> Self {
        Self {
            id: None,
            synonym: synonym.into(),
        }
    }
}

impl Record for Synonym {
    fn table() -> &'static Table {
        &topic::SYNONYMS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.synonym.clone().into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            synonym: row.get("synonym")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorSynonym {
    pub id: Option<RecordId>,
    pub descriptor_id: RecordId,
    pub synonym_id: RecordId,
}

impl DescriptorSynonym {
    pub fn new(descriptor_id: RecordId, synonym_id: RecordId) -> Self {
        Self {
            id: None,
            descriptor_id,
            synonym_id,
        }
    }
}

impl Record for DescriptorSynonym {
    fn table() -> &'static Table {
        &topic::DESCRIPTOR_SYNONYMS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.descriptor_id.into(), self.synonym_id.into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            descriptor_id: row.get("descriptor_id")?,
            synonym_id: row.get("synonym_id")?,
        })
    }
}
