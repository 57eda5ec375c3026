//! Literature records.
//!
//! Citations are identified by PMID. Everything else that is shared between
//! citations (journals, authors, affiliations, abstract sections, keywords,
//! chemicals) is identified by fingerprint, so re-importing the same
//! content resolves to the same row.

use super::{Record, RecordId};
use crate::schema::{literature, Table};
use rusqlite::types::Value;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    pub id: Option<RecordId>,
    pub issn: Option<String>,
    pub title: Option<String>,
    pub iso_abbreviation: Option<String>,
    pub country: Option<String>,
    pub nlm_unique_id: Option<String>,
}

impl Record for Journal {
    fn table() -> &'static Table {
        &literature::JOURNALS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.issn.clone().into(),
            self.title.clone().into(),
            self.iso_abbreviation.clone().into(),
            self.country.clone().into(),
            self.nlm_unique_id.clone().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            issn: row.get("issn")?,
            title: row.get("title")?,
            iso_abbreviation: row.get("iso_abbreviation")?,
            country: row.get("country")?,
            nlm_unique_id: row.get("nlm_unique_id")?,
        })
    }
}

/// Literature citation keyed by PMID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub id: Option<RecordId>,
    pub pmid: i64,
    pub title: String,
    pub language: Option<String>,
    pub date_created: Option<String>,
    pub date_completed: Option<String>,
    pub date_revised: Option<String>,
    pub publication_model: Option<String>,
    pub journal_id: Option<RecordId>,
}

impl Citation {
    pub fn new(pmid: i64, title: impl Into<String>) -> Self {
        Self {
            id: None,
            pmid,
            title: title.into(),
            language: None,
            date_created: None,
            date_completed: None,
            date_revised: None,
            publication_model: None,
            journal_id: None,
        }
    }

    /// Columns refreshed when a revised record for the same PMID arrives.
    pub const MUTABLE_COLUMNS: &'static [&'static str] = &[
        "title",
        "language",
        "date_created",
        "date_completed",
        "date_revised",
        "publication_model",
        "journal_id",
    ];
}

impl Record for Citation {
    fn table() -> &'static Table {
        &literature::CITATIONS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.pmid.into(),
            self.title.clone().into(),
            self.language.clone().into(),
            self.date_created.clone().into(),
            self.date_completed.clone().into(),
            self.date_revised.clone().into(),
            self.publication_model.clone().into(),
            self.journal_id.into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            pmid: row.get("pmid")?,
            title: row.get("title")?,
            language: row.get("language")?,
            date_created: row.get("date_created")?,
            date_completed: row.get("date_completed")?,
            date_revised: row.get("date_revised")?,
            publication_model: row.get("publication_model")?,
            journal_id: row.get("journal_id")?,
        })
    }
}

/// Personal or collective author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: Option<RecordId>,
    pub fore_name: Option<String>,
    pub last_name: Option<String>,
    pub initials: Option<String>,
    pub suffix: Option<String>,
    pub collective_name: Option<String>,
}

impl Author {
    pub fn person(fore_name: Option<String>, last_name: impl Into<String>) -> Self {
        Self {
            fore_name,
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    pub fn collective(name: impl Into<String>) -> Self {
        Self {
            collective_name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Record for Author {
    fn table() -> &'static Table {
        &literature::AUTHORS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.fore_name.clone().into(),
            self.last_name.clone().into(),
            self.initials.clone().into(),
            self.suffix.clone().into(),
            self.collective_name.clone().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            fore_name: row.get("fore_name")?,
            last_name: row.get("last_name")?,
            initials: row.get("initials")?,
            suffix: row.get("suffix")?,
            collective_name: row.get("collective_name")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliation {
    pub id: Option<RecordId>,
    pub affiliation: String,
}

impl Affiliation {
    pub fn new(affiliation: impl Into<String>) -> Self {
        Self {
            id: None,
            affiliation: affiliation.into(),
        }
    }
}

impl Record for Affiliation {
    fn table() -> &'static Table {
        &literature::AFFILIATIONS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.affiliation.clone().into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            affiliation: row.get("affiliation")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorAffiliation {
    pub id: Option<RecordId>,
    pub author_id: RecordId,
    pub affiliation_id: RecordId,
    pub ordinance: i64,
}

impl AuthorAffiliation {
    pub fn new(author_id: RecordId, affiliation_id: RecordId, ordinance: i64) -> Self {
        Self {
            id: None,
            author_id,
            affiliation_id,
            ordinance,
        }
    }
}

impl Record for AuthorAffiliation {
    fn table() -> &'static Table {
        &literature::AUTHOR_AFFILIATIONS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.author_id.into(),
            self.affiliation_id.into(),
            self.ordinance.into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            author_id: row.get("author_id")?,
            affiliation_id: row.get("affiliation_id")?,
            ordinance: row.get("ordinance")?,
        })
    }
}

/// Position of an author in a citation's author list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationAuthor {
    pub id: Option<RecordId>,
    pub citation_id: RecordId,
    pub author_id: RecordId,
    pub ordinance: i64,
}

impl CitationAuthor {
    pub fn new(citation_id: RecordId, author_id: RecordId, ordinance: i64) -> Self {
        Self {
            id: None,
            citation_id,
            author_id,
            ordinance,
        }
    }
}

impl Record for CitationAuthor {
    fn table() -> &'static Table {
        &literature::CITATION_AUTHORS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.citation_id.into(),
            self.author_id.into(),
            self.ordinance.into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            citation_id: row.get("citation_id")?,
            author_id: row.get("author_id")?,
            ordinance: row.get("ordinance")?,
        })
    }
}

/// Labelled paragraph of a structured abstract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbstractSection {
    pub id: Option<RecordId>,
    pub label: Option<String>,
    pub nlm_category: Option<String>,
    pub text: String,
}

impl AbstractSection {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            label: None,
            nlm_category: None,
            text: text.into(),
        }
    }
}

impl Record for AbstractSection {
    fn table() -> &'static Table {
        &literature::ABSTRACT_SECTIONS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.label.clone().into(),
            self.nlm_category.clone().into(),
            self.text.clone().into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            label: row.get("label")?,
            nlm_category: row.get("nlm_category")?,
            text: row.get("text")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationSection {
    pub id: Option<RecordId>,
    pub citation_id: RecordId,
    pub section_id: RecordId,
    pub ordinance: i64,
}

impl CitationSection {
    pub fn new(citation_id: RecordId, section_id: RecordId, ordinance: i64) -> Self {
        Self {
            id: None,
            citation_id,
            section_id,
            ordinance,
        }
    }
}

impl Record for CitationSection {
    fn table() -> &'static Table {
        &literature::CITATION_SECTIONS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.citation_id.into(),
            self.section_id.into(),
            self.ordinance.into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            citation_id: row.get("citation_id")?,
            section_id: row.get("section_id")?,
            ordinance: row.get("ordinance")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: Option<RecordId>,
    pub keyword: String,
}

impl Keyword {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            id: None,
            keyword: keyword.into(),
        }
    }
}

impl Record for Keyword {
    fn table() -> &'static Table {
        &literature::KEYWORDS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.keyword.clone().into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            keyword: row.get("keyword")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationKeyword {
    pub id: Option<RecordId>,
    pub citation_id: RecordId,
    pub keyword_id: RecordId,
    pub is_major: bool,
}

impl CitationKeyword {
    pub fn new(citation_id: RecordId, keyword_id: RecordId, is_major: bool) -> Self {
        Self {
            id: None,
            citation_id,
            keyword_id,
            is_major,
        }
    }
}

impl Record for CitationKeyword {
    fn table() -> &'static Table {
        &literature::CITATION_KEYWORDS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.citation_id.into(),
            self.keyword_id.into(),
            self.is_major.into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            citation_id: row.get("citation_id")?,
            keyword_id: row.get("keyword_id")?,
            is_major: row.get("is_major")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chemical {
    pub id: Option<RecordId>,
    /// CAS registry number, or `0` when none was assigned.
    pub num_registry: String,
    pub name: String,
    pub descriptor_id: Option<RecordId>,
}

impl Chemical {
    pub fn new(num_registry: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            num_registry: num_registry.into(),
            name: name.into(),
            descriptor_id: None,
        }
    }
}

impl Record for Chemical {
    fn table() -> &'static Table {
        &literature::CHEMICALS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.num_registry.clone().into(),
            self.name.clone().into(),
            self.descriptor_id.into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            num_registry: row.get("num_registry")?,
            name: row.get("name")?,
            descriptor_id: row.get("descriptor_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationChemical {
    pub id: Option<RecordId>,
    pub citation_id: RecordId,
    pub chemical_id: RecordId,
}

impl CitationChemical {
    pub fn new(citation_id: RecordId, chemical_id: RecordId) -> Self {
        Self {
            id: None,
            citation_id,
            chemical_id,
        }
    }
}

impl Record for CitationChemical {
    fn table() -> &'static Table {
        &literature::CITATION_CHEMICALS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![self.citation_id.into(), self.chemical_id.into()]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            citation_id: row.get("citation_id")?,
            chemical_id: row.get("chemical_id")?,
        })
    }
}

/// Topic heading assigned to a citation, optionally refined by a qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationMeshTerm {
    pub id: Option<RecordId>,
    pub citation_id: RecordId,
    pub descriptor_id: RecordId,
    pub qualifier_id: Option<RecordId>,
    pub is_major: bool,
}

impl CitationMeshTerm {
    pub fn new(
        citation_id: RecordId,
        descriptor_id: RecordId,
        qualifier_id: Option<RecordId>,
        is_major: bool,
    ) -> Self {
        Self {
            id: None,
            citation_id,
            descriptor_id,
            qualifier_id,
            is_major,
        }
    }

    pub const MUTABLE_COLUMNS: &'static [&'static str] = &["is_major"];
}

impl Record for CitationMeshTerm {
    fn table() -> &'static Table {
        &literature::CITATION_MESH_TERMS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.citation_id.into(),
            self.descriptor_id.into(),
            self.qualifier_id.into(),
            self.is_major.into(),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            citation_id: row.get("citation_id")?,
            descriptor_id: row.get("descriptor_id")?,
            qualifier_id: row.get("qualifier_id")?,
            is_major: row.get("is_major")?,
        })
    }
}
