//! Literature metadata service.
//!
//! # Responsibility
//! - Store citations keyed by PMID and the shared entities they cite
//!   (journals, authors, keywords, chemicals), de-duplicated by content.
//! - Link citations to their parts with ordinance where order matters.
//!
//! # Invariants
//! - Parallel-array batches are length-checked before any row is written.

use crate::model::literature::{
    AbstractSection, Affiliation, Author, AuthorAffiliation, Chemical, Citation, CitationAuthor,
    CitationChemical, CitationKeyword, CitationMeshTerm, CitationSection, Journal, Keyword,
};
use crate::model::RecordId;
use crate::repo::{ensure_equal_lengths, RecordStore, RepoResult, Session};
use rusqlite::types::Value;

/// Parallel name columns for [`LiteratureService::iodi_authors`].
///
/// Index `i` of every slice describes author `i`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorColumns<'a> {
    pub fore_names: &'a [Option<String>],
    pub last_names: &'a [Option<String>],
    pub initials: &'a [Option<String>],
    pub suffixes: &'a [Option<String>],
    pub collective_names: &'a [Option<String>],
}

pub struct LiteratureService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> LiteratureService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn iodi_journal(
        &self,
        session: Option<Session<'_>>,
        journal: &Journal,
    ) -> RepoResult<RecordId> {
        self.store.iodi(session, journal)
    }

    /// Inserts a citation or refreshes every attribute but its PMID.
    pub fn iodu_citation(
        &self,
        session: Option<Session<'_>>,
        citation: &Citation,
    ) -> RepoResult<RecordId> {
        self.store.iodu(session, citation, Citation::MUTABLE_COLUMNS)
    }

    pub fn iodi_author(&self, session: Option<Session<'_>>, author: &Author) -> RepoResult<RecordId> {
        self.store.iodi(session, author)
    }

    /// Batch author insert from parallel name columns.
    ///
    /// # Errors
    /// - `InvalidArguments` when the columns differ in length.
    pub fn iodi_authors(
        &self,
        session: Option<Session<'_>>,
        columns: AuthorColumns<'_>,
    ) -> RepoResult<Vec<RecordId>> {
        ensure_equal_lengths(&[
            ("fore_names", columns.fore_names.len()),
            ("last_names", columns.last_names.len()),
            ("initials", columns.initials.len()),
            ("suffixes", columns.suffixes.len()),
            ("collective_names", columns.collective_names.len()),
        ])?;

        let authors: Vec<Author> = (0..columns.fore_names.len())
            .map(|index| Author {
                id: None,
                fore_name: columns.fore_names[index].clone(),
                last_name: columns.last_names[index].clone(),
                initials: columns.initials[index].clone(),
                suffix: columns.suffixes[index].clone(),
                collective_name: columns.collective_names[index].clone(),
            })
            .collect();
        self.store.iodi_batch(session, &authors)
    }

    pub fn iodi_affiliations(
        &self,
        session: Option<Session<'_>>,
        affiliations: &[String],
    ) -> RepoResult<Vec<RecordId>> {
        let records: Vec<Affiliation> = affiliations.iter().map(Affiliation::new).collect();
        self.store.iodi_batch(session, &records)
    }

    pub fn link_author_affiliation(
        &self,
        session: Option<Session<'_>>,
        author_id: RecordId,
        affiliation_id: RecordId,
        ordinance: i64,
    ) -> RepoResult<RecordId> {
        self.store.iodi(
            session,
            &AuthorAffiliation::new(author_id, affiliation_id, ordinance),
        )
    }

    pub fn link_citation_author(
        &self,
        session: Option<Session<'_>>,
        citation_id: RecordId,
        author_id: RecordId,
        ordinance: i64,
    ) -> RepoResult<RecordId> {
        self.store.iodi(
            session,
            &CitationAuthor::new(citation_id, author_id, ordinance),
        )
    }

    pub fn iodi_abstract_section(
        &self,
        session: Option<Session<'_>>,
        section: &AbstractSection,
    ) -> RepoResult<RecordId> {
        self.store.iodi(session, section)
    }

    pub fn link_citation_section(
        &self,
        session: Option<Session<'_>>,
        citation_id: RecordId,
        section_id: RecordId,
        ordinance: i64,
    ) -> RepoResult<RecordId> {
        self.store.iodi(
            session,
            &CitationSection::new(citation_id, section_id, ordinance),
        )
    }

    pub fn iodi_keywords(
        &self,
        session: Option<Session<'_>>,
        keywords: &[String],
    ) -> RepoResult<Vec<RecordId>> {
        let records: Vec<Keyword> = keywords.iter().map(Keyword::new).collect();
        self.store.iodi_batch(session, &records)
    }

    pub fn link_citation_keyword(
        &self,
        session: Option<Session<'_>>,
        citation_id: RecordId,
        keyword_id: RecordId,
        is_major: bool,
    ) -> RepoResult<RecordId> {
        self.store.iodi(
            session,
            &CitationKeyword::new(citation_id, keyword_id, is_major),
        )
    }

    pub fn iodi_chemical(
        &self,
        session: Option<Session<'_>>,
        chemical: &Chemical,
    ) -> RepoResult<RecordId> {
        self.store.iodi(session, chemical)
    }

    pub fn link_citation_chemical(
        &self,
        session: Option<Session<'_>>,
        citation_id: RecordId,
        chemical_id: RecordId,
    ) -> RepoResult<RecordId> {
        self.store
            .iodi(session, &CitationChemical::new(citation_id, chemical_id))
    }

    /// Links a citation to a topic heading, optionally narrowed by a qualifier.
    pub fn iodi_citation_mesh_term(
        &self,
        session: Option<Session<'_>>,
        mesh_term: &CitationMeshTerm,
    ) -> RepoResult<RecordId> {
        self.store.iodi(session, mesh_term)
    }

    pub fn get_citation_by_pmid(
        &self,
        session: Option<Session<'_>>,
        pmid: i64,
    ) -> RepoResult<Option<Citation>> {
        self.store.get_by_attrs(session, &[("pmid", Value::from(pmid))])
    }
}
