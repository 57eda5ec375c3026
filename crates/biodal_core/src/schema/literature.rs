//! Biomedical literature tables (`lit_*`).
//!
//! Citations are keyed by PMID. Authors, affiliations, journals, abstract
//! sections, keywords and chemicals carry no external identifier and are
//! keyed by fingerprint instead. Ordered joins keep an `ordinance` column.

use super::{topic, Column, Namespace, Table};

pub static JOURNALS: Table = Table {
    namespace: Namespace::Literature,
    name: "journals",
    columns: &[
        Column::text("issn").nullable(),
        Column::text("title").nullable(),
        Column::text("iso_abbreviation").nullable(),
        Column::text("country").nullable(),
        Column::text("nlm_unique_id").nullable(),
    ],
    unique: &["fingerprint"],
    fingerprint: &["issn", "title", "iso_abbreviation", "country", "nlm_unique_id"],
};

pub static CITATIONS: Table = Table {
    namespace: Namespace::Literature,
    name: "citations",
    columns: &[
        Column::integer("pmid"),
        Column::text("title"),
        Column::text("language").nullable(),
        Column::text("date_created").nullable(),
        Column::text("date_completed").nullable(),
        Column::text("date_revised").nullable(),
        Column::text("publication_model").nullable(),
        Column::foreign_key("journal_id", &JOURNALS).nullable(),
    ],
    unique: &["pmid"],
    fingerprint: &[],
};

pub static AUTHORS: Table = Table {
    namespace: Namespace::Literature,
    name: "authors",
    columns: &[
        Column::text("fore_name").nullable(),
        Column::text("last_name").nullable(),
        Column::text("initials").nullable(),
        Column::text("suffix").nullable(),
        Column::text("collective_name").nullable(),
    ],
    unique: &["fingerprint"],
    fingerprint: &["fore_name", "last_name", "initials", "suffix", "collective_name"],
};

pub static AFFILIATIONS: Table = Table {
    namespace: Namespace::Literature,
    name: "affiliations",
    columns: &[Column::text("affiliation")],
    unique: &["fingerprint"],
    fingerprint: &["affiliation"],
};

pub static AUTHOR_AFFILIATIONS: Table = Table {
    namespace: Namespace::Literature,
    name: "author_affiliations",
    columns: &[
        Column::foreign_key("author_id", &AUTHORS),
        Column::foreign_key("affiliation_id", &AFFILIATIONS),
        Column::integer("ordinance"),
    ],
    unique: &["author_id", "affiliation_id"],
    fingerprint: &[],
};

pub static CITATION_AUTHORS: Table = Table {
    namespace: Namespace::Literature,
    name: "citation_authors",
    columns: &[
        Column::foreign_key("citation_id", &CITATIONS),
        Column::foreign_key("author_id", &AUTHORS),
        Column::integer("ordinance"),
    ],
    unique: &["citation_id", "author_id"],
    fingerprint: &[],
};

pub static ABSTRACT_SECTIONS: Table = Table {
    namespace: Namespace::Literature,
    name: "abstract_sections",
    columns: &[
        Column::text("label").nullable(),
        Column::text("nlm_category").nullable(),
        Column::text("text"),
    ],
    unique: &["fingerprint"],
    fingerprint: &["label", "nlm_category", "text"],
};

pub static CITATION_SECTIONS: Table = Table {
    namespace: Namespace::Literature,
    name: "citation_sections",
    columns: &[
        Column::foreign_key("citation_id", &CITATIONS),
        Column::foreign_key("section_id", &ABSTRACT_SECTIONS),
        Column::integer("ordinance"),
    ],
    unique: &["citation_id", "section_id"],
    fingerprint: &[],
};

pub static KEYWORDS: Table = Table {
    namespace: Namespace::Literature,
    name: "keywords",
    columns: &[Column::text("keyword")],
    unique: &["fingerprint"],
    fingerprint: &["keyword"],
};

pub static CITATION_KEYWORDS: Table = Table {
    namespace: Namespace::Literature,
    name: "citation_keywords",
    columns: &[
        Column::foreign_key("citation_id", &CITATIONS),
        Column::foreign_key("keyword_id", &KEYWORDS),
        Column::boolean("is_major"),
    ],
    unique: &["citation_id", "keyword_id"],
    fingerprint: &[],
};

pub static CHEMICALS: Table = Table {
    namespace: Namespace::Literature,
    name: "chemicals",
    columns: &[
        Column::text("num_registry"),
        Column::text("name"),
        Column::foreign_key("descriptor_id", &topic::DESCRIPTORS).nullable(),
    ],
    unique: &["fingerprint"],
    fingerprint: &["num_registry", "name", "descriptor_id"],
};

pub static CITATION_CHEMICALS: Table = Table {
    namespace: Namespace::Literature,
    name: "citation_chemicals",
    columns: &[
        Column::foreign_key("citation_id", &CITATIONS),
        Column::foreign_key("chemical_id", &CHEMICALS),
    ],
    unique: &["citation_id", "chemical_id"],
    fingerprint: &[],
};

// `qualifier_id` is optional, so the natural key is the fingerprint rather
// than a composite unique over a nullable column.
pub static CITATION_MESH_TERMS: Table = Table {
    namespace: Namespace::Literature,
    name: "citation_mesh_terms",
    columns: &[
        Column::foreign_key("citation_id", &CITATIONS),
        Column::foreign_key("descriptor_id", &topic::DESCRIPTORS),
        Column::foreign_key("qualifier_id", &topic::QUALIFIERS).nullable(),
        Column::boolean("is_major"),
    ],
    unique: &["fingerprint"],
    fingerprint: &["citation_id", "descriptor_id", "qualifier_id"],
};

pub static TABLES: &[&Table] = &[
    &JOURNALS,
    &CITATIONS,
    &AUTHORS,
    &AFFILIATIONS,
    &AUTHOR_AFFILIATIONS,
    &CITATION_AUTHORS,
    &ABSTRACT_SECTIONS,
    &CITATION_SECTIONS,
    &KEYWORDS,
    &CITATION_KEYWORDS,
    &CHEMICALS,
    &CITATION_CHEMICALS,
    &CITATION_MESH_TERMS,
];
