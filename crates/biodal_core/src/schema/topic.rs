//! Medical-topic taxonomy tables (`topic_*`).

use super::{Column, Namespace, Table};

pub static DESCRIPTORS: Table = Table {
    namespace: Namespace::Topic,
    name: "descriptors",
    columns: &[
        Column::text("ui"),
        Column::text("name"),
        Column::text("note").nullable(),
        Column::text("date_created").nullable(),
        Column::text("date_revised").nullable(),
        Column::text("date_established").nullable(),
    ],
    unique: &["ui"],
    fingerprint: &[],
};

pub static QUALIFIERS: Table = Table {
    namespace: Namespace::Topic,
    name: "qualifiers",
    columns: &[
        Column::text("ui"),
        Column::text("name"),
        Column::text("note").nullable(),
    ],
    unique: &["ui"],
    fingerprint: &[],
};

pub static TREE_NUMBERS: Table = Table {
    namespace: Namespace::Topic,
    name: "tree_numbers",
    columns: &[Column::text("tree_number")],
    unique: &["tree_number"],
    fingerprint: &[],
};

pub static DESCRIPTOR_TREE_NUMBERS: Table = Table {
    namespace: Namespace::Topic,
    name: "descriptor_tree_numbers",
    columns: &[
        Column::foreign_key("descriptor_id", &DESCRIPTORS),
        Column::foreign_key("tree_number_id", &TREE_NUMBERS),
    ],
    unique: &["descriptor_id", "tree_number_id"],
    fingerprint: &[],
};

pub static CONCEPTS: Table = Table {
    namespace: Namespace::Topic,
    name: "concepts",
    columns: &[
        Column::text("ui"),
        Column::text("name"),
        Column::text("casn1_name").nullable(),
        Column::text("registry_number").nullable(),
        Column::text("scope_note").nullable(),
    ],
    unique: &["ui"],
    fingerprint: &[],
};

pub static DESCRIPTOR_CONCEPTS: Table = Table {
    namespace: Namespace::Topic,
    name: "descriptor_concepts",
    columns: &[
        Column::foreign_key("descriptor_id", &DESCRIPTORS),
        Column::foreign_key("concept_id", &CONCEPTS),
        Column::boolean("is_preferred"),
    ],
    unique: &["descriptor_id", "concept_id"],
    fingerprint: &[],
};

pub static TERMS: Table = Table {
    namespace: Namespace::Topic,
    name: "terms",
    columns: &[
        Column::text("ui"),
        Column::text("name"),
        Column::text("lexical_tag").nullable(),
    ],
    unique: &["ui"],
    fingerprint: &[],
};

pub static CONCEPT_TERMS: Table = Table {
    namespace: Namespace::Topic,
    name: "concept_terms",
    columns: &[
        Column::foreign_key("concept_id", &CONCEPTS),
        Column::foreign_key("term_id", &TERMS),
        Column::boolean("is_preferred"),
    ],
    unique: &["concept_id", "term_id"],
    fingerprint: &[],
};

pub static SYNONYMS: Table = Table {
    namespace: Namespace::Topic,
    name: "synonyms",
    columns: &[Column::text("synonym")],
    unique: &["fingerprint"],
    fingerprint: &["synonym"],
};

pub static DESCRIPTOR_SYNONYMS: Table = Table {
    namespace: Namespace::Topic,
    name: "descriptor_synonyms",
    columns: &[
        Column::foreign_key("descriptor_id", &DESCRIPTORS),
        Column::foreign_key("synonym_id", &SYNONYMS),
    ],
    unique: &["descriptor_id", "synonym_id"],
    fingerprint: &[],
};

pub static TABLES: &[&Table] = &[
    &DESCRIPTORS,
    &QUALIFIERS,
    &TREE_NUMBERS,
    &DESCRIPTOR_TREE_NUMBERS,
    &CONCEPTS,
    &DESCRIPTOR_CONCEPTS,
    &TERMS,
    &CONCEPT_TERMS,
    &SYNONYMS,
    &DESCRIPTOR_SYNONYMS,
];
