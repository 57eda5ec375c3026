//! Application tables (`app_*`).

use super::{clinical_trial, literature, Column, Namespace, Table};

pub static USERS: Table = Table {
    namespace: Namespace::App,
    name: "users",
    columns: &[Column::text("auth0_id"), Column::text("email").nullable()],
    unique: &["auth0_id"],
    fingerprint: &[],
};

/// One JSON settings document per user.
pub static USER_CONFIGS: Table = Table {
    namespace: Namespace::App,
    name: "user_configs",
    columns: &[
        Column::foreign_key("user_id", &USERS),
        Column::text("settings"),
    ],
    unique: &["user_id"],
    fingerprint: &[],
};

pub static USER_STUDY_BOOKMARKS: Table = Table {
    namespace: Namespace::App,
    name: "user_study_bookmarks",
    columns: &[
        Column::foreign_key("user_id", &USERS),
        Column::foreign_key("study_id", &clinical_trial::STUDIES),
    ],
    unique: &["user_id", "study_id"],
    fingerprint: &[],
};

pub static USER_CITATION_BOOKMARKS: Table = Table {
    namespace: Namespace::App,
    name: "user_citation_bookmarks",
    columns: &[
        Column::foreign_key("user_id", &USERS),
        Column::foreign_key("citation_id", &literature::CITATIONS),
    ],
    unique: &["user_id", "citation_id"],
    fingerprint: &[],
};

pub static TABLES: &[&Table] = &[
    &USERS,
    &USER_CONFIGS,
    &USER_STUDY_BOOKMARKS,
    &USER_CITATION_BOOKMARKS,
];
