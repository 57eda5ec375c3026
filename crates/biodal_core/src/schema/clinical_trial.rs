//! Clinical-trial registry tables (`ct_*`).

use super::{literature, topic, Column, Namespace, Table};

pub static ELIGIBILITIES: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "eligibilities",
    columns: &[
        Column::text("gender").nullable(),
        Column::text("minimum_age").nullable(),
        Column::text("maximum_age").nullable(),
        Column::boolean("healthy_volunteers").nullable(),
        Column::text("criteria").nullable(),
    ],
    unique: &["fingerprint"],
    fingerprint: &[
        "gender",
        "minimum_age",
        "maximum_age",
        "healthy_volunteers",
        "criteria",
    ],
};

pub static STUDIES: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "studies",
    columns: &[
        Column::text("nct_id"),
        Column::text("org_study_id").nullable(),
        Column::text("brief_title"),
        Column::text("official_title").nullable(),
        Column::text("acronym").nullable(),
        Column::text("brief_summary").nullable(),
        Column::text("detailed_description").nullable(),
        Column::text("overall_status").nullable(),
        Column::text("phase").nullable(),
        Column::text("study_type").nullable(),
        Column::text("start_date").nullable(),
        Column::text("completion_date").nullable(),
        Column::integer("enrollment").nullable(),
        Column::foreign_key("eligibility_id", &ELIGIBILITIES).nullable(),
    ],
    unique: &["nct_id"],
    fingerprint: &[],
};

pub static SPONSORS: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "sponsors",
    columns: &[
        Column::text("name"),
        Column::text("agency_class").nullable(),
    ],
    unique: &["fingerprint"],
    fingerprint: &["name", "agency_class"],
};

pub static STUDY_SPONSORS: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "study_sponsors",
    columns: &[
        Column::foreign_key("study_id", &STUDIES),
        Column::foreign_key("sponsor_id", &SPONSORS),
        Column::text("role"),
    ],
    unique: &["study_id", "sponsor_id", "role"],
    fingerprint: &[],
};

pub static CONDITIONS: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "conditions",
    columns: &[Column::text("condition")],
    unique: &["fingerprint"],
    fingerprint: &["condition"],
};

pub static STUDY_CONDITIONS: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "study_conditions",
    columns: &[
        Column::foreign_key("study_id", &STUDIES),
        Column::foreign_key("condition_id", &CONDITIONS),
    ],
    unique: &["study_id", "condition_id"],
    fingerprint: &[],
};

pub static INTERVENTIONS: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "interventions",
    columns: &[
        Column::text("intervention_type"),
        Column::text("name"),
        Column::text("description").nullable(),
    ],
    unique: &["fingerprint"],
    fingerprint: &["intervention_type", "name", "description"],
};

pub static STUDY_INTERVENTIONS: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "study_interventions",
    columns: &[
        Column::foreign_key("study_id", &STUDIES),
        Column::foreign_key("intervention_id", &INTERVENTIONS),
    ],
    unique: &["study_id", "intervention_id"],
    fingerprint: &[],
};

pub static OUTCOMES: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "outcomes",
    columns: &[
        Column::text("outcome_type"),
        Column::text("measure"),
        Column::text("time_frame").nullable(),
        Column::text("description").nullable(),
    ],
    unique: &["fingerprint"],
    fingerprint: &["outcome_type", "measure", "time_frame", "description"],
};

pub static STUDY_OUTCOMES: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "study_outcomes",
    columns: &[
        Column::foreign_key("study_id", &STUDIES),
        Column::foreign_key("outcome_id", &OUTCOMES),
    ],
    unique: &["study_id", "outcome_id"],
    fingerprint: &[],
};

pub static FACILITIES: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "facilities",
    columns: &[
        Column::text("name").nullable(),
        Column::text("city").nullable(),
        Column::text("state").nullable(),
        Column::text("zip_code").nullable(),
        Column::text("country").nullable(),
    ],
    unique: &["fingerprint"],
    fingerprint: &["name", "city", "state", "zip_code", "country"],
};

pub static CONTACTS: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "contacts",
    columns: &[
        Column::text("name_first").nullable(),
        Column::text("name_middle").nullable(),
        Column::text("name_last").nullable(),
        Column::text("degrees").nullable(),
        Column::text("phone").nullable(),
        Column::text("phone_ext").nullable(),
        Column::text("email").nullable(),
    ],
    unique: &["fingerprint"],
    fingerprint: &[
        "name_first",
        "name_middle",
        "name_last",
        "degrees",
        "phone",
        "phone_ext",
        "email",
    ],
};

pub static LOCATIONS: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "locations",
    columns: &[
        Column::foreign_key("facility_id", &FACILITIES),
        Column::text("status").nullable(),
        Column::foreign_key("contact_primary_id", &CONTACTS).nullable(),
        Column::foreign_key("contact_backup_id", &CONTACTS).nullable(),
    ],
    unique: &["fingerprint"],
    fingerprint: &[
        "facility_id",
        "status",
        "contact_primary_id",
        "contact_backup_id",
    ],
};

pub static STUDY_LOCATIONS: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "study_locations",
    columns: &[
        Column::foreign_key("study_id", &STUDIES),
        Column::foreign_key("location_id", &LOCATIONS),
    ],
    unique: &["study_id", "location_id"],
    fingerprint: &[],
};

pub static STUDY_REFERENCES: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "study_references",
    columns: &[
        Column::foreign_key("study_id", &STUDIES),
        Column::foreign_key("citation_id", &literature::CITATIONS),
        Column::text("reference_type"),
    ],
    unique: &["study_id", "citation_id", "reference_type"],
    fingerprint: &[],
};

pub static STUDY_DESCRIPTORS: Table = Table {
    namespace: Namespace::ClinicalTrial,
    name: "study_descriptors",
    columns: &[
        Column::foreign_key("study_id", &STUDIES),
        Column::foreign_key("descriptor_id", &topic::DESCRIPTORS),
        Column::text("study_descriptor_type"),
    ],
    unique: &["study_id", "descriptor_id", "study_descriptor_type"],
    fingerprint: &[],
};

pub static TABLES: &[&Table] = &[
    &ELIGIBILITIES,
    &STUDIES,
    &SPONSORS,
    &STUDY_SPONSORS,
    &CONDITIONS,
    &STUDY_CONDITIONS,
    &INTERVENTIONS,
    &STUDY_INTERVENTIONS,
    &OUTCOMES,
    &STUDY_OUTCOMES,
    &FACILITIES,
    &CONTACTS,
    &LOCATIONS,
    &STUDY_LOCATIONS,
    &STUDY_REFERENCES,
    &STUDY_DESCRIPTORS,
];
