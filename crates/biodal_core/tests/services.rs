use biodal_core::model::clinical_trial::{
    Contact, Eligibility, Facility, Intervention, Location, Outcome, ReferenceType, Sponsor,
    SponsorRole, Study, StudyDescriptorType, StudyReference, StudySponsor,
};
use biodal_core::model::literature::{AbstractSection, Chemical, Citation, Journal};
use biodal_core::model::topic::{Concept, Descriptor, Qualifier, Term};
use biodal_core::{
    AppService, LiteratureService, RecordStore, SqliteRepository, TopicService, TrialService,
};
use rusqlite::types::Value;

#[test]
fn topic_import_is_idempotent() {
    let repo = SqliteRepository::open_in_memory().unwrap();
    let topic = TopicService::new(&repo);

    let ids = repo
        .transaction(|session| {
            let mut descriptor = Descriptor::new("D001249", "Asthma");
            descriptor.note = Some("A form of bronchial disorder".to_string());
            let descriptor = topic.iodu_descriptor(Some(session), &descriptor)?;
            let qualifier =
                topic.iodu_qualifier(Some(session), &Qualifier::new("Q000188", "drug therapy"))?;
            let concept = topic.iodu_concept(Some(session), &Concept::new("M0001825", "Asthma"))?;
            let term = topic.iodu_term(Some(session), &Term::new("T003720", "Asthma"))?;

            let trees = topic.iodi_tree_numbers(
                Some(session),
                &["C08.127.108".to_string(), "C08.381.495.108".to_string()],
            )?;
            for tree in &trees {
                topic.link_descriptor_tree_number(Some(session), descriptor, *tree)?;
            }
            topic.link_descriptor_concept(Some(session), descriptor, concept, true)?;
            topic.link_concept_term(Some(session), concept, term, true)?;

            let synonyms = topic.iodi_synonyms(
                Some(session),
                &["Bronchial Asthma".to_string(), "asthmas".to_string()],
            )?;
            for synonym in &synonyms {
                topic.link_descriptor_synonym(Some(session), descriptor, *synonym)?;
            }
            Ok((descriptor, qualifier, trees))
        })
        .unwrap();

    let renamed = Descriptor::new("D001249", "Asthma, renamed");
    assert_eq!(topic.iodu_descriptor(None, &renamed).unwrap(), ids.0);
    let stored = topic.get_descriptor_by_ui(None, "D001249").unwrap().unwrap();
    assert_eq!(stored.name, "Asthma, renamed");
    assert_eq!(stored.note, None);

    let trees_again = topic
        .iodi_tree_numbers(None, &["C08.381.495.108".to_string()])
        .unwrap();
    assert_eq!(trees_again, vec![ids.2[1]]);
    assert_eq!(
        topic
            .link_descriptor_tree_number(None, ids.0, ids.2[0])
            .unwrap(),
        1
    );
}

#[test]
fn citation_with_authors_sections_and_terms() {
    let repo = SqliteRepository::open_in_memory().unwrap();
    let literature = LiteratureService::new(&repo);
    let topic = TopicService::new(&repo);

    let journal = Journal {
        issn: Some("0028-4793".to_string()),
        title: Some("The New England journal of medicine".to_string()),
        iso_abbreviation: Some("N Engl J Med".to_string()),
        ..Journal::default()
    };

    repo.transaction(|session| {
        let journal_id = literature.iodi_journal(Some(session), &journal)?;
        let mut citation = Citation::new(12_345_678, "A trial of inhaled steroids");
        citation.journal_id = Some(journal_id);
        let citation_id = literature.iodu_citation(Some(session), &citation)?;

        let author = literature.iodi_author(
            Some(session),
            &biodal_core::model::literature::Author::person(Some("Ada".to_string()), "Lovelace"),
        )?;
        let affiliations =
            literature.iodi_affiliations(Some(session), &["Analytical Engines Ltd".to_string()])?;
        literature.link_author_affiliation(Some(session), author, affiliations[0], 0)?;
        literature.link_citation_author(Some(session), citation_id, author, 0)?;

        let mut section = AbstractSection::new("Inhaled steroids reduced exacerbations.");
        section.label = Some("RESULTS".to_string());
        let section_id = literature.iodi_abstract_section(Some(session), &section)?;
        literature.link_citation_section(Some(session), citation_id, section_id, 0)?;

        let keywords = literature.iodi_keywords(Some(session), &["asthma".to_string()])?;
        literature.link_citation_keyword(Some(session), citation_id, keywords[0], true)?;

        let descriptor =
            topic.iodu_descriptor(Some(session), &Descriptor::new("D005938", "Glucocorticoids"))?;
        let mut chemical = Chemical::new("0", "Glucocorticoids");
        chemical.descriptor_id = Some(descriptor);
        let chemical_id = literature.iodi_chemical(Some(session), &chemical)?;
        literature.link_citation_chemical(Some(session), citation_id, chemical_id)?;
        literature.iodi_citation_mesh_term(
            Some(session),
            &biodal_core::model::literature::CitationMeshTerm::new(
                citation_id,
                descriptor,
                None,
                true,
            ),
        )?;
        Ok(())
    })
    .unwrap();

    let stored = literature
        .get_citation_by_pmid(None, 12_345_678)
        .unwrap()
        .unwrap();
    assert_eq!(stored.title, "A trial of inhaled steroids");
    assert_eq!(
        stored.journal_id,
        Some(literature.iodi_journal(None, &journal).unwrap())
    );
}

#[test]
fn study_import_links_registry_entities() {
    let repo = SqliteRepository::open_in_memory().unwrap();
    let trials = TrialService::new(&repo);
    let literature = LiteratureService::new(&repo);
    let topic = TopicService::new(&repo);
    let app = AppService::new(&repo);

    let study_id = repo
        .transaction(|session| {
            let eligibility = trials.iodi_eligibility(
                Some(session),
                &Eligibility {
                    gender: Some("All".to_string()),
                    minimum_age: Some("18 Years".to_string()),
                    healthy_volunteers: Some(false),
                    ..Eligibility::default()
                },
            )?;
            let mut study = Study::new("NCT00000102", "Steroids for asthma");
            study.eligibility_id = Some(eligibility);
            study.enrollment = Some(120);
            let study_id = trials.iodu_study(Some(session), &study)?;

            let sponsor = trials.iodi_sponsor(
                Some(session),
                &Sponsor::new("National Heart, Lung, and Blood Institute", Some("NIH".to_string())),
            )?;
            trials.link_study_sponsor(Some(session), study_id, sponsor, SponsorRole::Lead)?;
            trials.link_study_sponsor(Some(session), study_id, sponsor, SponsorRole::Collaborator)?;

            let conditions = trials.iodi_conditions(Some(session), &["Asthma".to_string()])?;
            trials.link_study_condition(Some(session), study_id, conditions[0])?;

            let intervention =
                trials.iodi_intervention(Some(session), &Intervention::new("Drug", "Budesonide"))?;
            trials.link_study_intervention(Some(session), study_id, intervention)?;

            let outcome =
                trials.iodi_outcome(Some(session), &Outcome::new("primary", "Exacerbation rate"))?;
            trials.link_study_outcome(Some(session), study_id, outcome)?;

            let facility = trials.iodi_facility(
                Some(session),
                &Facility {
                    name: Some("General Hospital".to_string()),
                    city: Some("Boston".to_string()),
                    ..Facility::default()
                },
            )?;
            let contact = trials.iodi_contact(
                Some(session),
                &Contact {
                    name_last: Some("Nguyen".to_string()),
                    email: Some("nguyen@example.org".to_string()),
                    ..Contact::default()
                },
            )?;
            let mut location = Location::new(facility);
            location.contact_primary_id = Some(contact);
            let location = trials.iodi_location(Some(session), &location)?;
            trials.link_study_location(Some(session), study_id, location)?;

            let citation =
                literature.iodu_citation(Some(session), &Citation::new(7, "Results paper"))?;
            trials.link_study_reference(Some(session), study_id, citation, ReferenceType::Results)?;

            let descriptor =
                topic.iodu_descriptor(Some(session), &Descriptor::new("D001249", "Asthma"))?;
            trials.link_study_descriptor(
                Some(session),
                study_id,
                descriptor,
                StudyDescriptorType::Condition,
            )?;
            Ok(study_id)
        })
        .unwrap();

    let stored = trials
        .get_study_by_nct_id(None, "NCT00000102")
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, Some(study_id));
    assert_eq!(stored.enrollment, Some(120));

    let sponsors: Vec<StudySponsor> = repo
        .bulk_get_by_attrs(None, &[("study_id", vec![Value::from(study_id)])], true)
        .unwrap();
    let roles: Vec<SponsorRole> = sponsors.iter().map(|link| link.role).collect();
    assert_eq!(roles, vec![SponsorRole::Collaborator, SponsorRole::Lead]);

    let references: Vec<StudyReference> = repo
        .bulk_get_by_attrs(None, &[("study_id", vec![Value::from(study_id)])], false)
        .unwrap();
    assert_eq!(references.len(), 1);
    assert_eq!(references[0].reference_type, ReferenceType::Results);

    let user = app.iodi_user(None, "auth0|olga", None).unwrap();
    app.bookmark_study(None, user, study_id).unwrap();
    app.bookmark_study(None, user, study_id).unwrap();
    let bookmarks = app.list_study_bookmarks(None, user).unwrap();
    assert_eq!(bookmarks.len(), 1);
    assert_eq!(bookmarks[0].study_id, study_id);
}
