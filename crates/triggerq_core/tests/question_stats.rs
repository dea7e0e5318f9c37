use triggerq_core::db::open_db_in_memory;
use triggerq_core::{QuestionRepository, SourceShorthand, SqliteQuestionRepository};

#[test]
fn stats_on_empty_catalog_are_all_zero() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestionRepository::try_new(&mut conn).unwrap();

    let stats = repo.stats().unwrap();
    assert_eq!(stats.total_questions, 0);
    assert_eq!(stats.active_questions, 0);
    assert_eq!(stats.inactive_questions, 0);
    assert_eq!(stats.total_groups, 0);
    assert!(stats.questions_by_source.is_empty());
    assert!(stats.questions_by_group.is_empty());
}

#[test]
fn stats_count_totals_sources_and_groups() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteQuestionRepository::try_new(&mut conn).unwrap();

    repo.create_question("a1", "Alpha", SourceShorthand::A, None)
        .unwrap();
    repo.create_question("a2", "Alpha", SourceShorthand::A, None)
        .unwrap();
    repo.create_question("k1", "Beta", SourceShorthand::K, None)
        .unwrap();
    let deactivated = repo
        .create_question("e1", "Gamma", SourceShorthand::E, None)
        .unwrap();
    repo.set_active(deactivated, false, Some("admin"), None)
        .unwrap()
        .unwrap();

    let stats = repo.stats().unwrap();
    assert_eq!(stats.total_questions, 4);
    assert_eq!(stats.active_questions, 3);
    assert_eq!(stats.inactive_questions, 1);
    assert_eq!(
        stats.inactive_questions,
        stats.total_questions - stats.active_questions
    );

    // Only active questions are counted per source and per group.
    assert_eq!(stats.questions_by_source.get("A"), Some(&2));
    assert_eq!(stats.questions_by_source.get("K"), Some(&1));
    assert_eq!(stats.questions_by_source.get("E"), None);

    assert_eq!(stats.questions_by_group.get("Alpha"), Some(&2));
    assert_eq!(stats.questions_by_group.get("Beta"), Some(&1));
    assert_eq!(stats.questions_by_group.get("Gamma"), None);
    assert_eq!(stats.total_groups, 2);
}

#[test]
fn stats_track_versioned_mutations_without_double_counting() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteQuestionRepository::try_new(&mut conn).unwrap();

    let id = repo
        .create_question("q", "G", SourceShorthand::A, None)
        .unwrap();
    repo.set_active(id, false, Some("admin"), None)
        .unwrap()
        .unwrap();
    repo.set_active(id, true, Some("admin"), None)
        .unwrap()
        .unwrap();

    let stats = repo.stats().unwrap();
    assert_eq!(stats.total_questions, 1);
    assert_eq!(stats.active_questions, 1);
    assert_eq!(stats.inactive_questions, 0);
}

#[test]
fn stats_serialize_with_stable_field_names() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestionRepository::try_new(&mut conn).unwrap();

    repo.create_question("q", "G", SourceShorthand::K, None)
        .unwrap();

    let stats = repo.stats().unwrap();
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["total_questions"], 1);
    assert_eq!(json["active_questions"], 1);
    assert_eq!(json["inactive_questions"], 0);
    assert_eq!(json["total_groups"], 1);
    assert_eq!(json["questions_by_source"]["K"], 1);
    assert_eq!(json["questions_by_group"]["G"], 1);
}
