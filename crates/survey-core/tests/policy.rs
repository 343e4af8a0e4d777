use serde_json::json;
use uuid::Uuid;

use survey_core::models::response::Answer;
use survey_core::models::survey::{Question, QuestionType, Survey, SurveyUpsert};
use survey_core::policy::{
    authorize_results_read, authorize_survey_read, authorize_survey_update,
    filter_accessible_surveys, validate_response_submission, validate_survey_upsert, PolicyError,
};

fn question(id: &str, required: bool) -> Question {
    Question {
        id: id.to_string(),
        text: format!("Question {id}"),
        question_type: QuestionType::Text,
        required,
        choices: None,
        settings: None,
    }
}

fn survey(owner: &str, is_public: bool, questions: Vec<Question>) -> Survey {
    Survey {
        survey_id: Uuid::new_v4(),
        title: "Customer feedback".to_string(),
        description: String::new(),
        questions,
        owner_id: owner.to_string(),
        created_at: jiff::Timestamp::UNIX_EPOCH,
        updated_at: jiff::Timestamp::UNIX_EPOCH,
        is_active: true,
        is_public,
        response_count: 0,
        settings: json!({}),
    }
}

fn upsert(title: Option<&str>, questions: Option<Vec<Question>>) -> SurveyUpsert {
    SurveyUpsert {
        title: title.map(str::to_string),
        description: None,
        questions,
        is_active: None,
        is_public: None,
        settings: None,
    }
}

fn answer(question_id: &str) -> Answer {
    Answer {
        question_id: question_id.to_string(),
        value: json!("yes"),
    }
}

#[test]
fn upsert_with_title_and_questions_is_valid() {
    let input = upsert(Some("T"), Some(vec![question("q1", true)]));
    assert_eq!(validate_survey_upsert(&input), Ok(()));
}

#[test]
fn upsert_missing_title_is_rejected() {
    let input = upsert(None, Some(vec![question("q1", false)]));
    assert_eq!(validate_survey_upsert(&input), Err(PolicyError::MissingFields));
}

#[test]
fn upsert_empty_title_is_rejected() {
    let input = upsert(Some(""), Some(vec![question("q1", false)]));
    assert_eq!(validate_survey_upsert(&input), Err(PolicyError::MissingFields));
}

#[test]
fn upsert_missing_questions_is_rejected() {
    let input = upsert(Some("T"), None);
    assert_eq!(validate_survey_upsert(&input), Err(PolicyError::MissingFields));
}

#[test]
fn upsert_empty_questions_is_rejected() {
    let input = upsert(Some("T"), Some(vec![]));
    assert_eq!(validate_survey_upsert(&input), Err(PolicyError::MissingFields));
}

#[test]
fn update_of_missing_survey_is_not_found() {
    assert_eq!(
        authorize_survey_update(None, "u1"),
        Err(PolicyError::SurveyNotFound)
    );
}

#[test]
fn owner_may_update() {
    let s = survey("u1", false, vec![]);
    assert_eq!(authorize_survey_update(Some(&s), "u1"), Ok(()));
}

#[test]
fn non_owner_may_not_update_even_public_surveys() {
    let s = survey("u1", true, vec![]);
    assert_eq!(
        authorize_survey_update(Some(&s), "u2"),
        Err(PolicyError::UpdateForbidden)
    );
}

#[test]
fn read_allowed_iff_public_or_owner() {
    let private = survey("u1", false, vec![]);
    let public = survey("u1", true, vec![]);

    assert_eq!(authorize_survey_read(&private, Some("u1")), Ok(()));
    assert_eq!(
        authorize_survey_read(&private, Some("u2")),
        Err(PolicyError::ReadForbidden)
    );
    assert_eq!(
        authorize_survey_read(&private, None),
        Err(PolicyError::ReadForbidden)
    );
    assert_eq!(authorize_survey_read(&public, Some("u2")), Ok(()));
    assert_eq!(authorize_survey_read(&public, None), Ok(()));
}

#[test]
fn results_read_uses_the_same_predicate_as_survey_read() {
    let private = survey("u1", false, vec![]);
    let public = survey("u1", true, vec![]);

    for caller in [Some("u1"), Some("u2"), None] {
        assert_eq!(
            authorize_survey_read(&private, caller).is_ok(),
            authorize_results_read(&private, caller).is_ok()
        );
        assert_eq!(
            authorize_survey_read(&public, caller).is_ok(),
            authorize_results_read(&public, caller).is_ok()
        );
    }

    assert_eq!(
        authorize_results_read(&private, Some("u2")),
        Err(PolicyError::ResultsForbidden)
    );
}

#[test]
fn inactive_survey_rejects_submissions_regardless_of_completeness() {
    let mut s = survey("u1", true, vec![question("q1", true)]);
    s.is_active = false;

    assert_eq!(
        validate_response_submission(&s, &[answer("q1")]),
        Err(PolicyError::SurveyInactive)
    );
    assert_eq!(
        validate_response_submission(&s, &[]),
        Err(PolicyError::SurveyInactive)
    );
}

#[test]
fn missing_required_answers_reported_in_survey_question_order() {
    let s = survey(
        "u1",
        true,
        vec![
            question("q1", true),
            question("q2", false),
            question("q3", true),
            question("q4", true),
        ],
    );

    let result = validate_response_submission(&s, &[answer("q3")]);
    assert_eq!(
        result,
        Err(PolicyError::MissingAnswers(vec![
            "q1".to_string(),
            "q4".to_string(),
        ]))
    );
}

#[test]
fn optional_questions_may_be_skipped() {
    let s = survey("u1", true, vec![question("q1", true), question("q2", false)]);
    assert_eq!(validate_response_submission(&s, &[answer("q1")]), Ok(()));
}

#[test]
fn submission_with_all_required_answered_is_accepted() {
    let s = survey("u1", true, vec![question("q1", true), question("q2", true)]);
    assert_eq!(
        validate_response_submission(&s, &[answer("q2"), answer("q1")]),
        Ok(())
    );
}

#[test]
fn accessible_filter_preserves_order_without_duplication() {
    let a = survey("u1", false, vec![]); // owned by caller
    let b = survey("u2", true, vec![]); // public
    let c = survey("u2", false, vec![]); // invisible
    let d = survey("u1", true, vec![]); // owned and public

    let ids: Vec<Uuid> = [&a, &b, &c, &d].iter().map(|s| s.survey_id).collect();
    let filtered = filter_accessible_surveys(vec![a, b, c, d], Some("u1"));

    let filtered_ids: Vec<Uuid> = filtered.iter().map(|s| s.survey_id).collect();
    assert_eq!(filtered_ids, vec![ids[0], ids[1], ids[3]]);
}

#[test]
fn anonymous_callers_see_only_public_surveys() {
    let a = survey("u1", false, vec![]);
    let b = survey("u1", true, vec![]);
    let public_id = b.survey_id;

    let filtered = filter_accessible_surveys(vec![a, b], None);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].survey_id, public_id);
}

#[test]
fn policy_errors_carry_the_caller_visible_messages() {
    assert_eq!(PolicyError::MissingFields.to_string(), "Missing required fields");
    assert_eq!(PolicyError::SurveyNotFound.to_string(), "Survey not found");
    assert_eq!(
        PolicyError::UpdateForbidden.to_string(),
        "You do not have permission to update this survey"
    );
    assert_eq!(PolicyError::ReadForbidden.to_string(), "Access denied");
    assert_eq!(
        PolicyError::ResultsForbidden.to_string(),
        "You do not have permission to view these results"
    );
    assert_eq!(
        PolicyError::SurveyInactive.to_string(),
        "This survey is no longer active"
    );
    assert_eq!(
        PolicyError::MissingAnswers(vec!["q1".to_string()]).to_string(),
        "Some required questions are not answered"
    );
}
