use serde_json::json;
use uuid::Uuid;

use survey_core::models::response::{Answer, SurveyResponse};
use survey_core::models::survey::{Question, QuestionType, Survey};
use survey_core::results::aggregate;

fn question(id: &str, question_type: QuestionType) -> Question {
    Question {
        id: id.to_string(),
        text: format!("Question {id}"),
        question_type,
        required: false,
        choices: None,
        settings: None,
    }
}

fn survey(questions: Vec<Question>) -> Survey {
    Survey {
        survey_id: Uuid::new_v4(),
        title: "Lunch preferences".to_string(),
        description: String::new(),
        questions,
        owner_id: "u1".to_string(),
        created_at: jiff::Timestamp::UNIX_EPOCH,
        updated_at: jiff::Timestamp::UNIX_EPOCH,
        is_active: true,
        is_public: true,
        response_count: 0,
        settings: json!({}),
    }
}

fn response(survey_id: Uuid, answers: Vec<(&str, serde_json::Value)>) -> SurveyResponse {
    SurveyResponse {
        response_id: Uuid::new_v4(),
        survey_id,
        answers: answers
            .into_iter()
            .map(|(question_id, value)| Answer {
                question_id: question_id.to_string(),
                value,
            })
            .collect(),
        respondent_id: None,
        submitted_at: jiff::Timestamp::UNIX_EPOCH,
        metadata: json!({}),
        ip_address: None,
        user_agent: None,
    }
}

#[test]
fn zero_responses_yields_empty_value_lists() {
    let s = survey(vec![
        question("q1", QuestionType::Text),
        question("q2", QuestionType::Rating),
    ]);

    let summary = aggregate(&s, &[]);

    assert_eq!(summary.survey_id, s.survey_id);
    assert_eq!(summary.title, "Lunch preferences");
    assert_eq!(summary.response_count, 0);
    assert_eq!(summary.questions.len(), 2);
    assert!(summary.questions.iter().all(|q| q.responses.is_empty()));
}

#[test]
fn values_grouped_per_question_in_survey_order() {
    let s = survey(vec![
        question("q1", QuestionType::Text),
        question("q2", QuestionType::MultipleChoice),
    ]);

    let responses = vec![
        response(s.survey_id, vec![("q1", json!("soup")), ("q2", json!("a"))]),
        response(s.survey_id, vec![("q2", json!("b")), ("q1", json!("salad"))]),
    ];

    let summary = aggregate(&s, &responses);

    assert_eq!(summary.response_count, 2);
    assert_eq!(summary.questions[0].id, "q1");
    assert_eq!(summary.questions[0].responses, vec![json!("soup"), json!("salad")]);
    assert_eq!(summary.questions[1].id, "q2");
    assert_eq!(summary.questions[1].responses, vec![json!("a"), json!("b")]);
}

#[test]
fn skipped_questions_contribute_no_placeholder() {
    let s = survey(vec![
        question("q1", QuestionType::Text),
        question("q2", QuestionType::Text),
    ]);

    let responses = vec![
        // q2 not answered at all
        response(s.survey_id, vec![("q1", json!("first"))]),
        // q2 answered with null, q1 with an empty string
        response(s.survey_id, vec![("q1", json!("")), ("q2", json!(null))]),
        response(s.survey_id, vec![("q1", json!("third")), ("q2", json!("ok"))]),
    ];

    let summary = aggregate(&s, &responses);

    assert_eq!(summary.response_count, 3);
    assert_eq!(summary.questions[0].responses, vec![json!("first"), json!("third")]);
    assert_eq!(summary.questions[1].responses, vec![json!("ok")]);
}

#[test]
fn multi_select_array_values_pass_through_even_when_empty() {
    let s = survey(vec![question("q1", QuestionType::Checkbox)]);

    let responses = vec![
        response(s.survey_id, vec![("q1", json!(["a", "b"]))]),
        response(s.survey_id, vec![("q1", json!([]))]),
    ];

    let summary = aggregate(&s, &responses);
    assert_eq!(
        summary.questions[0].responses,
        vec![json!(["a", "b"]), json!([])]
    );
}

#[test]
fn only_first_answer_per_question_is_counted() {
    let s = survey(vec![question("q1", QuestionType::Text)]);

    let responses = vec![response(
        s.survey_id,
        vec![("q1", json!("first")), ("q1", json!("duplicate"))],
    )];

    let summary = aggregate(&s, &responses);
    assert_eq!(summary.questions[0].responses, vec![json!("first")]);
}

#[test]
fn answers_to_unknown_questions_are_ignored() {
    let s = survey(vec![question("q1", QuestionType::Text)]);

    let responses = vec![response(
        s.survey_id,
        vec![("q1", json!("kept")), ("zz", json!("dropped"))],
    )];

    let summary = aggregate(&s, &responses);
    assert_eq!(summary.questions.len(), 1);
    assert_eq!(summary.questions[0].responses, vec![json!("kept")]);
}

#[test]
fn aggregation_is_idempotent() {
    let s = survey(vec![
        question("q1", QuestionType::Text),
        question("q2", QuestionType::Rating),
    ]);
    let responses = vec![
        response(s.survey_id, vec![("q1", json!("x")), ("q2", json!("5"))]),
        response(s.survey_id, vec![("q1", json!("y"))]),
    ];

    assert_eq!(aggregate(&s, &responses), aggregate(&s, &responses));
}

#[test]
fn summary_serializes_with_wire_field_names() {
    let s = survey(vec![question("q1", QuestionType::Rating)]);
    let summary = aggregate(&s, &[]);

    let value = serde_json::to_value(&summary).unwrap();
    assert!(value.get("surveyId").is_some());
    assert_eq!(value["responseCount"], json!(0));
    assert_eq!(value["questions"][0]["type"], json!("rating"));
    assert_eq!(value["questions"][0]["responses"], json!([]));
}
