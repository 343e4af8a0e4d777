//! Per-question aggregation of submitted answer values.

use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::models::response::SurveyResponse;
use crate::models::survey::{QuestionType, Survey};

/// Aggregated results for one survey.
///
/// `response_count` is the number of responses actually fetched, not the
/// survey's stored counter — the two may transiently disagree because the
/// counter is maintained by a separate, non-transactional increment.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResultsSummary {
    pub survey_id: Uuid,
    pub title: String,
    pub response_count: usize,
    pub questions: Vec<QuestionResults>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuestionResults {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Submitted values, one per response that answered this question, in
    /// the order the responses were provided. Skipped questions contribute
    /// nothing — no placeholder.
    pub responses: Vec<serde_json::Value>,
}

/// Join the survey's questions against all of its responses.
///
/// Questions keep survey order; within a question, values keep the order the
/// responses were provided by the store. Only the first answer per question
/// within a response is considered; null and empty-string values count as
/// skipped. Pure function of its inputs.
pub fn aggregate(survey: &Survey, responses: &[SurveyResponse]) -> ResultsSummary {
    let questions = survey
        .questions
        .iter()
        .map(|q| {
            let values: Vec<serde_json::Value> = responses
                .iter()
                .filter_map(|r| r.answers.iter().find(|a| a.question_id == q.id))
                .filter(|a| !is_skipped(&a.value))
                .map(|a| a.value.clone())
                .collect();

            QuestionResults {
                id: q.id.clone(),
                text: q.text.clone(),
                question_type: q.question_type,
                responses: values,
            }
        })
        .collect();

    ResultsSummary {
        survey_id: survey.survey_id,
        title: survey.title.clone(),
        response_count: responses.len(),
        questions,
    }
}

/// A null or empty-string value means the respondent skipped the question.
/// An empty array is kept: it is a deliberate empty multi-select.
fn is_skipped(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.is_empty(),
        _ => false,
    }
}
