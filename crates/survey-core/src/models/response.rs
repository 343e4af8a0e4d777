use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::survey::empty_object;

/// One respondent's full submission for a survey. Stored once at
/// submission time, never updated.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SurveyResponse {
    pub response_id: Uuid,
    pub survey_id: Uuid,
    pub answers: Vec<Answer>,
    /// Absent for anonymous submissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent_id: Option<String>,
    pub submitted_at: jiff::Timestamp,
    /// Opaque client-supplied metadata (source, browser, ...); passed
    /// through untouched.
    #[serde(default = "empty_object")]
    pub metadata: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// One respondent's value for one question. The value is a JSON value —
/// a string for single-valued question types, an array of strings for
/// checkbox-style multi-select.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Answer {
    pub question_id: String,
    pub value: serde_json::Value,
}

/// Request body for `POST /surveys/{surveyId}/responses`.
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResponseSubmission {
    #[serde(default)]
    pub answers: Option<Vec<Answer>>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}
