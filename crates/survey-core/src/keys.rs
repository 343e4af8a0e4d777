//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the survey bucket. Responses are keyed under their
//! survey's prefix, so listing `responses_prefix(survey_id)` is the
//! query-by-survey secondary index.

use uuid::Uuid;

pub const SURVEYS_PREFIX: &str = "surveys/";

pub fn survey(id: Uuid) -> String {
    format!("surveys/{id}.json")
}

pub fn responses_prefix(survey_id: Uuid) -> String {
    format!("responses/{survey_id}/")
}

pub fn response(survey_id: Uuid, response_id: Uuid) -> String {
    format!("responses/{survey_id}/{response_id}.json")
}
