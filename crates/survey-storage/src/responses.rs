//! The response store: one JSON object per response under
//! `responses/{surveyId}/`, so the key prefix doubles as the
//! query-by-survey index.

use aws_sdk_s3::Client;
use uuid::Uuid;

use survey_core::keys;
use survey_core::models::response::SurveyResponse;

use crate::error::StorageError;
use crate::objects;

/// Persist a newly submitted response.
pub async fn create_response(
    client: &Client,
    bucket: &str,
    response: &SurveyResponse,
) -> Result<(), StorageError> {
    let key = keys::response(response.survey_id, response.response_id);
    let body = serde_json::to_vec(response)?;
    objects::put_object(client, bucket, &key, body, Some("application/json")).await?;
    Ok(())
}

/// All responses for one survey, in store (key) order. No ordering beyond
/// that is guaranteed; two concurrent submissions land in whatever order
/// their ids sort.
pub async fn responses_for_survey(
    client: &Client,
    bucket: &str,
    survey_id: Uuid,
) -> Result<Vec<SurveyResponse>, StorageError> {
    let prefix = keys::responses_prefix(survey_id);
    let response_keys = objects::list_objects(client, bucket, &prefix).await?;

    let mut responses = Vec::with_capacity(response_keys.len());
    for key in &response_keys {
        let output = objects::get_object(client, bucket, key).await?;
        let response: SurveyResponse = serde_json::from_slice(&output.body)?;
        responses.push(response);
    }

    Ok(responses)
}
