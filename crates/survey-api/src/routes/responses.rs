use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use survey_core::models::response::{ResponseSubmission, SurveyResponse};
use survey_core::policy;
use survey_storage::{responses, surveys};

use crate::error::ApiError;
use crate::middleware::identity::Caller;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub message: String,
    pub response_id: Uuid,
}

pub async fn submit_response(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Path(survey_id): Path<Uuid>,
    headers: HeaderMap,
    Json(submission): Json<ResponseSubmission>,
) -> Result<(StatusCode, Json<SubmissionReceipt>), ApiError> {
    let answers = match submission.answers {
        Some(answers) if !answers.is_empty() => answers,
        _ => return Err(ApiError::BadRequest("Survey answers are required".to_string())),
    };

    let survey = surveys::get_survey(&state.s3, &state.bucket, survey_id)
        .await?
        .ok_or(ApiError::NotFound("Survey not found".to_string()))?;

    policy::validate_response_submission(&survey, &answers)?;

    let response = SurveyResponse {
        response_id: Uuid::new_v4(),
        survey_id,
        answers,
        respondent_id: caller,
        submitted_at: jiff::Timestamp::now(),
        metadata: submission
            .metadata
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new())),
        ip_address: header_value(&headers, "x-forwarded-for")
            .map(|v| v.split(',').next().unwrap_or(v).trim().to_string()),
        user_agent: header_value(&headers, "user-agent").map(str::to_string),
    };

    responses::create_response(&state.s3, &state.bucket, &response)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, survey_id = %survey_id, "failed to save response");
            ApiError::Persistence("Failed to save response".to_string())
        })?;

    // The response is durable at this point. The counter bump is a separate,
    // non-transactional write; a failure here is logged and swallowed, never
    // surfaced to the respondent.
    match surveys::increment_response_count(&state.s3, &state.bucket, survey_id).await {
        Ok(updated) => {
            tracing::debug!(
                survey_id = %survey_id,
                response_count = updated.response_count,
                "response count updated"
            );
        }
        Err(e) => {
            tracing::warn!(error = %e, survey_id = %survey_id, "failed to update survey response count");
        }
    }

    tracing::info!(survey_id = %survey_id, response_id = %response.response_id, "response submitted");
    Ok((
        StatusCode::CREATED,
        Json(SubmissionReceipt {
            message: "Survey response submitted successfully".to_string(),
            response_id: response.response_id,
        }),
    ))
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
