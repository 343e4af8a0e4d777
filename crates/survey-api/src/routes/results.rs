use axum::extract::{Path, State};
use axum::{Extension, Json};
use uuid::Uuid;

use survey_core::policy;
use survey_core::results::{aggregate, ResultsSummary};
use survey_storage::{responses, surveys};

use crate::error::ApiError;
use crate::middleware::identity::Caller;
use crate::state::AppState;

pub async fn get_results(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Path(survey_id): Path<Uuid>,
) -> Result<Json<ResultsSummary>, ApiError> {
    let caller_id = caller.ok_or(ApiError::Unauthorized)?;

    let survey = surveys::get_survey(&state.s3, &state.bucket, survey_id)
        .await?
        .ok_or(ApiError::NotFound("Survey not found".to_string()))?;

    policy::authorize_results_read(&survey, Some(&caller_id))?;

    let survey_responses = responses::responses_for_survey(&state.s3, &state.bucket, survey_id).await?;
    tracing::info!(
        survey_id = %survey_id,
        response_count = survey_responses.len(),
        "responses retrieved"
    );

    let summary = aggregate(&survey, &survey_responses);

    tracing::info!(survey_id = %survey_id, title = %summary.title, "survey results compiled");
    Ok(Json(summary))
}
