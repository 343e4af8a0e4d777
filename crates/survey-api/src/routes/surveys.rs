use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use uuid::Uuid;

use survey_core::models::survey::{Survey, SurveyUpsert};
use survey_core::policy;
use survey_storage::surveys;

use crate::error::ApiError;
use crate::middleware::identity::Caller;
use crate::state::AppState;

pub async fn create_survey(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Json(upsert): Json<SurveyUpsert>,
) -> Result<(StatusCode, Json<Survey>), ApiError> {
    let owner_id = caller.ok_or(ApiError::Unauthorized)?;
    policy::validate_survey_upsert(&upsert)?;

    let now = jiff::Timestamp::now();
    let survey = Survey {
        survey_id: Uuid::new_v4(),
        title: upsert.title.unwrap_or_default(),
        description: upsert.description.unwrap_or_default(),
        questions: upsert.questions.unwrap_or_default(),
        owner_id,
        created_at: now,
        updated_at: now,
        is_active: upsert.is_active.unwrap_or(true),
        is_public: upsert.is_public.unwrap_or(false),
        response_count: 0,
        settings: upsert.settings.unwrap_or_else(empty_settings),
    };

    surveys::put_survey(&state.s3, &state.bucket, &survey)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to create survey");
            ApiError::Persistence("Failed to create survey".to_string())
        })?;

    tracing::info!(survey_id = %survey.survey_id, title = %survey.title, "survey created");
    Ok((StatusCode::CREATED, Json(survey)))
}

pub async fn update_survey(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Path(survey_id): Path<Uuid>,
    Json(upsert): Json<SurveyUpsert>,
) -> Result<Json<Survey>, ApiError> {
    let caller_id = caller.ok_or(ApiError::Unauthorized)?;
    policy::validate_survey_upsert(&upsert)?;

    let existing = surveys::get_survey(&state.s3, &state.bucket, survey_id).await?;
    policy::authorize_survey_update(existing.as_ref(), &caller_id)?;
    let existing = existing.ok_or(ApiError::NotFound("Survey not found".to_string()))?;

    // surveyId, ownerId, createdAt and responseCount are immutable.
    let survey = Survey {
        survey_id: existing.survey_id,
        title: upsert.title.unwrap_or_default(),
        description: upsert.description.unwrap_or_default(),
        questions: upsert.questions.unwrap_or_default(),
        owner_id: existing.owner_id,
        created_at: existing.created_at,
        updated_at: jiff::Timestamp::now(),
        is_active: upsert.is_active.unwrap_or(true),
        is_public: upsert.is_public.unwrap_or(false),
        response_count: existing.response_count,
        settings: upsert.settings.unwrap_or_else(empty_settings),
    };

    surveys::put_survey(&state.s3, &state.bucket, &survey)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, survey_id = %survey_id, "failed to update survey");
            ApiError::Persistence("Failed to update survey".to_string())
        })?;

    tracing::info!(survey_id = %survey.survey_id, "survey updated");
    Ok(Json(survey))
}

pub async fn list_surveys(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
) -> Result<Json<Vec<Survey>>, ApiError> {
    let all = surveys::list_surveys(&state.s3, &state.bucket).await?;
    let visible = policy::filter_accessible_surveys(all, caller.as_deref());
    Ok(Json(visible))
}

pub async fn get_survey(
    State(state): State<AppState>,
    Extension(Caller(caller)): Extension<Caller>,
    Path(survey_id): Path<Uuid>,
) -> Result<Json<Survey>, ApiError> {
    let survey = surveys::get_survey(&state.s3, &state.bucket, survey_id)
        .await?
        .ok_or(ApiError::NotFound("Survey not found".to_string()))?;

    policy::authorize_survey_read(&survey, caller.as_deref())?;
    Ok(Json(survey))
}

fn empty_settings() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
