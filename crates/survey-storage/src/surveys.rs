//! The survey store: one JSON object per survey under `surveys/`.

use aws_sdk_s3::Client;
use uuid::Uuid;

use survey_core::keys;
use survey_core::models::survey::Survey;

use crate::error::StorageError;
use crate::objects;

/// How many load/conditional-put cycles [`increment_response_count`] runs
/// before giving up. Each lost race reloads the latest object, so an attempt
/// only fails when another writer got in between.
const INCREMENT_ATTEMPTS: u32 = 4;

/// Fetch a survey by id. `None` when no such survey exists.
pub async fn get_survey(
    client: &Client,
    bucket: &str,
    survey_id: Uuid,
) -> Result<Option<Survey>, StorageError> {
    let key = keys::survey(survey_id);
    match objects::get_object(client, bucket, &key).await {
        Ok(output) => {
            let survey: Survey = serde_json::from_slice(&output.body)?;
            Ok(Some(survey))
        }
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Persist a survey (create or full update).
pub async fn put_survey(
    client: &Client,
    bucket: &str,
    survey: &Survey,
) -> Result<(), StorageError> {
    let key = keys::survey(survey.survey_id);
    let body = serde_json::to_vec(survey)?;
    objects::put_object(client, bucket, &key, body, Some("application/json")).await?;
    Ok(())
}

/// Scan all stored surveys, in key order. Visibility filtering is the
/// caller's job.
pub async fn list_surveys(client: &Client, bucket: &str) -> Result<Vec<Survey>, StorageError> {
    let survey_keys = objects::list_objects(client, bucket, keys::SURVEYS_PREFIX).await?;

    let mut surveys = Vec::with_capacity(survey_keys.len());
    for key in &survey_keys {
        let output = objects::get_object(client, bucket, key).await?;
        let survey: Survey = serde_json::from_slice(&output.body)?;
        surveys.push(survey);
    }

    Ok(surveys)
}

/// Delete a survey object. Not reachable from any route handler; kept for
/// operational tooling.
pub async fn delete_survey(
    client: &Client,
    bucket: &str,
    survey_id: Uuid,
) -> Result<(), StorageError> {
    let key = keys::survey(survey_id);
    objects::delete_object(client, bucket, &key).await
}

/// Atomically add one to a survey's response count, refreshing `updatedAt`.
///
/// S3 has no server-side add, so the primitive is a load/conditional-put
/// cycle keyed on the object's ETag: a concurrent writer invalidates the
/// ETag, the put fails with a precondition error, and the cycle reruns
/// against the fresh object. Increments are therefore never lost, only
/// retried, up to [`INCREMENT_ATTEMPTS`] times. Returns the updated survey.
pub async fn increment_response_count(
    client: &Client,
    bucket: &str,
    survey_id: Uuid,
) -> Result<Survey, StorageError> {
    let key = keys::survey(survey_id);

    for attempt in 1..=INCREMENT_ATTEMPTS {
        let output = objects::get_object(client, bucket, &key).await?;
        let etag = output.etag.unwrap_or_default();

        let mut survey: Survey = serde_json::from_slice(&output.body)?;
        survey.response_count += 1;
        survey.updated_at = jiff::Timestamp::now();

        let body = serde_json::to_vec(&survey)?;
        match objects::put_object_if_match(
            client,
            bucket,
            &key,
            body,
            Some("application/json"),
            &etag,
        )
        .await
        {
            Ok(_) => return Ok(survey),
            Err(StorageError::PreconditionFailed { .. }) => {
                tracing::debug!(%survey_id, attempt, "response count CAS lost, retrying");
            }
            Err(e) => return Err(e),
        }
    }

    Err(StorageError::PreconditionFailed { key })
}
