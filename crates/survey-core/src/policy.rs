//! Validation and access-control decisions.
//!
//! Every rule here is a pure predicate over already-loaded data: no I/O, no
//! clock, no logging. The route handlers load entities and translate a
//! [`PolicyError`] into a status code; keeping the rules pure keeps the one
//! place where an authorization bug would leak private data independently
//! unit-testable.

use thiserror::Error;

use crate::models::response::Answer;
use crate::models::survey::{Survey, SurveyUpsert};

/// A rejected operation. `Display` strings are the caller-visible messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Survey not found")]
    SurveyNotFound,

    #[error("You do not have permission to update this survey")]
    UpdateForbidden,

    #[error("Access denied")]
    ReadForbidden,

    #[error("You do not have permission to view these results")]
    ResultsForbidden,

    #[error("This survey is no longer active")]
    SurveyInactive,

    /// Required questions with no matching answer, in survey question order.
    #[error("Some required questions are not answered")]
    MissingAnswers(Vec<String>),
}

/// A survey create/update body must carry a non-empty title and at least one
/// question. Individual question shape is not inspected here: question-id
/// uniqueness and choice presence for choice-style types are deliberately
/// unchecked, matching the API's historically lax contract.
pub fn validate_survey_upsert(upsert: &SurveyUpsert) -> Result<(), PolicyError> {
    let has_title = upsert.title.as_deref().is_some_and(|t| !t.is_empty());
    let has_questions = upsert.questions.as_deref().is_some_and(|q| !q.is_empty());

    if has_title && has_questions {
        Ok(())
    } else {
        Err(PolicyError::MissingFields)
    }
}

/// Only the owner may mutate a survey.
pub fn authorize_survey_update(
    existing: Option<&Survey>,
    caller_id: &str,
) -> Result<(), PolicyError> {
    let survey = existing.ok_or(PolicyError::SurveyNotFound)?;
    if survey.owner_id == caller_id {
        Ok(())
    } else {
        Err(PolicyError::UpdateForbidden)
    }
}

/// A survey is readable when it is public or the caller owns it.
pub fn authorize_survey_read(survey: &Survey, caller_id: Option<&str>) -> Result<(), PolicyError> {
    if is_visible_to(survey, caller_id) {
        Ok(())
    } else {
        Err(PolicyError::ReadForbidden)
    }
}

/// Same predicate as [`authorize_survey_read`]; distinct variant because the
/// caller-visible message differs at the results endpoint.
pub fn authorize_results_read(survey: &Survey, caller_id: Option<&str>) -> Result<(), PolicyError> {
    if is_visible_to(survey, caller_id) {
        Ok(())
    } else {
        Err(PolicyError::ResultsForbidden)
    }
}

/// A submission is accepted only while the survey is active and once every
/// required question has a matching answer. The missing ids are reported in
/// the order the required questions appear in the survey.
pub fn validate_response_submission(
    survey: &Survey,
    answers: &[Answer],
) -> Result<(), PolicyError> {
    if !survey.is_active {
        return Err(PolicyError::SurveyInactive);
    }

    let missing: Vec<String> = survey
        .questions
        .iter()
        .filter(|q| q.required)
        .filter(|q| !answers.iter().any(|a| a.question_id == q.id))
        .map(|q| q.id.clone())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PolicyError::MissingAnswers(missing))
    }
}

/// Order-preserving subsequence of surveys visible to the caller.
pub fn filter_accessible_surveys(surveys: Vec<Survey>, caller_id: Option<&str>) -> Vec<Survey> {
    surveys
        .into_iter()
        .filter(|s| is_visible_to(s, caller_id))
        .collect()
}

fn is_visible_to(survey: &Survey, caller_id: Option<&str>) -> bool {
    survey.is_public || caller_id.is_some_and(|id| survey.owner_id == id)
}
