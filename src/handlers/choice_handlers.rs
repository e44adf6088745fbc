use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{instrument, info, warn};

use crate::db::DbPool;
use crate::dto::{CreateChoiceDto, VoteDto, NO_CHOICE_MESSAGE};
use crate::errors::ApiError;
use crate::models::Choice;
use crate::repo::{self, VoteOutcome};

/// Handler for adding a choice to a question
///
/// This function handles POST requests to `/polls/{id}/choices`. Choices can
/// be added before a question is published.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `question_id` - The ID of the question, extracted from the URL path
/// * `payload` - The request payload containing the choice text
///
/// ### Returns
///
/// The newly created choice as JSON
#[instrument(skip(pool, payload), fields(question_id = %question_id))]
pub async fn create_choice_handler(
    State(pool): State<Arc<DbPool>>,
    Path(question_id): Path<String>,
    Json(payload): Json<CreateChoiceDto>,
) -> Result<Json<Choice>, ApiError> {
    if payload.choice_text.trim().is_empty() {
        return Err(ApiError::InvalidInput("choice_text must not be empty".to_string()));
    }

    // Verify that the question exists
    repo::get_question(&pool, &question_id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    let choice = repo::create_choice(&pool, &question_id, payload.choice_text)
        .map_err(ApiError::Database)?;

    info!("Successfully created choice with id: {}", choice.get_id());

    Ok(Json(choice))
}

/// Handler for voting on a question
///
/// This function handles POST requests to `/polls/{id}/vote`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `question_id` - The ID of the question, extracted from the URL path
/// * `payload` - The request payload naming the chosen choice
///
/// ### Returns
///
/// The chosen choice with its updated vote count. A hidden or missing
/// question yields a 404; a missing or foreign choice yields a 400.
#[instrument(skip(pool, payload), fields(question_id = %question_id))]
pub async fn vote_handler(
    State(pool): State<Arc<DbPool>>,
    Path(question_id): Path<String>,
    Json(payload): Json<VoteDto>,
) -> Result<Json<Choice>, ApiError> {
    let now = Utc::now();

    let Some(choice_id) = payload.choice_id else {
        // Without a choice the question still has to be visible for a 400
        repo::get_published_question(&pool, &question_id, now)
            .map_err(ApiError::Database)?
            .ok_or(ApiError::NotFound)?;
        warn!("Vote submitted without a choice");
        return Err(ApiError::InvalidChoice(NO_CHOICE_MESSAGE.to_string()));
    };

    match repo::vote(&pool, &question_id, &choice_id, now).map_err(ApiError::Database)? {
        VoteOutcome::Recorded(choice) => Ok(Json(choice)),
        VoteOutcome::QuestionNotFound => Err(ApiError::NotFound),
        VoteOutcome::InvalidChoice => Err(ApiError::InvalidChoice(NO_CHOICE_MESSAGE.to_string())),
    }
}
