use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{instrument, debug, info};

use crate::db::DbPool;
use crate::dto::{CreateQuestionDto, IndexDto, QuestionDetailDto, QuestionView};
use crate::errors::ApiError;
use crate::repo;

/// Handler for the poll index
///
/// This function handles GET requests to `/polls`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
///
/// ### Returns
///
/// Up to five published questions, newest first, with a "no polls" message
/// when there are none
#[instrument(skip(pool))]
pub async fn index_handler(
    // Extract the database pool from the application state
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<IndexDto>, ApiError> {
    let now = Utc::now();

    let questions = repo::latest_questions(&pool, now)
        .map_err(ApiError::Database)?;

    let views = questions
        .iter()
        .map(|q| QuestionView::new(q, now))
        .collect();

    Ok(Json(IndexDto::new(views)))
}

/// Handler for creating a new question
///
/// This function handles POST requests to `/polls`. Without a `pub_date` the
/// question is published immediately.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `payload` - The request payload containing the question text
///
/// ### Returns
///
/// The newly created question as JSON
#[instrument(skip(pool, payload), fields(question_text = %payload.question_text))]
pub async fn create_question_handler(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<CreateQuestionDto>,
) -> Result<Json<QuestionView>, ApiError> {
    info!("Creating new question");

    if payload.question_text.trim().is_empty() {
        return Err(ApiError::InvalidInput("question_text must not be empty".to_string()));
    }

    let now = Utc::now();
    let pub_date = payload.pub_date.unwrap_or(now);

    let question = repo::create_question(&pool, payload.question_text, pub_date)
        .map_err(ApiError::Database)?;

    info!("Successfully created question with id: {}", question.get_id());

    Ok(Json(QuestionView::new(&question, now)))
}

/// Builds the detail body of a published question, or fails with `NotFound`
fn published_detail(pool: &DbPool, question_id: &str) -> Result<QuestionDetailDto, ApiError> {
    let now = Utc::now();

    let question = repo::get_published_question(pool, question_id, now)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    let choices = repo::get_choices_for_question(pool, question_id)
        .map_err(ApiError::Database)?;

    Ok(QuestionDetailDto {
        question: QuestionView::new(&question, now),
        choices,
    })
}

/// Handler for the detail view of a question
///
/// This function handles GET requests to `/polls/{id}`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `question_id` - The ID of the question, extracted from the URL path
///
/// ### Returns
///
/// The question and its choices, or a 404 if the question does not exist or
/// is not published yet
#[instrument(skip(pool), fields(question_id = %question_id))]
pub async fn detail_handler(
    State(pool): State<Arc<DbPool>>,
    Path(question_id): Path<String>,
) -> Result<Json<QuestionDetailDto>, ApiError> {
    debug!("Retrieving question detail");

    let detail = published_detail(&pool, &question_id)?;

    Ok(Json(detail))
}

/// Handler for the results view of a question
///
/// This function handles GET requests to `/polls/{id}/results`. It hides
/// unpublished questions the same way the detail view does.
#[instrument(skip(pool), fields(question_id = %question_id))]
pub async fn results_handler(
    State(pool): State<Arc<DbPool>>,
    Path(question_id): Path<String>,
) -> Result<Json<QuestionDetailDto>, ApiError> {
    debug!("Retrieving question results");

    let detail = published_detail(&pool, &question_id)?;

    info!("Question has {} votes in total", detail.total_votes());

    Ok(Json(detail))
}

/// Handler for listing every question, published or not
///
/// This function handles GET requests to `/admin/questions`.
#[instrument(skip(pool))]
pub async fn list_all_questions_handler(
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<Vec<QuestionView>>, ApiError> {
    let now = Utc::now();

    let questions = repo::list_questions(&pool)
        .map_err(ApiError::Database)?;

    Ok(Json(questions.iter().map(|q| QuestionView::new(q, now)).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::NO_POLLS_MESSAGE;
    use crate::test_utils::setup_test_db;
    use chrono::Duration;

    #[tokio::test]
    async fn test_index_handler_no_questions() {
        let pool = setup_test_db();

        let result = index_handler(State(pool.clone())).await.unwrap();

        assert!(result.0.latest_question_list.is_empty());
        assert_eq!(result.0.message.as_deref(), Some(NO_POLLS_MESSAGE));
    }

    #[tokio::test]
    async fn test_index_handler_flags_recent_questions() {
        let pool = setup_test_db();
        let now = Utc::now();
        repo::create_question(&pool, "Recent".to_string(), now - Duration::hours(2)).unwrap();
        repo::create_question(&pool, "Old".to_string(), now - Duration::days(2)).unwrap();

        let result = index_handler(State(pool.clone())).await.unwrap();

        let list = result.0.latest_question_list;
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].question_text, "Recent");
        assert!(list[0].was_published_recently);
        assert!(!list[1].was_published_recently);
    }

    #[tokio::test]
    async fn test_create_question_handler_defaults_pub_date() {
        let pool = setup_test_db();
        let before = Utc::now();

        let payload = CreateQuestionDto {
            question_text: "What's new?".to_string(),
            pub_date: None,
        };
        let result = create_question_handler(State(pool.clone()), Json(payload)).await.unwrap();

        let view = result.0;
        assert_eq!(view.question_text, "What's new?");
        assert!(view.pub_date >= before);
        assert!(view.was_published_recently);
        assert!(repo::get_question(&pool, &view.id).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_question_handler_rejects_blank_text() {
        let pool = setup_test_db();

        let payload = CreateQuestionDto {
            question_text: "   ".to_string(),
            pub_date: None,
        };
        let result = create_question_handler(State(pool.clone()), Json(payload)).await;

        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_detail_handler_future_question() {
        let pool = setup_test_db();
        let future = repo::create_question(&pool, "Future question.".to_string(), Utc::now() + Duration::days(5)).unwrap();

        let result = detail_handler(State(pool.clone()), Path(future.get_id())).await;

        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_detail_handler_past_question() {
        let pool = setup_test_db();
        let past = repo::create_question(&pool, "Past Question.".to_string(), Utc::now() - Duration::days(5)).unwrap();
        repo::create_choice(&pool, &past.get_id(), "Yes".to_string()).unwrap();

        let result = detail_handler(State(pool.clone()), Path(past.get_id())).await.unwrap();

        assert_eq!(result.0.question.question_text, "Past Question.");
        assert_eq!(result.0.choices.len(), 1);
    }

    #[tokio::test]
    async fn test_results_handler_future_question() {
        let pool = setup_test_db();
        let future = repo::create_question(&pool, "Future question.".to_string(), Utc::now() + Duration::days(5)).unwrap();

        let result = results_handler(State(pool.clone()), Path(future.get_id())).await;

        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_all_questions_handler_includes_future() {
        let pool = setup_test_db();
        let now = Utc::now();
        repo::create_question(&pool, "Past".to_string(), now - Duration::days(1)).unwrap();
        repo::create_question(&pool, "Future".to_string(), now + Duration::days(1)).unwrap();

        let result = list_all_questions_handler(State(pool.clone())).await.unwrap();

        let texts: Vec<String> = result.0.into_iter().map(|q| q.question_text).collect();
        assert_eq!(texts, vec!["Future", "Past"]);
    }
}
