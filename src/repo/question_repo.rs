use crate::db::DbPool;
use crate::models::Question;
use crate::schema::questions;
use crate::visibility::LATEST_QUESTIONS_LIMIT;
use anyhow::Result;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use tracing::{instrument, debug, info};

/// Creates a new question in the database
///
/// The publication date is stored as given, so questions can be scheduled
/// for the future.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `question_text` - The text of the new question
/// * `pub_date` - When the question becomes visible
///
/// ### Returns
///
/// A Result containing the newly created Question if successful
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database insert operation fails
#[instrument(skip(pool, question_text), fields(pub_date = %pub_date))]
pub fn create_question(pool: &DbPool, question_text: String, pub_date: DateTime<Utc>) -> Result<Question> {
    debug!("Creating new question");

    let conn = &mut pool.get()?;

    let new_question = Question::new(question_text, pub_date);

    diesel::insert_into(questions::table)
        .values(&new_question)
        .execute(conn)?;

    info!("Successfully created question with id: {}", new_question.get_id());

    Ok(new_question)
}

/// Retrieves a question by its ID regardless of its publication date
///
/// ### Returns
///
/// A Result containing an Option with the Question if found, or None if not found
#[instrument(skip(pool), fields(question_id = %id))]
pub fn get_question(pool: &DbPool, id: &str) -> Result<Option<Question>> {
    debug!("Retrieving question");

    let conn = &mut pool.get()?;

    let result = questions::table
        .find(id)
        .first::<Question>(conn)
        .optional()?;

    Ok(result)
}

/// Retrieves a question by its ID only if it is published at `now`
///
/// A question that does not exist and one that is not published yet both
/// yield `None`.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `id` - The ID of the question to retrieve
/// * `now` - The current time
///
/// ### Returns
///
/// A Result containing an Option with the Question if it is visible
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database query fails
#[instrument(skip(pool), fields(question_id = %id))]
pub fn get_published_question(pool: &DbPool, id: &str, now: DateTime<Utc>) -> Result<Option<Question>> {
    debug!("Retrieving published question");

    let conn = &mut pool.get()?;

    let result = questions::table
        .filter(questions::id.eq(id))
        .filter(questions::pub_date.le(now.naive_utc()))
        .first::<Question>(conn)
        .optional()?;

    if result.is_some() {
        debug!("Question found");
    } else {
        debug!("Question not found or not yet published");
    }

    Ok(result)
}

/// Retrieves the latest published questions
///
/// Returns at most five questions whose publication date is not after `now`,
/// newest first.
#[instrument(skip(pool))]
pub fn latest_questions(pool: &DbPool, now: DateTime<Utc>) -> Result<Vec<Question>> {
    debug!("Listing latest published questions");

    let conn = &mut pool.get()?;

    let result = questions::table
        .filter(questions::pub_date.le(now.naive_utc()))
        .order(questions::pub_date.desc())
        .limit(LATEST_QUESTIONS_LIMIT as i64)
        .load::<Question>(conn)?;

    info!("Retrieved {} published questions", result.len());

    Ok(result)
}

/// Retrieves every question, including unpublished ones, newest first
#[instrument(skip(pool))]
pub fn list_questions(pool: &DbPool) -> Result<Vec<Question>> {
    debug!("Listing all questions");

    let conn = &mut pool.get()?;

    let result = questions::table
        .order(questions::pub_date.desc())
        .load::<Question>(conn)?;

    info!("Retrieved {} questions", result.len());

    Ok(result)
}

#[cfg(test)]
mod tests;
