use crate::db::DbPool;
use crate::models::{Choice, Question};
use crate::schema::{choices, questions};
use anyhow::Result;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use tracing::{instrument, debug, info, warn};

/// Result of trying to record a vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The vote was counted; holds the choice with its new total
    Recorded(Choice),
    /// The question does not exist or is not published yet
    QuestionNotFound,
    /// The choice does not exist or belongs to another question
    InvalidChoice,
}

/// Adds a choice to a question
///
/// The caller is responsible for checking that the question exists.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `question_id` - The ID of the question the choice belongs to
/// * `choice_text` - The text of the choice
///
/// ### Returns
///
/// A Result containing the newly created Choice with zero votes
#[instrument(skip(pool, choice_text), fields(question_id = %question_id))]
pub fn create_choice(pool: &DbPool, question_id: &str, choice_text: String) -> Result<Choice> {
    debug!("Creating new choice");

    let conn = &mut pool.get()?;

    let new_choice = Choice::new(question_id.to_string(), choice_text);

    diesel::insert_into(choices::table)
        .values(&new_choice)
        .execute(conn)?;

    info!("Successfully created choice with id: {}", new_choice.get_id());

    Ok(new_choice)
}

/// Retrieves a choice by its ID
#[instrument(skip(pool), fields(choice_id = %id))]
pub fn get_choice(pool: &DbPool, id: &str) -> Result<Option<Choice>> {
    let conn = &mut pool.get()?;

    let result = choices::table
        .find(id)
        .first::<Choice>(conn)
        .optional()?;

    Ok(result)
}

/// Retrieves all choices of a question, ordered by their text
#[instrument(skip(pool), fields(question_id = %question_id))]
pub fn get_choices_for_question(pool: &DbPool, question_id: &str) -> Result<Vec<Choice>> {
    debug!("Listing choices for question");

    let conn = &mut pool.get()?;

    let result = choices::table
        .filter(choices::question_id.eq(question_id))
        .order(choices::choice_text.asc())
        .load::<Choice>(conn)?;

    Ok(result)
}

/// Records a vote for a choice of a published question
///
/// The question must be visible at `now` and the choice must belong to it.
/// The increment happens inside the database so that concurrent votes are
/// never lost.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `question_id` - The ID of the question being voted on
/// * `choice_id` - The ID of the chosen choice
/// * `now` - The current time
///
/// ### Returns
///
/// A Result containing the outcome of the vote
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database operations fail
#[instrument(skip(pool), fields(question_id = %question_id, choice_id = %choice_id))]
pub fn vote(pool: &DbPool, question_id: &str, choice_id: &str, now: DateTime<Utc>) -> Result<VoteOutcome> {
    debug!("Recording vote");

    let conn = &mut pool.get()?;

    conn.transaction::<_, anyhow::Error, _>(|conn| {
        let question = questions::table
            .filter(questions::id.eq(question_id))
            .filter(questions::pub_date.le(now.naive_utc()))
            .first::<Question>(conn)
            .optional()?;

        if question.is_none() {
            debug!("Question not found or not yet published");
            return Ok(VoteOutcome::QuestionNotFound);
        }

        let updated = diesel::update(
            choices::table
                .filter(choices::id.eq(choice_id))
                .filter(choices::question_id.eq(question_id)),
        )
        .set(choices::votes.eq(choices::votes + 1))
        .execute(conn)?;

        if updated == 0 {
            warn!("Vote for a choice that does not belong to the question");
            return Ok(VoteOutcome::InvalidChoice);
        }

        let choice = choices::table
            .find(choice_id)
            .first::<Choice>(conn)?;

        info!("Choice now has {} votes", choice.get_votes());

        Ok(VoteOutcome::Recorded(choice))
    })
}
