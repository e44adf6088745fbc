use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an answer option of a question
///
/// This struct maps directly to the `choices` table in the database.
/// The vote count starts at zero and is only changed by the repository's
/// atomic increment.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::choices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Choice {
    /// Unique identifier for the choice (UUID v4 as string)
    id: String,

    /// The question this choice belongs to
    question_id: String,

    /// The text displayed for the choice
    choice_text: String,

    /// Number of votes cast for this choice
    votes: i32,
}

impl Choice {
    /// Creates a new choice with no votes for the given question
    ///
    /// ### Arguments
    ///
    /// * `question_id` - The ID of the question this choice belongs to
    /// * `choice_text` - The text of the choice
    pub fn new(question_id: String, choice_text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question_id,
            choice_text,
            votes: 0,
        }
    }

    /// Gets the choice's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the ID of the question this choice belongs to
    pub fn get_question_id(&self) -> String {
        self.question_id.clone()
    }

    /// Gets the choice's text
    pub fn get_choice_text(&self) -> String {
        self.choice_text.clone()
    }

    /// Gets the number of votes for this choice
    pub fn get_votes(&self) -> i32 {
        self.votes
    }
}
