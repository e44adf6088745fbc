use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::visibility::{self, Visibility};

/// Represents a poll question
///
/// This struct maps directly to the `questions` table in the database.
/// A question is immutable once created; whether it is shown depends only on
/// its publication date relative to the current time.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::questions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Question {
    /// Unique identifier for the question (UUID v4 as string)
    id: String,

    /// The text displayed for the question
    question_text: String,

    /// When the question is (or was) published
    pub_date: NaiveDateTime,
}

impl Question {
    /// Creates a new question published at `pub_date`
    ///
    /// This method automatically generates a UUID v4 for the ID.
    ///
    /// ### Arguments
    ///
    /// * `question_text` - The text of the question
    /// * `pub_date` - The publication date, which may lie in the future
    ///
    /// ### Returns
    ///
    /// A new `Question` instance
    pub fn new(question_text: String, pub_date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question_text,
            pub_date: pub_date.naive_utc(),
        }
    }

    /// Creates a new question with all fields specified
    ///
    /// This method is primarily used for testing and client-side reconstruction.
    pub fn new_with_fields(id: String, question_text: String, pub_date: DateTime<Utc>) -> Self {
        Self {
            id,
            question_text,
            pub_date: pub_date.naive_utc(),
        }
    }

    /// Gets the question's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the question's text
    pub fn get_question_text(&self) -> String {
        self.question_text.clone()
    }

    /// Gets the question's publication date as a DateTime<Utc>
    pub fn get_pub_date(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.pub_date, Utc)
    }

    /// Gets the question's raw publication date
    pub fn get_pub_date_raw(&self) -> NaiveDateTime {
        self.pub_date
    }

    /// Classifies this question's publication date against `now`
    pub fn visibility(&self, now: DateTime<Utc>) -> Visibility {
        visibility::classify(self.get_pub_date(), now)
    }

    /// Returns true if the question may be listed and viewed at `now`
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        visibility::is_published(self.get_pub_date(), now)
    }

    /// Returns true if the question was published within the day before `now`
    ///
    /// Questions whose publication date is still in the future are never
    /// considered recent.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        visibility::was_published_recently(self.get_pub_date(), now)
    }
}
