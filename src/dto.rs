use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Choice, Question};

/// Message shown by the index when no question is visible
pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

/// Message returned when a vote does not name one of the question's choices
pub const NO_CHOICE_MESSAGE: &str = "You didn't select a choice.";

/// Data transfer object for creating a new question
///
/// This struct is used to deserialize JSON requests for creating questions.
#[derive(Serialize, Deserialize, Debug)]
pub struct CreateQuestionDto {
    /// The text of the question
    pub question_text: String,

    /// The publication date; defaults to the time of the request
    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,
}

/// Data transfer object for adding a choice to a question
#[derive(Serialize, Deserialize, Debug)]
pub struct CreateChoiceDto {
    /// The text of the choice
    pub choice_text: String,
}

/// Data transfer object for casting a vote
///
/// A missing `choice_id` is accepted by the deserializer and rejected by the
/// handler with the same message as an unknown choice.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct VoteDto {
    /// The ID of the chosen choice
    pub choice_id: Option<String>,
}

/// A question as presented to clients
///
/// Carries the `was_published_recently` flag, computed when the view is built.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub id: String,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
}

impl QuestionView {
    /// Builds the view of `question` as seen at `now`
    pub fn new(question: &Question, now: DateTime<Utc>) -> Self {
        Self {
            id: question.get_id(),
            question_text: question.get_question_text(),
            pub_date: question.get_pub_date(),
            was_published_recently: question.was_published_recently(now),
        }
    }
}

/// Response body of the poll index
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IndexDto {
    /// Up to five visible questions, newest first
    pub latest_question_list: Vec<QuestionView>,

    /// Set to [`NO_POLLS_MESSAGE`] when the list is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IndexDto {
    pub fn new(latest_question_list: Vec<QuestionView>) -> Self {
        let message = latest_question_list
            .is_empty()
            .then(|| NO_POLLS_MESSAGE.to_string());
        Self { latest_question_list, message }
    }
}

/// Response body of the detail and results views
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionDetailDto {
    pub question: QuestionView,
    pub choices: Vec<Choice>,
}

impl QuestionDetailDto {
    /// Total number of votes over all choices
    pub fn total_votes(&self) -> i64 {
        self.choices.iter().map(|c| i64::from(c.get_votes())).sum()
    }
}
