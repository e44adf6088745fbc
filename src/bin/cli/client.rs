use chrono::{DateTime, Utc};
use polls::dto::{CreateChoiceDto, CreateQuestionDto, IndexDto, QuestionDetailDto, QuestionView, VoteDto};
use polls::models::Choice;
use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Error type for CLI client operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server returned an error status with a message body
    #[error("Server error ({}): {message}", .status.as_u16())]
    Server { status: StatusCode, message: String },
    /// Network/connection/request error
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl ClientError {
    /// Returns true if the server answered 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Server { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// Extension trait for checking HTTP responses and extracting server error messages
trait ResponseExt {
    /// Checks for error status and extracts the server's error message body
    async fn check(self) -> Result<reqwest::Response, ClientError>;
}

impl ResponseExt for reqwest::Response {
    async fn check(self) -> Result<reqwest::Response, ClientError> {
        if self.status().is_success() {
            return Ok(self);
        }
        let status = self.status();
        let message = match self.json::<serde_json::Value>().await {
            Ok(body) => body.get("error")
                .and_then(|e| e.as_str())
                .unwrap_or("Unknown error")
                .to_string(),
            Err(_) => format!("HTTP {}", status),
        };
        Err(ClientError::Server { status, message })
    }
}

/// HTTP client wrapper for communicating with the polls server
pub struct PollsClient {
    /// The base URL of the server (e.g. "http://localhost:3000")
    base_url: String,
    /// The underlying HTTP client
    client: Client,
}

impl PollsClient {
    /// Creates a new PollsClient
    ///
    /// ### Arguments
    ///
    /// * `base_url` - The base URL of the polls server
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    // ── Public poll views ────────────────────────────────────────────

    /// Fetches the index of latest published questions
    pub async fn index(&self) -> Result<IndexDto, ClientError> {
        let url = format!("{}/polls", self.base_url);
        let response = self.client.get(&url).send().await?.check().await?;
        Ok(response.json().await?)
    }

    /// Fetches the detail view of a published question
    pub async fn detail(&self, id: &str) -> Result<QuestionDetailDto, ClientError> {
        let url = format!("{}/polls/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?.check().await?;
        Ok(response.json().await?)
    }

    /// Fetches the results view of a published question
    pub async fn results(&self, id: &str) -> Result<QuestionDetailDto, ClientError> {
        let url = format!("{}/polls/{}/results", self.base_url, id);
        let response = self.client.get(&url).send().await?.check().await?;
        Ok(response.json().await?)
    }

    /// Votes for a choice of a question
    pub async fn vote(&self, question_id: &str, choice_id: String) -> Result<Choice, ClientError> {
        let url = format!("{}/polls/{}/vote", self.base_url, question_id);
        let dto = VoteDto { choice_id: Some(choice_id) };
        let response = self.client.post(&url).json(&dto).send().await?.check().await?;
        Ok(response.json().await?)
    }

    // ── Administration ───────────────────────────────────────────────

    /// Creates a new question
    pub async fn create_question(
        &self,
        question_text: String,
        pub_date: Option<DateTime<Utc>>,
    ) -> Result<QuestionView, ClientError> {
        let url = format!("{}/polls", self.base_url);
        let dto = CreateQuestionDto { question_text, pub_date };
        let response = self.client.post(&url).json(&dto).send().await?.check().await?;
        Ok(response.json().await?)
    }

    /// Adds a choice to a question
    pub async fn create_choice(&self, question_id: &str, choice_text: String) -> Result<Choice, ClientError> {
        let url = format!("{}/polls/{}/choices", self.base_url, question_id);
        let dto = CreateChoiceDto { choice_text };
        let response = self.client.post(&url).json(&dto).send().await?.check().await?;
        Ok(response.json().await?)
    }

    /// Lists every question, including unpublished ones
    pub async fn list_all_questions(&self) -> Result<Vec<QuestionView>, ClientError> {
        let url = format!("{}/admin/questions", self.base_url);
        let response = self.client.get(&url).send().await?.check().await?;
        Ok(response.json().await?)
    }
}
