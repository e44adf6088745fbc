use chrono::{DateTime, Duration, Utc};
use clap::Subcommand;

use crate::client::PollsClient;
use crate::output::{self, OutputConfig};

/// Question commands
#[derive(Subcommand, Debug)]
pub enum QuestionCommands {
    /// List the latest published questions
    List,
    /// List every question, including unpublished ones
    All,
    /// Show a published question and its choices
    Get {
        /// The question ID
        id: String,
    },
    /// Show the vote counts of a published question
    Results {
        /// The question ID
        id: String,
    },
    /// Create a new question
    Create {
        /// The question text
        #[clap(long)]
        text: String,
        /// Publication date in RFC 3339 format (default: now)
        #[clap(long, conflicts_with = "in_days")]
        pub_date: Option<DateTime<Utc>>,
        /// Publish this many days from now; negative values backdate the question
        #[clap(long, allow_negative_numbers = true)]
        in_days: Option<i64>,
    },
}

/// Executes a question command
pub async fn execute(
    client: &PollsClient,
    cmd: QuestionCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        QuestionCommands::List => {
            let index = client.index().await?;
            output::print_index(&index, config);
        }
        QuestionCommands::All => {
            let questions = client.list_all_questions().await?;
            output::print_questions(&questions, "No questions found.", config);
        }
        QuestionCommands::Get { id } => {
            let detail = client.detail(&id).await?;
            output::print_detail(&detail, false, config);
        }
        QuestionCommands::Results { id } => {
            let detail = client.results(&id).await?;
            output::print_detail(&detail, true, config);
        }
        QuestionCommands::Create { text, pub_date, in_days } => {
            let pub_date = pub_date.or_else(|| in_days.map(|days| Utc::now() + Duration::days(days)));
            let question = client.create_question(text, pub_date).await?;
            output::print_question(&question, config);
        }
    }
    Ok(())
}
