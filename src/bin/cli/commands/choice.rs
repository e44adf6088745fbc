use clap::Subcommand;

use crate::client::PollsClient;
use crate::output::{self, OutputConfig};

/// Choice commands
#[derive(Subcommand, Debug)]
pub enum ChoiceCommands {
    /// Add a choice to a question
    Add {
        /// The question ID
        question_id: String,
        /// The choice text
        #[clap(long)]
        text: String,
    },
}

/// Executes a choice command
pub async fn execute(
    client: &PollsClient,
    cmd: ChoiceCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ChoiceCommands::Add { question_id, text } => {
            let choice = client.create_choice(&question_id, text).await?;
            output::print_choice(&choice, config);
        }
    }
    Ok(())
}

/// Votes for a choice and prints the updated choice
pub async fn vote(
    client: &PollsClient,
    question_id: &str,
    choice_id: String,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let choice = client.vote(question_id, choice_id).await?;
    output::print_choice(&choice, config);
    Ok(())
}
