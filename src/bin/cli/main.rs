mod client;
mod commands;
mod output;

use clap::{Parser, Subcommand};
use client::{ClientError, PollsClient};
use output::{OutputConfig, OutputFormat};
use polls::config;
use std::process;

/// CLI for the polls server
#[derive(Parser, Debug)]
#[clap(name = "polls-cli", about = "CLI for the polls server")]
struct Cli {
    /// Server URL to connect to
    #[clap(long, env = "POLLS_URL", global = true)]
    server_url: Option<String>,

    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    format: OutputFormat,

    /// Quiet mode: minimal output (just IDs)
    #[clap(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse and create questions
    #[command(subcommand)]
    Question(commands::question::QuestionCommands),
    /// Manage choices
    #[command(subcommand)]
    Choice(commands::choice::ChoiceCommands),
    /// Vote for a choice of a published question
    Vote {
        /// The question ID
        question_id: String,
        /// The choice ID
        choice_id: String,
    },
}

/// Resolves the server URL from CLI args, config file, or defaults
///
/// Precedence: CLI flag / env var > config file > default
fn resolve_server_url(cli_url: Option<String>) -> String {
    if let Some(url) = cli_url {
        return url;
    }

    if let Some(dir) = config::get_config_dir_path() {
        let config_path = dir.join(config::CONFIG_FILE_NAME);
        if let Ok(update) = config::config_from_file(Some(config_path)) {
            if let Some(url) = update.server_url {
                return url;
            }
            if let Some(port) = update.port {
                return format!("http://localhost:{}", port);
            }
        }
    }

    "http://localhost:3000".to_string()
}

/// Formats an error for human-readable stderr output
fn format_error(err: &(dyn std::error::Error + 'static)) -> String {
    match err.downcast_ref::<ClientError>() {
        Some(client_err) if client_err.is_not_found() => {
            "Question not found (it may not be published yet)".to_string()
        }
        Some(ClientError::Request(req_err)) if req_err.is_connect() => {
            format!("Could not connect to server. Is polls running?\n  {}", req_err)
        }
        _ => err.to_string(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let server_url = resolve_server_url(cli.server_url);
    let client = PollsClient::new(server_url);
    let output_config = OutputConfig {
        format: cli.format,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Question(cmd) => commands::question::execute(&client, cmd, &output_config).await,
        Commands::Choice(cmd) => commands::choice::execute(&client, cmd, &output_config).await,
        Commands::Vote { question_id, choice_id } => {
            commands::choice::vote(&client, &question_id, choice_id, &output_config).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", format_error(e.as_ref()));
        process::exit(1);
    }
}
