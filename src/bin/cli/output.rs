use clap::ValueEnum;
use polls::dto::{IndexDto, QuestionDetailDto, QuestionView};
use polls::models::Choice;
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Bundled output configuration passed to all print functions
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// The output format
    pub format: OutputFormat,
    /// When true, print minimal output (just IDs or counts)
    pub quiet: bool,
}

/// Prints a value as pretty JSON
fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}

/// Marker shown next to recently published questions
fn recent_marker(question: &QuestionView) -> &'static str {
    if question.was_published_recently { " (new)" } else { "" }
}

/// Prints a list of questions in the specified format
pub fn print_questions(questions: &[QuestionView], empty_message: &str, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if questions.is_empty() {
                if !config.quiet {
                    println!("{}", empty_message);
                }
                return;
            }
            if config.quiet {
                for q in questions {
                    println!("{}", q.id);
                }
                return;
            }
            let max_id = questions.iter().map(|q| q.id.len()).max().unwrap_or(2);
            println!("{:<width$}  {:<25}  QUESTION", "ID", "PUBLISHED", width = max_id);
            for q in questions {
                println!(
                    "{:<width$}  {:<25}  {}{}",
                    q.id,
                    q.pub_date.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                    q.question_text,
                    recent_marker(q),
                    width = max_id
                );
            }
        }
        OutputFormat::Json => print_json(questions),
    }
}

/// Prints the poll index in the specified format
pub fn print_index(index: &IndexDto, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            let empty_message = index.message.as_deref().unwrap_or("");
            print_questions(&index.latest_question_list, empty_message, config);
        }
        OutputFormat::Json => print_json(index),
    }
}

/// Prints a single question in the specified format
pub fn print_question(question: &QuestionView, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", question.id);
                return;
            }
            println!("ID:        {}", question.id);
            println!("Question:  {}{}", question.question_text, recent_marker(question));
            println!("Published: {}", question.pub_date);
        }
        OutputFormat::Json => print_json(question),
    }
}

/// Prints a question with its choices; vote counts are shown when `with_votes` is set
pub fn print_detail(detail: &QuestionDetailDto, with_votes: bool, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                for c in &detail.choices {
                    println!("{}", c.get_id());
                }
                return;
            }
            println!("{}", detail.question.question_text);
            if detail.choices.is_empty() {
                println!("  (no choices)");
            }
            for c in &detail.choices {
                if with_votes {
                    let unit = if c.get_votes() == 1 { "vote" } else { "votes" };
                    println!("  {} -- {} {}  [{}]", c.get_choice_text(), c.get_votes(), unit, c.get_id());
                } else {
                    println!("  {}  [{}]", c.get_choice_text(), c.get_id());
                }
            }
            if with_votes {
                println!("Total: {}", detail.total_votes());
            }
        }
        OutputFormat::Json => print_json(detail),
    }
}

/// Prints a single choice in the specified format
pub fn print_choice(choice: &Choice, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", choice.get_id());
                return;
            }
            println!("ID:       {}", choice.get_id());
            println!("Question: {}", choice.get_question_id());
            println!("Choice:   {}", choice.get_choice_text());
            println!("Votes:    {}", choice.get_votes());
        }
        OutputFormat::Json => print_json(choice),
    }
}
