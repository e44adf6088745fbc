/// Repository module
///
/// This module provides the data access layer for the application.
/// It contains functions for creating and querying questions and choices,
/// and for recording votes.
///
/// Queries that serve the public views take the current time as an argument
/// and apply the publication rule in SQL, so hidden questions never leave the
/// database.

mod question_repo;
mod choice_repo;

// Re-export all repository functions
pub use question_repo::*;
pub use choice_repo::*;
