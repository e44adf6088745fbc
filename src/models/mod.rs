/// Data models module
///
/// This module defines the core data structures used throughout the application.
/// It includes database models that map to database tables, as well as methods
/// for creating and inspecting these models.

mod question;
pub use question::Question;

mod choice;
pub use choice::Choice;
