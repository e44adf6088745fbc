/// Web API Handlers
///
/// This module contains the handlers for the RESTful API endpoints.
/// Each handler is responsible for processing a specific type of HTTP request,
/// extracting the necessary data, calling the appropriate repository functions,
/// and returning a properly formatted response.
///
/// Public views read the clock once per request and apply the publication
/// rule through the repository.

mod question_handlers;
mod choice_handlers;

// Re-export all handlers
pub use question_handlers::*;
pub use choice_handlers::*;
