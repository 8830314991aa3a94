//! Trivia questions.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Page of all questions |
//! | POST | `/questions` | Search (`searchTerm`) or create a question |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | GET | `/categories/{id}/questions?page=N` | Page of a category's questions |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgQuestionRepository, QuestionRepository};
pub use services::QuestionService;
