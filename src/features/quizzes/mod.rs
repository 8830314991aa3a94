//! Quiz play: one random, not yet asked question at a time.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/quizzes` | Next unseen question for a category, or `null` |

pub mod dtos;
pub mod handlers;
pub mod picker;
pub mod routes;
pub mod services;

pub use picker::{QuestionPicker, RandomPicker, SeededPicker};
pub use services::QuizService;
