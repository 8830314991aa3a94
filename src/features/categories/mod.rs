//! Trivia categories.
//!
//! Categories are seeded by the operator and never mutated through the API.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | All categories as an id to label map |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{CategoryRepository, PgCategoryRepository};
pub use services::CategoryService;
