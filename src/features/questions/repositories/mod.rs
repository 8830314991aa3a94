mod postgres;

use std::collections::HashSet;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::questions::models::{NewQuestion, Question};

pub use postgres::PgQuestionRepository;

/// Access to the question table
///
/// Every listing is ordered by id ascending.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Question>>;

    async fn count(&self) -> Result<i64>;

    async fn filter_by_category(&self, category_id: i32) -> Result<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case
    async fn search(&self, term: &str) -> Result<Vec<Question>>;

    /// Persists the question under a fresh id
    async fn create(&self, question: NewQuestion) -> Result<Question>;

    /// Persists the question and counts the table in one unit; the row is
    /// not kept when the count fails
    async fn create_counted(&self, question: NewQuestion) -> Result<(Question, i64)>;

    /// Removes the question; `false` when no row had that id
    async fn delete(&self, id: i32) -> Result<bool>;

    /// Questions whose id is not in `ids`
    async fn exclude_ids(&self, ids: &HashSet<i32>) -> Result<Vec<Question>>;

    /// Questions in `category_id` whose id is not in `ids`
    async fn unseen_in_category(
        &self,
        ids: &HashSet<i32>,
        category_id: i32,
    ) -> Result<Vec<Question>>;
}
