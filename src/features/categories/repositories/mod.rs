mod postgres;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::Category;

pub use postgres::PgCategoryRepository;

/// Read access to the category table
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, id ascending
    async fn list_all(&self) -> Result<Vec<Category>>;

    /// Category by id; `None` when absent
    async fn get(&self, id: i32) -> Result<Option<Category>>;
}
