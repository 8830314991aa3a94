use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{to_category_map, CategoryMap, CategoryResponseDto};
use crate::features::categories::models::Category;
use crate::features::categories::repositories::CategoryRepository;

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// All categories, id ascending; empty when none are seeded
    pub async fn list_all(&self) -> Result<Vec<Category>> {
        self.repository.list_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<Category>> {
        self.repository.get(id).await
    }

    /// id to label map of every category; `NotFound` when there are none
    pub async fn category_map(&self) -> Result<CategoryMap> {
        let categories = self.list_all().await?;
        if categories.is_empty() {
            return Err(AppError::NotFound("No categories available".to_string()));
        }
        Ok(to_category_map(categories))
    }

    /// Category descriptor by id; `NotFound` when absent
    pub async fn require(&self, id: i32) -> Result<CategoryResponseDto> {
        self.get(id)
            .await?
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::InMemoryStore;

    fn service(store: InMemoryStore) -> CategoryService {
        CategoryService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_category_map_lists_every_category() {
        let map = service(InMemoryStore::with_default_categories())
            .category_map()
            .await
            .unwrap();
        assert_eq!(map.len(), 6);
        assert_eq!(map.get(&1).map(String::as_str), Some("Science"));
    }

    #[tokio::test]
    async fn test_empty_store_is_not_found() {
        let service = service(InMemoryStore::new());
        assert!(service.list_all().await.unwrap().is_empty());
        assert!(matches!(
            service.category_map().await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_require_unknown_category() {
        let service = service(InMemoryStore::with_default_categories());
        assert_eq!(service.require(2).await.unwrap().label, "Art");
        assert!(matches!(service.require(100).await, Err(AppError::NotFound(_))));
    }
}
