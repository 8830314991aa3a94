use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Category id to label, serialized as a JSON object keyed by id
pub type CategoryMap = BTreeMap<i32, String>;

/// Category descriptor: `{"id": 1, "type": "Science"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub label: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            label: c.label,
        }
    }
}

/// Payload of `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListDto {
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}

pub fn to_category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.label)).collect()
}
