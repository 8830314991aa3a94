use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryListDto;
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List all categories
///
/// Returns every category as an id to label map.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = CategoryListDto),
        (status = 404, description = "No categories available", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<CategoryListDto>>> {
    let categories = service.category_map().await?;
    Ok(Json(ApiResponse::success(CategoryListDto { categories })))
}
