use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::modules::storage::InMemoryStore;
    use crate::shared::test_helpers::{seeded_store, test_server};

    #[tokio::test]
    async fn test_list_categories() {
        let server = test_server(seeded_store());

        let response = server.get("/categories").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["categories"], json!({ "1": "Science", "2": "Art" }));
    }

    #[tokio::test]
    async fn test_list_categories_empty_store() {
        let server = test_server(InMemoryStore::new());

        let response = server.get("/categories").await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({
            "success": false,
            "error": 404,
            "message": "Resource Not Found"
        }));
    }
}
