use std::sync::Arc;

use axum::{routing::get, Router};

use crate::core::error::AppError;
use crate::features::categories::{routes as categories_routes, CategoryRepository, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionRepository, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuestionPicker, QuizService};

/// Services shared by every request, each built over injected repositories
pub struct AppServices {
    pub categories: Arc<CategoryService>,
    pub questions: Arc<QuestionService>,
    pub quizzes: Arc<QuizService>,
}

impl AppServices {
    pub fn new(
        category_repository: Arc<dyn CategoryRepository>,
        question_repository: Arc<dyn QuestionRepository>,
        picker: Arc<dyn QuestionPicker>,
    ) -> Self {
        let categories = Arc::new(CategoryService::new(category_repository));
        let questions = Arc::new(QuestionService::new(
            Arc::clone(&question_repository),
            Arc::clone(&categories),
        ));
        let quizzes = Arc::new(QuizService::new(question_repository, picker));

        Self {
            categories,
            questions,
            quizzes,
        }
    }
}

async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

async fn route_not_found() -> AppError {
    AppError::NotFound("No route matches the request".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Every API route plus JSON 404/405 fallbacks
pub fn api_router(services: &AppServices) -> Router {
    Router::new()
        .merge(categories_routes::routes(Arc::clone(&services.categories)))
        .merge(questions_routes::routes(Arc::clone(&services.questions)))
        .merge(quizzes_routes::routes(Arc::clone(&services.quizzes)))
        .route("/health", get(health_check))
        // Must follow every route so each method router gets the fallback
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::shared::test_helpers::{seeded_store, test_server};

    #[tokio::test]
    async fn test_health_check() {
        test_server(seeded_store())
            .get("/health")
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_not_found() {
        let response = test_server(seeded_store()).get("/nowhere").await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({
            "success": false,
            "error": 404,
            "message": "Resource Not Found"
        }));
    }

    #[tokio::test]
    async fn test_wrong_method_is_json_method_not_allowed() {
        let server = test_server(seeded_store());

        server
            .delete("/categories")
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
        server
            .get("/quizzes")
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
