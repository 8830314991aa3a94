use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::questions::handlers;
use crate::features::questions::services::QuestionService;

/// Create routes for the questions feature
pub fn routes(service: Arc<QuestionService>) -> Router {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::submit_question),
        )
        .route("/questions/{id}", delete(handlers::delete_question))
        .route(
            "/categories/{id}/questions",
            get(handlers::list_category_questions),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{bulk_store, seeded_store, test_server};

    fn ids(body: &Value) -> Vec<i64> {
        body["questions"]
            .as_array()
            .map(|qs| qs.iter().filter_map(|q| q["id"].as_i64()).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_list_questions_first_page() {
        let server = test_server(seeded_store());

        let response = server.get("/questions").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(ids(&body), vec![1, 2, 3]);
        assert_eq!(body["total_questions"], json!(3));
        assert_eq!(body["categories"], json!({ "1": "Science", "2": "Art" }));
        assert_eq!(body["current_category"], Value::Null);
        assert_eq!(
            body["questions"][0],
            json!({
                "id": 1,
                "question": "What is the heaviest organ in the human body?",
                "answer": "The Liver",
                "category": 1,
                "difficulty": 4
            })
        );
    }

    #[tokio::test]
    async fn test_list_questions_pages() {
        let server = test_server(bulk_store(15));

        let response = server.get("/questions").add_query_param("page", 2).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(ids(&body), (11..=15).collect::<Vec<_>>());
        assert_eq!(body["total_questions"], json!(15));

        let response = server.get("/questions").add_query_param("page", 3).await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({
            "success": false,
            "error": 404,
            "message": "Resource Not Found"
        }));
    }

    #[tokio::test]
    async fn test_list_questions_malformed_page() {
        let server = test_server(seeded_store());

        let response = server.get("/questions").add_query_param("page", "abc").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], json!(400));
        assert_eq!(body["message"], json!("Bad Request"));
    }

    #[tokio::test]
    async fn test_delete_question() {
        let server = test_server(seeded_store());

        let response = server.delete("/questions/2").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["deleted"], json!(2));
        assert_eq!(body["total_questions"], json!(2));
        assert_eq!(ids(&body), vec![1, 3]);

        server
            .delete("/questions/2")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_question_unknown_or_malformed_id() {
        let server = test_server(seeded_store());

        server
            .delete("/questions/100")
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .delete("/questions/abc")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_question() {
        let server = test_server(seeded_store());

        let response = server
            .post("/questions")
            .json(&json!({
                "question": "TestQuestion",
                "answer": "TestAnswer",
                "category": "2",
                "difficulty": 5
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["created"], json!(4));
        assert_eq!(body["total_questions"], json!(4));
        assert_eq!(body["question"]["category"], json!(2));

        let response = server.get("/categories/2/questions").await;
        assert_eq!(ids(&response.json()), vec![3, 4]);
    }

    #[tokio::test]
    async fn test_create_question_missing_fields() {
        let server = test_server(seeded_store());

        for payload in [
            json!({}),
            json!({ "answer": "a", "category": 1, "difficulty": 1 }),
            json!({ "question": "q", "answer": "a", "category": null, "difficulty": 1 }),
        ] {
            let response = server.post("/questions").json(&payload).await;
            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
            response.assert_json(&json!({
                "success": false,
                "error": 422,
                "message": "Not Processable"
            }));
        }

        let body: Value = server.get("/questions").await.json();
        assert_eq!(body["total_questions"], json!(3));
    }

    #[tokio::test]
    async fn test_search_questions() {
        let server = test_server(seeded_store());

        let response = server
            .post("/questions")
            .json(&json!({ "searchTerm": "WHO" }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(ids(&body), vec![2, 3]);
        assert_eq!(body["total_questions"], json!(2));
    }

    #[tokio::test]
    async fn test_search_without_matches_is_empty_success() {
        let server = test_server(seeded_store());

        let response = server
            .post("/questions")
            .json(&json!({ "searchTerm": "zebra" }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["questions"], json!([]));
        assert_eq!(body["total_questions"], json!(0));
    }

    #[tokio::test]
    async fn test_blank_search_is_bad_request() {
        let server = test_server(seeded_store());

        let response = server
            .post("/questions")
            .json(&json!({ "searchTerm": "" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_padded_search_term_is_matched_verbatim() {
        let server = test_server(seeded_store());

        let response = server
            .post("/questions")
            .json(&json!({ "searchTerm": " Who" }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["total_questions"], json!(0));
    }

    #[tokio::test]
    async fn test_null_search_term_is_treated_as_creation() {
        let server = test_server(seeded_store());

        let response = server
            .post("/questions")
            .json(&json!({ "searchTerm": null }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let response = server
            .post("/questions")
            .json(&json!({
                "searchTerm": null,
                "question": "Which planet is largest?",
                "answer": "Jupiter",
                "category": 1,
                "difficulty": 2
            }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["created"], json!(4));
        assert_eq!(body["total_questions"], json!(4));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let server = test_server(seeded_store());

        let response = server
            .post("/questions")
            .text("{not json")
            .content_type("application/json")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_category_questions() {
        let server = test_server(seeded_store());

        let response = server.get("/categories/1/questions").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(ids(&body), vec![1, 2]);
        assert_eq!(body["total_questions"], json!(2));
        assert_eq!(body["current_category"], json!({ "id": 1, "type": "Science" }));
        assert_eq!(body["categories"], json!({ "1": "Science", "2": "Art" }));
    }

    #[tokio::test]
    async fn test_category_questions_not_found() {
        let server = test_server(seeded_store());

        server
            .get("/categories/100/questions")
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .get("/categories/2/questions")
            .add_query_param("page", 2)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let server = test_server(seeded_store());

        let response = server.put("/questions").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        response.assert_json(&json!({
            "success": false,
            "error": 405,
            "message": "Method Not Allowed"
        }));
    }
}
