use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::questions::dtos::{
    CategoryQuestionsDto, DeletedQuestionDto, QuestionPageDto, QuestionsPostDto,
    QuestionsPostResultDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ApiResponse, ErrorResponse, PageQuery};

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionPageDto),
        (status = 400, description = "Malformed page parameter", body = ErrorResponse),
        (status = 404, description = "Page has no questions", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<ApiResponse<QuestionPageDto>>> {
    let page = service.list_page(query.page).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// Search questions or create a question
///
/// A body carrying `searchTerm` is a search; any other body is a new question.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = QuestionsPostDto,
    responses(
        (status = 200, description = "Search results or the created question", body = QuestionsPostResultDto),
        (status = 400, description = "Blank search term or malformed body", body = ErrorResponse),
        (status = 422, description = "Missing question fields", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn submit_question(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<QuestionsPostDto>,
) -> Result<Json<ApiResponse<QuestionsPostResultDto>>> {
    let result = service.submit(dto).await?;
    Ok(Json(ApiResponse::success(result)))
}

/// Delete a question
///
/// Responds with the requested page of the remaining questions.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeletedQuestionDto),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Store rejected the delete", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<ApiResponse<DeletedQuestionDto>>> {
    let deleted = service.delete(id, query.page).await?;
    Ok(Json(ApiResponse::success(deleted)))
}

/// List the questions of one category, ten per page
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of questions in the category", body = CategoryQuestionsDto),
        (status = 404, description = "Unknown category or empty page", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_category_questions(
    State(service): State<Arc<QuestionService>>,
    AppPath(category_id): AppPath<i32>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<ApiResponse<CategoryQuestionsDto>>> {
    let page = service.list_by_category(category_id, query.page).await?;
    Ok(Json(ApiResponse::success(page)))
}
