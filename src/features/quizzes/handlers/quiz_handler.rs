use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// Next quiz question
///
/// Picks a random question from `quiz_category` (id 0 for any category)
/// that is not in `previous_questions`. `question` is null when none remain.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, or null when exhausted", body = QuizResponseDto),
        (status = 422, description = "Missing or malformed quiz_category", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn next_question(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<QuizRequestDto>,
) -> Result<Json<ApiResponse<QuizResponseDto>>> {
    let query = dto.into_query()?;
    let question = service
        .next_question(&query.previous_questions, query.category_id)
        .await?;

    Ok(Json(ApiResponse::success(QuizResponseDto {
        question: question.map(|q| q.into()),
    })))
}
