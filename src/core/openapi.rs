use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        // Questions
        questions_handlers::list_questions,
        questions_handlers::submit_question,
        questions_handlers::delete_question,
        questions_handlers::list_category_questions,
        // Quizzes
        quizzes_handlers::next_question,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryListDto,
            // Questions
            questions_dtos::QuestionResponseDto,
            questions_dtos::QuestionsPostDto,
            questions_dtos::QuestionPageDto,
            questions_dtos::CategoryQuestionsDto,
            questions_dtos::SearchResultDto,
            questions_dtos::CreatedQuestionDto,
            questions_dtos::DeletedQuestionDto,
            questions_dtos::QuestionsPostResultDto,
            // Quizzes
            quizzes_dtos::QuizCategoryDto,
            quizzes_dtos::QuizRequestDto,
            quizzes_dtos::QuizResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Trivia categories"),
        (name = "questions", description = "Question listing, search, creation and deletion"),
        (name = "quizzes", description = "Quiz play"),
    ),
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "API documentation for the trivia backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for path in [
            "/categories",
            "/questions",
            "/questions/{id}",
            "/categories/{id}/questions",
            "/quizzes",
        ] {
            assert!(paths.contains(&path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Quiz Night".to_string(),
            version: "9.9.9".to_string(),
            description: "Staging".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Quiz Night");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Staging"));
    }
}
