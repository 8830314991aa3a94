use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::to_category_map;
use crate::features::categories::CategoryService;
use crate::features::questions::dtos::{
    CategoryQuestionsDto, CreatedQuestionDto, DeletedQuestionDto, QuestionPageDto,
    QuestionResponseDto, QuestionsPostDto, QuestionsPostResultDto, SearchResultDto,
};
use crate::features::questions::models::Question;
use crate::features::questions::repositories::QuestionRepository;
use crate::shared::pagination::paginate_default;

/// Service for question listing, search, creation and deletion
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<CategoryService>,
}

/// A failing write is reported as unprocessable rather than internal
fn write_failure(error: AppError) -> AppError {
    match error {
        AppError::Database(e) => AppError::Unprocessable(format!("Store rejected write: {}", e)),
        other => other,
    }
}

fn to_dtos(questions: Vec<Question>) -> Vec<QuestionResponseDto> {
    questions.into_iter().map(|q| q.into()).collect()
}

impl QuestionService {
    pub fn new(questions: Arc<dyn QuestionRepository>, categories: Arc<CategoryService>) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// One page of all questions with the total and every category
    pub async fn list_page(&self, page: i64) -> Result<QuestionPageDto> {
        let selection = self.questions.list_all().await?;
        let total_questions = selection.len() as i64;

        let questions = paginate_default(selection, page);
        if questions.is_empty() {
            return Err(AppError::NotFound(format!("Page {} has no questions", page)));
        }

        let categories = to_category_map(self.categories.list_all().await?);

        Ok(QuestionPageDto {
            questions: to_dtos(questions),
            total_questions,
            categories,
            current_category: None,
        })
    }

    /// One page of the questions in a category
    pub async fn list_by_category(&self, category_id: i32, page: i64) -> Result<CategoryQuestionsDto> {
        let current_category = self.categories.require(category_id).await?;

        let selection = self.questions.filter_by_category(category_id).await?;
        let total_questions = selection.len() as i64;

        let questions = paginate_default(selection, page);
        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "Page {} of category {} has no questions",
                page, category_id
            )));
        }

        let categories = to_category_map(self.categories.list_all().await?);

        Ok(CategoryQuestionsDto {
            questions: to_dtos(questions),
            total_questions,
            categories,
            current_category,
        })
    }

    /// Every question whose text contains `term`, ignoring case
    ///
    /// The term is matched as given, surrounding whitespace included. A
    /// blank term is rejected instead of matching the whole table.
    pub async fn search(&self, term: &str) -> Result<SearchResultDto> {
        if term.trim().is_empty() {
            return Err(AppError::BadRequest("Search term must not be empty".to_string()));
        }

        let questions = self.questions.search(term).await?;
        tracing::debug!("Search '{}' matched {} questions", term, questions.len());

        Ok(SearchResultDto {
            total_questions: questions.len() as i64,
            questions: to_dtos(questions),
        })
    }

    pub async fn create(&self, dto: QuestionsPostDto) -> Result<CreatedQuestionDto> {
        dto.validate()
            .map_err(|e| AppError::Unprocessable(e.to_string()))?;

        let new_question = dto.into_new_question().ok_or_else(|| {
            AppError::Unprocessable("Question and answer must not be blank".to_string())
        })?;

        let (question, total_questions) = self
            .questions
            .create_counted(new_question)
            .await
            .map_err(write_failure)?;

        tracing::info!(
            "Question created: id={}, category={}",
            question.id,
            question.category
        );

        Ok(CreatedQuestionDto {
            created: question.id,
            question: question.into(),
            total_questions,
        })
    }

    /// Dispatches `POST /questions` to search or creation
    pub async fn submit(&self, dto: QuestionsPostDto) -> Result<QuestionsPostResultDto> {
        match dto.search_term.clone() {
            Some(term) => self.search(&term).await.map(QuestionsPostResultDto::Search),
            None => self.create(dto).await.map(QuestionsPostResultDto::Created),
        }
    }

    /// Deletes a question and returns `page` of what remains
    pub async fn delete(&self, id: i32, page: i64) -> Result<DeletedQuestionDto> {
        let removed = self.questions.delete(id).await.map_err(write_failure)?;
        if !removed {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        tracing::info!("Question deleted: id={}", id);

        let remaining = self.questions.list_all().await?;
        let total_questions = remaining.len() as i64;

        Ok(DeletedQuestionDto {
            deleted: id,
            questions: to_dtos(paginate_default(remaining, page)),
            total_questions,
        })
    }
}
