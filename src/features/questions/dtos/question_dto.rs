use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::dtos::{CategoryMap, CategoryResponseDto};
use crate::features::questions::models::{NewQuestion, Question};

/// Question as returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Body of `POST /questions`
///
/// A present `searchTerm` selects search; otherwise the body is a new
/// question. `category` and `difficulty` accept numbers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct QuestionsPostDto {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "question is required"),
        length(min = 1, message = "question must not be empty")
    )]
    pub question: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "answer is required"),
        length(min = 1, message = "answer must not be empty")
    )]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(
        required(message = "category is required"),
        range(min = 1, message = "category must be a positive id")
    )]
    pub category: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(
        required(message = "difficulty is required"),
        range(min = 1, message = "difficulty must be positive")
    )]
    pub difficulty: Option<i32>,
}

impl QuestionsPostDto {
    /// Trimmed-blank text counts as missing
    fn present(value: Option<String>) -> Option<String> {
        value.filter(|s| !s.trim().is_empty())
    }

    /// Converts a validated body into a new question
    pub fn into_new_question(self) -> Option<NewQuestion> {
        Some(NewQuestion {
            question: Self::present(self.question)?,
            answer: Self::present(self.answer)?,
            category: self.category?,
            difficulty: self.difficulty?,
        })
    }
}

/// Payload of `GET /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionPageDto {
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: i64,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    /// Always null for the unfiltered listing
    pub current_category: Option<CategoryResponseDto>,
}

/// Payload of `GET /categories/{id}/questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsDto {
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: i64,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    pub current_category: CategoryResponseDto,
}

/// Payload of a search through `POST /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResultDto {
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: i64,
}

/// Payload of a creation through `POST /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedQuestionDto {
    pub created: i32,
    pub question: QuestionResponseDto,
    pub total_questions: i64,
}

/// Payload of `DELETE /questions/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedQuestionDto {
    pub deleted: i32,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: i64,
}

/// Either outcome of `POST /questions`
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum QuestionsPostResultDto {
    Search(SearchResultDto),
    Created(CreatedQuestionDto),
}
