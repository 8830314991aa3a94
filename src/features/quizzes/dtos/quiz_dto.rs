use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::QuestionResponseDto;

/// `quiz_category` of a quiz request; id `0` means any category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: i32,
    #[serde(rename = "type", default)]
    pub label: Option<String>,
}

/// Body of `POST /quizzes`
///
/// Fields are kept raw so a malformed category is reported as unprocessable
/// rather than as a JSON syntax problem.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    #[serde(default)]
    #[schema(value_type = Option<Vec<i32>>)]
    pub previous_questions: Option<serde_json::Value>,

    #[serde(default)]
    #[schema(value_type = Option<QuizCategoryDto>)]
    pub quiz_category: Option<serde_json::Value>,
}

/// Parsed quiz request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuery {
    pub previous_questions: HashSet<i32>,
    pub category_id: i32,
}

impl QuizRequestDto {
    pub fn into_query(self) -> Result<QuizQuery> {
        let previous_questions = match self.previous_questions {
            Some(raw) => serde_json::from_value::<Vec<i32>>(raw)
                .map_err(|e| AppError::Unprocessable(format!("Invalid previous_questions: {}", e)))?
                .into_iter()
                .collect(),
            None => HashSet::new(),
        };

        let raw_category = self
            .quiz_category
            .filter(|value| !value.is_null())
            .ok_or_else(|| AppError::Unprocessable("quiz_category is required".to_string()))?;
        let category = serde_json::from_value::<QuizCategoryDto>(raw_category)
            .map_err(|e| AppError::Unprocessable(format!("Invalid quiz_category: {}", e)))?;

        Ok(QuizQuery {
            previous_questions,
            category_id: category.id,
        })
    }
}

/// Payload of `POST /quizzes`; `question` is null once the quiz is exhausted
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    pub question: Option<QuestionResponseDto>,
}
