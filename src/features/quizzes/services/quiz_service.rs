use std::collections::HashSet;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::questions::models::Question;
use crate::features::questions::QuestionRepository;
use crate::features::quizzes::picker::{select_question, QuestionPicker};
use crate::shared::constants::ANY_CATEGORY_ID;

/// Service that picks the next quiz question
pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
    picker: Arc<dyn QuestionPicker>,
}

impl QuizService {
    pub fn new(questions: Arc<dyn QuestionRepository>, picker: Arc<dyn QuestionPicker>) -> Self {
        Self { questions, picker }
    }

    /// Questions not yet asked, restricted to `category_id` unless it is the
    /// any-category sentinel
    pub async fn candidates(
        &self,
        previous_questions: &HashSet<i32>,
        category_id: i32,
    ) -> Result<Vec<Question>> {
        if category_id < ANY_CATEGORY_ID {
            return Err(AppError::Unprocessable(format!(
                "Invalid quiz category {}",
                category_id
            )));
        }

        if category_id == ANY_CATEGORY_ID {
            return self.questions.exclude_ids(previous_questions).await;
        }

        self.questions
            .unseen_in_category(previous_questions, category_id)
            .await
    }

    /// A random unseen question, or `None` once every candidate was asked
    pub async fn next_question(
        &self,
        previous_questions: &HashSet<i32>,
        category_id: i32,
    ) -> Result<Option<Question>> {
        let candidates = self.candidates(previous_questions, category_id).await?;
        let remaining = candidates.len();
        let question = select_question(candidates, self.picker.as_ref());

        tracing::debug!(
            "Quiz pick: category={}, asked={}, remaining={}, chosen={:?}",
            category_id,
            previous_questions.len(),
            remaining,
            question.as_ref().map(|q| q.id)
        );

        Ok(question)
    }
}
