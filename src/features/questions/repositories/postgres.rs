use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::questions::models::{NewQuestion, Question};
use crate::features::questions::repositories::QuestionRepository;

/// `questions(id, question, answer, category, difficulty)` in Postgres
pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const INSERT_QUESTION: &str = r#"
    INSERT INTO questions (question, answer, category, difficulty)
    VALUES ($1, $2, $3, $4)
    RETURNING id, question, answer, category, difficulty
"#;

/// Escape LIKE metacharacters so the term matches literally
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn list_all(&self) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count questions: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn filter_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to list questions for category {}: {:?}",
                category_id,
                e
            );
            AppError::Database(e)
        })
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search questions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn create(&self, question: NewQuestion) -> Result<Question> {
        sqlx::query_as::<_, Question>(INSERT_QUESTION)
            .bind(&question.question)
            .bind(&question.answer)
            .bind(question.category)
            .bind(question.difficulty)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create question: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn create_counted(&self, question: NewQuestion) -> Result<(Question, i64)> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Question>(INSERT_QUESTION)
            .bind(&question.question)
            .bind(&question.answer)
            .bind(question.category)
            .bind(question.difficulty)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create question: {:?}", e);
                AppError::Database(e)
            })?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count questions after insert: {:?}", e);
                AppError::Database(e)
            })?;

        tx.commit().await?;
        Ok((created, total))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete question {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn exclude_ids(&self, ids: &HashSet<i32>) -> Result<Vec<Question>> {
        let ids: Vec<i32> = ids.iter().copied().collect();

        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id <> ALL($1)
            ORDER BY id
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list unseen questions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn unseen_in_category(
        &self,
        ids: &HashSet<i32>,
        category_id: i32,
    ) -> Result<Vec<Question>> {
        let ids: Vec<i32> = ids.iter().copied().collect();

        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id <> ALL($1) AND category = $2
            ORDER BY id
            "#,
        )
        .bind(ids)
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to list unseen questions for category {}: {:?}",
                category_id,
                e
            );
            AppError::Database(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_term() {
        assert_eq!(like_pattern("title"), "%title%");
    }

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }
}
