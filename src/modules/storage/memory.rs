use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::categories::CategoryRepository;
use crate::features::questions::models::{NewQuestion, Question};
use crate::features::questions::QuestionRepository;
use crate::shared::constants::DEFAULT_CATEGORIES;

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    /// Last id handed out; never decremented so deleted ids are not reused
    last_question_id: i32,
}

/// Both repositories over in-process ordered maps
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the default trivia categories and no questions
    pub fn with_default_categories() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(label, id)| Category::new(id, *label))
            .collect();
        Self::with_data(categories, Vec::new())
    }

    /// Store holding exactly the given rows
    pub fn with_data(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let last_question_id = questions.iter().map(|q| q.id).max().unwrap_or(0);
        let tables = Tables {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            questions: questions.into_iter().map(|q| (q.id, q)).collect(),
            last_question_id,
        };
        Self {
            tables: RwLock::new(tables),
        }
    }

    async fn select_questions<F>(&self, predicate: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        self.tables
            .read()
            .await
            .questions
            .values()
            .filter(|q| predicate(q))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Category>> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Category>> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Question>> {
        Ok(self.select_questions(|_| true).await)
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.tables.read().await.questions.len() as i64)
    }

    async fn filter_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        Ok(self
            .select_questions(|q| q.category == category_id)
            .await)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();
        Ok(self
            .select_questions(|q| q.question.to_lowercase().contains(&needle))
            .await)
    }

    async fn create(&self, question: NewQuestion) -> Result<Question> {
        self.create_counted(question).await.map(|(created, _)| created)
    }

    async fn create_counted(&self, question: NewQuestion) -> Result<(Question, i64)> {
        let mut tables = self.tables.write().await;
        tables.last_question_id += 1;
        let created = question.with_id(tables.last_question_id);
        tables.questions.insert(created.id, created.clone());
        Ok((created, tables.questions.len() as i64))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        Ok(self.tables.write().await.questions.remove(&id).is_some())
    }

    async fn exclude_ids(&self, ids: &HashSet<i32>) -> Result<Vec<Question>> {
        Ok(self.select_questions(|q| !ids.contains(&q.id)).await)
    }

    async fn unseen_in_category(
        &self,
        ids: &HashSet<i32>,
        category_id: i32,
    ) -> Result<Vec<Question>> {
        Ok(self
            .select_questions(|q| q.category == category_id && !ids.contains(&q.id))
            .await)
    }
}
