//! In-process repository: runs the API without a database and backs the router tests.

use crate::error::AppError;
use crate::models::{Category, NewQuestion, Question};
use crate::repository::{TriviaRepository, DEFAULT_CATEGORIES};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    next_question_id: i64,
}

#[derive(Default)]
pub struct MemoryRepository {
    tables: RwLock<Tables>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store; question ids are taken as given.
    pub fn with_data(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let next_question_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let tables = Tables {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            questions: questions.into_iter().map(|q| (q.id, q)).collect(),
            next_question_id,
        };
        MemoryRepository {
            tables: RwLock::new(tables),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.tables
            .read()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.tables
            .write()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }

    fn filtered<F>(&self, keep: F) -> Result<Vec<Question>, AppError>
    where
        F: Fn(&Question) -> bool,
    {
        Ok(self.read()?.questions.values().filter(|q| keep(q)).cloned().collect())
    }
}

#[async_trait]
impl TriviaRepository for MemoryRepository {
    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }

    async fn categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    async fn category_exists(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.read()?.categories.contains_key(&id))
    }

    async fn seed_default_categories(&self) -> Result<u64, AppError> {
        let mut tables = self.write()?;
        if !tables.categories.is_empty() {
            return Ok(0);
        }
        for (i, kind) in DEFAULT_CATEGORIES.iter().enumerate() {
            let id = i as i64 + 1;
            tables.categories.insert(
                id,
                Category {
                    id,
                    kind: kind.to_string(),
                },
            );
        }
        Ok(DEFAULT_CATEGORIES.len() as u64)
    }

    async fn questions(&self) -> Result<Vec<Question>, AppError> {
        self.filtered(|_| true)
    }

    async fn questions_page(&self, offset: u64, limit: u64) -> Result<Vec<Question>, AppError> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self
            .read()?
            .questions
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count_questions(&self) -> Result<u64, AppError> {
        Ok(self.read()?.questions.len() as u64)
    }

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, AppError> {
        self.filtered(|q| q.category == category)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, AppError> {
        let needle = term.to_lowercase();
        self.filtered(|q| q.question.to_lowercase().contains(&needle))
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<i64, AppError> {
        let mut tables = self.write()?;
        if !tables.categories.contains_key(&question.category) {
            return Err(AppError::Unprocessable(format!(
                "category {} does not exist",
                question.category
            )));
        }
        let id = tables.next_question_id.max(1);
        tables.next_question_id = id + 1;
        tables.questions.insert(
            id,
            Question {
                id,
                question: question.question.clone(),
                answer: question.answer.clone(),
                category: question.category,
                difficulty: question.difficulty,
            },
        );
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: text.into(),
            answer: "a".into(),
            category,
            difficulty: 1,
        }
    }

    #[tokio::test]
    async fn seeds_once() {
        let repo = MemoryRepository::new();
        assert_eq!(repo.seed_default_categories().await.unwrap(), 6);
        assert_eq!(repo.seed_default_categories().await.unwrap(), 0);
        let categories = repo.categories().await.unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].kind, "Science");
        assert_eq!(categories[5].id, 6);
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let repo = MemoryRepository::new();
        repo.seed_default_categories().await.unwrap();
        let a = repo.insert_question(&new_question("one", 1)).await.unwrap();
        assert!(repo.delete_question(a).await.unwrap());
        let b = repo.insert_question(&new_question("two", 1)).await.unwrap();
        assert!(b > a);
        assert!(!repo.delete_question(a).await.unwrap());
    }

    #[tokio::test]
    async fn rejects_unknown_category() {
        let repo = MemoryRepository::new();
        let err = repo.insert_question(&new_question("q", 9)).await.unwrap_err();
        assert!(matches!(err, AppError::Unprocessable(_)));
        assert_eq!(repo.count_questions().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_and_literal() {
        let repo = MemoryRepository::new();
        repo.seed_default_categories().await.unwrap();
        repo.insert_question(&new_question("What is the Title of the book?", 1))
            .await
            .unwrap();
        repo.insert_question(&new_question("Give 100% effort?", 2)).await.unwrap();
        assert_eq!(repo.search_questions("TITLE").await.unwrap().len(), 1);
        assert_eq!(repo.search_questions("%").await.unwrap().len(), 1);
        assert_eq!(repo.search_questions("").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn pages_in_id_order() {
        let repo = MemoryRepository::new();
        repo.seed_default_categories().await.unwrap();
        for i in 0..5 {
            repo.insert_question(&new_question(&format!("q{i}"), 1)).await.unwrap();
        }
        let page = repo.questions_page(2, 2).await.unwrap();
        assert_eq!(page.iter().map(|q| q.id).collect::<Vec<_>>(), vec![3, 4]);
        assert!(repo.questions_page(10, 2).await.unwrap().is_empty());
    }
}
