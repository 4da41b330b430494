//! Endpoint orchestration over a `TriviaRepository`.

use crate::error::AppError;
use crate::models::{category_map, CategoryMap, NewQuestion, Question};
use crate::repository::TriviaRepository;
use crate::service::pagination::page_window;
use crate::service::quiz::{pick_question, QuizScope};
use crate::service::validation::QuestionValidator;

pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: u64,
    pub categories: CategoryMap,
}

pub struct TriviaService;

impl TriviaService {
    pub async fn categories(repo: &dyn TriviaRepository) -> Result<CategoryMap, AppError> {
        Ok(category_map(repo.categories().await?))
    }

    /// One page of questions plus the full count and the category map.
    pub async fn list_page(
        repo: &dyn TriviaRepository,
        page: u64,
        per_page: u32,
    ) -> Result<QuestionPage, AppError> {
        let (offset, limit) = page_window(page, per_page);
        let questions = repo.questions_page(offset, limit).await?;
        let total = repo.count_questions().await?;
        let categories = Self::categories(repo).await?;
        Ok(QuestionPage {
            questions,
            total,
            categories,
        })
    }

    pub async fn delete(repo: &dyn TriviaRepository, id: i64) -> Result<(), AppError> {
        if !repo.delete_question(id).await? {
            return Err(AppError::NotFound(format!("question {}", id)));
        }
        tracing::info!(question_id = id, "question deleted");
        Ok(())
    }

    pub async fn create(repo: &dyn TriviaRepository, question: NewQuestion) -> Result<i64, AppError> {
        QuestionValidator::validate(&question)?;
        if !repo.category_exists(question.category).await? {
            return Err(AppError::Unprocessable(format!(
                "category {} does not exist",
                question.category
            )));
        }
        let id = repo.insert_question(&question).await?;
        tracing::info!(question_id = id, category = question.category, "question created");
        Ok(id)
    }

    pub async fn search(repo: &dyn TriviaRepository, term: &str) -> Result<Vec<Question>, AppError> {
        repo.search_questions(term).await
    }

    pub async fn by_category(
        repo: &dyn TriviaRepository,
        category: i64,
    ) -> Result<Vec<Question>, AppError> {
        repo.questions_in_category(category).await
    }

    /// Random unseen question within the scope, or None once all have been shown.
    pub async fn next_quiz_question(
        repo: &dyn TriviaRepository,
        scope: QuizScope,
        previous: &[i64],
    ) -> Result<Option<Question>, AppError> {
        let candidates = match scope {
            QuizScope::All => repo.questions().await?,
            QuizScope::Category(id) => repo.questions_in_category(id).await?,
        };
        Ok(pick_question(candidates, previous, &mut rand::thread_rng()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryRepository;
    use crate::models::Category;

    fn fixture() -> MemoryRepository {
        let categories = vec![
            Category { id: 1, kind: "Science".into() },
            Category { id: 2, kind: "Art".into() },
        ];
        let questions = (1..=23)
            .map(|id| Question {
                id,
                question: format!("question {id}"),
                answer: format!("answer {id}"),
                category: if id % 2 == 0 { 2 } else { 1 },
                difficulty: 1 + id % 5,
            })
            .collect();
        MemoryRepository::with_data(categories, questions)
    }

    #[tokio::test]
    async fn pages_keep_the_full_total() {
        let repo = fixture();
        for page in 1..=4 {
            let p = TriviaService::list_page(&repo, page, 10).await.unwrap();
            assert!(p.questions.len() <= 10);
            assert_eq!(p.total, 23);
            assert_eq!(p.categories.len(), 2);
        }
        let third = TriviaService::list_page(&repo, 3, 10).await.unwrap();
        assert_eq!(third.questions.iter().map(|q| q.id).collect::<Vec<_>>(), vec![21, 22, 23]);
        assert!(TriviaService::list_page(&repo, 4, 10).await.unwrap().questions.is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_is_not_found() {
        let repo = fixture();
        TriviaService::delete(&repo, 5).await.unwrap();
        assert!(matches!(
            TriviaService::delete(&repo, 5).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn create_checks_category() {
        let repo = fixture();
        let mut q = NewQuestion {
            question: "Who painted it?".into(),
            answer: "Someone".into(),
            category: 9,
            difficulty: 3,
        };
        assert!(matches!(
            TriviaService::create(&repo, q.clone()).await,
            Err(AppError::Unprocessable(_))
        ));
        q.category = 2;
        let id = TriviaService::create(&repo, q).await.unwrap();
        assert_eq!(id, 24);
    }

    #[tokio::test]
    async fn quiz_stays_in_scope() {
        let repo = fixture();
        let previous: Vec<i64> = vec![2, 4, 6];
        for _ in 0..50 {
            let q = TriviaService::next_quiz_question(&repo, QuizScope::Category(2), &previous)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(q.category, 2);
            assert!(!previous.contains(&q.id));
        }
        let all_art: Vec<i64> = (1..=23).filter(|id| id % 2 == 0).collect();
        assert!(TriviaService::next_quiz_question(&repo, QuizScope::Category(2), &all_art)
            .await
            .unwrap()
            .is_none());
        assert!(TriviaService::next_quiz_question(&repo, QuizScope::All, &all_art)
            .await
            .unwrap()
            .is_some());
    }
}
