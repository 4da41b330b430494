//! Data-access seam shared by the PostgreSQL store and the in-memory store.

use crate::error::AppError;
use crate::models::{Category, NewQuestion, Question};
use async_trait::async_trait;

/// Categories inserted by `seed_default_categories`, ids 1..=6 in this order.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Every list result is ordered by id.
#[async_trait]
pub trait TriviaRepository: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;

    async fn categories(&self) -> Result<Vec<Category>, AppError>;

    async fn category_exists(&self, id: i64) -> Result<bool, AppError>;

    /// Insert the default categories when none exist. Returns how many were inserted.
    async fn seed_default_categories(&self) -> Result<u64, AppError>;

    async fn questions(&self) -> Result<Vec<Question>, AppError>;

    async fn questions_page(&self, offset: u64, limit: u64) -> Result<Vec<Question>, AppError>;

    async fn count_questions(&self) -> Result<u64, AppError>;

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, AppError>;

    /// Case-insensitive substring match on question text. `%` and `_` match literally.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, AppError>;

    async fn insert_question(&self, question: &NewQuestion) -> Result<i64, AppError>;

    /// Returns false when no question had that id.
    async fn delete_question(&self, id: i64) -> Result<bool, AppError>;
}
