//! HTTP handlers for categories, questions, and quizzes.

pub mod categories;
pub mod questions;
pub mod quizzes;

use crate::error::AppError;

/// Any unmatched route.
pub async fn not_found() -> AppError {
    AppError::NotFound("no such route".into())
}
