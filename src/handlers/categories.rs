//! Category handlers: the category map and questions filtered by category.

use crate::error::AppError;
use crate::extractors::{ApiPath, ApiQuery};
use crate::models::{CategoryMap, Question};
use crate::service::TriviaService;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct CategoriesBody {
    pub categories: CategoryMap,
}

#[derive(Deserialize)]
pub struct CategoryQuestionsQuery {
    #[serde(rename = "currentCategory")]
    pub current_category: Option<String>,
}

#[derive(Serialize)]
pub struct CategoryQuestionsBody {
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub current_category: Option<String>,
}

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let categories = TriviaService::categories(state.repo.as_ref()).await?;
    Ok(Json(CategoriesBody { categories }))
}

/// GET /categories/:category_id/questions. currentCategory is echoed and never used to filter.
pub async fn questions_by_category(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<CategoryQuestionsQuery>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let questions = TriviaService::by_category(state.repo.as_ref(), category_id).await?;
    Ok(Json(CategoryQuestionsBody {
        total_questions: questions.len() as u64,
        questions,
        current_category: query.current_category,
    }))
}
