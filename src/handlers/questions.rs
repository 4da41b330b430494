//! Question handlers: paged listing, create, delete, search.

use crate::deserializers::deserialize_int_like;
use crate::error::AppError;
use crate::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::models::{CategoryMap, NewQuestion, Question};
use crate::response::success;
use crate::service::pagination::parse_page;
use crate::service::TriviaService;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The front-end sends the literal string "null" when no category is selected.
const NULL_CATEGORY: &str = "null";

#[derive(Serialize)]
pub struct QuestionListBody {
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "deserialize_int_like")]
    pub difficulty: i64,
    #[serde(deserialize_with = "deserialize_int_like")]
    pub category: i64,
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(r: CreateQuestionRequest) -> Self {
        NewQuestion {
            question: r.question,
            answer: r.answer,
            category: r.category,
            difficulty: r.difficulty,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_term: String,
    #[serde(default)]
    pub current_category: Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody {
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub current_category: Value,
}

/// GET /questions?page=&currentCategory=
pub async fn list_questions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<HashMap<String, String>>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let page = parse_page(params.get("page").map(String::as_str))?;
    let current_category = params
        .get("currentCategory")
        .filter(|c| c.as_str() != NULL_CATEGORY)
        .cloned();
    let listing =
        TriviaService::list_page(state.repo.as_ref(), page, state.questions_per_page).await?;
    Ok(Json(QuestionListBody {
        questions: listing.questions,
        total_questions: listing.total,
        categories: listing.categories,
        current_category,
    }))
}

/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateQuestionRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    TriviaService::create(state.repo.as_ref(), body.into()).await?;
    Ok(success())
}

/// DELETE /questions/:question_id
pub async fn delete_question(
    State(state): State<AppState>,
    ApiPath(question_id): ApiPath<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    TriviaService::delete(state.repo.as_ref(), question_id).await?;
    Ok(success())
}

/// POST /questions/search
pub async fn search_questions(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SearchRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let questions = TriviaService::search(state.repo.as_ref(), &body.search_term).await?;
    Ok(Json(SearchBody {
        total_questions: questions.len() as u64,
        questions,
        current_category: body.current_category,
    }))
}
