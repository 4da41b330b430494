//! Quiz play: one random unseen question per call.

use crate::deserializers::deserialize_int_like;
use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::models::Question;
use crate::service::quiz::QuizScope;
use crate::service::TriviaService;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_int_like")]
    pub id: i64,
}

#[derive(Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    pub previous_questions: Vec<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizBody {
    pub previous_questions: Vec<i64>,
    pub question: Option<Question>,
}

/// POST /quizzes
pub async fn next_question(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<QuizRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let scope = QuizScope::from_category_id(body.quiz_category.id);
    let question =
        TriviaService::next_quiz_question(state.repo.as_ref(), scope, &body.previous_questions)
            .await?;
    Ok(Json(QuizBody {
        previous_questions: body.previous_questions,
        question,
    }))
}
