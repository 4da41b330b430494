//! Trivia routes: categories, questions, search, quizzes.

use crate::handlers::categories::{list_categories, questions_by_category};
use crate::handlers::questions::{create_question, delete_question, list_questions, search_questions};
use crate::handlers::quizzes::next_question;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn trivia_routes(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:category_id/questions", get(questions_by_category))
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/:question_id", delete(delete_question))
        .route("/quizzes", post(next_question))
        .with_state(state)
}
