//! Shared application state for all routes.

use crate::repository::TriviaRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn TriviaRepository>,
    pub questions_per_page: u32,
}

impl AppState {
    pub fn new(repo: Arc<dyn TriviaRepository>, questions_per_page: u32) -> Self {
        AppState {
            repo,
            questions_per_page,
        }
    }
}
