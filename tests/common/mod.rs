#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use trivia_api::{
    app, AppError, AppState, Category, MemoryRepository, NewQuestion, Question, Settings,
    TriviaRepository,
};

pub fn categories() -> Vec<Category> {
    ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
        .iter()
        .enumerate()
        .map(|(i, kind)| Category {
            id: i as i64 + 1,
            kind: kind.to_string(),
        })
        .collect()
}

/// 19 questions spread over categories 1..=6; ids 3 and 11 mention "title".
pub fn questions() -> Vec<Question> {
    (1..=19)
        .map(|id| {
            let question = match id {
                3 => "What boxer's original name is Cassius Clay? (no title here)".to_string(),
                11 => "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'? TITLE".to_string(),
                _ => format!("Question number {id}?"),
            };
            Question {
                id,
                question,
                answer: format!("Answer {id}"),
                category: (id - 1) % 6 + 1,
                difficulty: (id % 5) + 1,
            }
        })
        .collect()
}

/// Repository whose every call fails, as if the database were unreachable.
pub struct FailingRepository;

fn down<T>() -> Result<T, AppError> {
    Err(AppError::Internal("database unreachable".into()))
}

#[async_trait]
impl TriviaRepository for FailingRepository {
    async fn ping(&self) -> Result<(), AppError> {
        down()
    }

    async fn categories(&self) -> Result<Vec<Category>, AppError> {
        down()
    }

    async fn category_exists(&self, _id: i64) -> Result<bool, AppError> {
        down()
    }

    async fn seed_default_categories(&self) -> Result<u64, AppError> {
        down()
    }

    async fn questions(&self) -> Result<Vec<Question>, AppError> {
        down()
    }

    async fn questions_page(&self, _offset: u64, _limit: u64) -> Result<Vec<Question>, AppError> {
        down()
    }

    async fn count_questions(&self) -> Result<u64, AppError> {
        down()
    }

    async fn questions_in_category(&self, _category: i64) -> Result<Vec<Question>, AppError> {
        down()
    }

    async fn search_questions(&self, _term: &str) -> Result<Vec<Question>, AppError> {
        down()
    }

    async fn insert_question(&self, _question: &NewQuestion) -> Result<i64, AppError> {
        down()
    }

    async fn delete_question(&self, _id: i64) -> Result<bool, AppError> {
        down()
    }
}

pub fn router_with_settings(repo: Arc<dyn TriviaRepository>, settings: &Settings) -> Router {
    let state = AppState::new(repo, settings.questions_per_page);
    app(state, settings)
}

pub fn router_with(repo: MemoryRepository) -> Router {
    router_with_settings(Arc::new(repo), &Settings::default())
}

pub fn seeded_router() -> Router {
    router_with(MemoryRepository::with_data(categories(), questions()))
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    send_request(router, builder.body(body).unwrap()).await
}

pub async fn send_request(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

pub fn ids(questions: &Value) -> Vec<i64> {
    questions
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}
