//! Trivia API: categories, paged questions, search, and quiz play over PostgreSQL.

pub mod bootstrap;
pub mod deserializers;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;
pub mod telemetry;

pub use bootstrap::build_repository;
pub use error::{AppError, ConfigError};
pub use memory::MemoryRepository;
pub use models::{Category, NewQuestion, Question};
pub use repository::TriviaRepository;
pub use routes::{app, common_routes, trivia_routes};
pub use service::TriviaService;
pub use settings::{Settings, StorageKind};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables, PgRepository};
