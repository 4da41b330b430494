//! Build the configured repository: connect, create tables, optionally seed.

use crate::error::AppError;
use crate::memory::MemoryRepository;
use crate::repository::TriviaRepository;
use crate::settings::{Settings, StorageKind};
use crate::store::{ensure_database_exists, ensure_tables, PgRepository};
use std::sync::Arc;

pub async fn build_repository(settings: &Settings) -> Result<Arc<dyn TriviaRepository>, AppError> {
    let repo: Arc<dyn TriviaRepository> = match settings.storage {
        StorageKind::Postgres => {
            ensure_database_exists(&settings.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(&settings.database_url)
                .await?;
            ensure_tables(&pool).await?;
            Arc::new(PgRepository::new(pool))
        }
        StorageKind::Memory => {
            tracing::warn!("using in-memory storage; data is lost on exit");
            Arc::new(MemoryRepository::new())
        }
    };
    if settings.seed_categories {
        let inserted = repo.seed_default_categories().await?;
        tracing::info!(inserted, "seeded default categories");
    }
    Ok(repo)
}
