//! PostgreSQL-backed repository plus database/table bootstrap.

use crate::error::AppError;
use crate::models::{Category, NewQuestion, Question};
use crate::repository::{TriviaRepository, DEFAULT_CATEGORIES};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// PostgreSQL foreign_key_violation.
const FK_VIOLATION: &str = "23503";

/// Create `categories` and `questions` if they do not exist. Safe to run on every start.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id BIGSERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id BIGSERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category BIGINT NOT NULL REFERENCES categories (id),
            difficulty BIGINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS questions_category_idx ON questions (category)")
        .execute(pool)
        .await?;
    Ok(())
}

/// Connect to the server's `postgres` database and create the target database when missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::Internal(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::Internal("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Escape LIKE metacharacters so the term matches as a plain substring (used with `ESCAPE '\'`).
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        PgRepository { pool }
    }
}

#[async_trait]
impl TriviaRepository for PgRepository {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn categories(&self) -> Result<Vec<Category>, AppError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn category_exists(&self, id: i64) -> Result<bool, AppError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists.0)
    }

    async fn seed_default_categories(&self) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(&mut *tx)
            .await?;
        if count > 0 {
            return Ok(0);
        }
        for (i, kind) in DEFAULT_CATEGORIES.iter().enumerate() {
            sqlx::query("INSERT INTO categories (id, type) VALUES ($1, $2)")
                .bind(i as i64 + 1)
                .bind(*kind)
                .execute(&mut *tx)
                .await?;
        }
        // explicit ids bypass the sequence
        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('categories', 'id'), (SELECT MAX(id) FROM categories))",
        )
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(DEFAULT_CATEGORIES.len() as u64)
    }

    async fn questions(&self) -> Result<Vec<Question>, AppError> {
        let sql = format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Question>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn questions_page(&self, offset: u64, limit: u64) -> Result<Vec<Question>, AppError> {
        let sql = format!(
            "SELECT {} FROM questions ORDER BY id LIMIT $1 OFFSET $2",
            QUESTION_COLUMNS
        );
        tracing::debug!(sql = %sql, offset, limit, "query");
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn count_questions(&self) -> Result<u64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, AppError> {
        let sql = format!(
            "SELECT {} FROM questions WHERE category = $1 ORDER BY id",
            QUESTION_COLUMNS
        );
        tracing::debug!(sql = %sql, category, "query");
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, AppError> {
        let sql = format!(
            r"SELECT {} FROM questions WHERE question ILIKE '%' || $1 || '%' ESCAPE '\' ORDER BY id",
            QUESTION_COLUMNS
        );
        tracing::debug!(sql = %sql, term = %term, "query");
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(escape_like(term))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<i64, AppError> {
        let res: Result<(i64,), sqlx::Error> = sqlx::query_as(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await;
        match res {
            Ok((id,)) => Ok(id),
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(FK_VIOLATION) => Err(
                AppError::Unprocessable(format!("category {} does not exist", question.category)),
            ),
            Err(e) => Err(AppError::Db(e)),
        }
    }

    async fn delete_question(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
