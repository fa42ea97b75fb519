use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const QUESTIONS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS questions (
    id               UUID PRIMARY KEY,
    text             TEXT NOT NULL,
    category         TEXT NOT NULL CHECK (category IN ('technical', 'behavioral', 'general')),
    difficulty       TEXT NOT NULL DEFAULT 'intermediate'
                     CHECK (difficulty IN ('beginner', 'intermediate', 'advanced')),
    job_role         TEXT NOT NULL,
    suggested_answer TEXT,
    created_by       UUID NOT NULL,
    is_ai_generated  BOOLEAN NOT NULL DEFAULT FALSE,
    created_at       TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the `questions` table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(QUESTIONS_SCHEMA).execute(pool).await?;
    info!("Question schema ready");
    Ok(())
}
