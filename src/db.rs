use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY,
    email_or_mobile TEXT NOT NULL,
    name TEXT NOT NULL DEFAULT '',
    mobile TEXT NOT NULL DEFAULT '',
    address TEXT NOT NULL DEFAULT '',
    profile_image TEXT NOT NULL DEFAULT '',
    cart JSONB NOT NULL DEFAULT '[]'::jsonb,
    password_hash TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

// Duplicate signups race to this index; the loser surfaces as a conflict.
const CREATE_IDENTIFIER_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS users_email_or_mobile_key ON users (email_or_mobile)";

/// Connect to PostgreSQL and make sure the schema exists.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::query(CREATE_USERS_TABLE).execute(&pool).await?;
    sqlx::query(CREATE_IDENTIFIER_INDEX).execute(&pool).await?;

    Ok(pool)
}
