use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::{StoreError, UserStore};
use crate::models::user_model::{CartItem, User};

const USER_COLUMNS: &str =
    "id, email_or_mobile, name, mobile, address, profile_image, cart, password_hash, created_at";

/// PostgreSQL-backed [`UserStore`] over a shared connection pool.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email_or_mobile: String,
    name: String,
    mobile: String,
    address: String,
    profile_image: String,
    cart: Json<Vec<CartItem>>,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email_or_mobile: row.email_or_mobile,
            name: row.name,
            mobile: row.mobile,
            address: row.address,
            profile_image: row.profile_image,
            cart: row.cart.0,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email_or_mobile = $1"
        ))
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn create(&self, identifier: &str, password_hash: &str) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (id, email_or_mobile, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(identifier)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::Conflict,
            _ => StoreError::Database(err),
        })?;

        Ok(row.into())
    }
}
