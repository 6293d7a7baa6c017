pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::user_model::User;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The identifier is already taken. Raised by the unique index on
    /// `email_or_mobile`, so concurrent signups cannot both win.
    #[error("user already exists")]
    Conflict,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Durable persistence and retrieval of user records. Constructed once at
/// startup and injected into the handlers.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Exact-match lookup by identifier (email or mobile).
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user with default profile fields and an empty cart.
    /// Returns [`StoreError::Conflict`] when the identifier is taken.
    async fn create(&self, identifier: &str, password_hash: &str) -> Result<User, StoreError>;
}
