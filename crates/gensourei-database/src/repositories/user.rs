//! Account repository.

use async_trait::async_trait;
use sqlx::PgPool;

use gensourei_core::error::{AppError, ErrorKind};
use gensourei_core::result::AppResult;
use gensourei_core::traits::CredentialStore;
use gensourei_core::types::{NewUser, UserRecord};

/// Name of the case-insensitive unique index on `users.username`.
const USERNAME_UNIQUE_INDEX: &str = "users_username_lower_key";

/// PostgreSQL-backed [`CredentialStore`].
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn insert(&self, user: &NewUser) -> AppResult<UserRecord> {
        // The unique index decides races between concurrent registrations.
        sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (username, password_hash) VALUES ($1, $2) \
             RETURNING id, username, password_hash, created_at",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(USERNAME_UNIQUE_INDEX) =>
            {
                AppError::already_exists(format!("User '{}' already exists", user.username))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    async fn find_by_identity(&self, username: &str) -> AppResult<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, password_hash, created_at FROM users \
             WHERE LOWER(username) = LOWER($1)",
        )
        .bind(username.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
        })
    }
}
