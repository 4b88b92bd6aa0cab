//! Repository for the `users` table.

use photoshare_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{User, UserBrief};

/// Column list shared across full-profile queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, location, description, occupation";

/// Name-only projection for listings and comment-author resolution.
const BRIEF_COLUMNS: &str = "id, first_name, last_name";

/// Provides read operations for users.
pub struct UserRepo;

impl UserRepo {
    /// List all users in natural (insertion) order, names only.
    pub async fn list_brief(pool: &PgPool) -> Result<Vec<UserBrief>, sqlx::Error> {
        let query = format!("SELECT {BRIEF_COLUMNS} FROM users ORDER BY id");
        sqlx::query_as::<_, UserBrief>(&query).fetch_all(pool).await
    }

    /// Find a user's full profile by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user's name-only projection by ID.
    pub async fn find_brief_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UserBrief>, sqlx::Error> {
        let query = format!("SELECT {BRIEF_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, UserBrief>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a user with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
