//! Repository for the `photos` table and its embedded comments.
//!
//! Comment-level queries unwind the `comments` JSONB array with
//! `jsonb_array_elements`, so counting is per comment entry, not per photo:
//! a photo with three comments by the same author contributes 3.

use photoshare_core::types::DbId;
use sqlx::PgPool;

use crate::models::photo::Photo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, file_name, date_time, comments";

/// Provides read operations for photos.
pub struct PhotoRepo;

impl PhotoRepo {
    /// List all photos owned by a user, in natural (insertion) order.
    pub async fn list_by_owner(pool: &PgPool, user_id: DbId) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photos WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Photo>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List all photos carrying at least one comment authored by the given
    /// user, in natural order.
    pub async fn list_commented_by(pool: &PgPool, user_id: DbId) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photos p
             WHERE EXISTS (
                 SELECT 1 FROM jsonb_array_elements(p.comments) AS c
                 WHERE (c->>'user_id')::bigint = $1
             )
             ORDER BY id"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Count the photos owned by a user.
    pub async fn count_by_owner(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM photos WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Count the comment entries authored by a user across all photos.
    pub async fn count_comments_by_author(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)
             FROM photos p
             CROSS JOIN LATERAL jsonb_array_elements(p.comments) AS c
             WHERE (c->>'user_id')::bigint = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}
