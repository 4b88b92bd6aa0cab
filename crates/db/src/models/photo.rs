//! Photo entity model and its embedded comment documents.

use photoshare_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Full photo row from the `photos` table.
///
/// `user_id` references the owning user but is deliberately not a foreign
/// key: ownership is unenforced at the data layer and may dangle, matching
/// the upstream collections this schema mirrors.
#[derive(Debug, Clone, FromRow)]
pub struct Photo {
    pub id: DbId,
    pub user_id: DbId,
    pub file_name: String,
    pub date_time: Timestamp,
    /// Embedded comment documents, in insertion (= display) order.
    pub comments: Json<Vec<Comment>>,
}

/// A comment document embedded in `photos.comments`.
///
/// `id` is scoped to the parent photo. `user_id` is the author reference
/// and may point at a user that no longer exists; resolution decides what
/// to do with dangling authors, not this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: DbId,
    pub comment: String,
    pub date_time: Timestamp,
    pub user_id: DbId,
}
