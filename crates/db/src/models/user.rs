//! User entity model.

use photoshare_core::types::DbId;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Users are created and mutated outside this system; every projection here
/// is read-only.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub description: String,
    pub occupation: String,
}

/// Name-only projection used by the user listing and by comment-author
/// resolution.
#[derive(Debug, Clone, FromRow)]
pub struct UserBrief {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
}
