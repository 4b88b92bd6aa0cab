//! Handlers for the `/user` resource: the listing with derived counts and
//! the single-profile detail view.

use axum::extract::{Path, State};
use axum::Json;
use futures::future;
use photoshare_core::error::CoreError;
use photoshare_core::types::DbId;
use photoshare_db::repositories::{PhotoRepo, UserRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_user_id;
use crate::state::AppState;

/// A single row of `GET /user/list`: identity plus derived counts.
#[derive(Debug, Serialize)]
pub struct UserListItem {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    /// Number of photos owned by this user.
    #[serde(rename = "photoCount")]
    pub photo_count: i64,
    /// Number of comment entries authored by this user across all photos.
    /// Counted per comment, not per photo.
    #[serde(rename = "commentCount")]
    pub comment_count: i64,
}

/// Full profile for `GET /user/{id}`.
#[derive(Debug, Serialize)]
pub struct UserDetail {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub description: String,
    pub occupation: String,
}

/// GET /user/list
///
/// Lists all users with their derived photo and comment counts. The two
/// counts for one user run concurrently, as do the computations for
/// different users; output order follows the store's natural user order
/// regardless of completion order. Any query failure fails the whole
/// request with no partial results.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserListItem>>> {
    let users = UserRepo::list_brief(&state.pool).await?;

    let items = future::try_join_all(users.into_iter().map(|user| {
        let pool = &state.pool;
        async move {
            let (photo_count, comment_count) = tokio::try_join!(
                PhotoRepo::count_by_owner(pool, user.id),
                PhotoRepo::count_comments_by_author(pool, user.id),
            )?;

            Ok::<_, sqlx::Error>(UserListItem {
                id: user.id,
                first_name: user.first_name,
                last_name: user.last_name,
                photo_count,
                comment_count,
            })
        }
    }))
    .await?;

    Ok(Json(items))
}

/// GET /user/{id}
///
/// Malformed identifiers, unknown identifiers, and any store failure all
/// collapse to the same 400 response.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserDetail>> {
    let detail = fetch_detail(&state, &id)
        .await
        .map_err(|err| err.collapse_to_invalid_user_id("user detail"))?;
    Ok(Json(detail))
}

async fn fetch_detail(state: &AppState, raw_id: &str) -> Result<UserDetail, AppError> {
    let id = parse_user_id(raw_id)?;

    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;

    Ok(UserDetail {
        id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        location: user.location,
        description: user.description,
        occupation: user.occupation,
    })
}
