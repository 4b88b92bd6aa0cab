//! Handlers for `/commentsOfUser/{id}`: every comment a user has authored,
//! flattened across photos and sorted newest first.

use axum::extract::{Path, State};
use axum::Json;
use photoshare_core::error::CoreError;
use photoshare_core::types::{DbId, Timestamp};
use photoshare_db::models::photo::Photo;
use photoshare_db::repositories::{PhotoRepo, UserRepo};
use photoshare_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_user_id;
use crate::state::AppState;

/// Trimmed reference to the photo a comment was left on.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoRef {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub user_id: DbId,
    pub file_name: String,
}

/// One authored comment paired with its photo reference.
#[derive(Debug, Serialize)]
pub struct AuthoredComment {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub comment: String,
    pub date_time: Timestamp,
    pub photo: PhotoRef,
}

/// GET /commentsOfUser/{id}
///
/// Every failure, including ones unrelated to the identifier, is reported
/// as the same 400 response.
pub async fn comments_of_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<AuthoredComment>>> {
    let comments = assemble_comments(&state.pool, &id)
        .await
        .map_err(|err| err.collapse_to_invalid_user_id("comments of user"))?;
    Ok(Json(comments))
}

async fn assemble_comments(pool: &DbPool, raw_id: &str) -> Result<Vec<AuthoredComment>, AppError> {
    let id = parse_user_id(raw_id)?;

    if !UserRepo::exists(pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    let photos = PhotoRepo::list_commented_by(pool, id).await?;
    Ok(flatten_authored_comments(photos, id))
}

/// Keep only the comments authored by `author_id`, pair each with a trimmed
/// reference to its photo, and sort the whole set newest first.
///
/// The sort is global across photos and stable; order among exact timestamp
/// ties is unspecified.
fn flatten_authored_comments(photos: Vec<Photo>, author_id: DbId) -> Vec<AuthoredComment> {
    let mut items: Vec<AuthoredComment> = photos
        .into_iter()
        .flat_map(|photo| {
            let Photo {
                id,
                user_id,
                file_name,
                comments,
                ..
            } = photo;
            let photo_ref = PhotoRef {
                id,
                user_id,
                file_name,
            };

            comments
                .0
                .into_iter()
                .filter(move |c| c.user_id == author_id)
                .map(move |c| AuthoredComment {
                    id: c.id,
                    comment: c.comment,
                    date_time: c.date_time,
                    photo: photo_ref.clone(),
                })
        })
        .collect();

    items.sort_by(|a, b| b.date_time.cmp(&a.date_time));
    items
}
