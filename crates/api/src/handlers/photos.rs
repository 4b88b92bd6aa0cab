//! Handlers for `/photosOfUser/{id}`: a user's photos with every embedded
//! comment resolved to commenter identity.

use axum::extract::{Path, State};
use axum::Json;
use futures::future;
use photoshare_core::error::CoreError;
use photoshare_core::types::{DbId, Timestamp};
use photoshare_db::models::photo::{Comment, Photo};
use photoshare_db::repositories::{PhotoRepo, UserRepo};
use photoshare_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_user_id;
use crate::state::AppState;

/// Resolved commenter identity attached to each comment.
#[derive(Debug, Serialize)]
pub struct CommentAuthor {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
}

/// A comment with its author resolved.
#[derive(Debug, Serialize)]
pub struct ResolvedComment {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub comment: String,
    pub date_time: Timestamp,
    pub user: CommentAuthor,
}

/// A photo with all of its comments resolved.
#[derive(Debug, Serialize)]
pub struct PhotoWithComments {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub user_id: DbId,
    pub file_name: String,
    pub date_time: Timestamp,
    pub comments: Vec<ResolvedComment>,
}

/// GET /photosOfUser/{id}
///
/// Every failure, including ones unrelated to the identifier, is reported
/// as the same 400 response.
pub async fn photos_of_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<PhotoWithComments>>> {
    let photos = assemble_photos(&state.pool, &id)
        .await
        .map_err(|err| err.collapse_to_invalid_user_id("photos of user"))?;
    Ok(Json(photos))
}

async fn assemble_photos(pool: &DbPool, raw_id: &str) -> Result<Vec<PhotoWithComments>, AppError> {
    let id = parse_user_id(raw_id)?;

    if !UserRepo::exists(pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    let photos = PhotoRepo::list_by_owner(pool, id).await?;

    // Author lookups run concurrently within and across photos; try_join_all
    // yields results in input order, so photo and comment order survive.
    future::try_join_all(photos.into_iter().map(|photo| resolve_photo(pool, photo))).await
}

async fn resolve_photo(pool: &DbPool, photo: Photo) -> Result<PhotoWithComments, AppError> {
    let Photo {
        id,
        user_id,
        file_name,
        date_time,
        comments,
    } = photo;

    let comments =
        future::try_join_all(comments.0.into_iter().map(|c| resolve_comment(pool, c))).await?;

    Ok(PhotoWithComments {
        id,
        user_id,
        file_name,
        date_time,
        comments,
    })
}

/// Resolve one comment's author.
///
/// A dangling author reference is not an error: the comment is kept with an
/// "Unknown" placeholder carrying the original author id.
async fn resolve_comment(pool: &DbPool, comment: Comment) -> Result<ResolvedComment, AppError> {
    let user = match UserRepo::find_brief_by_id(pool, comment.user_id).await? {
        Some(author) => CommentAuthor {
            id: author.id,
            first_name: author.first_name,
            last_name: author.last_name,
        },
        None => CommentAuthor {
            id: comment.user_id,
            first_name: "Unknown".to_string(),
            last_name: String::new(),
        },
    };

    Ok(ResolvedComment {
        id: comment.id,
        comment: comment.comment,
        date_time: comment.date_time,
        user,
    })
}
