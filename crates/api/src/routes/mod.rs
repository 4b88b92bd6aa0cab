//! Route construction.
//!
//! Each submodule mounts one resource's routes; [`api_routes`] assembles
//! the full read-only surface.

pub mod comments;
pub mod health;
pub mod photos;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the read-only API route tree.
///
/// ```text
/// GET /user/list             -> users::list
/// GET /user/{id}             -> users::get_by_id
/// GET /photosOfUser/{id}     -> photos::photos_of_user
/// GET /commentsOfUser/{id}   -> comments::comments_of_user
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(photos::router())
        .merge(comments::router())
}
