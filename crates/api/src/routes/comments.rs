//! Route definitions for the comments-of-user view.

use axum::routing::get;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// ```text
/// GET /commentsOfUser/{id}   -> comments_of_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/commentsOfUser/{id}", get(comments::comments_of_user))
}
