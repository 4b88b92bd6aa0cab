//! Route definitions for the photos-of-user view.

use axum::routing::get;
use axum::Router;

use crate::handlers::photos;
use crate::state::AppState;

/// ```text
/// GET /photosOfUser/{id}   -> photos_of_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/photosOfUser/{id}", get(photos::photos_of_user))
}
