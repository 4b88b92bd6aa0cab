//! Route definitions for the `/user` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// ```text
/// GET /user/list     -> list (names plus derived counts)
/// GET /user/{id}     -> get_by_id (full profile)
/// ```
///
/// The static `/user/list` segment takes priority over the `{id}` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/list", get(users::list))
        .route("/user/{id}", get(users::get_by_id))
}
