//! Request handlers for the read-only aggregation endpoints.
//!
//! Each submodule provides the async handler functions and the wire-format
//! response types for one resource. Handlers delegate queries to the
//! repositories in `photoshare_db` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod comments;
pub mod photos;
pub mod users;

use photoshare_core::error::CoreError;
use photoshare_core::types::DbId;

use crate::error::AppError;

/// Parse a raw path parameter into a user ID.
///
/// A value that does not parse is reported identically to a missing user:
/// callers cannot distinguish "malformed" from "not found" from the
/// response alone.
pub(crate) fn parse_user_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>()
        .map_err(|_| AppError::Core(CoreError::InvalidId(raw.to_string())))
}
