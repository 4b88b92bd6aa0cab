use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
