//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument. This system never writes:
//! there are no create/update/delete methods by design.

pub mod photo_repo;
pub mod user_repo;

pub use photo_repo::PhotoRepo;
pub use user_repo::UserRepo;
