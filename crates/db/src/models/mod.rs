//! Row models for the two collections.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row. Comments are not a top-level entity: they live embedded in the
//! `photos.comments` JSONB column and are decoded into typed structs at the
//! row boundary, never inspected as raw JSON at access sites.

pub mod photo;
pub mod user;
