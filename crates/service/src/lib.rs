//! Service layer providing business-oriented CRUD operations on top of models.
//! - Repositories are the only translators between create/update shapes and rows;
//!   absence is an `Ok(None)` there, never an error.
//! - Services enforce existence before update/delete and are the only layer
//!   that promotes absence into `ServiceError::NotFound`.

pub mod errors;
pub mod patch;

pub mod day;
pub mod food;
pub mod food_availability;
pub mod user;
pub mod vote;

#[cfg(test)]
pub mod test_support;
