//! Data access layer repositories.
//!
//! Repositories wrap the sea-orm queries for one table each. They are generic
//! over [`sea_orm::ConnectionTrait`] so services can run them on either the
//! shared connection or an open transaction.

pub mod character;
pub mod user;
pub mod user_character;
