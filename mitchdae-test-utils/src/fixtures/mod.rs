//! Database fixtures for tests.
//!
//! - `catalog` - catalog characters
//! - `user` - users and their ownership records

pub mod catalog;
pub mod user;
