//! SeaORM entities for the character collection tables.

pub mod prelude;

pub mod character;
pub mod user;
pub mod user_character;
