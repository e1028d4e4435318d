//! Service layer for the character collection game.
//!
//! Services implement the game rules on top of the repositories: catalog
//! generation and admin additions, rolling and claiming, battles, and the
//! list / delete / sacrifice operations on a user's collection. Multi-step
//! writes run inside a single database transaction.

pub mod battle;
pub mod catalog;
pub mod roll;
pub mod user_character;
