//! Outcome types returned by the service layer.
//!
//! Not-found and validation conditions are ordinary outcomes rather than errors,
//! each maps to a specific reply in the command layer.

pub mod battle;
pub mod catalog;
pub mod collection;
pub mod roll;
