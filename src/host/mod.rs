//! Adapters connecting a chat surface to the command layer.

pub mod console;
