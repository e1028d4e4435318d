//! Platform-neutral command layer.
//!
//! Host adapters translate platform events into an [`Invocation`](reply::Invocation)
//! plus a [`Command`], hand them to the [`CommandHandler`](handler::CommandHandler)
//! and deliver the resulting [`Reply`](reply::Reply) values through a
//! [`Responder`](reply::Responder). Plain chat messages go to the
//! [`MessageBus`](wait::MessageBus) so `roll` can wait for a pick.

pub mod handler;
pub mod reply;
pub mod wait;

use crate::command::reply::Member;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Offer three random characters and claim the one picked
    Roll,
    /// Compare a random owned character against the opponent's
    Battle { opponent: Member },
    /// Add a character to the catalog, admin only
    AddChar { name: String, power: i64 },
    /// List owned characters
    MyChars,
    /// Delete all owned characters
    DeleteChars,
    /// Trade an owned character for cash
    Sacrifice { character_name: String },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Roll => "roll",
            Self::Battle { .. } => "battle",
            Self::AddChar { .. } => "addchar",
            Self::MyChars => "mychars",
            Self::DeleteChars => "deletechars",
            Self::Sacrifice { .. } => "sacrifice",
        }
    }
}
