use async_trait::async_trait;

use crate::error::Error;

/// Who can see a reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Everyone in the channel
    Public,
    /// Only the user who ran the command
    Ephemeral,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    pub visibility: Visibility,
}

impl Reply {
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            visibility: Visibility::Public,
        }
    }

    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            visibility: Visibility::Ephemeral,
        }
    }
}

/// Converts a value, usually an error, into the reply shown to the invoking user.
pub trait IntoReply {
    fn into_reply(self) -> Reply;
}

/// A chat platform member as seen by a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub id: i64,
    pub display_name: String,
}

/// The user and channel a command was run from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub user: Member,
    pub channel_id: i64,
}

/// Delivers replies back through the host platform.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, invocation: &Invocation, reply: Reply) -> Result<(), Error>;
}
