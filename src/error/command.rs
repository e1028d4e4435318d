use thiserror::Error;

use crate::command::reply::{IntoReply, Reply};

/// Errors raised while turning user input into a [`Command`](crate::command::Command).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: /{0}")]
    UnknownCommand(String),
    #[error("/{command} is missing the {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("Invalid {argument} for /{command}: {reason}")]
    InvalidArgument {
        command: &'static str,
        argument: &'static str,
        reason: String,
    },
}

impl IntoReply for CommandError {
    fn into_reply(self) -> Reply {
        tracing::debug!("Rejected command input: {}", self);

        Reply::ephemeral(self.to_string())
    }
}
