//! Error types for the bot.
//!
//! Domain errors are grouped per concern (configuration, command input) and
//! aggregated into [`Error`]. Every error can be turned into a [`Reply`] shown
//! to the user who ran the command, see [`IntoReply`].

pub mod command;
pub mod config;

use thiserror::Error;

use crate::{
    command::reply::{IntoReply, Reply},
    error::{command::CommandError, config::ConfigError},
};

/// Main error type for the bot.
///
/// External library errors convert through `#[from]`, so repositories and
/// services can use `?` on database calls directly.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Command input could not be parsed.
    #[error(transparent)]
    CommandError(#[from] CommandError),
    /// Internal error indicating a bug in the bot.
    #[error("Internal error, this indicates a bug: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error from the host adapter.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoReply for Error {
    fn into_reply(self) -> Reply {
        match self {
            Self::ConfigError(err) => err.into_reply(),
            Self::CommandError(err) => err.into_reply(),
            err => UnexpectedError(err).into_reply(),
        }
    }
}

/// Wrapper converting any displayable error into a generic failure reply.
///
/// The full error is logged, the user only sees that the command failed.
pub struct UnexpectedError<E>(pub E);

impl<E: std::fmt::Display> IntoReply for UnexpectedError<E> {
    fn into_reply(self) -> Reply {
        tracing::error!("{}", self.0);

        Reply::ephemeral("Something went wrong while running that command.")
    }
}
