use thiserror::Error;

use crate::{
    command::reply::{IntoReply, Reply},
    error::UnexpectedError,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoReply for ConfigError {
    fn into_reply(self) -> Reply {
        UnexpectedError(self).into_reply()
    }
}
