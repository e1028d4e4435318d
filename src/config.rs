use std::time::Duration;

use crate::error::config::ConfigError;

static DEFAULT_DATABASE_URL: &str = "sqlite://mitchdae.db?mode=rwc";
static DEFAULT_ROLL_TIMEOUT_SECS: u64 = 20;
static MAX_ROLL_TIMEOUT_SECS: u64 = 3600;

pub struct Config {
    pub database_url: String,
    /// How long `roll` waits for the user to pick one of the offered characters
    pub roll_timeout: Duration,
    /// Platform IDs allowed to run `addchar`
    pub admin_ids: Vec<i64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source, used by [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let roll_timeout = match lookup("ROLL_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_ROLL_TIMEOUT_SECS),
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if (1..=MAX_ROLL_TIMEOUT_SECS).contains(&secs) => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "ROLL_TIMEOUT_SECS".to_string(),
                        reason: format!(
                            "expected between 1 and {} seconds, got {:?}",
                            MAX_ROLL_TIMEOUT_SECS, value
                        ),
                    })
                }
            },
        };

        let admin_ids = match lookup("ADMIN_USER_IDS") {
            None => Vec::new(),
            Some(value) => parse_admin_ids(&value)?,
        };

        Ok(Self {
            database_url,
            roll_timeout,
            admin_ids,
        })
    }
}

fn parse_admin_ids(value: &str) -> Result<Vec<i64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<i64>()
                .map_err(|_| ConfigError::InvalidEnvValue {
                    var: "ADMIN_USER_IDS".to_string(),
                    reason: format!("{:?} is not a numeric user ID", id),
                })
        })
        .collect()
}
