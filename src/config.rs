use std::env;
use std::fmt;

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Server settings, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// bcrypt work factor used when hashing new passwords.
    pub bcrypt_cost: u32,
    /// When set, session cookies are signed instead of carrying the bare username.
    pub session_secret: Option<String>,
}

/// A configuration variable that is present but unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            session_secret: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError {
                key: "SERVER_PORT",
                message: format!("must be a port number, got {:?}", raw),
            })?,
            None => defaults.server_port,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => {
                let cost: u32 = raw.trim().parse().map_err(|_| ConfigError {
                    key: "BCRYPT_COST",
                    message: format!("must be a number, got {:?}", raw),
                })?;
                if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
                    return Err(ConfigError {
                        key: "BCRYPT_COST",
                        message: format!(
                            "must be between {} and {}, got {}",
                            MIN_BCRYPT_COST, MAX_BCRYPT_COST, cost
                        ),
                    });
                }
                cost
            }
            None => defaults.bcrypt_cost,
        };

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            bcrypt_cost,
            session_secret: lookup("SESSION_SECRET").filter(|s| !s.is_empty()),
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
