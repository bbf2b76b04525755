use crate::server::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,

    /// Base URL of the identity service used to verify bearer tokens.
    pub auth_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            auth_api_url: std::env::var("AUTH_API_URL")
                .map_err(|_| ConfigError::MissingEnvVar("AUTH_API_URL".to_string()))?,
        })
    }
}
