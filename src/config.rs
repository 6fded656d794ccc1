use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let server_port = env::var("PORT")
            .map_err(|_| ConfigError::MissingPort)?
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        Ok(Config {
            database_url,
            server_port,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL environment variable not set")]
    MissingDatabaseUrl,

    #[error("PORT environment variable not set")]
    MissingPort,

    #[error("Invalid port number")]
    InvalidPort,
}
