use serde::Deserialize;

/// Configuration loaded from environment variables
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Database connection URL, read from `DATABASE_URL`
    pub database_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::default())
    }

    fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(environment)
            .build()?;

        settings.try_deserialize()
    }
}
