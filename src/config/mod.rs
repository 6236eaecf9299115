use serde::Deserialize;
use std::env;

// Top-level configuration, one section per concern
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub booking: BookingConfig,
    pub seed: SeedConfig,
}

// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Database settings
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

// Purchase rules
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// Generic names that signal an unfilled customer field rather than a real customer.
    pub placeholder_names: Vec<String>,
}

// Demo data
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    pub enabled: bool,
}

const DEFAULT_PLACEHOLDER_NAMES: &[&str] = &["your name", "customer name", "seu nome", "nome do cliente"];

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, config::ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let placeholders = lookup("PLACEHOLDER_NAMES").map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

        config::Config::builder()
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 8000)?
            .set_default("app.environment", "development")?
            .set_default("app.rust_log", "cinema_booking=debug,tower_http=debug")?
            .set_default("database.url", "sqlite://cinema.db")?
            .set_default("database.pool_size", 5)?
            .set_default(
                "booking.placeholder_names",
                DEFAULT_PLACEHOLDER_NAMES
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>(),
            )?
            .set_default("seed.enabled", false)?
            .set_override_option("app.host", lookup("HOST"))?
            .set_override_option("app.port", lookup("PORT"))?
            .set_override_option("app.environment", lookup("ENVIRONMENT"))?
            .set_override_option("app.rust_log", lookup("RUST_LOG"))?
            .set_override_option("database.url", lookup("DATABASE_URL"))?
            .set_override_option("database.pool_size", lookup("DB_POOL_SIZE"))?
            .set_override_option("booking.placeholder_names", placeholders)?
            .set_override_option("seed.enabled", lookup("SEED_DEMO_DATA"))?
            .build()?
            .try_deserialize()
    }
}

impl BookingConfig {
    pub fn is_placeholder_name(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.placeholder_names
            .iter()
            .any(|p| p.trim().to_lowercase() == name)
    }
}
