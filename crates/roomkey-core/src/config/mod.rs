use anyhow::Result;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    pub url: Option<String>,
    /// Upper bound on pooled connections.
    pub max_connections: u8,
    /// How long a request waits for a connection before failing.
    pub connect_timeout_secs: u64,
    /// Idle pooled connections are closed after this long.
    pub idle_timeout_secs: u64,
}

impl DatabaseConfig {
    /// ## Summary
    /// Returns the connection URL required by the Postgres backend.
    ///
    /// ## Errors
    /// Returns an error if no URL is configured.
    pub fn require_url(&self) -> CoreResult<&str> {
        self.url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                CoreError::InvalidConfiguration(
                    "database.url is required for the postgres backend".to_string(),
                )
            })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Controls how a badge read is matched against published schedules.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// When set, a schedule only matches on its own day of the week.
    pub enforce_day_of_week: bool,
    /// IANA zone used to derive the local weekday of a badge read.
    pub timezone: String,
}

impl ScheduleConfig {
    /// ## Summary
    /// Parses the configured IANA timezone.
    ///
    /// ## Errors
    /// Returns an error if the timezone name is unknown.
    pub fn tz(&self) -> CoreResult<chrono_tz::Tz> {
        self.timezone.parse::<chrono_tz::Tz>().map_err(|_err| {
            CoreError::InvalidConfiguration(format!("unknown timezone '{}'", self.timezone))
        })
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            enforce_day_of_week: false,
            timezone: "UTC".to_string(),
        }
    }
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("database.backend", "postgres")?
        .set_default("database.max_connections", 4)?
        .set_default("database.connect_timeout_secs", 5)?
        .set_default("database.idle_timeout_secs", 600)?
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8081)?
        .set_default("logging.level", "debug")?
        .set_default("schedule.enforce_day_of_week", false)?
        .set_default("schedule.timezone", "UTC")?)
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables take precedence over file values. `DATABASE_URL` is
    /// honoured as a shorthand for `database.url`.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load() -> Result<Self> {
        let settings = builder_with_defaults()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env vars, e.g. ROOMKEY_SCHEDULE__ENFORCE_DAY_OF_WEEK=true
            .add_source(
                config::Environment::with_prefix("ROOMKEY")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        tracing::debug!(backend = ?settings.database.backend, "Settings validated");
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from a TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let settings = builder_with_defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks cross-field constraints that serde cannot express.
    ///
    /// ## Errors
    /// Returns an error if the Postgres backend has no URL, the pool size is
    /// zero, or the schedule timezone is unknown.
    pub fn validate(&self) -> CoreResult<()> {
        if self.database.backend == StoreBackend::Postgres {
            self.database.require_url()?;
        }
        if self.database.max_connections == 0 {
            return Err(CoreError::InvalidConfiguration(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        self.schedule.tz()?;
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
