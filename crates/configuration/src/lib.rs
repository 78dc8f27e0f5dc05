use crate::error::ConfigError;
use config::{Environment, File, FileFormat, Map};
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{
    CorsSettings, DatabaseSettings, LoggingSettings, ServerOverrides, ServerSettings, Settings,
};

/// Prefix for environment overrides, e.g. `POKEVIEWS__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "POKEVIEWS";

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file at
/// `path` (or `config.toml` in the working directory, if present), then
/// `POKEVIEWS__*` environment variables.
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        // An explicit path must exist.
        Some(path) => File::from(path).required(true),
        None => File::with_name("config.toml").required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(environment(None))
        .build()?;

    finish(builder)
}

/// Parses settings from a TOML string plus an explicit environment map.
///
/// Used where the process environment and filesystem must not leak in.
pub fn load_config_from_str(
    toml: &str,
    env: Map<String, String>,
) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .add_source(environment(Some(env)))
        .build()?;

    finish(builder)
}

fn environment(source: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .source(source)
}

fn finish(builder: config::Config) -> Result<Settings, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;
    validate(&settings)?;
    Ok(settings)
}

/// Rejects settings that would only fail later, at bind or connect time.
pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port must be non-zero".to_string(),
        ));
    }
    if settings.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "database.max_connections must be at least 1".to_string(),
        ));
    }
    for origin in &settings.cors.allowed_origins {
        if http::HeaderValue::from_str(origin).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "cors.allowed_origins contains an invalid origin: {origin:?}"
            )));
        }
    }
    Ok(())
}
