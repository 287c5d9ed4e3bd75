use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    DisplayConfig, IngestConfig, LoggingConfig, PipelineConfig, ServerConfig, Settings,
};

/// Base name of the configuration file looked up in the working directory
/// (`maverick.toml`) when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "maverick";

/// Prefix of environment overrides, e.g. `MAVERICK__PIPELINE__EQUITY_ORDER=date`.
pub const ENV_PREFIX: &str = "MAVERICK";

/// Loads the application configuration.
///
/// Sources are layered: built-in defaults, then the configuration file (an
/// explicit `path` must exist; the default `maverick.toml` is optional), then
/// `MAVERICK__SECTION__KEY` environment variables.
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    layered(file, environment())
}

/// `MAVERICK__SECTION__KEY` variables, with numbers and booleans parsed.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn layered<F>(file: F, env: config::Environment) -> Result<Settings, ConfigError>
where
    F: config::Source + Send + Sync + 'static,
{
    let builder = config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    finish(builder)
}

/// Parses configuration from TOML text alone, without file or environment lookup.
pub fn parse_config(toml: &str) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    finish(builder)
}

fn finish(builder: config::Config) -> Result<Settings, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;
    tracing::debug!(?settings, "Configuration loaded.");
    Ok(settings)
}
