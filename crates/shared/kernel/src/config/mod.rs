use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error ({context}): {source}")]
    Config {
        #[source]
        source: config::ConfigError,
        context: &'static str,
    },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layered strategy:
/// 1. **Base File**: settings from a file (e.g., `edge.toml`). Defaults to `"edge"`.
///    The file is optional so a bare deployment boots on serde defaults.
/// 2. **Environment Overrides**: values from variables prefixed with `PHUB__`.
///    Nested structures use double underscores (e.g., `PHUB__SERVER__PORT` maps
///    to `server.port`).
///
/// # Errors
/// Returns an error if the file or environment contents do not match the
/// structure of type `T`.
///
/// # Example
/// ```rust
/// use phub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     #[serde(default)]
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("edge"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix("PHUB")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .map_err(|source| ConfigError::Config { source, context: "Failed to build config" })?
        .try_deserialize::<T>()
        .map_err(|source| ConfigError::Config { source, context: "Failed to deserialize config" })?;

    Ok(config)
}
