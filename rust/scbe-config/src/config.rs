//! Loading: file, then env overrides, then validation. Loading hierarchy
//! is env > file > defaults.

use std::path::Path;

use crate::env::apply_env_overrides;
use crate::schema::{validate_config, Config, ConfigResult};

/// Loads configuration from an optional TOML file, applies `SCBE_*` env
/// overrides, and validates the result. `path = None` starts from
/// [`Config::default`].
pub fn load_config(path: Option<&Path>) -> ConfigResult<Config> {
    let mut config = match path {
        Some(path) if path.exists() => load_from_file(path)?,
        _ => Config::default(),
    };

    apply_env_overrides(&mut config)?;
    validate_config(&config)?;

    Ok(config)
}

fn load_from_file(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}
