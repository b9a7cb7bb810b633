use crate::config::types::{ConfigFile, ProviderConfig, ResolvedConfig};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;

pub const API_KEY_ENV: &str = "ARK_API_KEY";
pub const MODEL_ENV: &str = "ARK_API_MODEL";
pub const BASE_URL_ENV: &str = "ARK_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("ARK_API_KEY is not set")]
    MissingApiKey,

    #[error("no model configured: set ARK_API_MODEL or provider.model")]
    MissingModel,

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `config_path` (or the default location) and
    /// the process environment.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        Self::load_with_env(config_path, |key| env::var(key).ok())
    }

    /// Like [`ConfigLoader::load`], reading variables through `lookup`.
    ///
    /// An explicit path must exist; a missing default file means defaults.
    pub fn load_with_env(
        config_path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let (file, source) = match config_path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.display().to_string()));
                }
                (read_config_file(p)?, Some(p.to_path_buf()))
            }
            None => {
                let p = default_config_path();
                if p.exists() {
                    (read_config_file(&p)?, Some(p))
                } else {
                    (ConfigFile::default(), None)
                }
            }
        };

        Self::resolve(file, source, &lookup)
    }

    fn resolve(
        file: ConfigFile,
        source: Option<PathBuf>,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = ProviderConfig::default();
        let section = file.provider;

        let api_key = var(API_KEY_ENV).ok_or(ConfigError::MissingApiKey)?;
        let model = var(MODEL_ENV)
            .or(section.model.filter(|m| !m.trim().is_empty()))
            .ok_or(ConfigError::MissingModel)?;
        let base_url = var(BASE_URL_ENV).or(section.base_url).unwrap_or(defaults.base_url);

        let provider = ProviderConfig {
            api_key,
            model,
            base_url,
            temperature: section.temperature.unwrap_or(defaults.temperature),
            max_retries: section.max_retries.unwrap_or(defaults.max_retries),
            timeout_secs: section.timeout_secs.unwrap_or(defaults.timeout_secs),
        };

        let mut logging = file.logging;
        if let Some(path) = logging.file.take() {
            logging.file = Some(expand_path(&path.to_string_lossy())?);
        }

        Ok(ResolvedConfig { source, provider, logging })
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let s = fs::read_to_string(path)
        .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;
    toml::from_str(&s).map_err(|e| ConfigError::ParseError(path.display().to_string(), e))
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("seo-helper").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("seo-helper").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
