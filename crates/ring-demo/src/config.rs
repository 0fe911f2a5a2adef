use directories::ProjectDirs;
use progress_ring::StyleOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const ENV_PREFIX: &str = "RING";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowOptions {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 360,
            height: 420,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub progress: StyleOptions,
    pub window: WindowOptions,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "progress-ring", "ring-demo")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build(path: &Path, env: config::Environment) -> Result<AppConfig, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(env)
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    build(path, environment())
}

pub fn load_or_default(path: Option<&Path>) -> AppConfig {
    let path = match path.map(Path::to_path_buf).map_or_else(get_config_path, Ok) {
        Ok(p) => p,
        Err(e) => {
            log::warn!("{}, using defaults", e);
            return AppConfig::default();
        }
    };

    match load_config(&path) {
        Ok(c) => {
            log::debug!("Loaded config from {}", path.display());
            c
        }
        Err(e) => {
            log::warn!("Failed to load {}: {}, using defaults", path.display(), e);
            AppConfig::default()
        }
    }
}

pub fn write_default_config() -> Result<PathBuf, ConfigError> {
    let path = get_config_path()?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
