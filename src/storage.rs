use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::models::LoaderConfig;

const APP_DIR: &str = "joke-loader";
const CONFIG_ENV: &str = "JOKE_LOADER_CONFIG";

/// 配置文件路径：优先环境变量，其次 ~/.config/joke-loader/config.toml
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// 日志文件路径 (~/.local/share/joke-loader/joke-loader.log)
pub fn log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join("joke-loader.log"))
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<LoaderConfig, ConfigError> {
    if !path.exists() {
        return Ok(LoaderConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: LoaderConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    config.validate()?;
    Ok(config)
}
