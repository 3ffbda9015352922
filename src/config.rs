use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::Unit;

pub const APP_DIR: &str = "thermoform";
const CONFIG_FILE: &str = "config.toml";
/// f64 有效数字上限
pub const MAX_PRECISION: usize = 17;

/// 用户配置 (~/.config/thermoform/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub default_from: Option<Unit>,
    pub default_to: Option<Unit>,
    /// 结果保留的小数位，未设置时按 f64 原样显示
    pub precision: Option<usize>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn tracing_level(&self) -> Result<tracing::Level> {
        match self.log_level.as_deref() {
            None => Ok(tracing::Level::INFO),
            Some(level) => level
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid log_level '{}'", level)),
        }
    }
}

/// 获取配置文件路径
pub fn config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .context("could not determine the user config directory")?
        .join(APP_DIR);
    Ok(dir.join(CONFIG_FILE))
}

/// 获取数据目录路径 (~/.local/share/thermoform/)，不存在时创建
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .context("could not determine the user data directory")?
        .join(APP_DIR);
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory {}", dir.display()))?;
    Ok(dir)
}

/// 从 TOML 文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    config.tracing_level()?;
    if let Some(precision) = config.precision {
        anyhow::ensure!(
            precision <= MAX_PRECISION,
            "precision {} is out of range (0..={})",
            precision,
            MAX_PRECISION
        );
    }

    Ok(config)
}
