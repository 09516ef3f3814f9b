//! 配置管理模块
//!
//! 加载顺序：内置默认值 -> 配置文件（TOML等） -> 环境变量（`DIARY_` 前缀，`__` 分隔层级）

use crate::errors::{ConfigError, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 默认端口
pub const DEFAULT_PORT: u16 = 8080;
/// 默认服务路径
pub const DEFAULT_PATH: &str = "/diary";
/// 环境变量前缀
pub const ENV_PREFIX: &str = "DIARY";

/// 应用配置
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub log: LogConfig,
}

/// HTTP服务配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
    /// 日记接口路径
    pub path: String,
    /// 数据文件，命令行参数优先
    pub data_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_string(),
            data_file: None,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// 日志文件目录，不设置则只输出到控制台
    pub dir: Option<PathBuf>,
    /// 以JSON格式输出
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
            json: false,
        }
    }
}

impl AppConfig {
    /// 加载配置，`path` 为 `None` 时只使用默认值和环境变量
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(ConfigError::from)?;

        let app_config: AppConfig = config.try_deserialize().map_err(ConfigError::from)?;
        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<()> {
        if !self.server.path.starts_with('/') {
            return Err(ConfigError::InvalidPath(self.server.path.clone()).into());
        }
        Ok(())
    }
}
