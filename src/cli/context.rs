//! 执行上下文
//!
//! 合并命令行参数和配置文件，命令行优先

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::errors::{ConfigError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// 执行上下文
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    config: AppConfig,
    data_file: PathBuf,
    log_level: String,
}

impl ExecutionContext {
    pub fn new(cli: &Cli) -> Result<Self> {
        let mut config = AppConfig::load(cli.config.as_deref())?;

        if let Some(port) = cli.port {
            config.server.port = port;
        }
        if let Some(host) = &cli.host {
            config.server.host = host.clone();
        }

        let data_file = cli
            .file_path
            .clone()
            .or_else(|| config.server.data_file.clone())
            .ok_or(ConfigError::MissingDataFile)?;

        let log_level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| config.log.level.clone())
            .to_lowercase();
        if tracing::Level::from_str(&log_level).is_err() {
            return Err(ConfigError::InvalidLogLevel(log_level).into());
        }

        Ok(Self {
            config,
            data_file,
            log_level,
        })
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.config.log.dir.as_deref()
    }

    pub fn log_json(&self) -> bool {
        self.config.log.json
    }

    pub fn host(&self) -> &str {
        &self.config.server.host
    }

    pub fn port(&self) -> u16 {
        self.config.server.port
    }

    /// 日记接口路径
    pub fn route_path(&self) -> &str {
        &self.config.server.path
    }
}
