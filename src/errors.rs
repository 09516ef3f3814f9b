//! 错误处理模块
//!
//! 库内部统一使用 [`DiaryError`]，HTTP 层再把它映射为状态码

use std::path::PathBuf;
use thiserror::Error;

/// 应用程序统一错误类型
#[derive(Error, Debug)]
pub enum DiaryError {
    /// 请求参数校验失败
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 存储文件读写失败
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// 配置加载失败
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 其他IO错误（监听端口等）
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 参数校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("需要提供 date 和 text 参数")]
    MissingParameters,

    #[error("日期必须为 YYYYMMDD 格式: {0:?}")]
    InvalidDate(String),

    #[error("text 不能包含制表符或换行符")]
    InvalidText,
}

/// 存储错误
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("读写数据文件失败 {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),

    #[error("未指定数据文件路径")]
    MissingDataFile,

    #[error("无效的日志级别: {0}")]
    InvalidLogLevel(String),

    #[error("无效的服务路径 {0:?}，必须以 / 开头")]
    InvalidPath(String),
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, DiaryError>;
