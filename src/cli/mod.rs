//! 命令行接口模块
//!
//! 用法: `diary-server <数据文件路径> [端口]`

use clap::Parser;
use std::path::PathBuf;

use crate::errors::Result;

pub mod commands;
pub mod context;

use context::ExecutionContext;

/// 日记记录 HTTP 服务
#[derive(Parser, Debug)]
#[command(name = "diary-server")]
#[command(about = "日记记录 REST API 服务")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// 数据文件路径（不存在时在首次写入时创建）
    #[arg(value_name = "FILE")]
    pub file_path: Option<PathBuf>,

    /// 监听端口，默认 8080
    #[arg(value_name = "PORT")]
    pub port: Option<u16>,

    /// 配置文件路径
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 日志级别
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// 监听地址
    #[arg(long, env = "DIARY_HOST")]
    pub host: Option<String>,
}

impl Cli {
    /// 使用已有上下文执行
    pub async fn execute_with_context(self, context: ExecutionContext) -> Result<()> {
        commands::serve::execute(&context).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::try_parse_from(["diary-server", "diary.txt", "9000"]).unwrap();
        assert_eq!(cli.file_path, Some(PathBuf::from("diary.txt")));
        assert_eq!(cli.port, Some(9000));
    }

    #[test]
    fn test_port_is_optional() {
        let cli = Cli::try_parse_from(["diary-server", "diary.txt"]).unwrap();
        assert_eq!(cli.port, None);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Cli::try_parse_from(["diary-server", "diary.txt", "http"]).is_err());
        assert!(Cli::try_parse_from(["diary-server", "diary.txt", "70000"]).is_err());
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "diary-server",
            "-c",
            "diary.toml",
            "--log-level",
            "debug",
            "diary.txt",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("diary.toml")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.file_path, Some(PathBuf::from("diary.txt")));
    }
}
