//! 日记记录服务
//!
//! 以纯文本文件保存按日期记录的日记，通过 HTTP 提供：
//! - `POST` 追加记录（表单参数 `date`、`text`）
//! - `GET` 按日期、日期范围或全部查询

pub mod cli;
pub mod config;
pub mod diary;
pub mod errors;
pub mod http;
pub mod models;
pub mod storage;

// 重新导出常用类型
pub use diary::{DiaryService, EntryFilter};
pub use errors::{DiaryError, Result};
pub use models::{DiaryEntry, EntryDate};
pub use storage::{EntryRepository, FileRepository};

/// 应用版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
