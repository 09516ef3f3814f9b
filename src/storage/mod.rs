//! 存储模块
//!
//! HTTP 层只依赖 [`EntryRepository`]，具体的文件读写在 [`file`] 中实现

pub mod file;

use crate::errors::Result;
use crate::models::DiaryEntry;
use async_trait::async_trait;

pub use file::FileRepository;

/// 日记条目仓库接口
///
/// 只支持追加和全量扫描。追加之间互斥，读取不加锁
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// 追加一条记录
    async fn append(&self, entry: &DiaryEntry) -> Result<()>;

    /// 按写入顺序读取全部记录，存储不存在时返回空列表
    async fn scan(&self) -> Result<Vec<DiaryEntry>>;
}
