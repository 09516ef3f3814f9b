//! 基于纯文本文件的仓库实现

use super::EntryRepository;
use crate::errors::{Result, StorageError};
use crate::models::DiaryEntry;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// 追加写入的文本文件仓库
pub struct FileRepository {
    path: PathBuf,
    /// 写锁，整个进程内只允许一个追加操作
    write_lock: Mutex<()>,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl EntryRepository for FileRepository {
    async fn append(&self, entry: &DiaryEntry) -> Result<()> {
        let line = entry.to_line();
        let _guard = self.write_lock.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| self.io_error(e))?;
        // tokio 的文件写入在后台线程完成，必须在释放锁之前 flush
        file.flush().await.map_err(|e| self.io_error(e))?;

        debug!("已追加 {} 字节到 {:?}", line.len(), self.path);
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<DiaryEntry>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("数据文件不存在，视为空: {:?}", self.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e).into()),
        };

        let mut entries = Vec::new();
        for (index, line) in content.lines().enumerate() {
            match DiaryEntry::parse_line(line) {
                Some(entry) => entries.push(entry),
                None if line.is_empty() => {}
                None => warn!("跳过格式错误的行 {}: {:?}", index + 1, line),
            }
        }

        Ok(entries)
    }
}
