//! 日记业务逻辑
//!
//! 负责参数校验、查询条件选择和结果格式化，不关心 HTTP 和文件细节

use crate::errors::{Result, ValidationError};
use crate::models::{DiaryEntry, EntryDate};
use crate::storage::EntryRepository;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// 没有匹配记录时返回的固定消息
pub const NO_ENTRIES_MESSAGE: &str = "没有符合条件的记录";

/// 记录成功时返回的消息
pub const RECORDED_MESSAGE: &str = "记录已保存";

/// 请求参数（表单或查询字符串解码后的结果，同名参数后者覆盖前者）
pub type Params = HashMap<String, String>;

/// 查询条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryFilter {
    /// 全部记录
    All,
    /// 指定日期
    OnDate(EntryDate),
    /// 日期范围，两端都包含
    Between { from: EntryDate, to: EntryDate },
}

impl EntryFilter {
    /// 从查询参数确定查询条件
    ///
    /// 优先级：`date` > `from`+`to` > 全部。
    /// 只给出 `from` 或 `to` 其中之一时，按全部记录处理
    pub fn from_params(params: &Params) -> std::result::Result<Self, ValidationError> {
        if let Some(date) = params.get("date") {
            return Ok(Self::OnDate(EntryDate::parse(date)?));
        }

        match (params.get("from"), params.get("to")) {
            (Some(from), Some(to)) => Ok(Self::Between {
                from: EntryDate::parse(from)?,
                to: EntryDate::parse(to)?,
            }),
            _ => Ok(Self::All),
        }
    }

    /// 判断条目是否满足条件
    pub fn matches(&self, entry: &DiaryEntry) -> bool {
        let date = entry.date.as_str();
        match self {
            Self::All => true,
            Self::OnDate(target) => date == target.as_str(),
            Self::Between { from, to } => date >= from.as_str() && date <= to.as_str(),
        }
    }
}

/// 日记服务
#[derive(Clone)]
pub struct DiaryService {
    repository: Arc<dyn EntryRepository>,
}

impl DiaryService {
    pub fn new(repository: Arc<dyn EntryRepository>) -> Self {
        Self { repository }
    }

    /// 校验参数并追加一条记录
    pub async fn record(&self, params: &Params) -> Result<DiaryEntry> {
        let entry = validate_new_entry(params)?;

        self.repository.append(&entry).await?;
        info!("记录追加 - 日期: {}, 内容: {}", entry.date, entry.text);

        Ok(entry)
    }

    /// 按条件查询，保持文件中的顺序
    pub async fn query(&self, filter: &EntryFilter) -> Result<Vec<DiaryEntry>> {
        let entries = self.repository.scan().await?;
        Ok(entries
            .into_iter()
            .filter(|entry| filter.matches(entry))
            .collect())
    }
}

/// 写入前的完整校验，不做任何IO
fn validate_new_entry(params: &Params) -> std::result::Result<DiaryEntry, ValidationError> {
    let (Some(date), Some(text)) = (params.get("date"), params.get("text")) else {
        return Err(ValidationError::MissingParameters);
    };

    DiaryEntry::new(EntryDate::parse(date)?, text.as_str())
}

/// 把查询结果格式化为纯文本，每条一行
pub fn format_entries(entries: &[DiaryEntry]) -> String {
    if entries.is_empty() {
        return NO_ENTRIES_MESSAGE.to_string();
    }

    entries.iter().fold(String::new(), |mut out, entry| {
        out.push_str(&entry.to_string());
        out.push('\n');
        out
    })
}
