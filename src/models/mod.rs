//! 数据模型
//!
//! 日记条目在文件中以一行文本保存：`日期\t内容\n`

use crate::errors::ValidationError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// 字段分隔符
pub const FIELD_SEPARATOR: char = '\t';

/// 经过校验的日期（YYYYMMDD）
///
/// 保留原始的8位字符串，定长且补零，所以字符串比较与日期先后一致
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryDate(String);

impl EntryDate {
    /// 校验并创建日期
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidDate(raw.to_string()));
        }

        // 上面已确认全部是ASCII数字，切片和解析不会失败
        let year: i32 = raw[0..4].parse().unwrap_or_default();
        let month: u32 = raw[4..6].parse().unwrap_or_default();
        let day: u32 = raw[6..8].parse().unwrap_or_default();

        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(_) => Ok(Self(raw.to_string())),
            None => Err(ValidationError::InvalidDate(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EntryDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 日记条目
///
/// 从文件读回的日期是原始字段，不再重新校验
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryEntry {
    /// 日期字段
    pub date: String,
    /// 记录内容
    pub text: String,
}

impl DiaryEntry {
    /// 由已校验的日期创建新条目
    ///
    /// 内容里不允许出现制表符或换行符，否则文件格式会被破坏
    pub fn new(date: EntryDate, text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.contains(['\t', '\n', '\r']) {
            return Err(ValidationError::InvalidText);
        }

        Ok(Self {
            date: date.0,
            text,
        })
    }

    /// 编码为文件中的一行（含换行符）
    pub fn to_line(&self) -> String {
        format!("{}{}{}\n", self.date, FIELD_SEPARATOR, self.text)
    }

    /// 从文件中的一行解析条目，按第一个制表符切分
    ///
    /// 没有制表符的行不是有效条目，返回 `None`
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let (date, text) = line.split_once(FIELD_SEPARATOR)?;
        Some(Self {
            date: date.to_string(),
            text: text.to_string(),
        })
    }
}

impl fmt::Display for DiaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "日期: {}, 内容: {}", self.date, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date() {
        let date = EntryDate::parse("20240101").unwrap();
        assert_eq!(date.as_str(), "20240101");
        assert_eq!(date.to_string(), "20240101");
    }

    #[test]
    fn test_leap_day() {
        assert!(EntryDate::parse("20240229").is_ok());
        assert!(EntryDate::parse("20230229").is_err());
    }

    #[test]
    fn test_invalid_dates() {
        for raw in ["20240230", "2024130", "abcdefgh", "", "202401011", "2024-1-1", "20241301", "20240100", "+2024010"] {
            assert_eq!(
                EntryDate::parse(raw),
                Err(ValidationError::InvalidDate(raw.to_string())),
                "{raw} 应该被拒绝"
            );
        }
    }

    #[test]
    fn test_date_order_is_chronological() {
        let a: EntryDate = "20231231".parse().unwrap();
        let b: EntryDate = "20240101".parse().unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_entry_rejects_separator_characters() {
        let date = EntryDate::parse("20240615").unwrap();
        assert_eq!(
            DiaryEntry::new(date.clone(), "hello\tworld"),
            Err(ValidationError::InvalidText)
        );
        assert_eq!(
            DiaryEntry::new(date.clone(), "line1\nline2"),
            Err(ValidationError::InvalidText)
        );
        assert_eq!(
            DiaryEntry::new(date, "line1\r"),
            Err(ValidationError::InvalidText)
        );
    }

    #[test]
    fn test_line_format() {
        let entry = DiaryEntry::new(EntryDate::parse("20240615").unwrap(), "晴天").unwrap();
        assert_eq!(entry.to_line(), "20240615\t晴天\n");
        assert_eq!(entry.to_string(), "日期: 20240615, 内容: 晴天");
    }

    #[test]
    fn test_parse_line_splits_on_first_tab() {
        let entry = DiaryEntry::parse_line("20240615\thello\tworld").unwrap();
        assert_eq!(entry.date, "20240615");
        assert_eq!(entry.text, "hello\tworld");

        let entry = DiaryEntry::parse_line("20240615\t").unwrap();
        assert_eq!(entry.text, "");

        let entry = DiaryEntry::parse_line("20240615\tcrlf\r").unwrap();
        assert_eq!(entry.text, "crlf");

        assert!(DiaryEntry::parse_line("no separator").is_none());
        assert!(DiaryEntry::parse_line("").is_none());
    }
}
