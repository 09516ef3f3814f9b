//! HTTP处理器模块

use axum::body::Bytes;
use axum::extract::{RawQuery, State};

use super::error::ApiError;
use crate::diary::{format_entries, DiaryService, EntryFilter, Params, RECORDED_MESSAGE};

/// `POST` 记录日记
///
/// 请求体按 URL 表单解析，不检查 Content-Type，非 UTF-8 字节按替换字符解码
pub async fn record_entry(
    State(service): State<DiaryService>,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let params = parse_params(&String::from_utf8_lossy(&body))?;
    service.record(&params).await?;
    Ok(RECORDED_MESSAGE)
}

/// `GET` 查询日记
pub async fn query_entries(
    State(service): State<DiaryService>,
    RawQuery(query): RawQuery,
) -> Result<String, ApiError> {
    let params = parse_params(query.as_deref().unwrap_or_default())?;
    let filter = EntryFilter::from_params(&params)?;
    let entries = service.query(&filter).await?;
    Ok(format_entries(&entries))
}

/// 其他HTTP方法
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// 解析 `key=value&...` 形式的参数，同名参数以最后一个为准
///
/// 不含 `=` 的片段被忽略，对应的参数视为未提供
fn parse_params(raw: &str) -> Result<Params, ApiError> {
    let pairs = raw
        .split('&')
        .filter(|pair| pair.contains('='))
        .collect::<Vec<_>>()
        .join("&");

    let decoded: Vec<(String, String)> = serde_urlencoded::from_str(&pairs)
        .map_err(|e| ApiError::BadRequest(format!("参数解析失败: {}", e)))?;
    Ok(decoded.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params_decodes() {
        let params = parse_params("date=20240101&text=%E6%99%B4+%E5%A4%A9").unwrap();
        assert_eq!(params.get("date").map(String::as_str), Some("20240101"));
        assert_eq!(params.get("text").map(String::as_str), Some("晴 天"));
    }

    #[test]
    fn test_parse_params_last_wins() {
        let params = parse_params("date=20240101&date=20240202").unwrap();
        assert_eq!(params.get("date").map(String::as_str), Some("20240202"));
    }

    #[test]
    fn test_parse_params_empty() {
        assert!(parse_params("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_params_ignores_pairs_without_equals() {
        let params = parse_params("date=20240101&text").unwrap();
        assert_eq!(params.get("date").map(String::as_str), Some("20240101"));
        assert!(!params.contains_key("text"));

        assert!(parse_params("date").unwrap().is_empty());
    }

    #[test]
    fn test_parse_params_keeps_empty_value() {
        let params = parse_params("text=&date=20240101").unwrap();
        assert_eq!(params.get("text").map(String::as_str), Some(""));
    }

    #[test]
    fn test_parse_params_encoded_tab() {
        let params = parse_params("text=hello%09world").unwrap();
        assert_eq!(params.get("text").map(String::as_str), Some("hello\tworld"));
    }
}
