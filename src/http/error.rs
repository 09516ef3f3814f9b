//! HTTP错误响应

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::errors::{DiaryError, ValidationError};

/// 返回给客户端的错误，响应体为纯文本
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<DiaryError> for ApiError {
    fn from(err: DiaryError) -> Self {
        match err {
            DiaryError::Validation(e) => e.into(),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_string();

        if status.is_server_error() {
            error!("请求处理失败: {}", body);
        } else {
            warn!("请求被拒绝: {}", body);
        }

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StorageError;
    use std::path::PathBuf;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError = DiaryError::from(ValidationError::MissingParameters).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Bad Request: 需要提供 date 和 text 参数");
    }

    #[test]
    fn test_storage_maps_to_internal_error() {
        let err: ApiError = DiaryError::from(StorageError::Io {
            path: PathBuf::from("diary.txt"),
            source: std::io::Error::other("disk full"),
        })
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("Internal Server Error: "));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_method_not_allowed() {
        assert_eq!(ApiError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Method Not Allowed");
    }
}
