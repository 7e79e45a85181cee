//! 核心响应处理模块

use serde::Serialize;
use serde_json::Value;

use super::error::INTERNAL_ERROR_MESSAGE;

/// API 成功响应
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::success(data)
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        Self {
            count: Some(data.len()),
            ..Self::success(data)
        }
    }
}

/// 失败响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    /// 内部错误，详情为空时 `error` 输出为 `{}`
    pub fn internal(detail: Option<String>) -> Self {
        let error = match detail {
            Some(detail) => Value::String(detail),
            None => Value::Object(Default::default()),
        };

        Self {
            success: false,
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            error: Some(error),
        }
    }
}
