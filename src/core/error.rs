//! 核心错误处理模块

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::response::ErrorResponse;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("Route {0} not found")]
    RouteNotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

/// 500 响应附带的内部错误详情，是否对外暴露由 `expose_fault_details` 决定
#[derive(Debug, Clone)]
pub struct FaultDetail(pub String);

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::NotFound(_) | CoreError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            CoreError::Internal(detail) => {
                tracing::error!("Error occurred: {}", detail);
                let mut response =
                    (status, Json(ErrorResponse::internal(None))).into_response();
                response.extensions_mut().insert(FaultDetail(detail));
                response
            }
            other => (status, Json(ErrorResponse::new(other.to_string()))).into_response(),
        }
    }
}

/// `CatchPanicLayer` 的处理函数，把 panic 转成统一的 500 响应
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    CoreError::Internal(detail).into_response()
}
