//! 核心中间件模块

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

use super::error::FaultDetail;
use super::response::ErrorResponse;
use crate::infrastructure::config::Environment;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let mut response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    info!(
        request_id = %request_id,
        "{} {} - {} - {}ms - User-Agent: {:?}",
        method,
        uri,
        status,
        duration.as_millis(),
        user_agent
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// 非生产环境下把内部错误详情写入 500 响应的 `error` 字段
pub async fn expose_fault_details(
    State(environment): State<Environment>,
    req: Request,
    next: Next,
) -> Response {
    let response = next.run(req).await;
    if environment.is_production() {
        return response;
    }

    match response.extensions().get::<FaultDetail>().cloned() {
        Some(FaultDetail(detail)) => {
            let (mut parts, _) = response.into_parts();
            parts.headers.remove(axum::http::header::CONTENT_LENGTH);
            let body = Json(ErrorResponse::internal(Some(detail)));
            (parts, body).into_response()
        }
        None => response,
    }
}
