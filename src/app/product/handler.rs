//! 产品处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{StatusCode, Uri},
    response::Json,
};
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, warn};

use super::{
    model::{Product, ProductPayload},
    store::{not_found_raw, ProductStore},
};
use crate::core::{error::CoreError, response::ApiResponse};

type ApiResult<T> = Result<Json<ApiResponse<T>>, CoreError>;

const FOR_UPDATE: &str = " for update";
const FOR_DELETION: &str = " for deletion";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<ProductStore>>,
}

impl AppState {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    fn store(&self) -> Result<MutexGuard<'_, ProductStore>, CoreError> {
        self.store
            .lock()
            .map_err(|e| CoreError::Internal(format!("product store lock poisoned: {}", e)))
    }
}

/// 获取所有产品
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    info!("GET /api/products - Fetching all products");
    let products = state.store()?.list_all().to_vec();
    Ok(Json(ApiResponse::list(products)))
}

/// 获取特定产品
pub async fn get_product(State(state): State<AppState>, Path(raw_id): Path<String>) -> ApiResult<Product> {
    info!("GET /api/products/{} - Finding product", raw_id);
    let id = parse_id(&raw_id, "")?;
    let product = state
        .store()?
        .get_by_id(id)
        .cloned()
        .inspect_err(|e| log_failure(e, ""))?;
    Ok(Json(ApiResponse::success(product)))
}

/// 创建新产品
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), CoreError> {
    info!("POST /api/products - Creating new product");
    let payload = read_payload(body)?;
    let product = state
        .store()?
        .insert(&payload)
        .inspect_err(|e| log_failure(e, ""))?;
    info!("New product created with ID: {}", product.id);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(product, "Product created successfully")),
    ))
}

/// 整体更新产品
pub async fn update_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Product> {
    info!("PUT /api/products/{} - Updating product", raw_id);
    let id = parse_id(&raw_id, FOR_UPDATE)?;
    let mut store = state.store()?;

    // 不存在的 id 优先于请求体错误
    store.get_by_id(id).inspect_err(|e| log_failure(e, FOR_UPDATE))?;
    let payload = read_payload(body)?;
    let product = store
        .replace(id, &payload)
        .inspect_err(|e| log_failure(e, FOR_UPDATE))?;
    info!("Product with ID {} updated successfully", id);

    Ok(Json(ApiResponse::with_message(product, "Product updated successfully")))
}

/// 删除产品
pub async fn delete_product(State(state): State<AppState>, Path(raw_id): Path<String>) -> ApiResult<Product> {
    info!("DELETE /api/products/{} - Deleting product", raw_id);
    let id = parse_id(&raw_id, FOR_DELETION)?;
    let product = state
        .store()?
        .remove(id)
        .inspect_err(|e| log_failure(e, FOR_DELETION))?;
    info!("Product with ID {} deleted successfully", id);

    Ok(Json(ApiResponse::with_message(product, "Product deleted successfully")))
}

/// 未匹配的路由
pub async fn route_not_found(uri: Uri) -> CoreError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    warn!("Route {} not found", path);
    CoreError::RouteNotFound(path)
}

/// 无法解析的 id 不会匹配任何产品
fn parse_id(raw: &str, context: &str) -> Result<u64, CoreError> {
    raw.trim().parse().map_err(|_| {
        let err = not_found_raw(raw);
        log_failure(&err, context);
        err
    })
}

fn read_payload(body: Result<Json<Value>, JsonRejection>) -> Result<ProductPayload, CoreError> {
    match body {
        Ok(Json(value)) => Ok(ProductPayload::from_json(&value)),
        Err(rejection) => {
            warn!("Validation failed: {}", rejection.body_text());
            Err(CoreError::InvalidInput(rejection.body_text()))
        }
    }
}

fn log_failure(err: &CoreError, context: &str) {
    if let Some(line) = failure_line(err, context) {
        warn!("{}", line);
    }
}

/// `context` 区分同一条错误出自哪个操作
fn failure_line(err: &CoreError, context: &str) -> Option<String> {
    match err {
        CoreError::NotFound(msg) => Some(format!("{}{}", msg, context)),
        CoreError::InvalidInput(msg) => Some(format!("Validation failed{}: {}", context, msg)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("4", "").unwrap(), 4);
        assert_eq!(parse_id(" 12 ", FOR_UPDATE).unwrap(), 12);

        match parse_id("abc", FOR_DELETION) {
            Err(CoreError::NotFound(msg)) => assert_eq!(msg, "Product with ID abc not found"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parse_id("-1", "").is_err());
    }

    #[test]
    fn test_failure_lines_name_the_operation() {
        let missing = CoreError::NotFound("Product with ID 9 not found".into());
        assert_eq!(
            failure_line(&missing, FOR_UPDATE).unwrap(),
            "Product with ID 9 not found for update"
        );
        assert_eq!(
            failure_line(&missing, FOR_DELETION).unwrap(),
            "Product with ID 9 not found for deletion"
        );
        assert_eq!(failure_line(&missing, "").unwrap(), "Product with ID 9 not found");

        let invalid = CoreError::InvalidInput("Price must be a positive number".into());
        assert_eq!(
            failure_line(&invalid, FOR_UPDATE).unwrap(),
            "Validation failed for update: Price must be a positive number"
        );
        assert!(failure_line(&CoreError::Internal("x".into()), "").is_none());
    }
}
