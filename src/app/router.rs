//! 路由组装

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::product::{
    handler::{
        create_product, delete_product, get_product, list_products, route_not_found,
        update_product, AppState,
    },
    ProductStore,
};
use crate::core::{
    error::handle_panic,
    middleware::{expose_fault_details, request_logging_middleware},
};
use crate::infrastructure::config::Environment;

/// 产品路由，不带中间件
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/products",
            get(list_products)
                .post(create_product)
                .fallback(route_not_found),
        )
        .route(
            "/api/products/:id",
            get(get_product)
                .put(update_product)
                .delete(delete_product)
                .fallback(route_not_found),
        )
}

/// 完整应用：路由、404 兜底和所有中间件
pub fn create_app(store: ProductStore, environment: Environment) -> Router {
    let routes = product_routes()
        .fallback(route_not_found)
        .with_state(AppState::new(store));
    with_middleware(routes, environment)
}

/// 外层到内层：请求追踪、CORS、请求日志、错误详情、panic 捕获
///
/// `Cors` 要求内层响应体实现 `Default`，所以 `TraceLayer` 必须放在它外面。
pub fn with_middleware(router: Router, environment: Environment) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(middleware::from_fn_with_state(environment, expose_fault_details))
        .layer(CatchPanicLayer::custom(handle_panic));

    router.layer(middleware_stack)
}
