//! # FarmAssist Mini
//!
//! 基于 Axum 的农产品目录服务，数据保存在内存中：
//! - `app`：产品存储、处理器与路由
//! - `core`：错误类型、响应封装、中间件
//! - `infrastructure`：配置与日志

pub mod app;
pub mod core;
pub mod infrastructure;

pub use crate::app::product::{Product, ProductPayload, ProductStore};
pub use crate::app::router::create_app;
pub use crate::core::error::CoreError;
pub use crate::infrastructure::config::{Config, ConfigError, Environment};
