use anyhow::Context;
use farmassist_mini::{create_app, infrastructure::logger::Logger, Config, ProductStore};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("加载配置失败")?;
    Logger::init(&config.logging.level);

    let store = ProductStore::seeded();
    let seeds = store.list_all().to_vec();
    let app = create_app(store, config.environment);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;
    let local_addr = listener.local_addr()?;

    info!("=========================================");
    info!("🚜 FarmAssist Mini API Server Started");
    info!("📍 Server running on {} ({:?})", local_addr, config.environment);
    info!("📚 Endpoint: http://localhost:{}/api/products", local_addr.port());
    info!("=========================================");
    info!("Sample products loaded:");
    for product in &seeds {
        let price = product.price.as_f64().unwrap_or_default();
        info!("  - {} ({}): ${:.2}", product.name, product.category, price);
    }
    info!("=========================================");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("无法监听 Ctrl-C 信号: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到停止信号，正在关闭服务器");
}
