use crate::router::router::create_app_router;
use pigeon_core::client::{DynmapStatusSource, IftttNotifier, Notifier, StatusSource};
use pigeon_core::command::{CommandRunner, SystemCommandRunner};
use pigeon_core::config::loader::{get_config_path, load_config};
use pigeon_core::config::model::Config;

use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// 应用状态，包含只读配置和出站依赖
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub status_source: Arc<dyn StatusSource>,
    pub notifier: Arc<dyn Notifier>,
    pub command_runner: Arc<dyn CommandRunner>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new() -> Result<Self> {
        // 加载配置
        let config = load_config()?;
        info!(
            "Configuration loaded successfully from: {}",
            get_config_path()
        );
        Ok(Self::from_config(config))
    }

    /// 基于给定配置装配真实的出站依赖
    pub fn from_config(config: Config) -> Self {
        let status_source = Arc::new(DynmapStatusSource::new(config.status_url().to_string()));
        // A missing key degrades to an empty key; the webhook then rejects
        // the trigger on its side
        let notifier = Arc::new(IftttNotifier::new(
            config.webhook_key.clone().unwrap_or_default(),
        ));

        Self {
            config: Arc::new(config),
            status_source,
            notifier,
            command_runner: Arc::new(SystemCommandRunner),
        }
    }

    /// 使用可替换的出站依赖创建应用状态（测试用）
    pub fn with_components(
        config: Config,
        status_source: Arc<dyn StatusSource>,
        notifier: Arc<dyn Notifier>,
        command_runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            status_source,
            notifier,
            command_runner,
        }
    }
}

/// 创建应用路由
pub fn create_app(state: AppState) -> Router {
    create_app_router(&state.config).with_state(state)
}

/// 启动应用服务器
pub async fn start_server() -> Result<()> {
    // 初始化日志 - 完全依赖RUST_LOG环境变量
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_file(true)
        .with_line_number(true)
        .init();

    info!("Starting Pigeon relay...");
    info!("Configuration file: {}", get_config_path());

    // 配置加载失败直接退出
    let app_state = match AppState::new() {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    let webtext_enabled = app_state.config.webtext_enabled();
    let bind_addr = app_state
        .config
        .server_address
        .clone()
        .unwrap_or_else(|| "127.0.0.1:3000".to_string());

    let app = create_app(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    let addr = listener.local_addr()?;

    info!("Server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET  /           - Service information");
    info!("  GET  /health     - Health check");
    info!("  GET  /minecraft  - Relay the current player count to the webhook");
    if webtext_enabled {
        info!("  GET  /webtext    - Send a text through the configured binary");
    }

    // 设置优雅关闭
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Shutdown signal received");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_index_endpoint() {
        let app = create_app(AppState::from_config(Config::default()));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), "Pigeon - IFTTT notification relay");
    }

    #[tokio::test]
    async fn test_webtext_route_is_gated_by_config() {
        // 未配置WebtextBinary时不挂载/webtext
        let app = create_app(AppState::from_config(Config::default()));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/webtext").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}
