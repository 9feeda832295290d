use crate::app::AppState;
use axum::{routing::get, Router};
use pigeon_core::config::model::Config;
use tower_http::trace::TraceLayer;

use super::{health::health_check, minecraft::minecraft_status, webtext::send_webtext};

/// 创建应用路由
///
/// `/webtext` is an optional feature: the route is only mounted when a
/// text-sending binary is configured.
pub fn create_app_router(config: &Config) -> Router<AppState> {
    let mut router = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/minecraft", get(minecraft_status));

    if config.webtext_enabled() {
        router = router.route("/webtext", get(send_webtext));
    }

    router.layer(TraceLayer::new_for_http())
}

/// 首页处理器
pub async fn index() -> &'static str {
    "Pigeon - IFTTT notification relay"
}
