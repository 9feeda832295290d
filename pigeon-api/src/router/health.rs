use axum::response::Json;
use serde_json::{json, Value};

/// 健康检查处理器
///
/// The relay keeps no state, so liveness is all there is to report.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "pigeon-api",
    }))
}
