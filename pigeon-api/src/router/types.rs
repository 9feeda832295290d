use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// 记录错误日志并构建纯文本错误响应
///
/// Every error path logs server-side first and echoes the same text to the
/// client; nothing sensitive flows through this relay.
pub fn error_response(status: StatusCode, message: String) -> Response {
    tracing::error!("{message}");
    (status, message).into_response()
}
