use super::types::error_response;
use crate::app::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pigeon_core::webtext::WebtextRequest;
use tracing::info;

/// Webtext发送处理器
///
/// Validates the single-valued `raw` query parameter, runs the configured
/// text-sending binary and forwards a confirmation to the webhook. Every
/// validation failure returns immediately, before any side effect.
pub async fn send_webtext(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    info!("Received webtext request");

    let raw_values: Vec<&str> = params
        .iter()
        .filter(|(key, _)| key == "raw")
        .map(|(_, value)| value.as_str())
        .collect();
    let raw = match raw_values.as_slice() {
        [] => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "raw not found in URL parameters".to_string(),
            )
        }
        [value] => *value,
        _ => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "too many values for the 'raw' key".to_string(),
            )
        }
    };

    let request = match WebtextRequest::parse(raw) {
        Ok(request) => request,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    // The route is only mounted when the binary is configured; this guard
    // keeps the handler total anyway
    let Some(binary) = state.config.webtext_binary.as_deref() else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "webtext binary is not configured".to_string(),
        );
    };

    let args = [
        "-r".to_string(),
        request.recipient.clone(),
        request.message.clone(),
    ];
    let run = match state.command_runner.run(binary, &args).await {
        Ok(run) => run,
        Err(e) => {
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to run webtext command: {e}"),
            )
        }
    };
    if !run.success() {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to run webtext command: {}", run.trimmed_output()),
        );
    }

    if let Err(e) = state.notifier.notify(&request.confirmation()).await {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to send confirmation: {e}"),
        );
    }

    info!("Sent {:?} to {:?}", request.message, request.recipient);
    StatusCode::OK.into_response()
}
