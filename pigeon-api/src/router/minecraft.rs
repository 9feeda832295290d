use super::types::error_response;
use crate::app::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pigeon_core::client::player_count_message;
use tracing::info;

/// Minecraft状态处理器
///
/// Fetches the dynmap snapshot, maps the player count to a phrase and
/// forwards it to the notification webhook.
pub async fn minecraft_status(State(state): State<AppState>) -> Response {
    info!("Received minecraft request");

    let snapshot = match state.status_source.fetch().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to retrieve data from the Minecraft server: {e}"),
            )
        }
    };

    let message = player_count_message(snapshot.player_count());
    if let Err(e) = state.notifier.notify(&message).await {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to send notification: {e}"),
        );
    }

    info!("Responded with {:?}", message);
    StatusCode::OK.into_response()
}
