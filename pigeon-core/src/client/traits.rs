use super::minecraft::StatusSnapshot;
use super::types::ClientResult;
use async_trait::async_trait;

/// 通知发送端的统一接口
///
/// Handlers only see this trait so tests can substitute a fake that records
/// messages instead of hitting the real webhook.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send an already-formatted message to the notification webhook.
    async fn notify(&self, message: &str) -> ClientResult<()>;
}

/// 状态源的统一接口
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the current status snapshot from the external source.
    async fn fetch(&self) -> ClientResult<StatusSnapshot>;
}
