//! IFTTT Maker webhook client
//!
//! Sends notifications by triggering an IFTTT Maker event with the message
//! as the `value1` ingredient.

use super::traits::Notifier;
use super::types::ClientResult;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://maker.ifttt.com";
const EVENT_NAME: &str = "notification";

/// IFTTT Maker webhook client
#[derive(Debug, Clone)]
pub struct IftttNotifier {
    client: Client,
    base_url: String,
    key: String,
}

impl IftttNotifier {
    /// 创建新的IFTTT客户端
    pub fn new(key: String) -> Self {
        Self::with_base_url(key, DEFAULT_BASE_URL.to_string())
    }

    /// 使用自定义base URL创建客户端
    pub fn with_base_url(key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            key,
        }
    }

    /// 获取base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn trigger_url(&self) -> String {
        format!(
            "{}/trigger/{}/with/key/{}",
            self.base_url, EVENT_NAME, self.key
        )
    }
}

#[async_trait]
impl Notifier for IftttNotifier {
    async fn notify(&self, message: &str) -> ClientResult<()> {
        debug!("Triggering webhook with message {:?}", message);

        // .query percent-encodes the message, so special characters in the
        // value never produce a malformed URL
        self.client
            .get(self.trigger_url())
            .query(&[("value1", message)])
            .send()
            .await?;

        // Only transport errors fail the trigger; the response body and
        // status are not consumed.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_url_embeds_key_and_event() {
        let notifier = IftttNotifier::new("secret-key".to_string());
        assert_eq!(
            notifier.trigger_url(),
            "https://maker.ifttt.com/trigger/notification/with/key/secret-key"
        );
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let notifier =
            IftttNotifier::with_base_url("k".to_string(), "http://localhost:9999/".to_string());
        assert_eq!(notifier.base_url(), "http://localhost:9999");
    }
}
