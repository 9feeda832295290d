//! Minecraft status source client
//!
//! Fetches the dynmap player-list JSON from the Minecraft server. Only the
//! number of connected players is consumed; the update feed is ignored.

use super::traits::StatusSource;
use super::types::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// 从dynmap响应解码的状态快照
#[derive(Debug, Clone, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
    #[serde(default)]
    pub updates: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
}

impl StatusSnapshot {
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

/// 玩家数量对应的通知文案
pub fn player_count_message(count: usize) -> String {
    match count {
        0 => "No one is playing minecraft".to_string(),
        1 => "One person is playing minecraft".to_string(),
        n => format!("{n} people playing minecraft"),
    }
}

/// dynmap状态源客户端
#[derive(Debug, Clone)]
pub struct DynmapStatusSource {
    client: Client,
    url: String,
}

impl DynmapStatusSource {
    /// 创建指向给定dynmap端点的状态源
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// 获取状态源URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl StatusSource for DynmapStatusSource {
    async fn fetch(&self) -> ClientResult<StatusSnapshot> {
        debug!("Fetching Minecraft status from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let body = response.text().await?;

        let snapshot = serde_json::from_str(&body)
            .map_err(|source| ClientError::JsonParseError { body, source })?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_snapshot() {
        let body = r#"{
            "players": [
                {"name": "alice", "world": "overworld", "x": 1.0},
                {"name": "bob"}
            ],
            "updates": [{"type": "chat"}]
        }"#;

        let snapshot: StatusSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.player_count(), 2);
        assert_eq!(snapshot.players[0].name, "alice");
        assert_eq!(snapshot.updates.len(), 1);
    }

    #[test]
    fn test_decode_empty_snapshot() {
        let snapshot: StatusSnapshot =
            serde_json::from_str(r#"{"players":[],"updates":[]}"#).unwrap();
        assert_eq!(snapshot.player_count(), 0);
    }

    #[test]
    fn test_player_count_message_phrasing() {
        assert_eq!(player_count_message(0), "No one is playing minecraft");
        assert_eq!(player_count_message(1), "One person is playing minecraft");
        assert_eq!(player_count_message(2), "2 people playing minecraft");
        assert_eq!(player_count_message(17), "17 people playing minecraft");
    }
}
