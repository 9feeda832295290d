use serde::{Deserialize, Serialize};

/// Default URL of the dynmap player-list endpoint.
pub const DEFAULT_STATUS_URL: &str =
    "http://minecraft.netsoc.co/standalone/dynmap_NetsocCraft.json";

/// 服务配置，启动时从JSON文件加载一次，之后只读
///
/// Field names keep the PascalCase keys of the original config file so
/// existing deployments keep working.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    /// IFTTT Maker webhook signing key
    #[serde(rename = "WebhookKey", default)]
    pub webhook_key: Option<String>,
    /// Address the HTTP server binds to, e.g. "127.0.0.1:3000"
    #[serde(rename = "ServerAddress", default)]
    pub server_address: Option<String>,
    /// Path to the external text-sending binary; /webtext is only mounted
    /// when this is set
    #[serde(rename = "WebtextBinary", default)]
    pub webtext_binary: Option<String>,
    /// Override for the Minecraft status source URL
    #[serde(rename = "MinecraftStatusUrl", default)]
    pub minecraft_status_url: Option<String>,
}

impl Config {
    /// 获取状态源URL，未配置时使用默认值
    pub fn status_url(&self) -> &str {
        self.minecraft_status_url
            .as_deref()
            .unwrap_or(DEFAULT_STATUS_URL)
    }

    /// 是否启用webtext端点
    pub fn webtext_enabled(&self) -> bool {
        self.webtext_binary.is_some()
    }
}
