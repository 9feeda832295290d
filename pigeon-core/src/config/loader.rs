use crate::config::model::Config;

pub fn load_config() -> Result<Config, anyhow::Error> {
    load_config_from_path(&get_config_path())
}

pub fn load_config_from_path(config_path: &str) -> Result<Config, anyhow::Error> {
    let config_str = std::fs::read_to_string(config_path).map_err(|e| {
        anyhow::anyhow!("failed to read json configuration file {config_path}: {e}")
    })?;
    let config: Config = serde_json::from_str(&config_str)
        .map_err(|e| anyhow::anyhow!("failed to unmarshal config JSON: {e}"))?;
    Ok(config)
}

/// 配置文件路径，可通过CONFIG_PATH环境变量覆盖
pub fn get_config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.json".to_string())
}
