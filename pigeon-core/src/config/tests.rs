#[cfg(test)]
mod tests {
    use crate::config::loader::load_config_from_path;
    use crate::config::model::{Config, DEFAULT_STATUS_URL};
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"{
                "WebhookKey": "abc123",
                "ServerAddress": "127.0.0.1:8080",
                "WebtextBinary": "/usr/local/bin/webtext"
            }"#,
        );

        let config = load_config_from_path(&file.path().to_string_lossy()).unwrap();
        assert_eq!(config.webhook_key.as_deref(), Some("abc123"));
        assert_eq!(config.server_address.as_deref(), Some("127.0.0.1:8080"));
        assert_eq!(
            config.webtext_binary.as_deref(),
            Some("/usr/local/bin/webtext")
        );
        assert!(config.webtext_enabled());
        assert_eq!(config.status_url(), DEFAULT_STATUS_URL);
    }

    #[test]
    fn test_load_minimal_config() {
        // 所有字段都是可选的
        let file = write_config("{}");

        let config = load_config_from_path(&file.path().to_string_lossy()).unwrap();
        assert!(config.webhook_key.is_none());
        assert!(config.server_address.is_none());
        assert!(!config.webtext_enabled());
    }

    #[test]
    fn test_status_url_override() {
        let file = write_config(r#"{"MinecraftStatusUrl": "http://localhost:9000/dynmap.json"}"#);

        let config = load_config_from_path(&file.path().to_string_lossy()).unwrap();
        assert_eq!(config.status_url(), "http://localhost:9000/dynmap.json");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let file = write_config("{not json");

        let result = load_config_from_path(&file.path().to_string_lossy());
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("failed to unmarshal config JSON"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let result = load_config_from_path("/nonexistent/pigeon/config.json");
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("failed to read json configuration file"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let file = write_config(r#"{"WebhookKey": "k", "SomethingElse": 42}"#);

        let config = load_config_from_path(&file.path().to_string_lossy()).unwrap();
        assert_eq!(config.webhook_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_default_config_disables_webtext() {
        let config = Config::default();
        assert!(!config.webtext_enabled());
        assert_eq!(config.status_url(), DEFAULT_STATUS_URL);
    }
}
