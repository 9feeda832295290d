//! Webtext request parsing
//!
//! The `/webtext` endpoint receives its payload as a single query value of
//! the form `<recipient> saying <message>`.

use thiserror::Error;

const SEPARATOR: &str = " saying ";

#[derive(Error, Debug)]
pub enum WebtextParseError {
    // The malformed value is echoed so the caller can see what was rejected
    #[error("raw command {0:?} not formatted correctly")]
    Malformed(String),
}

/// A parsed webtext send request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebtextRequest {
    pub recipient: String,
    pub message: String,
}

impl WebtextRequest {
    /// Split a raw query value into recipient and message.
    ///
    /// Exactly one occurrence of `" saying "` is required; zero or multiple
    /// occurrences are malformed.
    pub fn parse(raw: &str) -> Result<Self, WebtextParseError> {
        let parts: Vec<&str> = raw.split(SEPARATOR).collect();
        if parts.len() != 2 {
            return Err(WebtextParseError::Malformed(raw.to_string()));
        }

        Ok(Self {
            recipient: parts[0].to_string(),
            message: parts[1].to_string(),
        })
    }

    /// 发送成功后推送到webhook的确认文案
    pub fn confirmation(&self) -> String {
        format!(
            "Successfully sent \"{}\" to \"{}\"",
            self.message, self.recipient
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recipient_and_message() {
        let request = WebtextRequest::parse("alice saying hello there").unwrap();
        assert_eq!(request.recipient, "alice");
        assert_eq!(request.message, "hello there");
    }

    #[test]
    fn test_missing_separator_is_malformed() {
        let err = WebtextRequest::parse("alice hello").unwrap_err();
        assert!(err.to_string().contains("\"alice hello\""));
    }

    #[test]
    fn test_double_separator_is_malformed() {
        assert!(WebtextRequest::parse("alice saying hi saying bye").is_err());
    }

    #[test]
    fn test_empty_value_is_malformed() {
        assert!(WebtextRequest::parse("").is_err());
    }

    #[test]
    fn test_confirmation_quotes_both_values() {
        let request = WebtextRequest::parse("bob saying on my way").unwrap();
        assert_eq!(
            request.confirmation(),
            "Successfully sent \"on my way\" to \"bob\""
        );
    }
}
