use thiserror::Error;

// 定义客户端错误类型
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("failed to parse response json {body:?}: {source}")]
    JsonParseError {
        body: String,
        source: serde_json::Error,
    },
}

pub type ClientResult<T> = Result<T, ClientError>;
