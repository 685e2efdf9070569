use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("추론 서버 오류: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("추론 서버로부터 응답을 받지 못했습니다.")]
    EmptyResponse,

    #[error("API 호출 시간 초과 ({secs}초)")]
    Timeout { secs: u64 },

    #[error("추론 서버 연결 실패: {endpoint}")]
    Connection { endpoint: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Builds an `Upstream` error, keeping at most 200 characters of the body.
    pub fn upstream(status: u16, body: &str) -> Self {
        const MAX_BODY_CHARS: usize = 200;

        let body = if body.chars().count() > MAX_BODY_CHARS {
            let mut excerpt: String = body.chars().take(MAX_BODY_CHARS).collect();
            excerpt.push_str("...");
            excerpt
        } else {
            body.to_string()
        };

        Self::Upstream { status, body }
    }
}
