use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Location of the remote text-generation server.
///
/// `base_url` wins over the address derived from `runpod_id`. Both the base
/// address and `model` are required; see [`InferenceConfig::endpoint`] and
/// [`InferenceConfig::model`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub runpod_id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_interpretation_max_tokens")]
    pub interpretation_max_tokens: u32,
    #[serde(default = "default_followup_max_tokens")]
    pub followup_max_tokens: u32,
}

impl InferenceConfig {
    /// Base address of the inference server, without a trailing slash.
    pub fn endpoint(&self) -> Result<String> {
        if let Some(url) = self.base_url.as_deref().and_then(non_empty) {
            return Ok(url.trim_end_matches('/').to_string());
        }

        match self.runpod_id.as_deref().and_then(non_empty) {
            Some(id) => Ok(format!("https://{id}-8000.proxy.runpod.net")),
            None => Err(Error::config(
                "RUNPOD_ID 또는 RUNPOD_URL 환경 변수가 설정되지 않았습니다. .env 파일을 확인해주세요.",
            )),
        }
    }

    pub fn model(&self) -> Result<&str> {
        self.model.as_deref().and_then(non_empty).ok_or_else(|| {
            Error::config("EEVE_MODEL 환경 변수가 설정되지 않았습니다. .env 파일을 확인해주세요.")
        })
    }
}

/// Treats blank values and the literal `"None"` as unset.
pub(crate) fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() || value == "None" {
        None
    } else {
        Some(value)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            runpod_id: None,
            model: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            interpretation_max_tokens: default_interpretation_max_tokens(),
            followup_max_tokens: default_followup_max_tokens(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_temperature() -> f32 {
    0.7
}

fn default_interpretation_max_tokens() -> u32 {
    600
}

fn default_followup_max_tokens() -> u32 {
    300
}
