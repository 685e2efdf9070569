use tarot_reader::config::{Config, InferenceConfig};

pub const TEST_MODEL: &str = "yanolja/EEVE-Korean-10.8B-v1.0";

/// Create a test configuration pointing at `base_url`
pub fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.inference = InferenceConfig {
        base_url: Some(base_url.to_string()),
        runpod_id: None,
        model: Some(TEST_MODEL.to_string()),
        timeout_secs: 5,
    };
    config
}

/// Convert card names into the owned form the service takes
pub fn cards(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

inference:
  runpod_id: "pod-1234"
  model: "yanolja/EEVE-Korean-10.8B-v1.0"
  timeout_secs: 10

generation:
  temperature: 0.5
  interpretation_max_tokens: 512
  followup_max_tokens: 256
"#;

/// A well-formed reading as the model is asked to write it
pub const FORMATTED_READING: &str = "1. 카드 해석 (200-300자): 별 카드는 회복과 희망을 뜻합니다.\n2. 실천 조언 (100-150자): 오늘 하루 스스로를 다정하게 돌봐 주세요.";
