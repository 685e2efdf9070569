use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tarot_reader::{Error, Result, llm::InferenceClient};

/// A recorded `generate` call.
#[derive(Debug, Clone)]
pub struct GenerateCall {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Mock inference client for testing
#[derive(Debug, Default)]
pub struct MockInferenceClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub calls: Arc<Mutex<Vec<GenerateCall>>>,
    pub upstream_error: Option<(u16, String)>,
}

impl MockInferenceClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(self, responses: Vec<&str>) -> Self {
        *self.responses.lock().unwrap() = responses.into_iter().map(String::from).collect();
        self
    }

    pub fn with_upstream_error(mut self, status: u16, body: &str) -> Self {
        self.upstream_error = Some((status, body.to_string()));
        self
    }

    pub fn get_calls(&self) -> Vec<GenerateCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn generate(&self, prompt: &str, max_tokens: u32, temperature: f32) -> Result<String> {
        self.calls.lock().unwrap().push(GenerateCall {
            prompt: prompt.to_string(),
            max_tokens,
            temperature,
        });

        if let Some((status, body)) = &self.upstream_error {
            return Err(Error::upstream(*status, body));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::EmptyResponse);
        }

        Ok(responses.remove(0))
    }
}
