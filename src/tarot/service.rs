use super::{parser, prompt};
use crate::{
    Result,
    config::{Config, GenerationConfig},
    llm::{HttpInferenceClient, InferenceClient},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretationResult {
    pub interpretation: String,
    pub advice: String,
}

/// Turns questions about drawn cards into model-generated readings.
///
/// Holds no per-request state, so one instance is shared by every request.
pub struct TarotService {
    client: Arc<dyn InferenceClient>,
    generation: GenerationConfig,
}

impl TarotService {
    pub fn new(client: Arc<dyn InferenceClient>, generation: GenerationConfig) -> Self {
        Self { client, generation }
    }

    /// Builds the service with an HTTP inference client. Missing inference
    /// settings fail here, before any request is made.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = HttpInferenceClient::new(&config.inference)?;
        info!(
            "Using inference endpoint {} with model {}",
            client.base_url(),
            client.model()
        );

        Ok(Self::new(Arc::new(client), config.generation.clone()))
    }

    pub async fn interpret_tarot(
        &self,
        question: &str,
        cards: &[String],
    ) -> Result<InterpretationResult> {
        let prompt = prompt::build_interpretation_prompt(question, cards);
        debug!("Interpretation prompt:\n{}", prompt);

        let reply = self
            .client
            .generate(
                &prompt,
                self.generation.interpretation_max_tokens,
                self.generation.temperature,
            )
            .await?;

        let (interpretation, advice) = parser::parse(&reply);

        Ok(InterpretationResult {
            interpretation,
            advice,
        })
    }

    /// Answers a follow-up question; the reply is returned without splitting.
    pub async fn answer_followup(&self, question: &str, cards: &[String]) -> Result<String> {
        let prompt = prompt::build_followup_prompt(question, cards);
        debug!("Follow-up prompt:\n{}", prompt);

        self.client
            .generate(
                &prompt,
                self.generation.followup_max_tokens,
                self.generation.temperature,
            )
            .await
    }
}
