use serde::{Deserialize, Serialize};

pub use crate::tarot::InterpretationResult as InterpretationResponse;

#[derive(Debug, Deserialize)]
pub struct InterpretationRequest {
    pub question: String,
    pub cards: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct FollowUpRequest {
    pub question: String,
    pub cards: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FollowUpResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub cards: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
