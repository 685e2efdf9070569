use super::types::{
    ErrorResponse, FollowUpRequest, FollowUpResponse, HealthResponse, InterpretationRequest,
    InterpretationResponse,
};
use crate::tarot::{TarotService, cards};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TarotService>,
    pub model: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn internal_error(message: String) -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { detail: message }),
    )
}

pub async fn interpret(
    State(state): State<AppState>,
    Json(request): Json<InterpretationRequest>,
) -> Result<Json<InterpretationResponse>, HandlerError> {
    let request_id = Uuid::new_v4();
    info!(
        "[{}] Interpretation request with {} cards: {:?}",
        request_id,
        request.cards.len(),
        request.cards
    );

    match state
        .service
        .interpret_tarot(&request.question, &request.cards)
        .await
    {
        Ok(result) => {
            info!("[{}] Interpretation completed", request_id);
            Ok(Json(result))
        }
        Err(e) => {
            error!("[{}] Error in interpret_tarot: {}", request_id, e);
            Err(internal_error(format!(
                "타로 해석 중 오류가 발생했습니다: {}",
                e
            )))
        }
    }
}

pub async fn followup(
    State(state): State<AppState>,
    Json(request): Json<FollowUpRequest>,
) -> Result<Json<FollowUpResponse>, HandlerError> {
    let request_id = Uuid::new_v4();
    info!(
        "[{}] Follow-up request for cards: {:?}",
        request_id, request.cards
    );

    match state
        .service
        .answer_followup(&request.question, &request.cards)
        .await
    {
        Ok(response) => {
            info!("[{}] Follow-up completed", request_id);
            Ok(Json(FollowUpResponse { response }))
        }
        Err(e) => {
            error!("[{}] Error in followup_question: {}", request_id, e);
            Err(internal_error(format!(
                "추가 질문 처리 중 오류가 발생했습니다: {}",
                e
            )))
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.model.clone(),
        cards: cards::names().count(),
    })
}
