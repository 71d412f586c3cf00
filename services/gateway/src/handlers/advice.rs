use crate::error::AppError;
use crate::models::{AdviceRequest, AdviceResponse};
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn generate_advice(
    State(state): State<AppState>,
    Json(request): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, AppError> {
    let advice = state.advice.generate(&request).await?;
    Ok(Json(AdviceResponse { advice }))
}
