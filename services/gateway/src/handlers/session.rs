use crate::auth::{bearer_token, MaybePrincipal};
use crate::error::AppError;
use crate::models::{LoginRequest, LoginResponse, OkResponse};
use crate::state::AppState;
use axum::{extract::State, http::HeaderMap, Json};
use types::principal::{Principal, Role};

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username = request.username.trim();
    if username.is_empty() || request.password.trim().is_empty() {
        return Err(AppError::BadRequest(
            "username and password are required".to_string(),
        ));
    }

    // Only an explicit request for admin grants it.
    let role = match request.role.as_deref() {
        Some("admin") => Role::Admin,
        _ => Role::Farmer,
    };

    let (token, principal) = state.sessions.login(username, role);
    Ok(Json(LoginResponse {
        id: principal.id,
        username: principal.username,
        role: principal.role,
        token,
    }))
}

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<OkResponse> {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.logout(token);
    }
    Json(OkResponse { ok: true })
}

pub async fn me(MaybePrincipal(principal): MaybePrincipal) -> Json<Option<Principal>> {
    Json(principal)
}
