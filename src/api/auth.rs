use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::AppState;
use crate::models::UserPublic;
use crate::services::AuthService;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

/// Login com email e senha, devolvendo o token de acesso
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login realizado", body = UserPublic),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<Value>> {
    let user = AuthService::get_user_by_email(&state.pool, &payload.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !AuthService::verify_password(&payload.password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    let auth_service = AuthService::new(state.config.clone());
    let token = auth_service.generate_token(&user)?;

    Ok(Json(json!({
        "success": true,
        "token": token,
        "user": UserPublic::from(user)
    })))
}
