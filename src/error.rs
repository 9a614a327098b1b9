use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Por favor, faça login para acessar este recurso")]
    AuthenticationRequired,

    #[error("Erro de configuração do servidor: JWT_SECRET não configurada")]
    ServerMisconfiguration,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Acesso negado. Faça login primeiro.")]
    Unauthenticated,

    #[error("Acesso negado. Apenas administradores podem realizar esta ação.")]
    Forbidden,

    #[error("Email ou senha inválidos")]
    InvalidCredentials,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Erro de banco de dados: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Token inválido ou expirado")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Erro interno: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthenticationRequired
            | AppError::UserNotFound
            | AppError::Unauthenticated
            | AppError::InvalidCredentials
            | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ServerMisconfiguration
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Erro interno do servidor".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Erro interno do servidor".to_string()
            }
            _ => self.to_string(),
        };

        let body = Json(json!({
            "success": false,
            "message": message
        }));

        (self.status_code(), body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_token_maps_to_401() {
        let (status, body) = body_json(AppError::AuthenticationRequired).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "Por favor, faça login para acessar este recurso"
        );
    }

    #[tokio::test]
    async fn missing_secret_maps_to_500() {
        let (status, _) = body_json(AppError::ServerMisconfiguration).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn forbidden_maps_to_403() {
        let (status, body) = body_json(AppError::Forbidden).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn not_found_keeps_its_message() {
        let (status, body) =
            body_json(AppError::NotFound("Veterinário não encontrado".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Veterinário não encontrado");
    }

    #[tokio::test]
    async fn jwt_failure_is_a_clean_401() {
        let err =
            jsonwebtoken::errors::Error::from(jsonwebtoken::errors::ErrorKind::ExpiredSignature);
        let (status, body) = body_json(AppError::Jwt(err)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn database_failure_hides_detail() {
        let (status, body) = body_json(AppError::Database(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Erro interno do servidor");
    }
}
