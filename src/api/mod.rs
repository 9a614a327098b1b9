pub mod auth;
pub mod clinics;
pub mod veterinaries;

use axum::{
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json, Router,
};
use serde_json::json;

use crate::middleware::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(auth::routes())
        .nest("/clinics", clinics::routes())
        .nest("/veterinaries", veterinaries::routes())
}

/// Terminal fallback for unmatched routes.
pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": format!("Rota não encontrada: {} {}", method, uri.path())
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::Request,
        middleware as axum_middleware,
    };
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::config::Config;
    use crate::middleware::auth_middleware;
    use crate::models::{User, UserRole};
    use crate::services::AuthService;

    fn test_config(secret: Option<&str>) -> Config {
        Config {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "postgres://localhost/medvet_test".to_string(),
            jwt_secret: secret.map(String::from),
            jwt_expiry: 3600,
            admin_email: "admin@admin.com".to_string(),
            environment: "test".to_string(),
        }
    }

    // A lazy pool never connects unless a query runs, so these tests cover
    // everything that fails before the store is touched.
    fn test_app(config: Config) -> Router {
        let pool = PgPoolOptions::new()
            .connect_lazy(&config.database_url)
            .unwrap();
        let state = AppState {
            pool,
            config: config.clone(),
        };

        Router::new()
            .nest("/api/v1", routes())
            .fallback(not_found)
            .layer(axum_middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            ))
            .with_state(state)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn protected_route_without_token_is_401() {
        let app = test_app(test_config(Some("segredo")));
        let request = Request::builder()
            .uri("/api/v1/veterinaries")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "Por favor, faça login para acessar este recurso"
        );
    }

    #[tokio::test]
    async fn missing_secret_is_500_even_with_a_token() {
        let app = test_app(test_config(None));
        let request = Request::builder()
            .uri("/api/v1/veterinaries")
            .header("authorization", "Bearer um.token.qualquer")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_401() {
        let signer = AuthService::new(test_config(Some("outro-segredo")));
        let user = User {
            id: Uuid::new_v4(),
            name: None,
            email: "ana@example.com".to_string(),
            password_hash: String::new(),
            role: UserRole::User,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let token = signer.generate_token(&user).unwrap();

        let app = test_app(test_config(Some("segredo")));
        let request = Request::builder()
            .uri("/api/v1/veterinaries")
            .header("authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn cookie_token_reaches_the_verifier() {
        // A garbage cookie token must fail verification, not fall through to
        // the missing-token branch.
        let app = test_app(test_config(Some("segredo")));
        let request = Request::builder()
            .uri("/api/v1/veterinaries")
            .header("cookie", "token=nao.e.jwt")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Token inválido ou expirado");
    }

    #[tokio::test]
    async fn unmatched_route_is_404_with_method_and_path() {
        let app = test_app(test_config(Some("segredo")));
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/inexistente")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Rota não encontrada: POST /api/v1/inexistente");
    }
}
