use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Capability, User};
use crate::services::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
}

/// Авторизованный пользователь, извлечённый из токена.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user: User,
}

/// Пользователь, прошедший и проверку прав на управление записями.
#[derive(Clone, Debug)]
pub struct AdminUser {
    pub user: User,
}

// Middleware that makes AppState visible to the extractors below.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(state);
    next.run(request).await
}

/// Bearer token from the Authorization header, falling back to the `token`
/// cookie.
fn extract_token(parts: &Parts) -> Option<String> {
    let header_token = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(String::from);

    header_token.or_else(|| {
        CookieJar::from_headers(&parts.headers)
            .get("token")
            .map(|cookie| cookie.value().to_string())
    })
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = parts
            .extensions
            .get::<AppState>()
            .cloned()
            .ok_or_else(|| AppError::Internal("AppState ausente nas extensions".to_string()))?;

        let token = extract_token(parts).ok_or(AppError::AuthenticationRequired)?;

        // verify_token checks for a configured secret before decoding, so a
        // missing JWT_SECRET comes back as ServerMisconfiguration (500) and
        // a bad token as a clean 401.
        let auth_service = AuthService::new(app_state.config.clone());
        let claims = auth_service.verify_token(&token)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::UserNotFound)?;

        let user = AuthService::get_user_by_id(&app_state.pool, user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        Ok(AuthUser { user })
    }
}

impl AdminUser {
    /// Privilege gate proper: no identity is a 401, an identity without the
    /// record-management capability is a 403.
    pub fn check(user: Option<&User>) -> AppResult<()> {
        let user = user.ok_or(AppError::Unauthenticated)?;

        if !user.role.can(Capability::ManageRecords) {
            return Err(AppError::Forbidden);
        }

        Ok(())
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser { user } = AuthUser::from_request_parts(parts, state).await?;
        Self::check(Some(&user))?;
        Ok(AdminUser { user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use chrono::Utc;

    use crate::models::UserRole;

    fn parts_with_headers(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/api/v1/veterinaries");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    fn user_with_role(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            name: None,
            email: "alguem@example.com".to_string(),
            password_hash: String::new(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn token_from_bearer_header() {
        let parts = parts_with_headers(&[("authorization", "Bearer abc.def.ghi")]);
        assert_eq!(extract_token(&parts).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn token_from_cookie_when_header_absent() {
        let parts = parts_with_headers(&[("cookie", "token=abc.def.ghi; other=1")]);
        assert_eq!(extract_token(&parts).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn header_wins_over_cookie() {
        let parts = parts_with_headers(&[
            ("authorization", "Bearer do-header"),
            ("cookie", "token=do-cookie"),
        ]);
        assert_eq!(extract_token(&parts).as_deref(), Some("do-header"));
    }

    #[test]
    fn no_token_anywhere() {
        let parts = parts_with_headers(&[]);
        assert_eq!(extract_token(&parts), None);

        // A Basic credential is not a bearer token.
        let parts = parts_with_headers(&[("authorization", "Basic dXNlcjpwYXNz")]);
        assert_eq!(extract_token(&parts), None);
    }

    #[test]
    fn gate_rejects_missing_identity() {
        assert!(matches!(
            AdminUser::check(None),
            Err(AppError::Unauthenticated)
        ));
    }

    #[test]
    fn gate_rejects_plain_user() {
        let user = user_with_role(UserRole::User);
        assert!(matches!(
            AdminUser::check(Some(&user)),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn gate_accepts_admin() {
        let user = user_with_role(UserRole::Admin);
        assert!(AdminUser::check(Some(&user)).is_ok());
    }
}
