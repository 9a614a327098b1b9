use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::{AdminUser, AppState, AuthUser};
use crate::models::{Clinic, CreateClinicRequest, UpdateClinicRequest};
use crate::services::ClinicService;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clinics).post(create_clinic))
        .route(
            "/:id",
            get(get_clinic).put(update_clinic).delete(delete_clinic),
        )
}

/// Cadastro de clínica
#[utoipa::path(
    post,
    path = "/api/v1/clinics",
    tag = "clinics",
    request_body = CreateClinicRequest,
    responses(
        (status = 201, description = "Clínica criada", body = Clinic),
        (status = 403, description = "Apenas administradores")
    )
)]
pub async fn create_clinic(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreateClinicRequest>,
) -> AppResult<(StatusCode, Json<Clinic>)> {
    let clinic = ClinicService::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(clinic)))
}

/// Lista de clínicas
#[utoipa::path(
    get,
    path = "/api/v1/clinics",
    tag = "clinics",
    responses(
        (status = 200, description = "Lista de clínicas", body = Vec<Clinic>),
        (status = 401, description = "Não autenticado")
    )
)]
pub async fn list_clinics(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Clinic>>> {
    let clinics = ClinicService::list(&state.pool).await?;
    Ok(Json(clinics))
}

/// Busca de clínica por ID
#[utoipa::path(
    get,
    path = "/api/v1/clinics/{id}",
    tag = "clinics",
    params(
        ("id" = i64, Path, description = "ID da clínica")
    ),
    responses(
        (status = 200, description = "Clínica encontrada", body = Clinic),
        (status = 404, description = "Clínica não encontrada")
    )
)]
pub async fn get_clinic(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Clinic>> {
    let clinic = ClinicService::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Clínica não encontrada".to_string()))?;

    Ok(Json(clinic))
}

/// Atualização parcial de clínica
#[utoipa::path(
    put,
    path = "/api/v1/clinics/{id}",
    tag = "clinics",
    params(
        ("id" = i64, Path, description = "ID da clínica")
    ),
    request_body = UpdateClinicRequest,
    responses(
        (status = 200, description = "Clínica atualizada", body = Clinic),
        (status = 403, description = "Apenas administradores")
    )
)]
pub async fn update_clinic(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateClinicRequest>,
) -> AppResult<Json<Clinic>> {
    let clinic = ClinicService::update(&state.pool, id, payload).await?;
    Ok(Json(clinic))
}

/// Remoção de clínica
#[utoipa::path(
    delete,
    path = "/api/v1/clinics/{id}",
    tag = "clinics",
    params(
        ("id" = i64, Path, description = "ID da clínica")
    ),
    responses(
        (status = 200, description = "Clínica removida"),
        (status = 403, description = "Apenas administradores")
    )
)]
pub async fn delete_clinic(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    ClinicService::delete(&state.pool, id).await?;
    Ok(Json(json!({ "message": "Clínica deletada com sucesso" })))
}
