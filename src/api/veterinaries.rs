use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::{AdminUser, AppState, AuthUser};
use crate::models::{
    CreateVeterinarianRequest, UpdateVeterinarianRequest, Veterinarian, VeterinarianResponse,
};
use crate::services::VeterinarianService;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_veterinarians).post(create_veterinarian))
        .route(
            "/:id",
            get(get_veterinarian)
                .put(update_veterinarian)
                .delete(delete_veterinarian),
        )
}

/// Cadastro de veterinário
#[utoipa::path(
    post,
    path = "/api/v1/veterinaries",
    tag = "veterinaries",
    request_body = CreateVeterinarianRequest,
    responses(
        (status = 201, description = "Veterinário criado", body = Veterinarian),
        (status = 401, description = "Não autenticado"),
        (status = 403, description = "Apenas administradores")
    )
)]
pub async fn create_veterinarian(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreateVeterinarianRequest>,
) -> AppResult<(StatusCode, Json<Veterinarian>)> {
    let vet = VeterinarianService::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(vet)))
}

/// Lista de veterinários com a clínica associada
#[utoipa::path(
    get,
    path = "/api/v1/veterinaries",
    tag = "veterinaries",
    responses(
        (status = 200, description = "Lista de veterinários", body = Vec<VeterinarianResponse>),
        (status = 401, description = "Não autenticado")
    )
)]
pub async fn list_veterinarians(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<VeterinarianResponse>>> {
    let vets = VeterinarianService::list(&state.pool).await?;
    Ok(Json(vets))
}

/// Busca de veterinário por ID
#[utoipa::path(
    get,
    path = "/api/v1/veterinaries/{id}",
    tag = "veterinaries",
    params(
        ("id" = i64, Path, description = "ID do veterinário")
    ),
    responses(
        (status = 200, description = "Veterinário encontrado", body = VeterinarianResponse),
        (status = 404, description = "Veterinário não encontrado")
    )
)]
pub async fn get_veterinarian(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<VeterinarianResponse>> {
    let vet = VeterinarianService::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Veterinário não encontrado".to_string()))?;

    Ok(Json(vet))
}

/// Atualização parcial de veterinário
#[utoipa::path(
    put,
    path = "/api/v1/veterinaries/{id}",
    tag = "veterinaries",
    params(
        ("id" = i64, Path, description = "ID do veterinário")
    ),
    request_body = UpdateVeterinarianRequest,
    responses(
        (status = 200, description = "Veterinário atualizado", body = Veterinarian),
        (status = 403, description = "Apenas administradores")
    )
)]
pub async fn update_veterinarian(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateVeterinarianRequest>,
) -> AppResult<Json<Veterinarian>> {
    let vet = VeterinarianService::update(&state.pool, id, payload).await?;
    Ok(Json(vet))
}

/// Remoção de veterinário
#[utoipa::path(
    delete,
    path = "/api/v1/veterinaries/{id}",
    tag = "veterinaries",
    params(
        ("id" = i64, Path, description = "ID do veterinário")
    ),
    responses(
        (status = 200, description = "Veterinário removido"),
        (status = 403, description = "Apenas administradores")
    )
)]
pub async fn delete_veterinarian(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    VeterinarianService::delete(&state.pool, id).await?;
    Ok(Json(json!({ "message": "Veterinário deletado com sucesso" })))
}
