// src/handlers/profile.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::error::AppError,
    config::AppState,
    models::profile::{Profile, UpdateProfilePayload},
};

// GET /api/perfil
#[utoipa::path(
    get,
    path = "/api/perfil",
    tag = "Perfil",
    responses(
        (status = 200, description = "Perfil do atendente", body = Profile)
    )
)]
pub async fn get_profile(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let profile = app_state.profile_service.get().await?;
    Ok((StatusCode::OK, Json(profile)))
}

// PUT /api/perfil
#[utoipa::path(
    put,
    path = "/api/perfil",
    tag = "Perfil",
    request_body = UpdateProfilePayload,
    responses(
        (status = 200, description = "Perfil salvo", body = Profile),
        (status = 400, description = "Email inválido")
    )
)]
pub async fn update_profile(
    State(app_state): State<AppState>,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<impl IntoResponse, AppError> {
    let profile = app_state.profile_service.update(payload).await?;
    Ok((StatusCode::OK, Json(profile)))
}
