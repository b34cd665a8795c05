// src/handlers/campaigns.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::campaigns::{Campaign, CampaignOptions, CampaignPayload},
};

// GET /api/campanhas
#[utoipa::path(
    get,
    path = "/api/campanhas",
    tag = "Campanhas",
    responses(
        (status = 200, description = "Todas as campanhas", body = Vec<Campaign>)
    )
)]
pub async fn list_campaigns(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let campaigns = app_state.campaign_service.list().await?;
    Ok((StatusCode::OK, Json(campaigns)))
}

// GET /api/campanhas/options
#[utoipa::path(
    get,
    path = "/api/campanhas/options",
    tag = "Campanhas",
    responses(
        (status = 200, description = "Equipes, canais e modelos disponíveis", body = CampaignOptions)
    )
)]
pub async fn get_options(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(app_state.campaign_service.options())))
}

// POST /api/campanhas
#[utoipa::path(
    post,
    path = "/api/campanhas",
    tag = "Campanhas",
    request_body = CampaignPayload,
    responses(
        (status = 201, description = "Campanha criada", body = Campaign),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_campaign(
    State(app_state): State<AppState>,
    Json(payload): Json<CampaignPayload>,
) -> Result<impl IntoResponse, AppError> {
    let campaign = app_state.campaign_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(campaign)))
}

// PUT /api/campanhas/{id}
#[utoipa::path(
    put,
    path = "/api/campanhas/{id}",
    tag = "Campanhas",
    request_body = CampaignPayload,
    params(("id" = Uuid, Path, description = "ID da campanha")),
    responses(
        (status = 200, description = "Campanha atualizada (volta para Agendada)", body = Campaign),
        (status = 404, description = "Campanha não encontrada")
    )
)]
pub async fn update_campaign(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CampaignPayload>,
) -> Result<impl IntoResponse, AppError> {
    let campaign = app_state.campaign_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(campaign)))
}

// DELETE /api/campanhas/{id}
#[utoipa::path(
    delete,
    path = "/api/campanhas/{id}",
    tag = "Campanhas",
    params(("id" = Uuid, Path, description = "ID da campanha")),
    responses(
        (status = 204, description = "Campanha excluída"),
        (status = 404, description = "Campanha não encontrada")
    )
)]
pub async fn delete_campaign(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.campaign_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
