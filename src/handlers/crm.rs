// src/handlers/crm.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::crm::{BoardColumn, CrmCatalogs, Lead, LeadPayload, MoveLeadPayload},
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct LeadSearchQuery {
    /// Texto de busca: nome, email ou empresa.
    pub q: Option<String>,
}

// GET /api/crm/leads
#[utoipa::path(
    get,
    path = "/api/crm/leads",
    tag = "CRM",
    params(LeadSearchQuery),
    responses(
        (status = 200, description = "Leads do recorte filtrado", body = Vec<Lead>)
    )
)]
pub async fn list_leads(
    State(app_state): State<AppState>,
    Query(params): Query<LeadSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let leads = app_state
        .pipeline_service
        .search_leads(params.q.as_deref().unwrap_or(""))
        .await?;

    Ok((StatusCode::OK, Json(leads)))
}

// GET /api/crm/board
#[utoipa::path(
    get,
    path = "/api/crm/board",
    tag = "CRM",
    params(LeadSearchQuery),
    responses(
        (status = 200, description = "Quadro Kanban com totais por coluna", body = Vec<BoardColumn>)
    )
)]
pub async fn get_board(
    State(app_state): State<AppState>,
    Query(params): Query<LeadSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let board = app_state
        .pipeline_service
        .board(params.q.as_deref().unwrap_or(""))
        .await?;

    Ok((StatusCode::OK, Json(board)))
}

// GET /api/crm/catalogs
#[utoipa::path(
    get,
    path = "/api/crm/catalogs",
    tag = "CRM",
    responses(
        (status = 200, description = "Origens e responsáveis disponíveis", body = CrmCatalogs)
    )
)]
pub async fn get_catalogs(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(app_state.pipeline_service.catalogs())))
}

// POST /api/crm/leads
#[utoipa::path(
    post,
    path = "/api/crm/leads",
    tag = "CRM",
    request_body = LeadPayload,
    responses(
        (status = 201, description = "Lead criado", body = Lead),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_lead(
    State(app_state): State<AppState>,
    Json(payload): Json<LeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state.pipeline_service.create_lead(payload).await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

// PUT /api/crm/leads/{id}
#[utoipa::path(
    put,
    path = "/api/crm/leads/{id}",
    tag = "CRM",
    request_body = LeadPayload,
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Lead atualizado", body = Lead),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn update_lead(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<LeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state.pipeline_service.update_lead(id, payload).await?;
    Ok((StatusCode::OK, Json(lead)))
}

// POST /api/crm/leads/{id}/move
#[utoipa::path(
    post,
    path = "/api/crm/leads/{id}/move",
    tag = "CRM",
    request_body = MoveLeadPayload,
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Lead movido de coluna", body = Lead),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn move_lead(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MoveLeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state
        .pipeline_service
        .move_lead(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(lead)))
}
