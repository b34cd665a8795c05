// src/handlers/settings.rs

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
    models::settings::{
        AccountInfo, BusinessHours, SystemUser, SystemUserPayload, Team, TeamPayload,
        UpdateAccountPayload,
    },
};

// =============================================================================
//  USUÁRIOS
// =============================================================================

// GET /api/configuracoes/users
#[utoipa::path(
    get,
    path = "/api/configuracoes/users",
    tag = "Configurações",
    responses(
        (status = 200, description = "Usuários do sistema", body = Vec<SystemUser>)
    )
)]
pub async fn list_users(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = app_state.settings_service.list_users().await?;
    Ok((StatusCode::OK, Json(users)))
}

// POST /api/configuracoes/users
#[utoipa::path(
    post,
    path = "/api/configuracoes/users",
    tag = "Configurações",
    request_body = SystemUserPayload,
    responses(
        (status = 201, description = "Usuário criado", body = SystemUser),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(payload): Json<SystemUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state.settings_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

// PUT /api/configuracoes/users/{id}
#[utoipa::path(
    put,
    path = "/api/configuracoes/users/{id}",
    tag = "Configurações",
    request_body = SystemUserPayload,
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário atualizado", body = SystemUser),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SystemUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state.settings_service.update_user(id, payload).await?;
    Ok((StatusCode::OK, Json(user)))
}

// DELETE /api/configuracoes/users/{id}
#[utoipa::path(
    delete,
    path = "/api/configuracoes/users/{id}",
    tag = "Configurações",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 204, description = "Usuário excluído"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn delete_user(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.settings_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  EQUIPES
// =============================================================================

// GET /api/configuracoes/teams
#[utoipa::path(
    get,
    path = "/api/configuracoes/teams",
    tag = "Configurações",
    responses(
        (status = 200, description = "Equipes cadastradas", body = Vec<Team>)
    )
)]
pub async fn list_teams(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let teams = app_state.settings_service.list_teams().await?;
    Ok((StatusCode::OK, Json(teams)))
}

// POST /api/configuracoes/teams
#[utoipa::path(
    post,
    path = "/api/configuracoes/teams",
    tag = "Configurações",
    request_body = TeamPayload,
    responses(
        (status = 201, description = "Equipe criada", body = Team),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_team(
    State(app_state): State<AppState>,
    Json(payload): Json<TeamPayload>,
) -> Result<impl IntoResponse, AppError> {
    let team = app_state.settings_service.create_team(payload).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

// PUT /api/configuracoes/teams/{id}
#[utoipa::path(
    put,
    path = "/api/configuracoes/teams/{id}",
    tag = "Configurações",
    request_body = TeamPayload,
    params(("id" = Uuid, Path, description = "ID da equipe")),
    responses(
        (status = 200, description = "Equipe atualizada", body = Team),
        (status = 404, description = "Equipe não encontrada")
    )
)]
pub async fn update_team(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TeamPayload>,
) -> Result<impl IntoResponse, AppError> {
    let team = app_state.settings_service.update_team(id, payload).await?;
    Ok((StatusCode::OK, Json(team)))
}

// DELETE /api/configuracoes/teams/{id}
#[utoipa::path(
    delete,
    path = "/api/configuracoes/teams/{id}",
    tag = "Configurações",
    params(("id" = Uuid, Path, description = "ID da equipe")),
    responses(
        (status = 204, description = "Equipe excluída"),
        (status = 404, description = "Equipe não encontrada")
    )
)]
pub async fn delete_team(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.settings_service.delete_team(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  CONTA E HORÁRIOS
// =============================================================================

// GET /api/configuracoes/account
#[utoipa::path(
    get,
    path = "/api/configuracoes/account",
    tag = "Configurações",
    responses(
        (status = 200, description = "Informações da conta", body = AccountInfo)
    )
)]
pub async fn get_account(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let account = app_state.settings_service.account().await?;
    Ok((StatusCode::OK, Json(account)))
}

// PUT /api/configuracoes/account
#[utoipa::path(
    put,
    path = "/api/configuracoes/account",
    tag = "Configurações",
    request_body = UpdateAccountPayload,
    responses(
        (status = 200, description = "Conta atualizada", body = AccountInfo)
    )
)]
pub async fn update_account(
    State(app_state): State<AppState>,
    Json(payload): Json<UpdateAccountPayload>,
) -> Result<impl IntoResponse, AppError> {
    let account = app_state.settings_service.update_account(payload).await?;
    Ok((StatusCode::OK, Json(account)))
}

// GET /api/configuracoes/hours
#[utoipa::path(
    get,
    path = "/api/configuracoes/hours",
    tag = "Configurações",
    responses(
        (status = 200, description = "Horário de atendimento", body = BusinessHours)
    )
)]
pub async fn get_hours(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let hours = app_state.settings_service.hours().await?;
    Ok((StatusCode::OK, Json(hours)))
}

// PUT /api/configuracoes/hours
#[utoipa::path(
    put,
    path = "/api/configuracoes/hours",
    tag = "Configurações",
    request_body = BusinessHours,
    responses(
        (status = 200, description = "Horário de atendimento gravado", body = BusinessHours)
    )
)]
pub async fn update_hours(
    State(app_state): State<AppState>,
    Json(payload): Json<BusinessHours>,
) -> Result<impl IntoResponse, AppError> {
    let hours = app_state.settings_service.update_hours(payload).await?;
    Ok((StatusCode::OK, Json(hours)))
}
