// src/handlers/attendance.rs

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
    models::attendance::{
        ActionReceipt, Conversation, ConversationSummary, Fila, Message, RecordingReceipt,
        SendMessagePayload, SetStatusPayload,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct QueueQuery {
    /// Aba da lista: novos, meus ou outros. Sem o parâmetro vêm todas.
    pub fila: Option<Fila>,
}

// GET /api/atendimentos
#[utoipa::path(
    get,
    path = "/api/atendimentos",
    tag = "Atendimentos",
    params(QueueQuery),
    responses(
        (status = 200, description = "Conversas da fila", body = Vec<ConversationSummary>)
    )
)]
pub async fn list_conversations(
    State(app_state): State<AppState>,
    Query(params): Query<QueueQuery>,
) -> Result<impl IntoResponse, AppError> {
    let conversations = app_state.attendance_service.list(params.fila).await?;
    Ok((StatusCode::OK, Json(conversations)))
}

// GET /api/atendimentos/{id}
#[utoipa::path(
    get,
    path = "/api/atendimentos/{id}",
    tag = "Atendimentos",
    params(("id" = Uuid, Path, description = "ID do atendimento")),
    responses(
        (status = 200, description = "Conversa com o histórico completo", body = Conversation),
        (status = 404, description = "Atendimento não encontrado")
    )
)]
pub async fn get_conversation(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let conversation = app_state.attendance_service.open(id).await?;
    Ok((StatusCode::OK, Json(conversation)))
}

// POST /api/atendimentos/{id}/messages
#[utoipa::path(
    post,
    path = "/api/atendimentos/{id}/messages",
    tag = "Atendimentos",
    request_body = SendMessagePayload,
    params(("id" = Uuid, Path, description = "ID do atendimento")),
    responses(
        (status = 201, description = "Mensagem anexada ao fim da conversa", body = Message),
        (status = 204, description = "Texto em branco: nada a enviar")
    )
)]
pub async fn send_message(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SendMessagePayload>,
) -> Result<impl IntoResponse, AppError> {
    match app_state.attendance_service.send_message(id, payload).await? {
        Some(message) => Ok((StatusCode::CREATED, Json(message)).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

// POST /api/atendimentos/{id}/recording
#[utoipa::path(
    post,
    path = "/api/atendimentos/{id}/recording",
    tag = "Atendimentos",
    params(("id" = Uuid, Path, description = "ID do atendimento")),
    responses(
        (status = 200, description = "Estado da gravação; ao parar, carrega o áudio gerado", body = RecordingReceipt)
    )
)]
pub async fn toggle_recording(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let receipt = app_state.attendance_service.toggle_recording(id).await?;
    Ok((StatusCode::OK, Json(receipt)))
}

// PUT /api/atendimentos/{id}/status
#[utoipa::path(
    put,
    path = "/api/atendimentos/{id}/status",
    tag = "Atendimentos",
    request_body = SetStatusPayload,
    params(("id" = Uuid, Path, description = "ID do atendimento")),
    responses(
        (status = 200, description = "Situação atualizada", body = Conversation)
    )
)]
pub async fn set_status(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let conversation = app_state
        .attendance_service
        .set_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(conversation)))
}

// POST /api/atendimentos/{id}/transfer
#[utoipa::path(
    post,
    path = "/api/atendimentos/{id}/transfer",
    tag = "Atendimentos",
    params(("id" = Uuid, Path, description = "ID do atendimento")),
    responses(
        (status = 200, description = "Atendimento devolvido para a fila", body = ActionReceipt)
    )
)]
pub async fn transfer(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let receipt = app_state.attendance_service.transfer(id).await?;
    Ok((StatusCode::OK, Json(receipt)))
}

// POST /api/atendimentos/{id}/conclude
#[utoipa::path(
    post,
    path = "/api/atendimentos/{id}/conclude",
    tag = "Atendimentos",
    params(("id" = Uuid, Path, description = "ID do atendimento")),
    responses(
        (status = 200, description = "Atendimento concluído", body = ActionReceipt)
    )
)]
pub async fn conclude(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let receipt = app_state.attendance_service.conclude(id).await?;
    Ok((StatusCode::OK, Json(receipt)))
}
