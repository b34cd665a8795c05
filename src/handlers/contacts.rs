// src/handlers/contacts.rs

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
    models::contacts::{
        BulkDeleteResult, Contact, ContactPayload, CustomFieldPayload, SelectionState, TagPayload,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ContactSearchQuery {
    /// Texto de busca: nome, telefone ou email.
    pub q: Option<String>,
    /// Etiqueta exata para filtrar.
    pub tag: Option<String>,
}

// GET /api/contatos
#[utoipa::path(
    get,
    path = "/api/contatos",
    tag = "Contatos",
    params(ContactSearchQuery),
    responses(
        (status = 200, description = "Contatos do recorte filtrado", body = Vec<Contact>)
    )
)]
pub async fn list_contacts(
    State(app_state): State<AppState>,
    Query(params): Query<ContactSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let contacts = app_state
        .contact_service
        .list(params.q.as_deref().unwrap_or(""), params.tag.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(contacts)))
}

// GET /api/contatos/tags
#[utoipa::path(
    get,
    path = "/api/contatos/tags",
    tag = "Contatos",
    responses(
        (status = 200, description = "Etiquetas distintas em uso", body = Vec<String>)
    )
)]
pub async fn list_tags(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tags = app_state.contact_service.tags().await?;
    Ok((StatusCode::OK, Json(tags)))
}

// POST /api/contatos
#[utoipa::path(
    post,
    path = "/api/contatos",
    tag = "Contatos",
    request_body = ContactPayload,
    responses(
        (status = 201, description = "Contato criado", body = Contact),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_contact(
    State(app_state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> Result<impl IntoResponse, AppError> {
    let contact = app_state.contact_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

// PUT /api/contatos/{id}
#[utoipa::path(
    put,
    path = "/api/contatos/{id}",
    tag = "Contatos",
    request_body = ContactPayload,
    params(("id" = Uuid, Path, description = "ID do contato")),
    responses(
        (status = 200, description = "Contato atualizado", body = Contact),
        (status = 404, description = "Contato não encontrado")
    )
)]
pub async fn update_contact(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ContactPayload>,
) -> Result<impl IntoResponse, AppError> {
    let contact = app_state.contact_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(contact)))
}

// =============================================================================
//  ETIQUETAS E CAMPOS PERSONALIZADOS
// =============================================================================

// POST /api/contatos/{id}/tags
#[utoipa::path(
    post,
    path = "/api/contatos/{id}/tags",
    tag = "Contatos",
    request_body = TagPayload,
    params(("id" = Uuid, Path, description = "ID do contato")),
    responses(
        (status = 200, description = "Etiqueta adicionada", body = Contact)
    )
)]
pub async fn add_tag(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TagPayload>,
) -> Result<impl IntoResponse, AppError> {
    let contact = app_state.contact_service.add_tag(id, payload).await?;
    Ok((StatusCode::OK, Json(contact)))
}

// DELETE /api/contatos/{id}/tags/{tag}
#[utoipa::path(
    delete,
    path = "/api/contatos/{id}/tags/{tag}",
    tag = "Contatos",
    params(
        ("id" = Uuid, Path, description = "ID do contato"),
        ("tag" = String, Path, description = "Etiqueta a remover")
    ),
    responses(
        (status = 200, description = "Etiqueta removida", body = Contact)
    )
)]
pub async fn remove_tag(
    State(app_state): State<AppState>,
    Path((id, tag)): Path<(Uuid, String)>,
) -> Result<impl IntoResponse, AppError> {
    let contact = app_state.contact_service.remove_tag(id, &tag).await?;
    Ok((StatusCode::OK, Json(contact)))
}

// POST /api/contatos/{id}/fields
#[utoipa::path(
    post,
    path = "/api/contatos/{id}/fields",
    tag = "Contatos",
    request_body = CustomFieldPayload,
    params(("id" = Uuid, Path, description = "ID do contato")),
    responses(
        (status = 200, description = "Campo personalizado gravado", body = Contact)
    )
)]
pub async fn set_custom_field(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CustomFieldPayload>,
) -> Result<impl IntoResponse, AppError> {
    let contact = app_state
        .contact_service
        .set_custom_field(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(contact)))
}

// DELETE /api/contatos/{id}/fields/{key}
#[utoipa::path(
    delete,
    path = "/api/contatos/{id}/fields/{key}",
    tag = "Contatos",
    params(
        ("id" = Uuid, Path, description = "ID do contato"),
        ("key" = String, Path, description = "Chave do campo")
    ),
    responses(
        (status = 200, description = "Campo personalizado removido", body = Contact)
    )
)]
pub async fn remove_custom_field(
    State(app_state): State<AppState>,
    Path((id, key)): Path<(Uuid, String)>,
) -> Result<impl IntoResponse, AppError> {
    let contact = app_state
        .contact_service
        .remove_custom_field(id, &key)
        .await?;

    Ok((StatusCode::OK, Json(contact)))
}

// =============================================================================
//  SELEÇÃO MÚLTIPLA E EXCLUSÕES
// =============================================================================

// POST /api/contatos/{id}/selection
#[utoipa::path(
    post,
    path = "/api/contatos/{id}/selection",
    tag = "Contatos",
    params(("id" = Uuid, Path, description = "ID do contato")),
    responses(
        (status = 200, description = "Seleção atual após o toggle", body = SelectionState)
    )
)]
pub async fn toggle_selection(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let selected = app_state.contact_service.toggle_selection(id).await?;
    Ok((StatusCode::OK, Json(SelectionState { selected })))
}

// POST /api/contatos/selection
#[utoipa::path(
    post,
    path = "/api/contatos/selection",
    tag = "Contatos",
    params(ContactSearchQuery),
    responses(
        (status = 200, description = "Todos do recorte filtrado selecionados", body = SelectionState)
    )
)]
pub async fn select_all(
    State(app_state): State<AppState>,
    Query(params): Query<ContactSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let selected = app_state
        .contact_service
        .select_all(params.q.as_deref().unwrap_or(""), params.tag.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(SelectionState { selected })))
}

// DELETE /api/contatos/selection
#[utoipa::path(
    delete,
    path = "/api/contatos/selection",
    tag = "Contatos",
    responses(
        (status = 204, description = "Seleção limpa")
    )
)]
pub async fn clear_selection(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    app_state.contact_service.clear_selection().await?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/contatos/selection/delete
#[utoipa::path(
    post,
    path = "/api/contatos/selection/delete",
    tag = "Contatos",
    responses(
        (status = 200, description = "Selecionados excluídos", body = BulkDeleteResult)
    )
)]
pub async fn delete_selected(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let removed = app_state.contact_service.delete_selected().await?;
    Ok((StatusCode::OK, Json(BulkDeleteResult { removed })))
}

// POST /api/contatos/{id}/removal
#[utoipa::path(
    post,
    path = "/api/contatos/{id}/removal",
    tag = "Contatos",
    params(("id" = Uuid, Path, description = "ID do contato")),
    responses(
        (status = 200, description = "Exclusão solicitada; devolve os dados para o diálogo", body = Contact),
        (status = 404, description = "Contato não encontrado")
    )
)]
pub async fn request_removal(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let contact = app_state.contact_service.request_removal(id).await?;
    Ok((StatusCode::OK, Json(contact)))
}

// DELETE /api/contatos/{id}/removal
#[utoipa::path(
    delete,
    path = "/api/contatos/{id}/removal",
    tag = "Contatos",
    params(("id" = Uuid, Path, description = "ID do contato")),
    responses(
        (status = 204, description = "Solicitação cancelada"),
        (status = 409, description = "Nenhuma exclusão pendente")
    )
)]
pub async fn cancel_removal(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.contact_service.cancel_removal(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// DELETE /api/contatos/{id}
#[utoipa::path(
    delete,
    path = "/api/contatos/{id}",
    tag = "Contatos",
    params(("id" = Uuid, Path, description = "ID do contato")),
    responses(
        (status = 204, description = "Contato excluído"),
        (status = 409, description = "Exclusão não foi solicitada antes")
    )
)]
pub async fn confirm_removal(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.contact_service.confirm_removal(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
