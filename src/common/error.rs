// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Lead não encontrado")]
    LeadNotFound,

    #[error("Contato não encontrado")]
    ContactNotFound,

    #[error("Atendimento não encontrado")]
    ConversationNotFound,

    #[error("Campanha não encontrada")]
    CampaignNotFound,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Equipe não encontrada")]
    TeamNotFound,

    // A exclusão individual é em duas fases: primeiro solicita, depois confirma.
    #[error("Nenhuma exclusão pendente para este contato")]
    NoPendingRemoval,

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::LeadNotFound => (StatusCode::NOT_FOUND, "Lead não encontrado."),
            AppError::ContactNotFound => (StatusCode::NOT_FOUND, "Contato não encontrado."),
            AppError::ConversationNotFound => {
                (StatusCode::NOT_FOUND, "Atendimento não encontrado.")
            }
            AppError::CampaignNotFound => (StatusCode::NOT_FOUND, "Campanha não encontrada."),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "Usuário não encontrado."),
            AppError::TeamNotFound => (StatusCode::NOT_FOUND, "Equipe não encontrada."),
            AppError::NoPendingRemoval => (
                StatusCode::CONFLICT,
                "A exclusão precisa ser solicitada antes de ser confirmada.",
            ),

            // Tudo que sobrar vira 500. O `tracing` loga a mensagem
            // detalhada que o `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
