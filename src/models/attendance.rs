// src/models/attendance.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- ENUMS ---

// As três abas da lista de conversas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Fila {
    Novos,
    Meus,
    Outros,
}

// Situação do atendimento. A troca manual é livre; o botão Concluir
// força pendente/andamento -> concluido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    Pendente,
    Andamento,
    Concluido,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Client,
    Agent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Audio,
}

// --- MENSAGEM ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,

    // Horário de parede no formato HH:MM, como o chat exibe.
    #[schema(example = "14:30")]
    pub timestamp: String,

    #[serde(default)]
    pub kind: MessageKind,

    // Referência do áudio quando kind == audio.
    pub audio_url: Option<String>,
}

// --- ATENDIMENTO ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: Uuid,
    pub contact_name: String,
    pub queue: Fila,
    pub status: ConversationStatus,
    pub unread: u32,

    // Trava de dois estados do botão de gravação.
    pub recording: bool,

    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

// Linha da lista lateral (sem o histórico completo).
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub id: Uuid,
    pub contact_name: String,
    pub queue: Fila,
    pub status: ConversationStatus,
    pub unread: u32,
    pub last_message: String,
    #[schema(example = "14:30")]
    pub timestamp: String,
}

impl From<&Conversation> for ConversationSummary {
    fn from(conv: &Conversation) -> Self {
        let (last_message, timestamp) = conv
            .last_message()
            .map(|m| (m.text.clone(), m.timestamp.clone()))
            .unwrap_or_default();

        ConversationSummary {
            id: conv.id,
            contact_name: conv.contact_name.clone(),
            queue: conv.queue,
            status: conv.status,
            unread: conv.unread,
            last_message,
            timestamp,
        }
    }
}

// --- PAYLOADS / RECIBOS ---

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendMessagePayload {
    #[schema(example = "Olá! Claro, vou te ajudar.")]
    pub text: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetStatusPayload {
    #[schema(example = "andamento")]
    pub status: ConversationStatus,
}

// Confirmação visível das ações Transferir/Concluir.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionReceipt {
    pub status: ConversationStatus,
    #[schema(example = "Atendimento concluído com sucesso.")]
    pub message: String,
}

// Estado da trava de gravação; ao parar, carrega a mensagem de áudio gerada.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordingReceipt {
    pub recording: bool,
    pub message: Option<Message>,
}
