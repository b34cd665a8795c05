// src/store/attendance_repo.rs

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::attendance::{
        Conversation, ConversationStatus, ConversationSummary, Fila, Message, MessageKind, Sender,
    },
};

#[derive(Clone)]
pub struct AttendanceRepository {
    conversations: Arc<RwLock<Vec<Conversation>>>,
}

impl AttendanceRepository {
    pub fn new() -> Self {
        Self {
            conversations: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn seeded() -> Self {
        Self {
            conversations: Arc::new(RwLock::new(seed_conversations())),
        }
    }

    /// Lista resumida, opcionalmente restrita a uma aba (fila).
    pub async fn list(&self, queue: Option<Fila>) -> Result<Vec<ConversationSummary>, AppError> {
        let conversations = self.conversations.read().await;

        Ok(conversations
            .iter()
            .filter(|conv| queue.map_or(true, |fila| conv.queue == fila))
            .map(ConversationSummary::from)
            .collect())
    }

    /// Abre a conversa: devolve o histórico e zera o contador de não lidas.
    pub async fn open(&self, id: Uuid) -> Result<Conversation, AppError> {
        let mut conversations = self.conversations.write().await;
        let conv = conversations
            .iter_mut()
            .find(|conv| conv.id == id)
            .ok_or(AppError::ConversationNotFound)?;

        conv.unread = 0;
        Ok(conv.clone())
    }

    /// Aplica uma mutação à conversa indicada e devolve o que a mutação produzir.
    pub async fn update<F, R>(&self, id: Uuid, apply: F) -> Result<R, AppError>
    where
        F: FnOnce(&mut Conversation) -> R,
    {
        let mut conversations = self.conversations.write().await;
        let conv = conversations
            .iter_mut()
            .find(|conv| conv.id == id)
            .ok_or(AppError::ConversationNotFound)?;

        Ok(apply(conv))
    }
}

fn seed_message(text: &str, sender: Sender, timestamp: &str) -> Message {
    Message {
        id: Uuid::new_v4(),
        text: text.to_string(),
        sender,
        timestamp: timestamp.to_string(),
        kind: MessageKind::Text,
        audio_url: None,
    }
}

fn seed_conversation(
    name: &str,
    queue: Fila,
    status: ConversationStatus,
    unread: u32,
    messages: Vec<Message>,
) -> Conversation {
    Conversation {
        id: Uuid::new_v4(),
        contact_name: name.to_string(),
        queue,
        status,
        unread,
        recording: false,
        messages,
    }
}

fn seed_conversations() -> Vec<Conversation> {
    use ConversationStatus::*;
    use Sender::*;

    vec![
        // A conversa aberta da demonstração, com o histórico completo.
        seed_conversation(
            "Maria Silva",
            Fila::Novos,
            Pendente,
            2,
            vec![
                seed_message("Olá, preciso de ajuda com meu pedido", Client, "14:30"),
                seed_message(
                    "Olá! Claro, vou te ajudar. Pode me passar o número do seu pedido?",
                    Agent,
                    "14:31",
                ),
                seed_message("O número é #12345", Client, "14:32"),
                seed_message(
                    "Perfeito! Encontrei seu pedido. Qual é a sua dúvida?",
                    Agent,
                    "14:33",
                ),
            ],
        ),
        seed_conversation(
            "João Santos",
            Fila::Novos,
            Pendente,
            1,
            vec![seed_message(
                "Quando vocês voltam a ter estoque?",
                Client,
                "14:25",
            )],
        ),
        seed_conversation(
            "Ana Costa",
            Fila::Novos,
            Pendente,
            3,
            vec![seed_message(
                "Gostaria de saber sobre os preços",
                Client,
                "14:20",
            )],
        ),
        seed_conversation(
            "Carlos Oliveira",
            Fila::Meus,
            Andamento,
            0,
            vec![seed_message("Perfeito, muito obrigado!", Client, "14:15")],
        ),
        seed_conversation(
            "Fernanda Lima",
            Fila::Meus,
            Andamento,
            1,
            vec![seed_message("Estou aguardando a resposta", Client, "14:10")],
        ),
        seed_conversation(
            "Pedro Alves",
            Fila::Meus,
            Concluido,
            0,
            vec![seed_message("Certo, vou aguardar", Client, "14:05")],
        ),
        seed_conversation(
            "Lucia Rodrigues",
            Fila::Outros,
            Concluido,
            0,
            vec![seed_message("Obrigada pelo atendimento!", Client, "13:50")],
        ),
        seed_conversation(
            "Roberto Ferreira",
            Fila::Outros,
            Andamento,
            0,
            vec![seed_message("Vou pensar e te retorno", Client, "13:45")],
        ),
    ]
}
