// src/services/attendance_service.rs

use chrono::Local;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::attendance::{
        ActionReceipt, Conversation, ConversationStatus, ConversationSummary, Fila, Message,
        MessageKind, RecordingReceipt, SendMessagePayload, Sender,
    },
    store::AttendanceRepository,
};

#[derive(Clone)]
pub struct AttendanceService {
    repo: AttendanceRepository,
}

impl AttendanceService {
    pub fn new(repo: AttendanceRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self, queue: Option<Fila>) -> Result<Vec<ConversationSummary>, AppError> {
        self.repo.list(queue).await
    }

    /// Abre a conversa para o atendente: devolve o histórico e zera
    /// as não lidas.
    pub async fn open(&self, id: Uuid) -> Result<Conversation, AppError> {
        self.repo.open(id).await
    }

    // =========================================================================
    //  COMPOSER (TEXTO E ÁUDIO)
    // =========================================================================

    /// Envia o texto digitado. Mensagem em branco (após trim) não muda
    /// nada e devolve `None`; caso contrário anexa exatamente uma
    /// mensagem do atendente com o horário atual.
    pub async fn send_message(
        &self,
        id: Uuid,
        payload: SendMessagePayload,
    ) -> Result<Option<Message>, AppError> {
        let text = payload.text.trim().to_string();
        if text.is_empty() {
            return Ok(None);
        }

        let message = Message {
            id: Uuid::new_v4(),
            text,
            sender: Sender::Agent,
            timestamp: clock_stamp(),
            kind: MessageKind::Text,
            audio_url: None,
        };

        self.repo
            .update(id, |conv| {
                conv.messages.push(message.clone());
                message
            })
            .await
            .map(Some)
    }

    /// Trava de dois estados: inicia a gravação ou, ao parar, anexa a
    /// mensagem de áudio com a referência gerada.
    pub async fn toggle_recording(&self, id: Uuid) -> Result<RecordingReceipt, AppError> {
        let stamp = clock_stamp();

        self.repo
            .update(id, |conv| {
                conv.recording = !conv.recording;

                if conv.recording {
                    return RecordingReceipt {
                        recording: true,
                        message: None,
                    };
                }

                let audio_id = Uuid::new_v4();
                let message = Message {
                    id: audio_id,
                    text: "Mensagem de áudio".to_string(),
                    sender: Sender::Agent,
                    timestamp: stamp,
                    kind: MessageKind::Audio,
                    audio_url: Some(format!("audio/{}.ogg", audio_id)),
                };
                conv.messages.push(message.clone());

                RecordingReceipt {
                    recording: false,
                    message: Some(message),
                }
            })
            .await
    }

    // =========================================================================
    //  SITUAÇÃO DO ATENDIMENTO
    // =========================================================================

    /// Troca manual pelo seletor do cabeçalho: qualquer estado vale.
    pub async fn set_status(
        &self,
        id: Uuid,
        status: ConversationStatus,
    ) -> Result<Conversation, AppError> {
        self.repo
            .update(id, |conv| {
                conv.status = status;
                conv.clone()
            })
            .await
    }

    /// Ação só de estado: devolve o atendimento para a fila. A conversa
    /// em si não é roteada para ninguém.
    pub async fn transfer(&self, id: Uuid) -> Result<ActionReceipt, AppError> {
        self.repo
            .update(id, |conv| {
                conv.status = ConversationStatus::Pendente;
                ActionReceipt {
                    status: conv.status,
                    message: "Atendimento transferido para a fila.".to_string(),
                }
            })
            .await
    }

    /// Concluir força pendente/andamento -> concluido (e é inócuo se já
    /// estiver concluído).
    pub async fn conclude(&self, id: Uuid) -> Result<ActionReceipt, AppError> {
        self.repo
            .update(id, |conv| {
                conv.status = ConversationStatus::Concluido;
                ActionReceipt {
                    status: conv.status,
                    message: "Atendimento concluído com sucesso.".to_string(),
                }
            })
            .await
    }
}

fn clock_stamp() -> String {
    Local::now().format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_service() -> AttendanceService {
        AttendanceService::new(AttendanceRepository::seeded())
    }

    async fn first_of(service: &AttendanceService, queue: Fila) -> ConversationSummary {
        service.list(Some(queue)).await.unwrap().remove(0)
    }

    #[tokio::test]
    async fn listagem_filtra_por_fila() {
        let service = seeded_service();

        assert_eq!(service.list(None).await.unwrap().len(), 8);
        assert_eq!(service.list(Some(Fila::Novos)).await.unwrap().len(), 3);
        assert_eq!(service.list(Some(Fila::Meus)).await.unwrap().len(), 3);
        assert_eq!(service.list(Some(Fila::Outros)).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn abrir_conversa_zera_nao_lidas() {
        let service = seeded_service();
        let summary = first_of(&service, Fila::Novos).await;
        assert!(summary.unread > 0);

        let opened = service.open(summary.id).await.unwrap();
        assert_eq!(opened.unread, 0);
        assert_eq!(opened.messages.len(), 4);

        let reopened = first_of(&service, Fila::Novos).await;
        assert_eq!(reopened.unread, 0);
    }

    #[tokio::test]
    async fn enviar_anexa_uma_mensagem_do_atendente() {
        let service = seeded_service();
        let summary = first_of(&service, Fila::Novos).await;
        let before = service.open(summary.id).await.unwrap().messages.len();

        let sent = service
            .send_message(
                summary.id,
                SendMessagePayload {
                    text: "  Já estou verificando!  ".to_string(),
                },
            )
            .await
            .unwrap()
            .expect("mensagem com texto deve ser anexada");

        assert_eq!(sent.sender, Sender::Agent);
        assert_eq!(sent.text, "Já estou verificando!");

        let after = service.open(summary.id).await.unwrap().messages;
        assert_eq!(after.len(), before + 1);
        assert_eq!(after.last().unwrap().id, sent.id);
    }

    #[tokio::test]
    async fn mensagem_em_branco_nao_muda_nada() {
        let service = seeded_service();
        let summary = first_of(&service, Fila::Novos).await;
        let before = service.open(summary.id).await.unwrap().messages.len();

        let sent = service
            .send_message(
                summary.id,
                SendMessagePayload {
                    text: "   \n\t ".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(sent.is_none());
        assert_eq!(service.open(summary.id).await.unwrap().messages.len(), before);
    }

    #[tokio::test]
    async fn gravacao_e_uma_trava_que_anexa_audio_ao_parar() {
        let service = seeded_service();
        let summary = first_of(&service, Fila::Meus).await;
        let before = service.open(summary.id).await.unwrap().messages.len();

        let started = service.toggle_recording(summary.id).await.unwrap();
        assert!(started.recording);
        assert!(started.message.is_none());

        let stopped = service.toggle_recording(summary.id).await.unwrap();
        assert!(!stopped.recording);
        let audio = stopped.message.expect("parar a gravação gera a mensagem");
        assert_eq!(audio.kind, MessageKind::Audio);
        assert!(audio.audio_url.is_some());

        assert_eq!(
            service.open(summary.id).await.unwrap().messages.len(),
            before + 1
        );
    }

    #[tokio::test]
    async fn concluir_forca_o_estado_final() {
        let service = seeded_service();
        let pendente = first_of(&service, Fila::Novos).await;
        assert_eq!(pendente.status, ConversationStatus::Pendente);

        let receipt = service.conclude(pendente.id).await.unwrap();
        assert_eq!(receipt.status, ConversationStatus::Concluido);

        // Concluir de novo é inócuo.
        let receipt = service.conclude(pendente.id).await.unwrap();
        assert_eq!(receipt.status, ConversationStatus::Concluido);
    }

    #[tokio::test]
    async fn transferir_devolve_para_a_fila_sem_rotear() {
        let service = seeded_service();
        let summary = first_of(&service, Fila::Meus).await;

        let receipt = service.transfer(summary.id).await.unwrap();
        assert_eq!(receipt.status, ConversationStatus::Pendente);

        // A conversa continua na mesma fila.
        let still_there = service
            .list(Some(Fila::Meus))
            .await
            .unwrap()
            .into_iter()
            .any(|conv| conv.id == summary.id);
        assert!(still_there);
    }

    #[tokio::test]
    async fn troca_manual_de_status_e_livre() {
        let service = seeded_service();
        let summary = first_of(&service, Fila::Outros).await;

        for status in [
            ConversationStatus::Concluido,
            ConversationStatus::Pendente,
            ConversationStatus::Andamento,
        ] {
            let updated = service.set_status(summary.id, status).await.unwrap();
            assert_eq!(updated.status, status);
        }
    }

    #[tokio::test]
    async fn conversa_inexistente_e_erro() {
        let service = seeded_service();
        let missing = service.open(Uuid::new_v4()).await;
        assert!(matches!(missing, Err(AppError::ConversationNotFound)));
    }
}
