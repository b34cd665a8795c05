// src/services/campaign_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    models::campaigns::{
        CAMPAIGN_CHANNELS, CAMPAIGN_TEAMS, CAMPAIGN_TEMPLATES, Campaign, CampaignOptions,
        CampaignPayload, CampaignStatus,
    },
    store::CampaignRepository,
};

#[derive(Clone)]
pub struct CampaignService {
    repo: CampaignRepository,
}

impl CampaignService {
    pub fn new(repo: CampaignRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Campaign>, AppError> {
        self.repo.list().await
    }

    pub fn options(&self) -> CampaignOptions {
        CampaignOptions {
            teams: CAMPAIGN_TEAMS.to_vec(),
            channels: CAMPAIGN_CHANNELS.to_vec(),
            templates: CAMPAIGN_TEMPLATES.to_vec(),
        }
    }

    pub async fn create(&self, payload: CampaignPayload) -> Result<Campaign, AppError> {
        payload.validate()?;
        self.repo.insert(build_campaign(Uuid::new_v4(), payload)).await
    }

    /// Edição mantém o id mas regrava o registro inteiro: como o
    /// formulário não expõe status nem contadores, a campanha volta
    /// para "Agendada" com contadores zerados.
    pub async fn update(&self, id: Uuid, payload: CampaignPayload) -> Result<Campaign, AppError> {
        payload.validate()?;
        self.repo.replace(build_campaign(id, payload)).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.remove(id).await
    }
}

fn build_campaign(id: Uuid, payload: CampaignPayload) -> Campaign {
    Campaign {
        id,
        name: payload.name,
        team: payload.team,
        channel: payload.channel,
        send_date: payload.send_date,
        template: payload.template,
        recipients: payload.recipients,
        status: CampaignStatus::Agendada,
        sent: 0,
        opened: 0,
        clicked: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn seeded_service() -> CampaignService {
        CampaignService::new(CampaignRepository::seeded())
    }

    fn payload(name: &str) -> CampaignPayload {
        CampaignPayload {
            name: name.to_string(),
            team: "Vendas".to_string(),
            channel: "WhatsApp API Oficial".to_string(),
            send_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            template: "Boas-vindas".to_string(),
            recipients: 100,
        }
    }

    #[tokio::test]
    async fn criacao_valida_os_campos_obrigatorios() {
        let service = seeded_service();

        let mut blank = payload("Campanha de Natal");
        blank.channel = "  ".to_string();

        let rejected = service.create(blank).await;
        assert!(matches!(rejected, Err(AppError::ValidationError(_))));
        assert_eq!(service.list().await.unwrap().len(), 3);

        let created = service.create(payload("Campanha de Natal")).await.unwrap();
        assert_eq!(created.status, CampaignStatus::Agendada);
        assert_eq!(created.sent, 0);
        assert_eq!(service.list().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn edicao_mantem_o_id_e_reinicia_o_disparo() {
        let service = seeded_service();

        // A campanha "Enviada" da carga tem contadores preenchidos.
        let sent = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|campaign| campaign.status == CampaignStatus::Enviada)
            .unwrap();

        let updated = service.update(sent.id, payload("Reenvio")).await.unwrap();
        assert_eq!(updated.id, sent.id);
        assert_eq!(updated.status, CampaignStatus::Agendada);
        assert_eq!((updated.sent, updated.opened, updated.clicked), (0, 0, 0));
    }

    #[tokio::test]
    async fn exclusao_remove_pelo_id() {
        let service = seeded_service();
        let first = service.list().await.unwrap().remove(0);

        service.delete(first.id).await.unwrap();
        assert_eq!(service.list().await.unwrap().len(), 2);

        let missing = service.delete(first.id).await;
        assert!(matches!(missing, Err(AppError::CampaignNotFound)));
    }
}
