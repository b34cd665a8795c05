// src/store/campaign_repo.rs

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::campaigns::{Campaign, CampaignStatus},
};

#[derive(Clone)]
pub struct CampaignRepository {
    campaigns: Arc<RwLock<Vec<Campaign>>>,
}

impl CampaignRepository {
    pub fn new() -> Self {
        Self {
            campaigns: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn seeded() -> Self {
        Self {
            campaigns: Arc::new(RwLock::new(seed_campaigns())),
        }
    }

    pub async fn list(&self) -> Result<Vec<Campaign>, AppError> {
        let campaigns = self.campaigns.read().await;
        Ok(campaigns.clone())
    }

    pub async fn insert(&self, campaign: Campaign) -> Result<Campaign, AppError> {
        let mut campaigns = self.campaigns.write().await;
        campaigns.push(campaign.clone());
        Ok(campaign)
    }

    /// Substitui a campanha de mesmo id, preservando a posição na lista.
    pub async fn replace(&self, campaign: Campaign) -> Result<Campaign, AppError> {
        let mut campaigns = self.campaigns.write().await;
        let slot = campaigns
            .iter_mut()
            .find(|existing| existing.id == campaign.id)
            .ok_or(AppError::CampaignNotFound)?;

        *slot = campaign.clone();
        Ok(campaign)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let mut campaigns = self.campaigns.write().await;
        let before = campaigns.len();
        campaigns.retain(|campaign| campaign.id != id);

        if campaigns.len() == before {
            return Err(AppError::CampaignNotFound);
        }
        Ok(())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("data de carga inválida")
}

fn seed_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: Uuid::new_v4(),
            name: "Promoção Black Friday".to_string(),
            team: "Vendas".to_string(),
            channel: "WhatsApp API Oficial".to_string(),
            send_date: date(2024, 11, 29),
            template: "Oferta Especial".to_string(),
            recipients: 1500,
            status: CampaignStatus::Agendada,
            sent: 0,
            opened: 0,
            clicked: 0,
        },
        Campaign {
            id: Uuid::new_v4(),
            name: "Follow-up Carrinho Abandonado".to_string(),
            team: "Marketing".to_string(),
            channel: "WhatsApp API Não Oficial".to_string(),
            send_date: date(2024, 7, 15),
            template: "Carrinho Abandonado".to_string(),
            recipients: 800,
            status: CampaignStatus::Enviada,
            sent: 800,
            opened: 320,
            clicked: 45,
        },
        Campaign {
            id: Uuid::new_v4(),
            name: "Pesquisa de Satisfação".to_string(),
            team: "Suporte".to_string(),
            channel: "Instagram".to_string(),
            send_date: date(2024, 7, 20),
            template: "Pesquisa NPS".to_string(),
            recipients: 500,
            status: CampaignStatus::EmAndamento,
            sent: 350,
            opened: 280,
            clicked: 89,
        },
    ]
}
