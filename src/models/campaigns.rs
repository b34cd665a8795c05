// src/models/campaigns.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::not_blank;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CampaignStatus {
    Agendada,
    #[serde(rename = "Em Andamento")]
    EmAndamento,
    Enviada,
    Pausada,
}

// --- CAMPANHA ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub team: String,
    pub channel: String,
    pub send_date: NaiveDate,
    pub template: String,
    pub recipients: u32,
    pub status: CampaignStatus,

    // Contadores de disparo.
    pub sent: u32,
    pub opened: u32,
    pub clicked: u32,
}

// --- PAYLOAD ---

// O formulário não expõe status nem contadores: toda gravação volta
// para "Agendada" com contadores zerados.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPayload {
    #[validate(custom(function = not_blank, message = "O nome da campanha é obrigatório."))]
    #[schema(example = "Promoção Black Friday")]
    pub name: String,

    #[validate(custom(function = not_blank, message = "A equipe é obrigatória."))]
    #[schema(example = "Vendas")]
    pub team: String,

    #[validate(custom(function = not_blank, message = "O canal é obrigatório."))]
    #[schema(example = "WhatsApp API Oficial")]
    pub channel: String,

    #[schema(value_type = String, format = Date, example = "2024-11-29")]
    pub send_date: NaiveDate,

    #[validate(custom(function = not_blank, message = "O modelo de mensagem é obrigatório."))]
    #[schema(example = "Oferta Especial")]
    pub template: String,

    #[serde(default)]
    #[schema(example = 1500)]
    pub recipients: u32,
}

// --- CATÁLOGOS FIXOS ---

pub const CAMPAIGN_TEAMS: [&str; 4] = ["Vendas", "Marketing", "Suporte", "Cobrança"];

pub const CAMPAIGN_CHANNELS: [&str; 4] = [
    "WhatsApp API Oficial",
    "WhatsApp API Não Oficial",
    "Instagram",
    "Messenger",
];

pub const CAMPAIGN_TEMPLATES: [&str; 5] = [
    "Oferta Especial",
    "Carrinho Abandonado",
    "Pesquisa NPS",
    "Boas-vindas",
    "Cobrança",
];

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignOptions {
    pub teams: Vec<&'static str>,
    pub channels: Vec<&'static str>,
    pub templates: Vec<&'static str>,
}
