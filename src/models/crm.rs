// src/models/crm.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::not_blank;

// --- ENUMS ---

// As seis etapas fixas do funil de vendas. A ordem aqui é a ordem
// das colunas do quadro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    Lead,
    Contato,
    Proposta,
    Negociacao,
    Fechado,
    Perdido,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 6] = [
        LeadStatus::Lead,
        LeadStatus::Contato,
        LeadStatus::Proposta,
        LeadStatus::Negociacao,
        LeadStatus::Fechado,
        LeadStatus::Perdido,
    ];

    /// Título exibido no cabeçalho da coluna.
    pub fn title(self) -> &'static str {
        match self {
            LeadStatus::Lead => "Leads",
            LeadStatus::Contato => "Primeiro Contato",
            LeadStatus::Proposta => "Proposta Enviada",
            LeadStatus::Negociacao => "Em Negociação",
            LeadStatus::Fechado => "Fechado",
            LeadStatus::Perdido => "Perdido",
        }
    }
}

// --- LEAD (O Dado) ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub instagram: Option<String>,
    pub company: Option<String>,
    pub status: LeadStatus,

    // Valor estimado da oportunidade. Ausente conta como zero nos totais.
    pub value: Option<Decimal>,

    pub last_contact: NaiveDate,
    pub source: String,
    pub notes: String,
    pub assigned_to: String,
}

// --- PAYLOADS ---

// Criação e edição usam o mesmo molde de formulário.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    #[validate(custom(function = not_blank, message = "O nome é obrigatório."))]
    #[schema(example = "Maria Silva")]
    pub name: String,

    #[validate(custom(function = not_blank, message = "O email é obrigatório."))]
    #[schema(example = "maria.silva@email.com")]
    pub email: String,

    #[serde(default)]
    #[schema(example = "+55 (11) 99999-9999")]
    pub phone: String,

    pub instagram: Option<String>,
    pub company: Option<String>,

    #[serde(default = "LeadPayload::default_status")]
    pub status: LeadStatus,

    #[schema(example = 15000.0)]
    pub value: Option<Decimal>,

    #[serde(default)]
    #[schema(example = "Site")]
    pub source: String,

    #[serde(default)]
    pub notes: String,

    #[serde(default = "LeadPayload::default_assignee")]
    #[schema(example = "João Silva")]
    pub assigned_to: String,
}

impl LeadPayload {
    fn default_status() -> LeadStatus {
        LeadStatus::Lead
    }

    fn default_assignee() -> String {
        "João Silva".to_string()
    }
}

// Comando de transição de etapa (o "soltar" do arrasta-e-solta).
#[derive(Debug, Deserialize, ToSchema)]
pub struct MoveLeadPayload {
    #[schema(example = "negociacao")]
    pub status: LeadStatus,
}

// --- QUADRO (projeção Kanban) ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumn {
    pub status: LeadStatus,
    pub title: &'static str,
    pub count: usize,

    // Soma dos valores da coluna (leads sem valor entram como zero).
    pub total_value: Decimal,
    #[schema(example = "R$15.000,00")]
    pub total_formatted: String,

    pub leads: Vec<Lead>,
}

// --- CATÁLOGOS FIXOS ---

pub const LEAD_SOURCES: [&str; 7] = [
    "Site",
    "LinkedIn",
    "Instagram",
    "Indicação",
    "Evento",
    "WhatsApp",
    "Outro",
];

pub const LEAD_OWNERS: [&str; 3] = ["João Silva", "Maria Santos", "Pedro Costa"];

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrmCatalogs {
    pub sources: Vec<&'static str>,
    pub owners: Vec<&'static str>,
}
