// src/models/settings.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::not_blank;

// --- USUÁRIOS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Admin,
    Supervisor,
    Atendente,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub team: String,
    pub role: Role,
    pub active: bool,
}

// O formulário tem campo de senha, mas sem modelo de autenticação não há
// o que guardar dela.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemUserPayload {
    #[validate(custom(function = not_blank, message = "O nome é obrigatório."))]
    #[schema(example = "João Silva")]
    pub name: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "joao@empresa.com")]
    pub email: String,

    #[serde(default)]
    #[schema(example = "Vendas")]
    pub team: String,

    pub role: Role,

    #[serde(default)]
    pub active: bool,
}

// --- EQUIPES ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub members: u32,
    pub supervisor: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamPayload {
    #[validate(custom(function = not_blank, message = "O nome da equipe é obrigatório."))]
    #[schema(example = "Vendas")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "Equipe de vendas e prospecção")]
    pub description: String,

    #[serde(default)]
    pub members: u32,

    #[serde(default)]
    #[schema(example = "Ana Costa")]
    pub supervisor: String,
}

// --- CONTA ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    #[schema(example = "HGTX Intelligence")]
    pub company_name: String,

    #[schema(example = "00.000.000/0001-00")]
    pub document_number: String,

    #[schema(example = "contato@hgtx.com.br")]
    pub email: String,

    #[schema(example = "+55 (11) 99999-9999")]
    pub phone: String,

    pub logo_url: Option<String>,
}

// Atualização parcial: só os campos presentes são trocados.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountPayload {
    #[schema(example = "HGTX Intelligence")]
    pub company_name: Option<String>,

    #[schema(example = "00.000.000/0001-00")]
    pub document_number: Option<String>,

    #[schema(example = "contato@hgtx.com.br")]
    pub email: Option<String>,

    #[schema(example = "+55 (11) 99999-9999")]
    pub phone: Option<String>,

    pub logo_url: Option<String>,
}

// --- HORÁRIOS DE ATENDIMENTO ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    #[schema(example = "Segunda")]
    pub day: String,
    pub enabled: bool,

    #[schema(example = "08:00")]
    pub opens: String,

    #[schema(example = "18:00")]
    pub closes: String,

    // Intervalo opcional no meio do expediente, ex: "12:00-13:00".
    pub break_range: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHours {
    // Quando ligado, os horários por dia são ignorados.
    pub always_open: bool,

    pub days: Vec<DaySchedule>,

    #[schema(
        example = "Olá! Nosso atendimento funciona de segunda a sexta, das 8h às 18h. Deixe sua mensagem que retornaremos em breve!"
    )]
    pub offline_message: String,
}
