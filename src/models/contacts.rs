// src/models/contacts.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub instagram: String,

    // Etiquetas simples (Array de Strings)
    pub tags: Vec<String>,

    pub notes: Option<String>,

    // CAMPOS PERSONALIZADOS
    // Aqui vai o { "empresa": "Tech Solutions", "cargo": "Gerente de Vendas" }
    #[serde(default)]
    pub custom_fields: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[validate(custom(function = not_blank, message = "O nome é obrigatório."))]
    #[schema(example = "Maria Silva")]
    pub name: String,

    #[validate(custom(function = not_blank, message = "O telefone é obrigatório."))]
    #[schema(example = "+55 (11) 99999-9999")]
    pub phone: String,

    #[serde(default)]
    #[schema(example = "maria.silva@email.com")]
    pub email: String,

    #[serde(default)]
    #[schema(example = "maria_silva")]
    pub instagram: String,

    #[serde(default)]
    #[schema(example = json!(["Cliente VIP", "Urgente"]))]
    pub tags: Vec<String>,

    pub notes: Option<String>,
}

// Etiqueta digitada no formulário (Enter adiciona).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TagPayload {
    #[validate(custom(function = not_blank, message = "A etiqueta não pode ser vazia."))]
    #[schema(example = "Cliente VIP")]
    pub tag: String,
}

// Campo livre do painel de detalhes (chave + valor).
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldPayload {
    #[validate(custom(function = not_blank, message = "A chave do campo é obrigatória."))]
    #[schema(example = "cargo")]
    pub key: String,

    #[validate(custom(function = not_blank, message = "O valor do campo é obrigatório."))]
    #[schema(example = "Gerente de Vendas")]
    pub value: String,
}

// Estado atual da seleção múltipla (na ordem da listagem).
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub selected: Vec<Uuid>,
}

// Resultado da exclusão em massa.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteResult {
    pub removed: usize,
}
