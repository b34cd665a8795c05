// src/models/profile.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::not_blank;

// Perfil do atendente logado.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[schema(example = "João Silva")]
    pub name: String,

    #[schema(example = "joao@empresa.com")]
    pub email: String,

    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    #[validate(custom(function = not_blank, message = "O nome é obrigatório."))]
    #[schema(example = "João Silva")]
    pub name: String,

    #[validate(email(message = "Por favor, digite um email válido."))]
    #[schema(example = "joao@empresa.com")]
    pub email: String,

    pub avatar_url: Option<String>,
}
