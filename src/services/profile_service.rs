// src/services/profile_service.rs

use std::time::Duration;

use validator::Validate;

use crate::{
    common::error::AppError,
    models::profile::{Profile, UpdateProfilePayload},
    store::ProfileRepository,
};

// O salvamento real ainda não existe; o atraso fixo ocupa o lugar da
// futura chamada de rede. Sem retry nem cancelamento.
const SIMULATED_SAVE_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone)]
pub struct ProfileService {
    repo: ProfileRepository,
}

impl ProfileService {
    pub fn new(repo: ProfileRepository) -> Self {
        Self { repo }
    }

    pub async fn get(&self) -> Result<Profile, AppError> {
        self.repo.get().await
    }

    pub async fn update(&self, payload: UpdateProfilePayload) -> Result<Profile, AppError> {
        payload.validate()?;

        tokio::time::sleep(SIMULATED_SAVE_DELAY).await;

        self.repo
            .set(Profile {
                name: payload.name,
                email: payload.email,
                avatar_url: payload.avatar_url,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_service() -> ProfileService {
        ProfileService::new(ProfileRepository::seeded())
    }

    #[tokio::test(start_paused = true)]
    async fn atualizacao_valida_o_email_antes_de_salvar() {
        let service = seeded_service();

        let rejected = service
            .update(UpdateProfilePayload {
                name: "João Silva".to_string(),
                email: "email-invalido".to_string(),
                avatar_url: None,
            })
            .await;
        assert!(matches!(rejected, Err(AppError::ValidationError(_))));

        // O perfil original permanece.
        assert_eq!(service.get().await.unwrap().email, "joao@empresa.com");
    }

    #[tokio::test(start_paused = true)]
    async fn atualizacao_grava_apos_o_atraso_simulado() {
        let service = seeded_service();

        let saved = service
            .update(UpdateProfilePayload {
                name: "João S. Silva".to_string(),
                email: "joao.silva@empresa.com".to_string(),
                avatar_url: Some("avatars/joao.png".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(saved.name, "João S. Silva");
        assert_eq!(service.get().await.unwrap().email, "joao.silva@empresa.com");
    }
}
