// src/services/settings_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    models::settings::{
        AccountInfo, BusinessHours, SystemUser, SystemUserPayload, Team, TeamPayload,
        UpdateAccountPayload,
    },
    store::SettingsRepository,
};

#[derive(Clone)]
pub struct SettingsService {
    repo: SettingsRepository,
}

impl SettingsService {
    pub fn new(repo: SettingsRepository) -> Self {
        Self { repo }
    }

    // =========================================================================
    //  USUÁRIOS
    // =========================================================================

    pub async fn list_users(&self) -> Result<Vec<SystemUser>, AppError> {
        self.repo.list_users().await
    }

    pub async fn create_user(&self, payload: SystemUserPayload) -> Result<SystemUser, AppError> {
        payload.validate()?;

        let user = SystemUser {
            id: Uuid::new_v4(),
            name: payload.name,
            email: payload.email,
            team: payload.team,
            role: payload.role,
            active: payload.active,
        };

        self.repo.insert_user(user).await
    }

    pub async fn update_user(
        &self,
        id: Uuid,
        payload: SystemUserPayload,
    ) -> Result<SystemUser, AppError> {
        payload.validate()?;

        self.repo
            .update_user(id, |user| {
                user.name = payload.name;
                user.email = payload.email;
                user.team = payload.team;
                user.role = payload.role;
                user.active = payload.active;
            })
            .await
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.remove_user(id).await
    }

    // =========================================================================
    //  EQUIPES
    // =========================================================================

    pub async fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        self.repo.list_teams().await
    }

    pub async fn create_team(&self, payload: TeamPayload) -> Result<Team, AppError> {
        payload.validate()?;

        let team = Team {
            id: Uuid::new_v4(),
            name: payload.name,
            description: payload.description,
            members: payload.members,
            supervisor: payload.supervisor,
        };

        self.repo.insert_team(team).await
    }

    pub async fn update_team(&self, id: Uuid, payload: TeamPayload) -> Result<Team, AppError> {
        payload.validate()?;

        self.repo
            .update_team(id, |team| {
                team.name = payload.name;
                team.description = payload.description;
                team.members = payload.members;
                team.supervisor = payload.supervisor;
            })
            .await
    }

    pub async fn delete_team(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.remove_team(id).await
    }

    // =========================================================================
    //  CONTA E HORÁRIOS
    // =========================================================================

    pub async fn account(&self) -> Result<AccountInfo, AppError> {
        self.repo.account().await
    }

    pub async fn update_account(
        &self,
        payload: UpdateAccountPayload,
    ) -> Result<AccountInfo, AppError> {
        self.repo.update_account(payload).await
    }

    pub async fn hours(&self) -> Result<BusinessHours, AppError> {
        self.repo.hours().await
    }

    pub async fn update_hours(&self, hours: BusinessHours) -> Result<BusinessHours, AppError> {
        self.repo.set_hours(hours).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::Role;

    fn seeded_service() -> SettingsService {
        SettingsService::new(SettingsRepository::seeded())
    }

    fn user_payload(name: &str, email: &str) -> SystemUserPayload {
        SystemUserPayload {
            name: name.to_string(),
            email: email.to_string(),
            team: "Vendas".to_string(),
            role: Role::Atendente,
            active: true,
        }
    }

    #[tokio::test]
    async fn criacao_de_usuario_valida_o_email() {
        let service = seeded_service();

        let invalid = service.create_user(user_payload("Ana", "nao-e-email")).await;
        assert!(matches!(invalid, Err(AppError::ValidationError(_))));
        assert_eq!(service.list_users().await.unwrap().len(), 3);

        let created = service
            .create_user(user_payload("Ana Lima", "ana@empresa.com"))
            .await
            .unwrap();
        assert_eq!(created.role, Role::Atendente);
        assert_eq!(service.list_users().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn equipes_tem_ciclo_completo() {
        let service = seeded_service();

        let team = service
            .create_team(TeamPayload {
                name: "Pós-venda".to_string(),
                description: "Acompanhamento de clientes".to_string(),
                members: 2,
                supervisor: "Ana Costa".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(service.list_teams().await.unwrap().len(), 4);

        service.delete_team(team.id).await.unwrap();
        assert_eq!(service.list_teams().await.unwrap().len(), 3);

        let missing = service.delete_team(team.id).await;
        assert!(matches!(missing, Err(AppError::TeamNotFound)));
    }

    #[tokio::test]
    async fn conta_atualiza_somente_os_campos_enviados() {
        let service = seeded_service();

        let updated = service
            .update_account(UpdateAccountPayload {
                company_name: Some("HGTX Intelligence LTDA".to_string()),
                document_number: None,
                email: None,
                phone: None,
                logo_url: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.company_name, "HGTX Intelligence LTDA");
        assert_eq!(updated.document_number, "00.000.000/0001-00");
    }

    #[tokio::test]
    async fn horarios_sao_substituidos_por_inteiro() {
        let service = seeded_service();
        let mut hours = service.hours().await.unwrap();
        assert_eq!(hours.days.len(), 7);

        hours.always_open = true;
        let saved = service.update_hours(hours).await.unwrap();
        assert!(saved.always_open);
        assert!(service.hours().await.unwrap().always_open);
    }
}
