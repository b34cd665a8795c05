// src/store/settings_repo.rs

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::settings::{
        AccountInfo, BusinessHours, DaySchedule, Role, SystemUser, Team, UpdateAccountPayload,
    },
};

// As quatro abas da tela de configurações, sob um único lock.
struct SettingsState {
    users: Vec<SystemUser>,
    teams: Vec<Team>,
    account: AccountInfo,
    hours: BusinessHours,
}

#[derive(Clone)]
pub struct SettingsRepository {
    state: Arc<RwLock<SettingsState>>,
}

impl SettingsRepository {
    pub fn seeded() -> Self {
        Self {
            state: Arc::new(RwLock::new(SettingsState {
                users: seed_users(),
                teams: seed_teams(),
                account: seed_account(),
                hours: seed_hours(),
            })),
        }
    }

    // =========================================================================
    //  USUÁRIOS
    // =========================================================================

    pub async fn list_users(&self) -> Result<Vec<SystemUser>, AppError> {
        let state = self.state.read().await;
        Ok(state.users.clone())
    }

    pub async fn insert_user(&self, user: SystemUser) -> Result<SystemUser, AppError> {
        let mut state = self.state.write().await;
        state.users.push(user.clone());
        Ok(user)
    }

    pub async fn update_user<F>(&self, id: Uuid, apply: F) -> Result<SystemUser, AppError>
    where
        F: FnOnce(&mut SystemUser),
    {
        let mut state = self.state.write().await;
        let user = state
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(AppError::UserNotFound)?;

        apply(user);
        Ok(user.clone())
    }

    pub async fn remove_user(&self, id: Uuid) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        let before = state.users.len();
        state.users.retain(|user| user.id != id);

        if state.users.len() == before {
            return Err(AppError::UserNotFound);
        }
        Ok(())
    }

    // =========================================================================
    //  EQUIPES
    // =========================================================================

    pub async fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        let state = self.state.read().await;
        Ok(state.teams.clone())
    }

    pub async fn insert_team(&self, team: Team) -> Result<Team, AppError> {
        let mut state = self.state.write().await;
        state.teams.push(team.clone());
        Ok(team)
    }

    pub async fn update_team<F>(&self, id: Uuid, apply: F) -> Result<Team, AppError>
    where
        F: FnOnce(&mut Team),
    {
        let mut state = self.state.write().await;
        let team = state
            .teams
            .iter_mut()
            .find(|team| team.id == id)
            .ok_or(AppError::TeamNotFound)?;

        apply(team);
        Ok(team.clone())
    }

    pub async fn remove_team(&self, id: Uuid) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        let before = state.teams.len();
        state.teams.retain(|team| team.id != id);

        if state.teams.len() == before {
            return Err(AppError::TeamNotFound);
        }
        Ok(())
    }

    // =========================================================================
    //  CONTA E HORÁRIOS
    // =========================================================================

    pub async fn account(&self) -> Result<AccountInfo, AppError> {
        let state = self.state.read().await;
        Ok(state.account.clone())
    }

    /// Atualização parcial: só os campos presentes no payload são trocados.
    pub async fn update_account(
        &self,
        payload: UpdateAccountPayload,
    ) -> Result<AccountInfo, AppError> {
        let mut state = self.state.write().await;

        if let Some(company_name) = payload.company_name {
            state.account.company_name = company_name;
        }
        if let Some(document_number) = payload.document_number {
            state.account.document_number = document_number;
        }
        if let Some(email) = payload.email {
            state.account.email = email;
        }
        if let Some(phone) = payload.phone {
            state.account.phone = phone;
        }
        if let Some(logo_url) = payload.logo_url {
            state.account.logo_url = Some(logo_url);
        }

        Ok(state.account.clone())
    }

    pub async fn hours(&self) -> Result<BusinessHours, AppError> {
        let state = self.state.read().await;
        Ok(state.hours.clone())
    }

    pub async fn set_hours(&self, hours: BusinessHours) -> Result<BusinessHours, AppError> {
        let mut state = self.state.write().await;
        state.hours = hours.clone();
        Ok(hours)
    }
}

fn seed_user(name: &str, email: &str, team: &str, role: Role, active: bool) -> SystemUser {
    SystemUser {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        team: team.to_string(),
        role,
        active,
    }
}

fn seed_users() -> Vec<SystemUser> {
    vec![
        seed_user("João Silva", "joao@empresa.com", "Vendas", Role::Atendente, true),
        seed_user("Maria Santos", "maria@empresa.com", "Suporte", Role::Supervisor, true),
        seed_user("Pedro Costa", "pedro@empresa.com", "Vendas", Role::Atendente, false),
    ]
}

fn seed_team(name: &str, description: &str, members: u32, supervisor: &str) -> Team {
    Team {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: description.to_string(),
        members,
        supervisor: supervisor.to_string(),
    }
}

fn seed_teams() -> Vec<Team> {
    vec![
        seed_team("Vendas", "Equipe de vendas e prospecção", 8, "Ana Costa"),
        seed_team("Suporte", "Suporte técnico e atendimento", 5, "Carlos Lima"),
        seed_team("Cobrança", "Equipe de cobrança e financeiro", 3, "Lucia Oliveira"),
    ]
}

fn seed_account() -> AccountInfo {
    AccountInfo {
        company_name: "HGTX Intelligence".to_string(),
        document_number: "00.000.000/0001-00".to_string(),
        email: "contato@hgtx.com.br".to_string(),
        phone: "+55 (11) 99999-9999".to_string(),
        logo_url: None,
    }
}

fn seed_hours() -> BusinessHours {
    let days = [
        "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado", "Domingo",
    ];

    BusinessHours {
        always_open: false,
        days: days
            .iter()
            .map(|day| DaySchedule {
                day: day.to_string(),
                // Fim de semana começa desligado.
                enabled: !matches!(*day, "Sábado" | "Domingo"),
                opens: "08:00".to_string(),
                closes: "18:00".to_string(),
                break_range: None,
            })
            .collect(),
        offline_message: "Olá! Nosso atendimento funciona de segunda a sexta, das 8h às 18h. \
                          Deixe sua mensagem que retornaremos em breve!"
            .to_string(),
    }
}
