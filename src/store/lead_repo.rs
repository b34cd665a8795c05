// src/store/lead_repo.rs

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::crm::{Lead, LeadStatus},
};

// Guarda os leads do funil. Sem banco: a coleção vive na memória do
// processo e nasce com a carga de demonstração.
#[derive(Clone)]
pub struct LeadRepository {
    leads: Arc<RwLock<Vec<Lead>>>,
}

impl LeadRepository {
    pub fn new() -> Self {
        Self {
            leads: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn seeded() -> Self {
        Self {
            leads: Arc::new(RwLock::new(seed_leads())),
        }
    }

    /// Busca por nome, email ou empresa (contém, sem diferenciar caixa).
    /// Consulta vazia devolve todos, na ordem de inserção.
    pub async fn search(&self, query: &str) -> Result<Vec<Lead>, AppError> {
        let leads = self.leads.read().await;
        let query = query.to_lowercase();

        Ok(leads
            .iter()
            .filter(|lead| lead_matches(lead, &query))
            .cloned()
            .collect())
    }

    pub async fn insert(&self, lead: Lead) -> Result<Lead, AppError> {
        let mut leads = self.leads.write().await;
        leads.push(lead.clone());
        Ok(lead)
    }

    /// Aplica uma mutação ao lead indicado e devolve o registro atualizado.
    pub async fn update<F>(&self, id: Uuid, apply: F) -> Result<Lead, AppError>
    where
        F: FnOnce(&mut Lead),
    {
        let mut leads = self.leads.write().await;
        let lead = leads
            .iter_mut()
            .find(|lead| lead.id == id)
            .ok_or(AppError::LeadNotFound)?;

        apply(lead);
        Ok(lead.clone())
    }
}

fn lead_matches(lead: &Lead, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    lead.name.to_lowercase().contains(query)
        || lead.email.to_lowercase().contains(query)
        || lead
            .company
            .as_deref()
            .is_some_and(|company| company.to_lowercase().contains(query))
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("data de carga inválida")
}

fn seed_leads() -> Vec<Lead> {
    vec![
        Lead {
            id: Uuid::new_v4(),
            name: "Maria Silva".to_string(),
            email: "maria.silva@email.com".to_string(),
            phone: "+55 (11) 99999-9999".to_string(),
            instagram: Some("maria_silva".to_string()),
            company: Some("Tech Solutions".to_string()),
            status: LeadStatus::Lead,
            value: Some(Decimal::from(15000)),
            last_contact: date(2024, 1, 15),
            source: "Site".to_string(),
            notes: "Interessada em soluções corporativas".to_string(),
            assigned_to: "João Silva".to_string(),
        },
        Lead {
            id: Uuid::new_v4(),
            name: "Carlos Santos".to_string(),
            email: "carlos@empresa.com".to_string(),
            phone: "+55 (11) 88888-8888".to_string(),
            instagram: None,
            company: Some("Inovação Corp".to_string()),
            status: LeadStatus::Contato,
            value: Some(Decimal::from(25000)),
            last_contact: date(2024, 1, 14),
            source: "Indicação".to_string(),
            notes: "Primeira reunião agendada".to_string(),
            assigned_to: "João Silva".to_string(),
        },
        Lead {
            id: Uuid::new_v4(),
            name: "Ana Costa".to_string(),
            email: "ana.costa@startup.com".to_string(),
            phone: "+55 (11) 77777-7777".to_string(),
            instagram: None,
            company: Some("StartupXYZ".to_string()),
            status: LeadStatus::Proposta,
            value: Some(Decimal::from(35000)),
            last_contact: date(2024, 1, 13),
            source: "LinkedIn".to_string(),
            notes: "Proposta enviada, aguardando retorno".to_string(),
            assigned_to: "João Silva".to_string(),
        },
        Lead {
            id: Uuid::new_v4(),
            name: "Pedro Oliveira".to_string(),
            email: "pedro@negocio.com".to_string(),
            phone: "+55 (11) 66666-6666".to_string(),
            instagram: None,
            company: Some("Negócios Ltd".to_string()),
            status: LeadStatus::Negociacao,
            value: Some(Decimal::from(50000)),
            last_contact: date(2024, 1, 12),
            source: "Evento".to_string(),
            notes: "Negociando condições de pagamento".to_string(),
            assigned_to: "João Silva".to_string(),
        },
    ]
}
