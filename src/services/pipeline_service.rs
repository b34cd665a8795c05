// src/services/pipeline_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{error::AppError, money::format_brl},
    models::crm::{
        BoardColumn, CrmCatalogs, LEAD_OWNERS, LEAD_SOURCES, Lead, LeadPayload, LeadStatus,
    },
    store::LeadRepository,
};

#[derive(Clone)]
pub struct PipelineService {
    repo: LeadRepository,
}

impl PipelineService {
    pub fn new(repo: LeadRepository) -> Self {
        Self { repo }
    }

    // =========================================================================
    //  1. CONSULTA (BUSCA E QUADRO)
    // =========================================================================

    pub async fn search_leads(&self, query: &str) -> Result<Vec<Lead>, AppError> {
        self.repo.search(query).await
    }

    /// Projeção Kanban: particiona o recorte filtrado nas seis colunas
    /// fixas, preservando a ordem relativa dos leads, com contagem e
    /// total monetário por coluna (lead sem valor entra como zero).
    pub async fn board(&self, query: &str) -> Result<Vec<BoardColumn>, AppError> {
        let leads = self.repo.search(query).await?;

        Ok(LeadStatus::ALL
            .into_iter()
            .map(|status| {
                let column: Vec<Lead> = leads
                    .iter()
                    .filter(|lead| lead.status == status)
                    .cloned()
                    .collect();

                let total_value: Decimal = column.iter().filter_map(|lead| lead.value).sum();

                BoardColumn {
                    status,
                    title: status.title(),
                    count: column.len(),
                    total_value,
                    total_formatted: format_brl(total_value),
                    leads: column,
                }
            })
            .collect())
    }

    pub fn catalogs(&self) -> CrmCatalogs {
        CrmCatalogs {
            sources: LEAD_SOURCES.to_vec(),
            owners: LEAD_OWNERS.to_vec(),
        }
    }

    // =========================================================================
    //  2. ESCRITA (FORMULÁRIO E ARRASTA-E-SOLTA)
    // =========================================================================

    pub async fn create_lead(&self, payload: LeadPayload) -> Result<Lead, AppError> {
        payload.validate()?;

        let lead = Lead {
            id: Uuid::new_v4(),
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            instagram: payload.instagram,
            company: payload.company,
            status: payload.status,
            value: payload.value,
            last_contact: Utc::now().date_naive(),
            source: payload.source,
            notes: payload.notes,
            assigned_to: payload.assigned_to,
        };

        self.repo.insert(lead).await
    }

    pub async fn update_lead(&self, id: Uuid, payload: LeadPayload) -> Result<Lead, AppError> {
        payload.validate()?;

        self.repo
            .update(id, |lead| {
                lead.name = payload.name;
                lead.email = payload.email;
                lead.phone = payload.phone;
                lead.instagram = payload.instagram;
                lead.company = payload.company;
                lead.status = payload.status;
                lead.value = payload.value;
                lead.source = payload.source;
                lead.notes = payload.notes;
                lead.assigned_to = payload.assigned_to;
                lead.last_contact = Utc::now().date_naive();
            })
            .await
    }

    /// Soltar o card em outra coluna: troca só o status e estampa o
    /// último contato. Qualquer etapa alcança qualquer etapa.
    pub async fn move_lead(&self, id: Uuid, status: LeadStatus) -> Result<Lead, AppError> {
        self.repo
            .update(id, |lead| {
                lead.status = status;
                lead.last_contact = Utc::now().date_naive();
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str) -> LeadPayload {
        LeadPayload {
            name: name.to_string(),
            email: email.to_string(),
            phone: "+55 (11) 90000-0000".to_string(),
            instagram: None,
            company: None,
            status: LeadStatus::Lead,
            value: None,
            source: "Site".to_string(),
            notes: String::new(),
            assigned_to: "João Silva".to_string(),
        }
    }

    fn seeded_service() -> PipelineService {
        PipelineService::new(LeadRepository::seeded())
    }

    #[tokio::test]
    async fn busca_por_nome_email_e_empresa() {
        let service = seeded_service();

        let by_name = service.search_leads("maria").await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Maria Silva");

        let by_email = service.search_leads("STARTUP.COM").await.unwrap();
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Ana Costa");

        let by_company = service.search_leads("inovação").await.unwrap();
        assert_eq!(by_company.len(), 1);
        assert_eq!(by_company[0].name, "Carlos Santos");

        let all = service.search_leads("").await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn busca_e_idempotente() {
        let service = seeded_service();
        let first = service.search_leads("silva").await.unwrap();

        // Reaplicar o mesmo filtro sobre o resultado não muda o conjunto.
        let refiltered = PipelineService::new(LeadRepository::new());
        for lead in &first {
            refiltered.repo.insert(lead.clone()).await.unwrap();
        }
        let second = refiltered.search_leads("silva").await.unwrap();

        let ids: Vec<_> = first.iter().map(|lead| lead.id).collect();
        let ids_again: Vec<_> = second.iter().map(|lead| lead.id).collect();
        assert_eq!(ids, ids_again);
    }

    #[tokio::test]
    async fn quadro_particiona_o_recorte_exatamente() {
        let service = seeded_service();

        let filtered = service.search_leads("").await.unwrap();
        let board = service.board("").await.unwrap();

        assert_eq!(board.len(), 6);

        // Cada lead aparece em exatamente uma coluna e a união das
        // colunas é o recorte filtrado.
        let spread: usize = board.iter().map(|column| column.leads.len()).sum();
        assert_eq!(spread, filtered.len());

        for column in &board {
            assert_eq!(column.count, column.leads.len());
            for lead in &column.leads {
                assert_eq!(lead.status, column.status);
            }
        }
    }

    #[tokio::test]
    async fn total_da_coluna_soma_e_formata_em_reais() {
        let service = seeded_service();

        let filtered = service.search_leads("maria").await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].value, Some(Decimal::from(15000)));

        let board = service.board("maria").await.unwrap();
        let lead_column = board
            .iter()
            .find(|column| column.status == LeadStatus::Lead)
            .unwrap();

        assert_eq!(lead_column.count, 1);
        assert_eq!(lead_column.total_formatted, "R$15.000,00");

        // Leads sem valor entram como zero no total.
        service
            .create_lead(payload("Sem Valor", "sem.valor@email.com"))
            .await
            .unwrap();
        let board = service.board("").await.unwrap();
        let lead_column = board
            .iter()
            .find(|column| column.status == LeadStatus::Lead)
            .unwrap();
        assert_eq!(lead_column.count, 2);
        assert_eq!(lead_column.total_value, Decimal::from(15000));
    }

    #[tokio::test]
    async fn criacao_exige_nome_e_email() {
        let service = seeded_service();

        let blank_name = service.create_lead(payload("   ", "x@email.com")).await;
        assert!(matches!(blank_name, Err(AppError::ValidationError(_))));

        let blank_email = service.create_lead(payload("Fulano", "")).await;
        assert!(matches!(blank_email, Err(AppError::ValidationError(_))));

        // A coleção fica intacta quando o formulário é rejeitado.
        assert_eq!(service.search_leads("").await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn criacao_estampa_o_ultimo_contato() {
        let service = seeded_service();

        let lead = service
            .create_lead(payload("Novo Lead", "novo@email.com"))
            .await
            .unwrap();

        assert_eq!(lead.last_contact, Utc::now().date_naive());
        assert_eq!(service.search_leads("").await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn edicao_substitui_o_registro_pelo_id() {
        let service = seeded_service();
        let original = service.search_leads("maria").await.unwrap().remove(0);

        let mut changed = payload("Maria Silva Souza", "maria.souza@email.com");
        changed.status = LeadStatus::Proposta;
        let updated = service.update_lead(original.id, changed).await.unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, "Maria Silva Souza");
        assert_eq!(updated.status, LeadStatus::Proposta);
        assert_eq!(service.search_leads("").await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn mover_so_altera_status_e_ultimo_contato() {
        let service = seeded_service();
        let original = service.search_leads("maria").await.unwrap().remove(0);

        let moved = service
            .move_lead(original.id, LeadStatus::Negociacao)
            .await
            .unwrap();

        assert_eq!(moved.status, LeadStatus::Negociacao);
        assert_eq!(moved.last_contact, Utc::now().date_naive());

        assert_eq!(moved.id, original.id);
        assert_eq!(moved.name, original.name);
        assert_eq!(moved.email, original.email);
        assert_eq!(moved.phone, original.phone);
        assert_eq!(moved.instagram, original.instagram);
        assert_eq!(moved.company, original.company);
        assert_eq!(moved.value, original.value);
        assert_eq!(moved.source, original.source);
        assert_eq!(moved.notes, original.notes);
        assert_eq!(moved.assigned_to, original.assigned_to);
    }

    #[tokio::test]
    async fn mover_lead_inexistente_e_erro() {
        let service = seeded_service();
        let missing = service.move_lead(Uuid::new_v4(), LeadStatus::Fechado).await;
        assert!(matches!(missing, Err(AppError::LeadNotFound)));
    }
}
