// src/store/contact_repo.rs

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{common::error::AppError, models::contacts::Contact};

// Estado completo da agenda: a coleção, a seleção múltipla e a exclusão
// individual pendente de confirmação. Tudo sob o mesmo lock porque as
// três coisas andam juntas (excluir mexe na seleção e na pendência).
struct DirectoryState {
    contacts: Vec<Contact>,
    selected: HashSet<Uuid>,
    pending_removal: Option<Uuid>,
}

#[derive(Clone)]
pub struct ContactRepository {
    state: Arc<RwLock<DirectoryState>>,
}

impl ContactRepository {
    pub fn new() -> Self {
        Self::with_contacts(Vec::new())
    }

    pub fn seeded() -> Self {
        Self::with_contacts(seed_contacts())
    }

    fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            state: Arc::new(RwLock::new(DirectoryState {
                contacts,
                selected: HashSet::new(),
                pending_removal: None,
            })),
        }
    }

    // =========================================================================
    //  LISTAGEM E FILTROS
    // =========================================================================

    /// Busca por nome, telefone ou email, combinada com filtro de etiqueta.
    pub async fn search(&self, query: &str, tag: Option<&str>) -> Result<Vec<Contact>, AppError> {
        let state = self.state.read().await;
        let query = query.to_lowercase();

        Ok(state
            .contacts
            .iter()
            .filter(|contact| contact_matches(contact, &query, tag))
            .cloned()
            .collect())
    }

    /// Etiquetas distintas, na ordem em que aparecem na coleção.
    pub async fn tags(&self) -> Result<Vec<String>, AppError> {
        let state = self.state.read().await;
        let mut seen = HashSet::new();
        let mut tags = Vec::new();

        for contact in &state.contacts {
            for tag in &contact.tags {
                if seen.insert(tag.clone()) {
                    tags.push(tag.clone());
                }
            }
        }

        Ok(tags)
    }

    // =========================================================================
    //  ESCRITA
    // =========================================================================

    pub async fn insert(&self, contact: Contact) -> Result<Contact, AppError> {
        let mut state = self.state.write().await;
        state.contacts.push(contact.clone());
        Ok(contact)
    }

    pub async fn update<F>(&self, id: Uuid, apply: F) -> Result<Contact, AppError>
    where
        F: FnOnce(&mut Contact),
    {
        let mut state = self.state.write().await;
        let contact = state
            .contacts
            .iter_mut()
            .find(|contact| contact.id == id)
            .ok_or(AppError::ContactNotFound)?;

        apply(contact);
        Ok(contact.clone())
    }

    // =========================================================================
    //  SELEÇÃO MÚLTIPLA
    // =========================================================================

    /// Liga/desliga a marcação de um contato e devolve a seleção atual.
    pub async fn toggle_selection(&self, id: Uuid) -> Result<Vec<Uuid>, AppError> {
        let mut state = self.state.write().await;
        if !state.contacts.iter().any(|contact| contact.id == id) {
            return Err(AppError::ContactNotFound);
        }

        if !state.selected.remove(&id) {
            state.selected.insert(id);
        }

        Ok(ordered_selection(&state))
    }

    /// Marca todos os contatos do recorte filtrado atual.
    pub async fn select_all(&self, query: &str, tag: Option<&str>) -> Result<Vec<Uuid>, AppError> {
        let mut state = self.state.write().await;
        let query = query.to_lowercase();

        let matching: Vec<Uuid> = state
            .contacts
            .iter()
            .filter(|contact| contact_matches(contact, &query, tag))
            .map(|contact| contact.id)
            .collect();

        state.selected = matching.iter().copied().collect();
        Ok(ordered_selection(&state))
    }

    pub async fn clear_selection(&self) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        state.selected.clear();
        Ok(())
    }

    /// Remove todos os selecionados, preservando a ordem dos que ficam.
    pub async fn delete_selected(&self) -> Result<usize, AppError> {
        let mut state = self.state.write().await;
        let selected = std::mem::take(&mut state.selected);

        let before = state.contacts.len();
        state.contacts.retain(|contact| !selected.contains(&contact.id));

        if let Some(pending) = state.pending_removal {
            if selected.contains(&pending) {
                state.pending_removal = None;
            }
        }

        Ok(before - state.contacts.len())
    }

    // =========================================================================
    //  EXCLUSÃO INDIVIDUAL (DUAS FASES)
    // =========================================================================

    /// Primeira fase: marca o contato e devolve os dados para o diálogo
    /// de confirmação. Uma nova solicitação substitui a anterior.
    pub async fn request_removal(&self, id: Uuid) -> Result<Contact, AppError> {
        let mut state = self.state.write().await;
        let contact = state
            .contacts
            .iter()
            .find(|contact| contact.id == id)
            .cloned()
            .ok_or(AppError::ContactNotFound)?;

        state.pending_removal = Some(id);
        Ok(contact)
    }

    /// Cancela a solicitação, válido a qualquer momento antes da confirmação.
    pub async fn cancel_removal(&self, id: Uuid) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        if state.pending_removal != Some(id) {
            return Err(AppError::NoPendingRemoval);
        }

        state.pending_removal = None;
        Ok(())
    }

    /// Segunda fase: só remove se a exclusão deste contato foi solicitada.
    pub async fn confirm_removal(&self, id: Uuid) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        if state.pending_removal != Some(id) {
            return Err(AppError::NoPendingRemoval);
        }

        state.contacts.retain(|contact| contact.id != id);
        state.selected.remove(&id);
        state.pending_removal = None;
        Ok(())
    }
}

fn contact_matches(contact: &Contact, query: &str, tag: Option<&str>) -> bool {
    let matches_search = query.is_empty()
        || contact.name.to_lowercase().contains(query)
        || contact.phone.contains(query)
        || contact.email.to_lowercase().contains(query);

    let matches_tag = match tag {
        Some(tag) if !tag.is_empty() => contact.tags.iter().any(|t| t == tag),
        _ => true,
    };

    matches_search && matches_tag
}

// A seleção sai na ordem da listagem, não na ordem dos cliques.
fn ordered_selection(state: &DirectoryState) -> Vec<Uuid> {
    state
        .contacts
        .iter()
        .filter(|contact| state.selected.contains(&contact.id))
        .map(|contact| contact.id)
        .collect()
}

fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: Uuid::new_v4(),
            name: "Maria Silva".to_string(),
            phone: "+55 (11) 99999-9999".to_string(),
            email: "maria.silva@email.com".to_string(),
            instagram: "maria_silva".to_string(),
            tags: vec!["Cliente VIP".to_string(), "Urgente".to_string()],
            notes: Some("Cliente preferencial, sempre compra produtos premium".to_string()),
            custom_fields: BTreeMap::from([
                ("empresa".to_string(), "Tech Solutions".to_string()),
                ("cargo".to_string(), "Gerente de Vendas".to_string()),
                ("aniversario".to_string(), "15/03/1990".to_string()),
            ]),
        },
        Contact {
            id: Uuid::new_v4(),
            name: "João Santos".to_string(),
            phone: "+55 (11) 88888-8888".to_string(),
            email: "joao.santos@email.com".to_string(),
            instagram: "joao_santos".to_string(),
            tags: vec!["Novo Cliente".to_string()],
            notes: Some("Primeiro contato, interessado em nossos serviços".to_string()),
            custom_fields: BTreeMap::new(),
        },
        Contact {
            id: Uuid::new_v4(),
            name: "Ana Costa".to_string(),
            phone: "+55 (11) 77777-7777".to_string(),
            email: "ana.costa@email.com".to_string(),
            instagram: "ana_costa".to_string(),
            tags: vec!["Potencial".to_string()],
            notes: Some("Em negociação, aguardando proposta".to_string()),
            custom_fields: BTreeMap::new(),
        },
    ]
}
