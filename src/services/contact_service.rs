// src/services/contact_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    models::contacts::{Contact, ContactPayload, CustomFieldPayload, TagPayload},
    store::ContactRepository,
};

#[derive(Clone)]
pub struct ContactService {
    repo: ContactRepository,
}

impl ContactService {
    pub fn new(repo: ContactRepository) -> Self {
        Self { repo }
    }

    // =========================================================================
    //  LISTAGEM
    // =========================================================================

    pub async fn list(&self, query: &str, tag: Option<&str>) -> Result<Vec<Contact>, AppError> {
        self.repo.search(query, tag).await
    }

    pub async fn tags(&self) -> Result<Vec<String>, AppError> {
        self.repo.tags().await
    }

    // =========================================================================
    //  CADASTRO
    // =========================================================================

    pub async fn create(&self, payload: ContactPayload) -> Result<Contact, AppError> {
        payload.validate()?;

        let contact = Contact {
            id: Uuid::new_v4(),
            name: payload.name,
            phone: payload.phone,
            email: payload.email,
            instagram: payload.instagram,
            tags: payload.tags,
            notes: payload.notes,
            custom_fields: Default::default(),
        };

        self.repo.insert(contact).await
    }

    pub async fn update(&self, id: Uuid, payload: ContactPayload) -> Result<Contact, AppError> {
        payload.validate()?;

        self.repo
            .update(id, |contact| {
                contact.name = payload.name;
                contact.phone = payload.phone;
                contact.email = payload.email;
                contact.instagram = payload.instagram;
                contact.tags = payload.tags;
                contact.notes = payload.notes;
            })
            .await
    }

    // =========================================================================
    //  ETIQUETAS E CAMPOS PERSONALIZADOS
    // =========================================================================

    /// Adiciona a etiqueta se ainda não existir no contato.
    pub async fn add_tag(&self, id: Uuid, payload: TagPayload) -> Result<Contact, AppError> {
        payload.validate()?;
        let tag = payload.tag.trim().to_string();

        self.repo
            .update(id, |contact| {
                if !contact.tags.contains(&tag) {
                    contact.tags.push(tag);
                }
            })
            .await
    }

    pub async fn remove_tag(&self, id: Uuid, tag: &str) -> Result<Contact, AppError> {
        self.repo
            .update(id, |contact| {
                contact.tags.retain(|existing| existing != tag);
            })
            .await
    }

    pub async fn set_custom_field(
        &self,
        id: Uuid,
        payload: CustomFieldPayload,
    ) -> Result<Contact, AppError> {
        payload.validate()?;

        self.repo
            .update(id, |contact| {
                contact
                    .custom_fields
                    .insert(payload.key.trim().to_string(), payload.value.trim().to_string());
            })
            .await
    }

    pub async fn remove_custom_field(&self, id: Uuid, key: &str) -> Result<Contact, AppError> {
        self.repo
            .update(id, |contact| {
                contact.custom_fields.remove(key);
            })
            .await
    }

    // =========================================================================
    //  SELEÇÃO MÚLTIPLA E EXCLUSÕES
    // =========================================================================

    pub async fn toggle_selection(&self, id: Uuid) -> Result<Vec<Uuid>, AppError> {
        self.repo.toggle_selection(id).await
    }

    pub async fn select_all(&self, query: &str, tag: Option<&str>) -> Result<Vec<Uuid>, AppError> {
        self.repo.select_all(query, tag).await
    }

    pub async fn clear_selection(&self) -> Result<(), AppError> {
        self.repo.clear_selection().await
    }

    pub async fn delete_selected(&self) -> Result<usize, AppError> {
        self.repo.delete_selected().await
    }

    pub async fn request_removal(&self, id: Uuid) -> Result<Contact, AppError> {
        self.repo.request_removal(id).await
    }

    pub async fn cancel_removal(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.cancel_removal(id).await
    }

    pub async fn confirm_removal(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.confirm_removal(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_service() -> ContactService {
        ContactService::new(ContactRepository::seeded())
    }

    fn payload(name: &str, phone: &str) -> ContactPayload {
        ContactPayload {
            name: name.to_string(),
            phone: phone.to_string(),
            email: String::new(),
            instagram: String::new(),
            tags: Vec::new(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn filtra_por_texto_e_etiqueta() {
        let service = seeded_service();

        let by_phone = service.list("88888", None).await.unwrap();
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].name, "João Santos");

        let by_tag = service.list("", Some("Cliente VIP")).await.unwrap();
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].name, "Maria Silva");

        // Texto e etiqueta combinados: ambos precisam bater.
        let both = service.list("ana", Some("Cliente VIP")).await.unwrap();
        assert!(both.is_empty());
    }

    #[tokio::test]
    async fn cadastro_exige_nome_e_telefone() {
        let service = seeded_service();

        let blank_phone = service.create(payload("Fulano", "  ")).await;
        assert!(matches!(blank_phone, Err(AppError::ValidationError(_))));
        assert_eq!(service.list("", None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn excluir_selecionados_preserva_a_ordem_dos_demais() {
        let service = seeded_service();
        let all = service.list("", None).await.unwrap();

        // Seleciona o primeiro e o terceiro.
        service.toggle_selection(all[0].id).await.unwrap();
        service.toggle_selection(all[2].id).await.unwrap();

        let removed = service.delete_selected().await.unwrap();
        assert_eq!(removed, 2);

        let remaining = service.list("", None).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, all[1].id);
    }

    #[tokio::test]
    async fn selecionar_todos_respeita_o_filtro() {
        let service = seeded_service();

        let selected = service.select_all("silva", None).await.unwrap();
        assert_eq!(selected.len(), 1);

        service.clear_selection().await.unwrap();
        assert_eq!(service.delete_selected().await.unwrap(), 0);
        assert_eq!(service.list("", None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn exclusao_individual_pede_confirmacao() {
        let service = seeded_service();
        let all = service.list("", None).await.unwrap();
        let target = all[1].id;

        // Confirmar sem solicitar é erro.
        let premature = service.confirm_removal(target).await;
        assert!(matches!(premature, Err(AppError::NoPendingRemoval)));

        let requested = service.request_removal(target).await.unwrap();
        assert_eq!(requested.id, target);

        service.confirm_removal(target).await.unwrap();
        assert_eq!(service.list("", None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn cancelar_solicitacao_impede_a_exclusao() {
        let service = seeded_service();
        let all = service.list("", None).await.unwrap();
        let target = all[0].id;

        service.request_removal(target).await.unwrap();
        service.cancel_removal(target).await.unwrap();

        let after_cancel = service.confirm_removal(target).await;
        assert!(matches!(after_cancel, Err(AppError::NoPendingRemoval)));
        assert_eq!(service.list("", None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn etiquetas_nao_duplicam_e_campos_livres_gravam() {
        let service = seeded_service();
        let maria = service.list("maria", None).await.unwrap().remove(0);

        let tagged = service
            .add_tag(
                maria.id,
                TagPayload {
                    tag: "Cliente VIP".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(tagged.tags.iter().filter(|t| *t == "Cliente VIP").count(), 1);

        let with_field = service
            .set_custom_field(
                maria.id,
                CustomFieldPayload {
                    key: "cidade".to_string(),
                    value: "São Paulo".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(
            with_field.custom_fields.get("cidade"),
            Some(&"São Paulo".to_string())
        );
    }
}
