//! In-Memory Form Repository Adapter
//!
//! Stores registered form schemas in memory, in registration order.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::form::FormSchema;
use crate::domain::foundation::{DomainError, ErrorCode, FormId};
use crate::ports::{FormRepository, StoredForm};

#[derive(Debug, Default)]
struct FormStore {
    forms: Vec<StoredForm>,
    active: Option<FormId>,
}

/// In-memory storage for form schemas
#[derive(Debug, Clone, Default)]
pub struct InMemoryFormRepository {
    store: Arc<RwLock<FormStore>>,
}

impl InMemoryFormRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored forms
    pub async fn form_count(&self) -> usize {
        self.store.read().await.forms.len()
    }
}

#[async_trait]
impl FormRepository for InMemoryFormRepository {
    async fn save(&self, id: FormId, schema: &FormSchema) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        match store.forms.iter_mut().find(|f| f.id == id) {
            Some(existing) => existing.schema = schema.clone(),
            None => store.forms.push(StoredForm {
                id,
                schema: schema.clone(),
            }),
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StoredForm>, DomainError> {
        Ok(self.store.read().await.forms.clone())
    }

    async fn set_active(&self, id: &FormId) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        if !store.forms.iter().any(|f| f.id == *id) {
            return Err(
                DomainError::new(ErrorCode::FormNotFound, format!("Form {} not found", id))
                    .with_detail("form_id", id.to_string()),
            );
        }
        store.active = Some(*id);
        Ok(())
    }

    async fn active(&self) -> Result<Option<StoredForm>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .active
            .and_then(|id| store.forms.iter().find(|f| f.id == id).cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{FieldSpec, FieldType};

    fn schema(title: &str) -> FormSchema {
        FormSchema::new(title, vec![FieldSpec::required("Name", FieldType::String)])
    }

    #[tokio::test]
    async fn saved_form_is_listed_under_its_id() {
        let repo = InMemoryFormRepository::new();
        let id = FormId::new();

        repo.save(id, &schema("A")).await.unwrap();

        let stored = repo.list().await.unwrap();
        assert_eq!(stored, vec![StoredForm { id, schema: schema("A") }]);
    }

    #[tokio::test]
    async fn list_preserves_registration_order() {
        let repo = InMemoryFormRepository::new();
        repo.save(FormId::new(), &schema("First")).await.unwrap();
        repo.save(FormId::new(), &schema("Second")).await.unwrap();

        let titles: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.schema.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn saving_same_id_replaces_schema() {
        let repo = InMemoryFormRepository::new();
        let id = FormId::new();
        repo.save(id, &schema("Old")).await.unwrap();
        repo.save(id, &schema("New")).await.unwrap();

        assert_eq!(repo.form_count().await, 1);
        assert_eq!(repo.list().await.unwrap()[0].schema, schema("New"));
    }

    #[tokio::test]
    async fn active_is_none_until_set() {
        let repo = InMemoryFormRepository::new();
        let id = FormId::new();
        repo.save(id, &schema("A")).await.unwrap();

        assert!(repo.active().await.unwrap().is_none());

        repo.set_active(&id).await.unwrap();
        assert_eq!(repo.active().await.unwrap().map(|f| f.id), Some(id));
    }

    #[tokio::test]
    async fn set_active_rejects_unknown_form() {
        let repo = InMemoryFormRepository::new();
        let id = FormId::new();
        let err = repo.set_active(&id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::FormNotFound);
        assert_eq!(err.details.get("form_id"), Some(&id.to_string()));
    }
}
