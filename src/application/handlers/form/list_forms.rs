//! ListFormsHandler - Query handler for registered forms.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::{FormRepository, StoredForm};

/// Handler listing registered forms in registration order.
pub struct ListFormsHandler {
    forms: Arc<dyn FormRepository>,
}

impl ListFormsHandler {
    pub fn new(forms: Arc<dyn FormRepository>) -> Self {
        Self { forms }
    }

    pub async fn handle(&self) -> Result<Vec<StoredForm>, DomainError> {
        self.forms.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryFormRepository;
    use crate::domain::form::{FieldSpec, FieldType, FormSchema};
    use crate::domain::foundation::FormId;

    #[tokio::test]
    async fn lists_saved_forms() {
        let repo = Arc::new(InMemoryFormRepository::new());
        let schema = FormSchema::new("A", vec![FieldSpec::required("X", FieldType::String)]);
        repo.save(FormId::new(), &schema).await.unwrap();

        let forms = ListFormsHandler::new(repo).handle().await.unwrap();

        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].schema, schema);
    }

    #[tokio::test]
    async fn empty_registry_lists_nothing() {
        let forms = ListFormsHandler::new(Arc::new(InMemoryFormRepository::new()))
            .handle()
            .await
            .unwrap();
        assert!(forms.is_empty());
    }
}
