//! Form repository port.
//!
//! Stores registered form schemas and tracks which one is active.

use async_trait::async_trait;

use crate::domain::form::FormSchema;
use crate::domain::foundation::{DomainError, FormId};

/// A stored form schema with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredForm {
    pub id: FormId,
    pub schema: FormSchema,
}

/// Repository port for form schemas.
///
/// Implementations must ensure:
/// - `list` returns forms in registration order
/// - `active` never changes except through `set_active`
#[async_trait]
pub trait FormRepository: Send + Sync {
    /// Store a schema under `id`, replacing any previous schema with that id.
    async fn save(&self, id: FormId, schema: &FormSchema) -> Result<(), DomainError>;

    /// All stored forms, oldest first.
    async fn list(&self) -> Result<Vec<StoredForm>, DomainError>;

    /// Mark a stored form as the active one.
    ///
    /// # Errors
    ///
    /// - `FormNotFound` if `id` is not stored
    async fn set_active(&self, id: &FormId) -> Result<(), DomainError>;

    /// The active form, or `None` if no form was ever activated.
    async fn active(&self) -> Result<Option<StoredForm>, DomainError>;
}
