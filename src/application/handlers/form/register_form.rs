//! RegisterFormHandler - Command handler for registering form schemas.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::form::FormSchema;
use crate::domain::foundation::{DomainError, FormId, ValidationError};
use crate::ports::FormRepository;

/// Command to register a form schema and make it active.
#[derive(Debug, Clone)]
pub struct RegisterFormCommand {
    pub schema: FormSchema,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterFormResult {
    pub form_id: FormId,
}

/// Errors that can occur when registering a form.
#[derive(Debug, Clone, Error)]
pub enum RegisterFormError {
    /// The schema is not usable.
    #[error("Invalid form: {0}")]
    InvalidForm(#[from] ValidationError),

    /// Repository error during persistence.
    #[error("Repository error: {0}")]
    Repository(#[from] DomainError),
}

/// Handler for registering forms.
pub struct RegisterFormHandler {
    forms: Arc<dyn FormRepository>,
}

impl RegisterFormHandler {
    pub fn new(forms: Arc<dyn FormRepository>) -> Self {
        Self { forms }
    }

    pub async fn handle(
        &self,
        cmd: RegisterFormCommand,
    ) -> Result<RegisterFormResult, RegisterFormError> {
        cmd.schema.validate()?;

        let form_id = FormId::new();
        self.forms.save(form_id, &cmd.schema).await?;
        self.forms.set_active(&form_id).await?;

        tracing::info!(
            form_id = %form_id,
            title = %cmd.schema.title,
            fields = cmd.schema.fields.len(),
            "Form registered and activated"
        );

        Ok(RegisterFormResult { form_id })
    }
}
