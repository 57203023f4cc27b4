//! GetActiveFormHandler - Query handler for the active form schema.

use std::sync::Arc;

use crate::domain::form::{default_form, FormSchema};
use crate::ports::FormRepository;

/// Handler returning the active form, or the built-in default.
///
/// Reading never changes which form is active.
pub struct GetActiveFormHandler {
    forms: Arc<dyn FormRepository>,
}

impl GetActiveFormHandler {
    pub fn new(forms: Arc<dyn FormRepository>) -> Self {
        Self { forms }
    }

    pub async fn handle(&self) -> FormSchema {
        match self.forms.active().await {
            Ok(Some(stored)) => stored.schema,
            Ok(None) => default_form(),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read active form; serving default");
                default_form()
            }
        }
    }
}
