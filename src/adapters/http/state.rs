//! Shared state for the HTTP handlers.

use std::sync::Arc;

use crate::application::handlers::{
    GetActiveFormHandler, ListFormsHandler, ProcessSpeechHandler, RegisterFormHandler,
    StartConversationHandler, SubmitFormHandler, SynthesizeSpeechHandler,
};
use crate::application::services::{DialogueController, ExtractionEngine};
use crate::ports::{AIProvider, ConversationRepository, FormRepository, SpeechSynthesizer};

/// Ports the handlers are built from. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub form_repository: Arc<dyn FormRepository>,
    pub conversation_repository: Arc<dyn ConversationRepository>,
    pub ai_provider: Arc<dyn AIProvider>,
    pub speech_synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl AppState {
    pub fn new(
        form_repository: Arc<dyn FormRepository>,
        conversation_repository: Arc<dyn ConversationRepository>,
        ai_provider: Arc<dyn AIProvider>,
        speech_synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            form_repository,
            conversation_repository,
            ai_provider,
            speech_synthesizer,
        }
    }

    pub fn register_form_handler(&self) -> RegisterFormHandler {
        RegisterFormHandler::new(self.form_repository.clone())
    }

    pub fn list_forms_handler(&self) -> ListFormsHandler {
        ListFormsHandler::new(self.form_repository.clone())
    }

    pub fn get_active_form_handler(&self) -> GetActiveFormHandler {
        GetActiveFormHandler::new(self.form_repository.clone())
    }

    pub fn start_conversation_handler(&self) -> StartConversationHandler {
        StartConversationHandler::new(self.conversation_repository.clone())
    }

    pub fn process_speech_handler(&self) -> ProcessSpeechHandler {
        ProcessSpeechHandler::new(
            self.conversation_repository.clone(),
            ExtractionEngine::new(self.ai_provider.clone()),
            DialogueController::new(self.ai_provider.clone()),
        )
    }

    pub fn synthesize_speech_handler(&self) -> SynthesizeSpeechHandler {
        SynthesizeSpeechHandler::new(self.speech_synthesizer.clone())
    }

    pub fn submit_form_handler(&self) -> SubmitFormHandler {
        SubmitFormHandler::new()
    }
}
