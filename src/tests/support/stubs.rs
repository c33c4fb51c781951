use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactReceipt, SubmitContactError, SubmitContactMessageUseCase,
};
use crate::modules::contact::domain::{ContactForm, ContactValidationError};
use crate::modules::content::domain::Project;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    LoadProjectDetailUseCase, ProjectDetailError,
};

/// Answers every submission with a fixed result and remembers the forms.
#[derive(Clone)]
pub struct StubSubmitContactMessageUseCase {
    result: Result<ContactReceipt, SubmitContactError>,
    received: Arc<Mutex<Vec<ContactForm>>>,
}

impl StubSubmitContactMessageUseCase {
    pub fn sent() -> Self {
        Self::with_result(Ok(ContactReceipt {
            reference: Uuid::new_v4(),
        }))
    }

    pub fn invalid(error: ContactValidationError) -> Self {
        Self::with_result(Err(SubmitContactError::Invalid(error)))
    }

    pub fn relay_failure() -> Self {
        Self::with_result(Err(SubmitContactError::RelayFailed(
            "smtp unavailable".to_string(),
        )))
    }

    fn with_result(result: Result<ContactReceipt, SubmitContactError>) -> Self {
        Self {
            result,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn received(&self) -> Vec<ContactForm> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmitContactMessageUseCase for StubSubmitContactMessageUseCase {
    async fn execute(&self, form: ContactForm) -> Result<ContactReceipt, SubmitContactError> {
        self.received.lock().unwrap().push(form);
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubProjectDetailUseCase {
    result: Result<Project, ProjectDetailError>,
}

impl StubProjectDetailUseCase {
    pub fn success(project: Project) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn failing(error: ProjectDetailError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl LoadProjectDetailUseCase for StubProjectDetailUseCase {
    async fn execute(&self, _project_id: &str) -> Result<Project, ProjectDetailError> {
        self.result.clone()
    }
}
