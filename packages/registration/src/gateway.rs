use std::sync::{Arc, Mutex};

use crate::models::{BuyerRegistration, RegistrationResponse};

/// Why a submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The gateway answered but did not accept the registration.
    #[error("registration was not accepted")]
    Rejected,
    /// The call itself failed.
    #[error("submission failed: {0}")]
    Transport(String),
}

/// Async endpoint that accepts a finished registration.
pub trait SubmissionGateway {
    fn submit(
        &self,
        request: BuyerRegistration,
    ) -> impl std::future::Future<Output = Result<RegistrationResponse, SubmissionError>>;
}

/// In-memory gateway that echoes every request back, for tests and offline use.
#[derive(Clone, Debug, Default)]
pub struct EchoGateway {
    received: Arc<Mutex<Vec<BuyerRegistration>>>,
    failure: Arc<Mutex<Option<SubmissionError>>>,
}

impl EchoGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following submission fail with `error`; `None` restores echoing.
    pub fn fail_with(&self, error: Option<SubmissionError>) {
        *self.failure.lock().unwrap() = error;
    }

    /// Requests seen so far, including failed ones.
    pub fn received(&self) -> Vec<BuyerRegistration> {
        self.received.lock().unwrap().clone()
    }
}

impl SubmissionGateway for EchoGateway {
    async fn submit(
        &self,
        request: BuyerRegistration,
    ) -> Result<RegistrationResponse, SubmissionError> {
        self.received.lock().unwrap().push(request.clone());
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(RegistrationResponse::accepted(request)),
        }
    }
}
