use std::future::Future;

use skyglider_models::contact::{ContactPayload, ContactRecord, ContactValidationErrors};
use thiserror::Error;

pub mod record;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate a contact form submission and hand it to the record sink.
    ///
    /// Returns the accepted record. Nothing is recorded if validation fails.
    fn submit(
        &self,
        payload: ContactPayload,
    ) -> impl Future<Output = Result<ContactRecord, ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("The submission was rejected: {0}")]
    Rejected(ContactValidationErrors),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        payload: ContactPayload,
        result: Result<ContactRecord, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
