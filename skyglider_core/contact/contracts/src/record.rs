use std::future::Future;

use skyglider_models::contact::ContactRecord;

/// The sink accepted contact submissions are recorded in.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRecordService: Send + Sync + 'static {
    /// Record an accepted submission.
    fn record(&self, record: ContactRecord) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Check whether the sink is reachable.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactRecordService {
    pub fn with_record(mut self, record: ContactRecord, result: anyhow::Result<()>) -> Self {
        self.expect_record()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_ping(mut self, result: anyhow::Result<()>) -> Self {
        self.expect_ping()
            .once()
            .return_once(|| Box::pin(std::future::ready(result)));
        self
    }
}
