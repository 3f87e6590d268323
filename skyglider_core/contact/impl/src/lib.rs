use std::time::Duration;

use anyhow::{anyhow, Context};
use skyglider_core_contact_contracts::{
    record::ContactRecordService, ContactFeatureService, ContactSubmitError,
};
use skyglider_di::Build;
use skyglider_models::contact::{ContactPayload, ContactRecord};
use skyglider_shared_contracts::{id::IdService, time::TimeService};
use tracing::debug;

pub mod record;
pub mod validate;

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Id, Time, Record> {
    id: Id,
    time: Time,
    record: Record,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Upper bound for a single call to the record sink.
    pub record_timeout: Duration,
}

impl<Id, Time, Record> ContactFeatureService for ContactFeatureServiceImpl<Id, Time, Record>
where
    Id: IdService,
    Time: TimeService,
    Record: ContactRecordService,
{
    async fn submit(&self, payload: ContactPayload) -> Result<ContactRecord, ContactSubmitError> {
        let submission = validate::validate(&payload).map_err(|errors| {
            debug!(%errors, "rejected contact submission");
            ContactSubmitError::Rejected(errors)
        })?;

        let record = ContactRecord {
            id: self.id.generate(),
            submission,
            received_at: self.time.now(),
        };

        tokio::time::timeout(self.config.record_timeout, self.record.record(record.clone()))
            .await
            .map_err(|_| {
                anyhow!(
                    "Record sink did not respond within {:?}",
                    self.config.record_timeout
                )
            })?
            .context("Failed to record contact submission")?;

        debug!(id = %record.id, "accepted contact submission");

        Ok(record)
    }
}
