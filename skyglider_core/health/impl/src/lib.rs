use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use skyglider_core_contact_contracts::record::ContactRecordService;
use skyglider_core_health_contracts::{HealthFeatureService, HealthStatus};
use skyglider_di::Build;
use skyglider_shared_contracts::time::TimeService;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone, Build)]
pub struct HealthFeatureServiceImpl<Time, Record> {
    time: Time,
    record: Record,
    config: HealthFeatureConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl<Time, Record> HealthFeatureService for HealthFeatureServiceImpl<Time, Record>
where
    Time: TimeService,
    Record: ContactRecordService,
{
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }

        let sink = self
            .record
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping contact record sink: {err}"))
            .is_ok();

        let status = HealthStatus { sink };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: now,
            })
            .status
    }
}
