use std::sync::Arc;

use skyglider_api_rest::RestServerConfig;
use skyglider_config::Config;
use skyglider_core_contact_impl::{record::ContactRecordServiceConfig, ContactFeatureConfig};
use skyglider_core_health_impl::HealthFeatureConfig;
use skyglider_di::provider;
use types::Email;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        email: Option<Email>,
        ..config: ConfigProvider {
            // API
            RestServerConfig,

            // Core
            ContactFeatureConfig,
            ContactRecordServiceConfig,
            HealthFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Option<Email>) -> Self {
        Self {
            _cache: Default::default(),
            email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // API
        rest_server_config: RestServerConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
        contact_record_service_config: ContactRecordServiceConfig,
        health_feature_config: HealthFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig::new(&config.http.allowed_origins)?;

        // Core
        let contact_feature_config = ContactFeatureConfig {
            record_timeout: config.contact.record_timeout.into(),
        };

        let contact_record_service_config = ContactRecordServiceConfig {
            forward_to: config.contact.forward_to.clone().map(Arc::new),
        };

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        Ok(Self {
            _cache: Default::default(),

            // API
            rest_server_config,

            // Core
            contact_feature_config,
            contact_record_service_config,
            health_feature_config,
        })
    }
}
