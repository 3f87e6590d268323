use skyglider_core_contact_impl::{record::ContactRecordServiceImpl, ContactFeatureServiceImpl};
use skyglider_core_health_impl::HealthFeatureServiceImpl;
use skyglider_email_impl::EmailServiceImpl;
use skyglider_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};

// API
pub type RestServer = skyglider_api_rest::RestServer<HealthFeature, ContactFeature>;

// Email
pub type Email = EmailServiceImpl;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, ContactRecord>;

pub type ContactFeature = ContactFeatureServiceImpl<Id, Time, ContactRecord>;
pub type ContactRecord = ContactRecordServiceImpl<Email>;
