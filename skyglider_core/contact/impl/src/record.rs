use std::sync::Arc;

use anyhow::{anyhow, Context};
use skyglider_core_contact_contracts::record::ContactRecordService;
use skyglider_di::Build;
use skyglider_email_contracts::{Email, EmailService};
use skyglider_models::{
    contact::ContactRecord,
    email_address::{EmailAddress, EmailAddressWithName},
};
use tracing::{info, warn};

/// Records accepted submissions.
///
/// Submissions are forwarded via email if both an email service and a
/// recipient are configured, otherwise they are written to the log.
#[derive(Debug, Clone, Build)]
pub struct ContactRecordServiceImpl<Email> {
    email: Option<Email>,
    config: ContactRecordServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactRecordServiceConfig {
    pub forward_to: Option<Arc<EmailAddressWithName>>,
}

impl<EmailS> ContactRecordService for ContactRecordServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn record(&self, record: ContactRecord) -> anyhow::Result<()> {
        match (&self.email, &self.config.forward_to) {
            (Some(email), Some(recipient)) => forward(email, recipient, record).await,
            _ => {
                log(&record);
                Ok(())
            }
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match (&self.email, &self.config.forward_to) {
            (Some(email), Some(_)) => email.ping().await,
            _ => Ok(()),
        }
    }
}

fn log(record: &ContactRecord) {
    let submission = &record.submission;
    info!(
        id = %record.id,
        name = %submission.name,
        email = %submission.email,
        subject = %submission.subject,
        message = %submission.message,
        timestamp = %record.received_at.to_rfc3339(),
        "contact form submission"
    );
}

async fn forward(
    email: &impl EmailService,
    recipient: &EmailAddressWithName,
    record: ContactRecord,
) -> anyhow::Result<()> {
    let email_message = forward_email(recipient.clone(), record);

    let ok = email
        .send(email_message)
        .await
        .context("Failed to forward contact submission")?;

    ok.then_some(())
        .ok_or_else(|| anyhow!("The smtp server rejected the forwarded contact submission"))
}

fn forward_email(recipient: EmailAddressWithName, record: ContactRecord) -> Email {
    let ContactRecord {
        id,
        submission,
        received_at,
    } = record;

    let reply_to = submission
        .email
        .parse::<EmailAddress>()
        .map(|address| address.with_name(submission.name.to_string()))
        .inspect_err(|err| {
            warn!(%id, email = %submission.email, "cannot use submitter address as reply-to: {err}")
        })
        .ok();

    Email {
        recipient,
        subject: format!("Contact Form: {}", *submission.subject),
        body: format!(
            "New Contact Form Submission\n\nFrom: {} ({})\nSubject: {}\nReceived: {}\nSubmission: \
             {}\n\n{}",
            *submission.name,
            *submission.email,
            *submission.subject,
            received_at.to_rfc3339(),
            id,
            *submission.message,
        ),
        reply_to,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use skyglider_email_contracts::MockEmailService;
    use skyglider_models::contact::{ContactSubmission, ContactSubmissionId};
    use uuid::Uuid;

    use super::*;

    fn record() -> ContactRecord {
        ContactRecord {
            id: ContactSubmissionId::from(Uuid::nil()),
            submission: ContactSubmission {
                name: "Ava".try_into().unwrap(),
                email: "ava@example.com".try_into().unwrap(),
                subject: "Feedback".to_owned().into(),
                message: "Great product!".try_into().unwrap(),
            },
            received_at: Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap(),
        }
    }

    fn recipient() -> Arc<EmailAddressWithName> {
        Arc::new("SkyGlider <hello@theskyglider.com>".parse().unwrap())
    }

    fn expected_email() -> Email {
        Email {
            recipient: (*recipient()).clone(),
            subject: "Contact Form: Feedback".into(),
            body: "New Contact Form Submission\n\nFrom: Ava (ava@example.com)\nSubject: \
                   Feedback\nReceived: 2024-05-17T12:30:00+00:00\nSubmission: \
                   00000000-0000-0000-0000-000000000000\n\nGreat product!"
                .into(),
            reply_to: Some("Ava <ava@example.com>".parse().unwrap()),
        }
    }

    #[tokio::test]
    async fn log_only() {
        // Arrange
        let sut = ContactRecordServiceImpl {
            email: None::<MockEmailService>,
            config: ContactRecordServiceConfig { forward_to: None },
        };

        // Act
        let result = sut.record(record()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn log_without_recipient() {
        // Arrange
        let sut = ContactRecordServiceImpl {
            email: Some(MockEmailService::new()),
            config: ContactRecordServiceConfig { forward_to: None },
        };

        // Act
        let result = sut.record(record()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn forward_ok() {
        // Arrange
        let email = MockEmailService::new().with_send(expected_email(), true);

        let sut = ContactRecordServiceImpl {
            email: Some(email),
            config: ContactRecordServiceConfig {
                forward_to: Some(recipient()),
            },
        };

        // Act
        let result = sut.record(record()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn forward_rejected() {
        // Arrange
        let email = MockEmailService::new().with_send(expected_email(), false);

        let sut = ContactRecordServiceImpl {
            email: Some(email),
            config: ContactRecordServiceConfig {
                forward_to: Some(recipient()),
            },
        };

        // Act
        let result = sut.record(record()).await;

        // Assert
        result.unwrap_err();
    }

    #[tokio::test]
    async fn forward_error() {
        // Arrange
        let email = MockEmailService::new().with_send_error(expected_email());

        let sut = ContactRecordServiceImpl {
            email: Some(email),
            config: ContactRecordServiceConfig {
                forward_to: Some(recipient()),
            },
        };

        // Act
        let result = sut.record(record()).await;

        // Assert
        result.unwrap_err();
    }

    #[tokio::test]
    async fn ping_log_only() {
        // Arrange
        let sut = ContactRecordServiceImpl {
            email: None::<MockEmailService>,
            config: ContactRecordServiceConfig { forward_to: None },
        };

        // Act
        let result = sut.ping().await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn ping_forward() {
        // Arrange
        let sut = ContactRecordServiceImpl {
            email: Some(MockEmailService::new().with_ping(false)),
            config: ContactRecordServiceConfig {
                forward_to: Some(recipient()),
            },
        };

        // Act
        let result = sut.ping().await;

        // Assert
        result.unwrap_err();
    }
}
