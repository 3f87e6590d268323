use anyhow::anyhow;
use lettre::{
    message::{header, MessageBuilder},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use skyglider_email_contracts::{Email, EmailService};
use skyglider_models::email_address::EmailAddressWithName;
use skyglider_utils::Apply;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    pub async fn new(url: &str, from: EmailAddressWithName) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { from, transport })
    }

    #[cfg(feature = "dummy")]
    pub async fn dummy() -> Self {
        Self::new("smtp://dummy", "dummy@example.com".parse().unwrap())
            .await
            .unwrap()
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        debug!(recipient = %email.recipient, subject = email.subject, "sending email");

        let message = build_message(&self.from, email)?;

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

fn build_message(from: &EmailAddressWithName, email: Email) -> anyhow::Result<Message> {
    Message::builder()
        .from(from.0.clone())
        .to(email.recipient.0)
        .apply_map(email.reply_to.map(|x| x.0), MessageBuilder::reply_to)
        .subject(email.subject)
        .header(header::ContentType::TEXT_PLAIN)
        .body(email.body)
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(reply_to: Option<&str>) -> Email {
        Email {
            recipient: "SkyGlider <hello@theskyglider.com>".parse().unwrap(),
            subject: "Contact Form: Feedback".into(),
            body: "Great product!".into(),
            reply_to: reply_to.map(|x| x.parse().unwrap()),
        }
    }

    #[test]
    fn message_headers() {
        // Arrange
        let from = "noreply@theskyglider.com".parse().unwrap();

        // Act
        let message = build_message(&from, email(Some("ava@example.com"))).unwrap();

        // Assert
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Reply-To: ava@example.com"));
        assert!(formatted.contains("Subject: Contact Form: Feedback"));
        assert!(formatted.contains("text/plain"));
        assert!(formatted.contains("Great product!"));
    }

    #[test]
    fn message_without_reply_to() {
        // Arrange
        let from = "noreply@theskyglider.com".parse().unwrap();

        // Act
        let message = build_message(&from, email(None)).unwrap();

        // Assert
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(!formatted.contains("Reply-To"));
    }
}
