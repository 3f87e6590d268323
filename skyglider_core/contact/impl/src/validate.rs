use skyglider_models::contact::{
    ContactEmail, ContactMessage, ContactName, ContactPayload, ContactRejectionReason,
    ContactSubject, ContactSubmission, ContactValidationErrors,
};

/// Check a submission for required fields and a well formed email address.
///
/// All rules are evaluated, so the returned errors list every failing field in
/// the order name, email, message. A missing or blank subject falls back to
/// the default subject.
pub fn validate(payload: &ContactPayload) -> Result<ContactSubmission, ContactValidationErrors> {
    let mut reasons = Vec::new();

    let name = payload
        .name
        .as_deref()
        .and_then(|name| ContactName::try_new(name.to_owned()).ok());
    if name.is_none() {
        reasons.push(ContactRejectionReason::MissingName);
    }

    let email = match payload.email.as_deref().filter(|x| !x.trim().is_empty()) {
        None => {
            reasons.push(ContactRejectionReason::MissingEmail);
            None
        }
        Some(email) => ContactEmail::try_new(email.to_owned())
            .inspect_err(|_| reasons.push(ContactRejectionReason::InvalidEmailFormat))
            .ok(),
    };

    let message = payload
        .message
        .as_deref()
        .and_then(|message| ContactMessage::try_new(message.to_owned()).ok());
    if message.is_none() {
        reasons.push(ContactRejectionReason::MissingMessage);
    }

    let subject = payload
        .subject
        .as_deref()
        .filter(|x| !x.trim().is_empty())
        .map(|subject| ContactSubject::new(subject.to_owned()))
        .unwrap_or_default();

    match (name, email, message, ContactValidationErrors::new(reasons)) {
        (_, _, _, Some(errors)) => Err(errors),
        (Some(name), Some(email), Some(message), None) => Ok(ContactSubmission {
            name,
            email,
            subject,
            message,
        }),
        _ => unreachable!("every missing field has a rejection reason"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use skyglider_utils::assert_matches;

    use super::*;

    fn payload(name: &str, email: &str, subject: Option<&str>, message: &str) -> ContactPayload {
        ContactPayload {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: subject.map(Into::into),
            message: Some(message.into()),
        }
    }

    fn reasons(result: Result<ContactSubmission, ContactValidationErrors>) -> Vec<ContactRejectionReason> {
        result.unwrap_err().into_iter().collect()
    }

    #[test]
    fn ok() {
        // Arrange
        let payload = payload(
            "Ava",
            "ava@example.com",
            Some("Feedback"),
            "Great product!",
        );

        // Act
        let result = validate(&payload);

        // Assert
        let submission = result.unwrap();
        assert_eq!(submission.name.as_str(), "Ava");
        assert_eq!(submission.email.as_str(), "ava@example.com");
        assert_eq!(submission.subject.as_str(), "Feedback");
        assert_eq!(submission.message.as_str(), "Great product!");
    }

    #[test]
    fn missing_subject_defaults_to_general_inquiry() {
        let result = validate(&payload("Ava", "ava@example.com", None, "Hi"));
        assert_eq!(result.unwrap().subject.as_str(), "General Inquiry");
    }

    #[test]
    fn blank_subject_defaults_to_general_inquiry() {
        let result = validate(&payload("Ava", "ava@example.com", Some("  "), "Hi"));
        assert_eq!(result.unwrap().subject.as_str(), "General Inquiry");
    }

    #[test]
    fn subject_is_passed_through() {
        let result = validate(&payload("Ava", "ava@example.com", Some(" Order #42 "), "Hi"));
        assert_eq!(result.unwrap().subject.as_str(), " Order #42 ");
    }

    #[test]
    fn missing_name() {
        for name in [None, Some(""), Some("   ")] {
            let payload = ContactPayload {
                name: name.map(Into::into),
                ..payload("", "ava@example.com", None, "Hi")
            };
            assert_eq!(
                reasons(validate(&payload)),
                [ContactRejectionReason::MissingName]
            );
        }
    }

    #[test]
    fn missing_email() {
        for email in [None, Some(""), Some(" \t")] {
            let payload = ContactPayload {
                email: email.map(Into::into),
                ..payload("Ava", "", None, "Hi")
            };
            assert_eq!(
                reasons(validate(&payload)),
                [ContactRejectionReason::MissingEmail]
            );
        }
    }

    #[test]
    fn invalid_email_format() {
        for email in ["foo", "foo@bar", "@bar.com", "not-an-email", "a b@c.de", "a@b@c.de"] {
            assert_eq!(
                reasons(validate(&payload("Ava", email, None, "Hi"))),
                [ContactRejectionReason::InvalidEmailFormat],
                "{email:?}"
            );
        }
    }

    #[test]
    fn valid_email_format() {
        for email in ["a@b.co", "user.name@sub.domain.org"] {
            assert_matches!(validate(&payload("Ava", email, None, "Hi")), Ok(_));
        }
    }

    #[test]
    fn missing_message() {
        for message in [None, Some(""), Some("\n\n")] {
            let payload = ContactPayload {
                message: message.map(Into::into),
                ..payload("Ava", "ava@example.com", None, "")
            };
            assert_eq!(
                reasons(validate(&payload)),
                [ContactRejectionReason::MissingMessage]
            );
        }
    }

    #[test]
    fn all_reasons_are_collected_in_field_order() {
        let result = validate(&ContactPayload {
            name: None,
            email: Some("nope".into()),
            subject: None,
            message: Some(" ".into()),
        });

        assert_eq!(
            reasons(result),
            [
                ContactRejectionReason::MissingName,
                ContactRejectionReason::InvalidEmailFormat,
                ContactRejectionReason::MissingMessage,
            ]
        );
    }

    #[test]
    fn empty_payload() {
        assert_eq!(
            reasons(validate(&ContactPayload::default())),
            [
                ContactRejectionReason::MissingName,
                ContactRejectionReason::MissingEmail,
                ContactRejectionReason::MissingMessage,
            ]
        );
    }

    #[test]
    fn idempotent() {
        let valid = payload("Ava", "ava@example.com", Some("Feedback"), "Great product!");
        let invalid = payload("", "not-an-email", None, "");

        assert_eq!(validate(&valid), validate(&valid));
        assert_eq!(validate(&invalid), validate(&invalid));
    }
}
