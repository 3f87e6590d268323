use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::macros::id;

/// Subject used when a submission does not carry one.
pub const DEFAULT_CONTACT_SUBJECT: &str = "General Inquiry";

/// `local-part@domain.tld`, where no part may contain whitespace or `@`.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

id!(ContactSubmissionId);

/// A contact form submission as received from the client, before validation.
///
/// Every field is optional. Absent and present-but-empty fields are told apart
/// only for the subject, all other fields are checked for blankness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: ContactSubject,
    pub message: ContactMessage,
}

/// An accepted submission, as handed to the record sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub id: ContactSubmissionId,
    pub submission: ContactSubmission,
    pub received_at: DateTime<Utc>,
}

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, Display, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    validate(regex = CONTACT_EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, Display, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactEmail(String);

#[nutype(derive(Debug, Clone, PartialEq, Eq, Display, From, Deref, Serialize, Deserialize))]
pub struct ContactSubject(String);

impl Default for ContactSubject {
    fn default() -> Self {
        Self::new(DEFAULT_CONTACT_SUBJECT.to_owned())
    }
}

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, Display, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessage(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Machine readable reason for rejecting a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactRejectionReason {
    MissingName,
    MissingEmail,
    InvalidEmailFormat,
    MissingMessage,
}

impl ContactRejectionReason {
    pub fn field(self) -> ContactField {
        match self {
            Self::MissingName => ContactField::Name,
            Self::MissingEmail | Self::InvalidEmailFormat => ContactField::Email,
            Self::MissingMessage => ContactField::Message,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::MissingName => "MISSING_NAME",
            Self::MissingEmail => "MISSING_EMAIL",
            Self::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
            Self::MissingMessage => "MISSING_MESSAGE",
        }
    }

    /// Human readable message suitable for display next to the form field.
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingName => "Name is required",
            Self::MissingEmail => "Email is required",
            Self::InvalidEmailFormat => "Invalid email address",
            Self::MissingMessage => "Message is required",
        }
    }
}

impl std::fmt::Display for ContactRejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// The non-empty, ordered list of reasons a submission was rejected for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactValidationErrors(Vec<ContactRejectionReason>);

impl ContactValidationErrors {
    /// Returns `None` if `reasons` is empty.
    pub fn new(reasons: Vec<ContactRejectionReason>) -> Option<Self> {
        (!reasons.is_empty()).then_some(Self(reasons))
    }

    pub fn reasons(&self) -> &[ContactRejectionReason] {
        &self.0
    }
}

impl std::fmt::Display for ContactValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut reasons = self.0.iter();
        if let Some(first) = reasons.next() {
            write!(f, "{first}")?;
        }
        for reason in reasons {
            write!(f, ", {reason}")?;
        }
        Ok(())
    }
}

impl IntoIterator for ContactValidationErrors {
    type Item = ContactRejectionReason;
    type IntoIter = std::vec::IntoIter<ContactRejectionReason>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
