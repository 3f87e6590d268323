use serde::Serialize;
use serde_json::{Map, Value};
use skyglider_models::contact::{
    ContactField, ContactPayload, ContactRecord, ContactRejectionReason,
};
use thiserror::Error;
use uuid::Uuid;

/// Reasons a request body cannot be turned into a [`ContactPayload`].
#[derive(Debug, Error)]
pub enum MalformedPayload {
    #[error("The request body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("The request body is not a JSON object.")]
    NotAnObject,
    #[error("The field `{0}` is not a scalar value.")]
    InvalidField(&'static str),
}

/// Parse a raw request body into a [`ContactPayload`].
///
/// Missing and `null` fields are absent. Numbers and booleans are coerced to
/// their textual form. Unknown fields are ignored.
pub fn parse_contact_payload(body: &[u8]) -> Result<ContactPayload, MalformedPayload> {
    let Value::Object(mut object) = serde_json::from_slice::<Value>(body)? else {
        return Err(MalformedPayload::NotAnObject);
    };

    Ok(ContactPayload {
        name: take_text(&mut object, "name")?,
        email: take_text(&mut object, "email")?,
        subject: take_text(&mut object, "subject")?,
        message: take_text(&mut object, "message")?,
    })
}

fn take_text(
    object: &mut Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, MalformedPayload> {
    match object.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(boolean)) => Ok(Some(boolean.to_string())),
        Some(Value::Array(_) | Value::Object(_)) => Err(MalformedPayload::InvalidField(field)),
    }
}

#[derive(Debug, Serialize)]
pub struct ApiContactAccepted {
    pub success: bool,
    pub message: &'static str,
    /// Id of the recorded submission
    pub id: Uuid,
}

impl From<ContactRecord> for ApiContactAccepted {
    fn from(value: ContactRecord) -> Self {
        Self {
            success: true,
            message: "Message received successfully",
            id: *value.id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiContactRejected {
    pub detail: &'static str,
    pub errors: Vec<ApiContactFieldError>,
}

#[derive(Debug, Serialize)]
pub struct ApiContactFieldError {
    pub field: ContactField,
    pub code: ContactRejectionReason,
    pub message: &'static str,
}

impl From<ContactRejectionReason> for ApiContactFieldError {
    fn from(value: ContactRejectionReason) -> Self {
        Self {
            field: value.field(),
            code: value,
            message: value.message(),
        }
    }
}
