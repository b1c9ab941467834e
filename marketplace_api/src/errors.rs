//! Error types for the API client.

/// Errors that can occur when making API requests or normalizing their responses.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (network error, timeout).
    #[error("Request failed")]
    Transport(#[from] reqwest::Error),
    /// The base URL and path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The API returned a non-success status not covered by a dedicated variant.
    #[error("Request failed with status {status}")]
    HttpStatus {
        status: u16,
        message: Option<String>,
        body: String,
    },
    /// HTTP 404, or a detail response that held no entity.
    #[error("Resource not found")]
    NotFound { message: Option<String> },
    /// HTTP 400/422 with the server's field messages.
    #[error("Validation failed")]
    Validation {
        message: Option<String>,
        fields: Vec<FieldError>,
    },
    /// HTTP 409, usually a duplicate resource.
    #[error("Conflict")]
    Conflict { message: Option<String> },
    /// The body was not JSON, or the entity did not match its expected type.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// A single server-supplied validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field, when the server reports one.
    pub field: Option<String>,
    pub message: String,
}

/// Coarse classification used by callers to pick a reaction to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    MalformedResponse,
    NotFound,
    Validation,
    Conflict,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport(_) | Error::InvalidUrl(_) | Error::HttpStatus { .. } => {
                ErrorKind::Transport
            }
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Conflict { .. } => ErrorKind::Conflict,
            Error::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    /// HTTP status associated with the error, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            Error::HttpStatus { status, .. } => Some(*status),
            Error::NotFound { .. } => Some(404),
            Error::Conflict { .. } => Some(409),
            Error::Validation { .. } => Some(400),
            Error::InvalidUrl(_) | Error::MalformedResponse(_) => None,
        }
    }

    /// Server-supplied message, if the error body carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::HttpStatus { message, .. }
            | Error::NotFound { message }
            | Error::Validation { message, .. }
            | Error::Conflict { message } => message.as_deref(),
            _ => None,
        }
    }

    /// Builds the error for a non-success status from the raw response body.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let message = parsed.as_ref().and_then(extract_message);
        match status {
            404 => Error::NotFound { message },
            400 | 422 => Error::Validation {
                message,
                fields: parsed.as_ref().map(extract_field_errors).unwrap_or_default(),
            },
            409 => Error::Conflict { message },
            _ => Error::HttpStatus {
                status,
                message,
                body: truncate_body(body),
            },
        }
    }
}

fn extract_message(body: &serde_json::Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|key| body.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

// Servers report field errors either as a map (`{"nom": "requis"}` or
// `{"nom": ["requis"]}`) or as a list of strings or `{field, message}` objects.
fn extract_field_errors(body: &serde_json::Value) -> Vec<FieldError> {
    let Some(errors) = body.get("errors") else {
        return Vec::new();
    };
    match errors {
        serde_json::Value::Object(map) => map
            .iter()
            .flat_map(|(field, value)| {
                let messages: Vec<String> = match value {
                    serde_json::Value::Array(items) => items
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect(),
                    serde_json::Value::String(s) => vec![s.clone()],
                    other => vec![other.to_string()],
                };
                messages.into_iter().map(move |message| FieldError {
                    field: Some(field.clone()),
                    message,
                })
            })
            .collect(),
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(FieldError {
                    field: None,
                    message: s.clone(),
                }),
                serde_json::Value::Object(obj) => {
                    let message = obj
                        .get("message")
                        .or_else(|| obj.get("msg"))
                        .and_then(|v| v.as_str())?;
                    Some(FieldError {
                        field: obj
                            .get("field")
                            .or_else(|| obj.get("path"))
                            .and_then(|v| v.as_str())
                            .map(str::to_string),
                        message: message.to_string(),
                    })
                }
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
