use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// The one error kind every request can fail with.
///
/// Network failures, decoding failures and server rejections all collapse
/// into a human-readable message; `status` is set only when the server
/// actually answered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Builds the error for a non-2xx response from its raw body.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        Self {
            status: Some(status.as_u16()),
            message: error_message(status, body),
        }
    }

    pub fn empty_body(path: &str) -> Self {
        Self::new(format!("empty response from {path}"))
    }
}

fn error_message(status: StatusCode, body: &[u8]) -> String {
    let fallback = || format!("HTTP {}", status.as_u16());

    if body.iter().all(u8::is_ascii_whitespace) {
        return fallback();
    }

    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(Value::String(detail)),
        }) if !detail.is_empty() => detail,
        Ok(ErrorBody {
            detail: Some(Value::String(_)) | Some(Value::Null) | None,
        }) => fallback(),
        Ok(ErrorBody {
            detail: Some(other),
        }) => other.to_string(),
        Err(_) => match serde_json::from_slice::<Value>(body) {
            // valid JSON that is not an object, e.g. `[]` or `"oops"`
            Ok(_) => fallback(),
            Err(_) => "Unknown error".to_string(),
        },
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|status| status.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}
