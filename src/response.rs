use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{MAX_ERROR_BODY_CHARS, Result, SsoError, truncate_str};

/// Body of a successful (status < 300) Docebo API call.
///
/// The LMS occasionally answers a successful call with a body that is not
/// JSON. That case is kept apart from transport failures so callers can pick
/// a policy: [`ApiResponse::into_json`] treats it as "no result",
/// [`ApiResponse::into_result`] as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The body parsed as JSON.
    Json(Value),
    /// The body could not be parsed; the raw text is preserved.
    Undecodable { body: String },
}

impl ApiResponse {
    pub(crate) fn from_body(body: String) -> Self {
        match serde_json::from_str(&body) {
            Ok(value) => ApiResponse::Json(value),
            Err(e) => {
                tracing::warn!(error = %e, "success response body is not valid JSON");
                ApiResponse::Undecodable { body }
            }
        }
    }

    /// Returns `true` if the body parsed as JSON.
    pub fn is_decoded(&self) -> bool {
        matches!(self, ApiResponse::Json(_))
    }

    /// Borrows the parsed JSON, if any.
    pub fn json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Undecodable { .. } => None,
        }
    }

    /// Null policy: an undecodable body becomes `None`.
    pub fn into_json(self) -> Option<Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Undecodable { .. } => None,
        }
    }

    /// Strict policy: an undecodable body becomes [`SsoError::Decode`].
    pub fn into_result(self) -> Result<Value> {
        match self {
            ApiResponse::Json(value) => Ok(value),
            ApiResponse::Undecodable { body } => Err(SsoError::Decode(
                truncate_str(&body, MAX_ERROR_BODY_CHARS).to_string(),
            )),
        }
    }

    /// Deserializes the body into `T`, failing on undecodable bodies.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.into_result()?)?)
    }

    /// The LMS `success` flag, if present.
    pub fn success(&self) -> Option<bool> {
        self.json()?.get("success")?.as_bool()
    }

    /// The remote unique id (`idst`) assigned by the LMS, as a string.
    ///
    /// The LMS sends it either as a number or as a string.
    pub fn idst(&self) -> Option<String> {
        match self.json()?.get("idst")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
