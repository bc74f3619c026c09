//! Request/response headers (JSON).
//!
//! `params` is kept as `RawValue` so the resolved method decides how to parse
//! it; a denied call never pays for parsing its body.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::{FacadeGateError, Result};

/// Inbound call header.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Request {
    /// Caller-chosen correlation id, echoed in the response.
    #[serde(rename = "request-id")]
    pub request_id: u64,
    /// Facade name (field name is `type` on the wire).
    #[serde(rename = "type")]
    pub facade: String,
    /// Facade API revision.
    #[serde(default)]
    pub version: u32,
    /// Method name within the facade.
    pub request: String,
    /// Optional parameters, stored as raw JSON (lazy parsing).
    #[serde(default)]
    pub params: Option<Box<RawValue>>,
}

impl Request {
    /// Header-level checks only; version and method validity belong to
    /// whatever resolves the call.
    pub fn validate(&self) -> Result<()> {
        if self.facade.is_empty() {
            return Err(FacadeGateError::BadRequest("request type must not be empty".into()));
        }
        if self.request.is_empty() {
            return Err(FacadeGateError::BadRequest("request method must not be empty".into()));
        }
        Ok(())
    }

    /// Parse `params` into a JSON value; absent params become `null`.
    pub fn params_value(&self) -> Result<serde_json::Value> {
        match &self.params {
            Some(raw) => serde_json::from_str(raw.get())
                .map_err(|e| FacadeGateError::BadRequest(format!("invalid params: {e}"))),
            None => Ok(serde_json::Value::Null),
        }
    }
}

/// Decode and validate a request header from a JSON text.
pub fn decode_request(s: &str) -> Result<Request> {
    let req: Request = serde_json::from_str(s)
        .map_err(|e| FacadeGateError::BadRequest(format!("invalid request json: {e}")))?;
    req.validate()?;
    Ok(req)
}

/// Outbound reply header.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Response {
    #[serde(rename = "request-id")]
    pub request_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "error-code", default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl Response {
    pub fn ok(request_id: u64, response: serde_json::Value) -> Self {
        Self {
            request_id,
            response: Some(response),
            error: None,
            error_code: None,
        }
    }

    pub fn err(request_id: u64, err: &FacadeGateError) -> Self {
        Self {
            request_id,
            response: None,
            error: Some(err.to_string()),
            error_code: Some(err.client_code().as_str().to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
