//! Store error payload
//!
//! PostgREST answers failed writes with a JSON object carrying `code`,
//! `message`, `details` and `hint`. Transport failures have no status.

use crate::utils::truncate_string;
use serde::Deserialize;
use std::fmt;

/// Longest raw body kept when the store replies with something that is not JSON
const MAX_RAW_BODY_LEN: usize = 512;

/// Error reported by the external store for a single upsert call
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreError {
    /// HTTP status, if a response was received
    #[serde(skip)]
    pub status: Option<u16>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl StoreError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            message: message.into(),
            details: None,
            hint: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Build from a non-success HTTP response body
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<StoreError>(body) {
            Ok(mut parsed) if !parsed.message.is_empty() || parsed.code.is_some() => {
                parsed.status = Some(status);
                parsed
            }
            _ => {
                let message = if body.trim().is_empty() {
                    format!("store responded with HTTP {}", status)
                } else {
                    truncate_string(body.trim(), MAX_RAW_BODY_LEN)
                };
                Self::new(Some(status), message)
            }
        }
    }

    /// Build from a non-success response whose body could not be read
    pub fn unreadable_body(status: u16, err: impl fmt::Display) -> Self {
        Self::new(
            Some(status),
            format!("store responded with HTTP {} (body unreadable: {})", status, err),
        )
    }

    /// Build from a request that never produced a response
    pub fn from_transport(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else {
            format!("request failed: {}", err)
        };
        Self::new(err.status().map(|s| s.as_u16()), message)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = self.status {
            write!(f, "[HTTP {}] ", status)?;
        }
        if let Some(code) = &self.code {
            write!(f, "{}: ", code)?;
        }
        write!(f, "{}", self.message)?;
        if let Some(details) = &self.details {
            write!(f, " (details: {})", details)?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {}
