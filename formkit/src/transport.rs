use async_trait::async_trait;
use formkit_model::Envelope;
use serde::Serialize;

use crate::form::{Field, Form, SubmitRequest};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {reason}")]
    Network { reason: String },

    #[error("server responded with {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("server returned an invalid response: {reason}")]
    InvalidResponse { status: u16, reason: String },
}

impl TransportError {
    pub fn status(&self) -> u16 {
        match self {
            TransportError::Network { .. } => 0,
            TransportError::Status { status, .. } | TransportError::InvalidResponse { status, .. } => {
                *status
            }
        }
    }

    pub fn status_text(&self) -> &str {
        match self {
            TransportError::Network { .. } => "error",
            TransportError::Status { status_text, .. } => status_text,
            TransportError::InvalidResponse { .. } => "parsererror",
        }
    }

    pub fn detail(&self) -> String {
        match self {
            TransportError::Network { reason } | TransportError::InvalidResponse { reason, .. } => {
                reason.clone()
            }
            TransportError::Status { status_text, .. } => status_text.clone(),
        }
    }

    pub fn info(&self) -> TransportInfo {
        TransportInfo {
            status: self.status(),
            status_text: self.status_text().to_owned(),
            url: None,
        }
    }
}

/// What is known about the HTTP exchange, handed to hooks as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportInfo {
    pub status: u16,
    pub status_text: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub envelope: Envelope,
    pub info: TransportInfo,
}

impl TransportResponse {
    /// Status text reported to response hooks, matching what the legacy
    /// pages received.
    pub const STATUS_TEXT: &'static str = "success";
}

/// Serializes a form and submits it, yielding the parsed envelope.
#[async_trait(?Send)]
pub trait Transport<E> {
    fn serialize(&self, form: &Form<E>) -> Vec<Field>;

    async fn submit(
        &self,
        form: &Form<E>,
        request: &SubmitRequest,
    ) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_accessors() {
        let network = TransportError::Network {
            reason: "offline".into(),
        };
        assert_eq!(network.status(), 0);
        assert_eq!(network.status_text(), "error");
        assert_eq!(network.detail(), "offline");

        let status = TransportError::Status {
            status: 502,
            status_text: "Bad Gateway".into(),
        };
        assert_eq!(status.status(), 502);
        assert_eq!(status.info().status_text, "Bad Gateway");

        let invalid = TransportError::InvalidResponse {
            status: 200,
            reason: "expected value at line 1".into(),
        };
        assert_eq!(invalid.status_text(), "parsererror");
        assert_eq!(invalid.to_string(), "server returned an invalid response: expected value at line 1");
    }
}
