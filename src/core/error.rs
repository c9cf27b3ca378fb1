//! Typed error handling for the sync adapter
//!
//! Every failure a request can hit maps to exactly one variant here,
//! and every variant knows its HTTP status code, wire error code, and
//! response body. Client input problems carry structured detail;
//! configuration defects surface as 500-class responses and are never
//! silently dropped.

use crate::core::field::EncodeError;
use crate::core::validator::{FieldErrors, NON_FIELD_ERRORS};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use std::fmt;

/// The error type produced by the dispatcher
#[derive(Debug)]
pub enum SyncError {
    /// Request body was present but not valid JSON, or a mutating
    /// request carried no body
    MalformedBody,

    /// The validator rejected the input
    Validation(FieldErrors),

    /// No entity with the requested identifier
    NotFound { resource: &'static str, id: i64 },

    /// Verb/identifier combination not routed, or the operation is
    /// not configured for this resource
    MethodNotAllowed,

    /// A serialized field is not present on the entity
    UnknownField { field: String },

    /// The value encoder has no handler for a field's value kind
    Encoding(EncodeError),

    /// The storage backend failed
    Storage(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::MalformedBody => write!(f, "request body is not valid JSON"),
            SyncError::Validation(errors) => {
                write!(f, "validation failed for {} field(s)", errors.len())
            }
            SyncError::NotFound { resource, id } => {
                write!(f, "{} with id '{}' not found", resource, id)
            }
            SyncError::MethodNotAllowed => write!(f, "method not allowed for this resource"),
            SyncError::UnknownField { field } => {
                write!(f, "serialized field '{}' is not present on the entity", field)
            }
            SyncError::Encoding(e) => write!(f, "{}", e),
            SyncError::Storage(message) => write!(f, "storage error: {}", message),
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyncError::Encoding(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EncodeError> for SyncError {
    fn from(err: EncodeError) -> Self {
        SyncError::Encoding(err)
    }
}

impl From<anyhow::Error> for SyncError {
    fn from(err: anyhow::Error) -> Self {
        SyncError::Storage(err.to_string())
    }
}

/// Body of 500-class responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl SyncError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SyncError::MalformedBody => StatusCode::BAD_REQUEST,
            SyncError::Validation(_) => StatusCode::BAD_REQUEST,
            SyncError::NotFound { .. } => StatusCode::NOT_FOUND,
            SyncError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SyncError::UnknownField { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            SyncError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SyncError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SyncError::MalformedBody => "MALFORMED_BODY",
            SyncError::Validation(_) => "VALIDATION_FAILED",
            SyncError::NotFound { .. } => "NOT_FOUND",
            SyncError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            SyncError::UnknownField { .. } => "UNKNOWN_FIELD",
            SyncError::Encoding(_) => "ENCODING_ERROR",
            SyncError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl IntoResponse for SyncError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.to_string();
        match self {
            // 400 bodies are the field-error mapping verbatim
            SyncError::Validation(errors) => (status, Json(errors)).into_response(),
            SyncError::MalformedBody => {
                let body = json!({ NON_FIELD_ERRORS: [message] });
                (status, Json(body)).into_response()
            }
            // 404/405 responses carry no body
            SyncError::NotFound { .. } | SyncError::MethodNotAllowed => status.into_response(),
            // Configuration and storage defects
            _ => {
                tracing::error!(error = %message, code, "request failed");
                let body = ErrorResponse {
                    code: code.to_string(),
                    message,
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
