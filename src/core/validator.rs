//! Mutation hook: the pluggable validate-and-persist capability

use crate::core::context::RequestContext;
use crate::core::entity::Entity;
use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;

/// Field name → human-readable error messages, returned verbatim as
/// the body of a 400 response
pub type FieldErrors = IndexMap<String, Vec<String>>;

/// Key used for errors that are not attached to a single field
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Build a one-field error mapping
pub fn field_error(field: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.to_string(), vec![message.to_string()]);
    errors
}

/// Result of running a validator: either a persisted entity or the
/// full set of field errors. No partial success.
#[derive(Debug, Clone)]
pub enum ValidationOutcome<T> {
    Saved(T),
    Invalid(FieldErrors),
}

/// Validates decoded JSON input and persists the resulting entity.
///
/// On success the validator is responsible for writing to storage
/// (creating a fresh entity, or modifying `existing` for updates) and
/// returning the persisted result; the dispatcher never writes to
/// storage outside this hook. The request context is passed in
/// explicitly so validators can read caller identity or other ambient
/// request information.
#[async_trait]
pub trait Validator<T: Entity>: Send + Sync {
    async fn validate_and_save(
        &self,
        body: &Value,
        existing: Option<&T>,
        ctx: &RequestContext,
    ) -> Result<ValidationOutcome<T>>;
}
