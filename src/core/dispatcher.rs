//! Request dispatch and response construction
//!
//! The dispatcher maps an incoming verb plus optional item identifier
//! into one of five operations and builds the JSON response:
//!
//! | Verb   | Identifier | Operation |
//! |--------|------------|-----------|
//! | GET    | no         | list (paginated if configured) |
//! | GET    | yes        | fetch-one |
//! | POST   | no         | create |
//! | PUT    | yes        | update |
//! | DELETE | yes        | delete |
//!
//! Any other combination fails with 405. Mutations run only through
//! the resource's validators; the dispatcher itself never writes to
//! storage except for deletion.

use crate::core::context::RequestContext;
use crate::core::entity::Entity;
use crate::core::error::SyncError;
use crate::core::projector::{project, to_json};
use crate::core::resource::Resource;
use crate::core::validator::ValidationOutcome;
use crate::core::{query, store};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use std::sync::Arc;

/// Status code plus optional JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct SyncResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl SyncResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: Some(body),
        }
    }

    pub fn created(body: Value) -> Self {
        Self {
            status: StatusCode::CREATED,
            body: Some(body),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            body: None,
        }
    }
}

impl IntoResponse for SyncResponse {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}

/// The request/response orchestrator for one configured resource
pub struct Dispatcher<T: Entity> {
    resource: Arc<Resource<T>>,
}

impl<T: Entity> Clone for Dispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
        }
    }
}

impl<T: Entity> Dispatcher<T> {
    pub fn new(resource: Resource<T>) -> Self {
        Self {
            resource: Arc::new(resource),
        }
    }

    /// Route one request to its operation and build the response
    pub async fn handle(&self, ctx: RequestContext) -> Result<SyncResponse, SyncError> {
        tracing::debug!(
            resource = T::resource_name(),
            method = %ctx.method,
            id = ?ctx.id,
            "dispatching request"
        );
        match (ctx.method.as_str(), ctx.id) {
            ("GET", None) => self.list(&ctx).await,
            ("GET", Some(id)) => self.fetch_one(id).await,
            ("POST", None) => self.create(&ctx).await,
            ("PUT", Some(id)) => self.update(id, &ctx).await,
            ("DELETE", Some(id)) => self.delete(id).await,
            _ => Err(SyncError::MethodNotAllowed),
        }
    }

    /// GET /resource — the full collection, ordered by ascending id,
    /// sliced to the configured page when pagination is enabled
    async fn list(&self, ctx: &RequestContext) -> Result<SyncResponse, SyncError> {
        let mut items = store::ordered_by_id(self.resource.store.all().await?);

        if let Some(size) = self.resource.page_size() {
            let page = query::page_number(&ctx.query, &self.resource.page_param);
            items = store::slice(items, query::page_offset(page, size), size);
        }

        let rows = items
            .iter()
            .map(|entity| self.project_entity(entity))
            .collect::<Result<Vec<Value>, SyncError>>()?;

        Ok(SyncResponse::ok(Value::Array(rows)))
    }

    /// GET /resource/{id}
    async fn fetch_one(&self, id: i64) -> Result<SyncResponse, SyncError> {
        let entity = self.lookup(id).await?;
        Ok(SyncResponse::ok(self.project_entity(&entity)?))
    }

    /// POST /resource — requires a create validator
    async fn create(&self, ctx: &RequestContext) -> Result<SyncResponse, SyncError> {
        let validator = self
            .resource
            .create_validator
            .as_ref()
            .ok_or(SyncError::MethodNotAllowed)?;
        let body = ctx.body.as_ref().ok_or(SyncError::MalformedBody)?;

        match validator.validate_and_save(body, None, ctx).await? {
            ValidationOutcome::Saved(entity) => {
                tracing::info!(resource = T::resource_name(), id = entity.id(), "created entity");
                Ok(SyncResponse::created(self.project_entity(&entity)?))
            }
            ValidationOutcome::Invalid(errors) => Err(SyncError::Validation(errors)),
        }
    }

    /// PUT /resource/{id} — requires an update validator
    async fn update(&self, id: i64, ctx: &RequestContext) -> Result<SyncResponse, SyncError> {
        let validator = self
            .resource
            .update_validator
            .as_ref()
            .ok_or(SyncError::MethodNotAllowed)?;
        let body = ctx.body.as_ref().ok_or(SyncError::MalformedBody)?;
        let existing = self.lookup(id).await?;

        match validator.validate_and_save(body, Some(&existing), ctx).await? {
            ValidationOutcome::Saved(entity) => {
                tracing::info!(resource = T::resource_name(), id = entity.id(), "updated entity");
                Ok(SyncResponse::ok(self.project_entity(&entity)?))
            }
            ValidationOutcome::Invalid(errors) => Err(SyncError::Validation(errors)),
        }
    }

    /// DELETE /resource/{id}
    async fn delete(&self, id: i64) -> Result<SyncResponse, SyncError> {
        self.lookup(id).await?;
        self.resource.store.delete(id).await?;
        tracing::info!(resource = T::resource_name(), id, "deleted entity");
        Ok(SyncResponse::no_content())
    }

    async fn lookup(&self, id: i64) -> Result<T, SyncError> {
        self.resource
            .store
            .get(id)
            .await?
            .ok_or(SyncError::NotFound {
                resource: T::resource_name(),
                id,
            })
    }

    fn project_entity(&self, entity: &T) -> Result<Value, SyncError> {
        let projection = project(entity, &self.resource.fields, self.resource.encoder.as_ref())?;
        Ok(to_json(projection))
    }
}
