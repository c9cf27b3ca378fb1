//! REST exposure: axum routes feeding the dispatcher
//!
//! This module owns everything axum-specific. Handlers assemble a
//! [`RequestContext`] from the raw request and hand it to the
//! dispatcher; all routing and status-code decisions live there.
//! A non-empty body that fails to parse as JSON is rejected with 400
//! before any validator runs.

use crate::core::context::RequestContext;
use crate::core::dispatcher::{Dispatcher, SyncResponse};
use crate::core::entity::Entity;
use crate::core::error::SyncError;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;
use tower_http::trace::TraceLayer;

/// Builds the REST surface for one configured resource
pub struct RestExposure;

impl RestExposure {
    /// Build an axum router exposing the resource at
    /// `/{resource}` and `/{resource}/{id}`, plus health checks.
    ///
    /// Verbs outside the sync convention (PUT/DELETE on the
    /// collection, POST on an item) are not routed and get axum's
    /// empty 405 response.
    pub fn build_router<T: Entity>(dispatcher: Dispatcher<T>) -> Router {
        let collection = format!("/{}", T::resource_name());
        let item = format!("/{}/{{id}}", T::resource_name());

        Router::new()
            .route(
                &collection,
                get(collection_handler::<T>).post(collection_handler::<T>),
            )
            .route(
                &item,
                get(item_handler::<T>)
                    .put(item_handler::<T>)
                    .delete(item_handler::<T>),
            )
            .with_state(dispatcher)
            .merge(Self::health_routes())
            .layer(TraceLayer::new_for_http())
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "backline"
        }))
    }
}

async fn collection_handler<T: Entity>(
    State(dispatcher): State<Dispatcher<T>>,
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<SyncResponse, SyncError> {
    let ctx = RequestContext {
        method,
        id: None,
        query,
        headers,
        body: decode_body(&body)?,
    };
    dispatcher.handle(ctx).await
}

async fn item_handler<T: Entity>(
    State(dispatcher): State<Dispatcher<T>>,
    method: Method,
    Path(id): Path<i64>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<SyncResponse, SyncError> {
    let ctx = RequestContext {
        method,
        id: Some(id),
        query,
        headers,
        body: decode_body(&body)?,
    };
    dispatcher.handle(ctx).await
}

fn decode_body(body: &Bytes) -> Result<Option<Value>, SyncError> {
    if body.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|_| SyncError::MalformedBody)
}
