//! # Backline
//!
//! An HTTP sync adapter exposing entity collections to Backbone-style
//! clients in Rust.
//!
//! ## Features
//!
//! - **Sync Convention**: `POST /collection`, `GET /collection[/id]`,
//!   `PUT /collection/id`, `DELETE /collection/id`, all JSON
//! - **Configuration-Based**: each resource is an explicit config
//!   value (fields, validators, pagination), no inheritance
//! - **Pluggable Validation**: create/update go through validators
//!   that check input and persist the entity
//! - **Ordered Projection**: responses carry exactly the configured
//!   fields, in configured order
//! - **Extensible Encoding**: non-JSON-native field values (dates,
//!   bytes) encode through a registered handler table
//! - **Pagination**: optional page-size slicing over an id-ordered
//!   listing, selected by a 1-based query parameter
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backline::prelude::*;
//!
//! #[derive(Clone)]
//! struct User {
//!     id: i64,
//!     username: String,
//! }
//!
//! impl Entity for User {
//!     fn resource_name() -> &'static str { "users" }
//!     fn id(&self) -> i64 { self.id }
//!     fn field(&self, name: &str) -> Option<FieldValue> {
//!         match name {
//!             "id" => Some(FieldValue::Integer(self.id)),
//!             "username" => Some(self.username.clone().into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let store = InMemoryStore::new();
//! let resource = Resource::builder(store)
//!     .serialize_fields(["id", "username"])
//!     .build();
//!
//! let app = RestExposure::build_router(Dispatcher::new(resource));
//! // serve `app` with axum
//! ```

pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        context::RequestContext,
        dispatcher::{Dispatcher, SyncResponse},
        entity::Entity,
        error::{ErrorResponse, SyncError},
        field::{EncodeError, FieldKind, FieldValue, JsonValueEncoder, ValueEncoder},
        projector::project,
        resource::{Resource, ResourceBuilder},
        store::EntityStore,
        validation::{RuleSet, in_list, positive, required, string_length},
        validator::{FieldErrors, ValidationOutcome, Validator, field_error},
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Server ===
    pub use crate::server::RestExposure;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use axum::Router;
    pub use axum::http::{Method, StatusCode};
    pub use chrono::{DateTime, Utc};
    pub use serde_json::{Value, json};
}
