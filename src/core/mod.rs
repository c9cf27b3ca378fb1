//! Core module containing the dispatch, projection, and validation
//! machinery

pub mod context;
pub mod dispatcher;
pub mod entity;
pub mod error;
pub mod field;
pub mod projector;
pub mod query;
pub mod resource;
pub mod store;
pub mod validation;
pub mod validator;

pub use context::RequestContext;
pub use dispatcher::{Dispatcher, SyncResponse};
pub use entity::Entity;
pub use error::{ErrorResponse, SyncError};
pub use field::{EncodeError, FieldKind, FieldValue, JsonValueEncoder, ValueEncoder};
pub use projector::project;
pub use resource::{Resource, ResourceBuilder};
pub use store::EntityStore;
pub use validator::{FieldErrors, ValidationOutcome, Validator};
