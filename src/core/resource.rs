//! Per-resource configuration

use crate::core::entity::Entity;
use crate::core::field::{JsonValueEncoder, ValueEncoder};
use crate::core::query::DEFAULT_PAGE_PARAM;
use crate::core::store::EntityStore;
use crate::core::validator::Validator;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Immutable configuration for one exposed resource.
///
/// Built once through [`ResourceBuilder`] and read-only afterwards,
/// so it can be shared freely across requests without locks.
pub struct Resource<T: Entity> {
    pub(crate) store: Arc<dyn EntityStore<T>>,
    pub(crate) fields: Vec<String>,
    pub(crate) create_validator: Option<Arc<dyn Validator<T>>>,
    pub(crate) update_validator: Option<Arc<dyn Validator<T>>>,
    pub(crate) page_size: Option<NonZeroUsize>,
    pub(crate) page_param: String,
    pub(crate) encoder: Arc<dyn ValueEncoder>,
}

impl<T: Entity> Resource<T> {
    pub fn builder(store: impl EntityStore<T> + 'static) -> ResourceBuilder<T> {
        ResourceBuilder {
            store: Arc::new(store),
            fields: Vec::new(),
            create_validator: None,
            update_validator: None,
            page_size: None,
            page_param: DEFAULT_PAGE_PARAM.to_string(),
            encoder: None,
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn page_size(&self) -> Option<usize> {
        self.page_size.map(NonZeroUsize::get)
    }

    pub fn page_param(&self) -> &str {
        &self.page_param
    }
}

/// Builder for [`Resource`]
pub struct ResourceBuilder<T: Entity> {
    store: Arc<dyn EntityStore<T>>,
    fields: Vec<String>,
    create_validator: Option<Arc<dyn Validator<T>>>,
    update_validator: Option<Arc<dyn Validator<T>>>,
    page_size: Option<NonZeroUsize>,
    page_param: String,
    encoder: Option<Arc<dyn ValueEncoder>>,
}

impl<T: Entity> ResourceBuilder<T> {
    /// Field names to serialize, in output order
    pub fn serialize_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Validator used for POST; without one, creation returns 405
    pub fn create_validator(mut self, validator: impl Validator<T> + 'static) -> Self {
        self.create_validator = Some(Arc::new(validator));
        self
    }

    /// Validator used for PUT; without one, updates return 405
    pub fn update_validator(mut self, validator: impl Validator<T> + 'static) -> Self {
        self.update_validator = Some(Arc::new(validator));
        self
    }

    /// Enable pagination with the given page size
    pub fn page_size(mut self, size: NonZeroUsize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Query parameter carrying the page number (default "p")
    pub fn page_param(mut self, name: impl Into<String>) -> Self {
        self.page_param = name.into();
        self
    }

    /// Replace the default value encoder
    pub fn encoder(mut self, encoder: impl ValueEncoder + 'static) -> Self {
        self.encoder = Some(Arc::new(encoder));
        self
    }

    pub fn build(self) -> Resource<T> {
        Resource {
            store: self.store,
            fields: self.fields,
            create_validator: self.create_validator,
            update_validator: self.update_validator,
            page_size: self.page_size,
            page_param: self.page_param,
            encoder: self
                .encoder
                .unwrap_or_else(|| Arc::new(JsonValueEncoder::new())),
        }
    }
}
