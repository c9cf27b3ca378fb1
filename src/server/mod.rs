//! HTTP exposure of configured resources

pub mod rest;

pub use rest::RestExposure;
