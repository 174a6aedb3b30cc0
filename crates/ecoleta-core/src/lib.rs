//! Ecoleta Core
//!
//! Platform-independent half of the collection-point registration form:
//! form state, the multipart payload, typed errors, configuration and the
//! HTTP clients. The Leptos frontend owns rendering and browser bindings.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod models;
pub mod payload;
pub mod session;

#[cfg(test)]
mod tests;

pub use api::{CollectionApi, GeographyApi, ImageSource, Locator, Navigator};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use form::{ItemSelection, PointFields, PointForm, UNSELECTED};
pub use http::{HttpCollectionApi, IbgeClient};
pub use models::{Item, Position, UploadedImage};
pub use payload::PointPayload;
