//! Collaborator Traits
//!
//! Interfaces the form talks to. The browser build plugs in reqwest clients,
//! the Geolocation API and the router; tests plug in in-memory fakes.
//! Futures are not `Send` because browser futures never are.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Item, Position, UploadedImage};
use crate::payload::PointPayload;

/// Internal collection API
#[async_trait(?Send)]
pub trait CollectionApi {
    /// `GET itens`
    async fn list_items(&self) -> ApiResult<Vec<Item>>;

    /// `POST points` as multipart
    async fn create_point(&self, payload: PointPayload) -> ApiResult<()>;
}

/// Brazilian states and municipalities
#[async_trait(?Send)]
pub trait GeographyApi {
    /// Two-letter state codes
    async fn list_ufs(&self) -> ApiResult<Vec<String>>;

    /// Municipality names of one state
    async fn list_cities(&self, uf: &str) -> ApiResult<Vec<String>>;
}

/// One-shot current position query
#[async_trait(?Send)]
pub trait Locator {
    async fn current_position(&self) -> ApiResult<Position>;
}

/// Blocking confirmation and route changes after a submit
pub trait Navigator {
    fn alert(&self, message: &str);
    fn navigate(&self, path: &str);
}

/// An image the user picked, read only when the form is posted
#[async_trait(?Send)]
pub trait ImageSource {
    async fn read_image(&self) -> ApiResult<UploadedImage>;
}
