//! Geolocation
//!
//! One-shot `navigator.geolocation.getCurrentPosition` as a future.

use async_trait::async_trait;
use ecoleta_core::{ApiError, ApiResult, Locator, Position};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::describe_js_error;

#[derive(Deserialize)]
struct GeolocationFix {
    coords: Coordinates,
}

#[derive(Deserialize)]
struct Coordinates {
    latitude: f64,
    longitude: f64,
}

/// `Locator` backed by the browser Geolocation API
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocator;

#[async_trait(?Send)]
impl Locator for BrowserLocator {
    async fn current_position(&self) -> ApiResult<Position> {
        let geolocation = web_sys::window()
            .ok_or_else(|| ApiError::Geolocation("no window".to_string()))?
            .navigator()
            .geolocation()
            .map_err(|e| ApiError::Geolocation(describe_js_error(&e)))?;

        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
                let _ = reject.call1(&JsValue::NULL, &e);
            }
        });
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| ApiError::Geolocation(describe_js_error(&e)))?;

        let fix: GeolocationFix = serde_wasm_bindgen::from_value(value)
            .map_err(|e| ApiError::Geolocation(e.to_string()))?;
        Ok(Position::new(fix.coords.latitude, fix.coords.longitude))
    }
}
