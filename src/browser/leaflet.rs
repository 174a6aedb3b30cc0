//! Leaflet Bindings
//!
//! Thin wrappers over the global `L` namespace loaded by index.html.

use ecoleta_core::Position;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub const ZOOM: u8 = 15;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const ATTRIBUTION: &str =
    "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors";

/// Delay before recomputing the map size once the form has laid out
const RESIZE_DELAY_MS: u32 = 100;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn create_map(element: &web_sys::HtmlElement) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function) -> LeafletMap;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &LeafletMap);

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap) -> LeafletMap;

    #[derive(Clone, Debug)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn create_tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_tile_layer_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[derive(Clone, Debug)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn create_marker(lat_lng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Marker, lat_lng: &JsValue) -> Marker;
}

#[derive(Serialize)]
struct TileOptions {
    attribution: &'static str,
}

#[derive(Deserialize)]
struct MapClick {
    latlng: LatLng,
}

#[derive(Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

fn lat_lng(position: Position) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&position.as_array())?)
}

/// A mounted map with its single marker. Dropping it removes the map.
pub struct MapHandle {
    map: LeafletMap,
    marker: Marker,
    _on_click: Closure<dyn FnMut(JsValue)>,
    _resize: Timeout,
}

impl MapHandle {
    /// Create the map inside `element`, centered on `center` with the marker at `marker`
    pub fn mount(
        element: &web_sys::HtmlElement,
        center: Position,
        marker: Position,
        on_click: Callback<Position>,
    ) -> Result<Self, JsValue> {
        let map = create_map(element);
        map.set_view(&lat_lng(center)?, ZOOM);

        let options = serde_wasm_bindgen::to_value(&TileOptions { attribution: ATTRIBUTION })?;
        create_tile_layer(TILE_URL, &options).add_tile_layer_to(&map);

        let marker = create_marker(&lat_lng(marker)?).add_marker_to(&map);

        let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            match serde_wasm_bindgen::from_value::<MapClick>(event) {
                Ok(click) => on_click.run(Position::new(click.latlng.lat, click.latlng.lng)),
                Err(e) => log::error!("[MAP] Unreadable click event: {}", e),
            }
        });
        map.on("click", handler.as_ref().unchecked_ref());

        let resize = map.clone();
        let resize = Timeout::new(RESIZE_DELAY_MS, move || resize.invalidate_size());

        log::debug!("[MAP] Mounted at [{}, {}]", center.latitude, center.longitude);
        Ok(Self { map, marker, _on_click: handler, _resize: resize })
    }

    pub fn center_on(&self, center: Position) -> Result<(), JsValue> {
        self.map.set_view(&lat_lng(center)?, ZOOM);
        Ok(())
    }

    pub fn move_marker(&self, position: Position) -> Result<(), JsValue> {
        self.marker.set_lat_lng(&lat_lng(position)?);
        Ok(())
    }
}

impl Drop for MapHandle {
    fn drop(&mut self) {
        // Unbinds the click handler before the closure is freed
        self.map.remove();
        log::debug!("[MAP] Removed");
    }
}
