//! Map Picker Component
//!
//! Leaflet map: follows `center`, draws a marker at `marker`, reports clicks.

use leptos::prelude::*;

use ecoleta_core::Position;
use crate::browser::{self, leaflet::MapHandle};

#[component]
pub fn MapPicker(
    #[prop(into)] center: Signal<Position>,
    #[prop(into)] marker: Signal<Position>,
    #[prop(into)] on_click: Callback<Position>,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    // Dropped with the component, which removes the map
    let handle = StoredValue::new_local(None::<MapHandle>);

    // Mount once the div exists
    Effect::new(move |_| {
        let Some(element) = container.get() else { return };
        if handle.with_value(Option::is_some) {
            return;
        }
        let mounted = MapHandle::mount(
            &element,
            center.get_untracked(),
            marker.get_untracked(),
            on_click,
        );
        match mounted {
            Ok(map) => handle.set_value(Some(map)),
            Err(e) => log::error!("[MapPicker] {}", browser::describe_js_error(&e)),
        }
    });

    // Recenter when geolocation resolves
    Effect::new(move |_| {
        let center = center.get();
        handle.with_value(|map| {
            if let Some(Err(e)) = map.as_ref().map(|map| map.center_on(center)) {
                log::error!("[MapPicker] {}", browser::describe_js_error(&e));
            }
        });
    });

    Effect::new(move |_| {
        let position = marker.get();
        handle.with_value(|map| {
            if let Some(Err(e)) = map.as_ref().map(|map| map.move_marker(position)) {
                log::error!("[MapPicker] {}", browser::describe_js_error(&e));
            }
        });
    });

    view! { <div id="map" class="map" node_ref=container></div> }
}
