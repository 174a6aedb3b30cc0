//! Create-Point Page Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use ecoleta_core::{session, ApiResult, Item, PointForm, Position};

/// Everything the registration page renders from
#[derive(Clone, Debug, Default, Store)]
pub struct CreatePointState {
    /// Collectible item categories, loaded once
    pub items: Vec<Item>,
    /// UF codes for the state select
    pub ufs: Vec<String>,
    /// Cities of the last fetched UF
    pub cities: Vec<String>,
    /// Map center, from geolocation
    pub initial_position: Position,
    /// User input, posted on submit
    pub form: PointForm,
}

/// Type alias for the store
pub type CreatePointStore = Store<CreatePointState>;

// ========================
// Store Helper Functions
// ========================

// A failed load leaves the field as it was

pub fn store_apply_items(store: &CreatePointStore, loaded: ApiResult<Vec<Item>>) {
    store.items().maybe_update(|items| session::apply_loaded(items, loaded, "items"));
}

pub fn store_apply_ufs(store: &CreatePointStore, loaded: ApiResult<Vec<String>>) {
    store.ufs().maybe_update(|ufs| session::apply_loaded(ufs, loaded, "UFs"));
}

/// Overwrites the list; the selected city is untouched
pub fn store_apply_cities(store: &CreatePointStore, loaded: ApiResult<Vec<String>>, uf: &str) {
    let what = format!("cities for {}", uf);
    store.cities().maybe_update(|cities| session::apply_loaded(cities, loaded, &what));
}

pub fn store_apply_initial_position(store: &CreatePointStore, located: ApiResult<Position>) {
    store
        .initial_position()
        .maybe_update(|position| session::apply_loaded(position, located, "position"));
}
