//! UI Components
//!
//! Reusable Leptos components.

mod dropzone;
mod geo_selects;
mod items_grid;
mod map_picker;

pub use dropzone::Dropzone;
pub use geo_selects::{CitySelect, UfSelect};
pub use items_grid::ItemsGrid;
pub use map_picker::MapPicker;
