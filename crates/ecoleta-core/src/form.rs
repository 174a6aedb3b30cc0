//! Point Form State
//!
//! Everything the registration form holds between first render and submit.
//! Handlers mutate this in place; `payload()` snapshots it for posting.

use crate::models::{Position, UploadedImage};
use crate::payload::PointPayload;

/// Value of the UF/city selects before the user picks anything
pub const UNSELECTED: &str = "0";

/// Entity details typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointFields {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

impl PointFields {
    /// Merge one input into the fields by its `name` attribute.
    /// Returns false when the name is not one of the known fields.
    pub fn set(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "whatsapp" => &mut self.whatsapp,
            _ => {
                log::warn!("[FORM] Ignoring unknown input name {:?}", field);
                return false;
            }
        };
        *slot = value;
        true
    }
}

/// Selected item ids in the order they were picked
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSelection(Vec<u32>);

impl ItemSelection {
    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    /// Remove `id` if present, otherwise append it
    pub fn toggle(&mut self, id: u32) {
        match self.0.iter().position(|selected| *selected == id) {
            Some(index) => {
                self.0.remove(index);
            }
            None => self.0.push(id),
        }
    }

    pub fn ids(&self) -> &[u32] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `3,5` style list sent as the `itens` field
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointForm {
    pub fields: PointFields,
    pub selected_uf: String,
    pub selected_city: String,
    pub selected_position: Position,
    pub selected_items: ItemSelection,
    pub image: Option<UploadedImage>,
}

impl Default for PointForm {
    fn default() -> Self {
        Self {
            fields: PointFields::default(),
            selected_uf: UNSELECTED.to_string(),
            selected_city: UNSELECTED.to_string(),
            selected_position: Position::default(),
            selected_items: ItemSelection::default(),
            image: None,
        }
    }
}

impl PointForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: &str, value: String) -> bool {
        self.fields.set(field, value)
    }

    /// The city is left as is; see DESIGN.md on the UF/city coupling
    pub fn select_uf(&mut self, uf: String) {
        self.selected_uf = uf;
    }

    pub fn select_city(&mut self, city: String) {
        self.selected_city = city;
    }

    pub fn click_map(&mut self, position: Position) {
        self.selected_position = position;
    }

    pub fn toggle_item(&mut self, id: u32) {
        self.selected_items.toggle(id);
    }

    pub fn set_image(&mut self, image: UploadedImage) {
        self.image = Some(image);
    }

    pub fn has_uf(&self) -> bool {
        is_selected(&self.selected_uf)
    }

    /// Snapshot of the form as the multipart fields to post
    pub fn payload(&self) -> PointPayload {
        let mut payload = PointPayload::new();
        payload.push("name", self.fields.name.clone());
        payload.push("email", self.fields.email.clone());
        payload.push("whatsapp", self.fields.whatsapp.clone());
        payload.push("uf", self.selected_uf.clone());
        payload.push("city", self.selected_city.clone());
        payload.push("latitude", coordinate_string(self.selected_position.latitude));
        payload.push("longitude", coordinate_string(self.selected_position.longitude));
        payload.push("itens", self.selected_items.joined());
        if let Some(image) = &self.image {
            payload.set_image(image.clone());
        }
        payload
    }
}

/// False for the `"0"` placeholder option
pub fn is_selected(value: &str) -> bool {
    value != UNSELECTED
}

/// Only `image/*` files are accepted by the dropzone
pub fn is_image_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

/// Render a coordinate the way JavaScript's `String(number)` does for finite
/// values: `11` rather than `11.0`, `-0` as `0`, and exponent notation below
/// `1e-6` or from `1e21` on (`1e-7`, `1.5e+21`).
pub fn coordinate_string(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if value.is_finite() && (magnitude < 1e-6 || magnitude >= 1e21) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }
    value.to_string()
}
