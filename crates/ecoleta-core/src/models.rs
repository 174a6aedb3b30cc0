//! Core Models
//!
//! Data structures exchanged with the collection API and the IBGE service.

use serde::{Deserialize, Serialize};

/// Collectible item category (matches backend `GET /itens`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}

/// IBGE state entry, only the two-letter code is used
#[derive(Debug, Clone, Deserialize)]
pub struct IbgeUf {
    pub sigla: String,
}

/// IBGE municipality entry
#[derive(Debug, Clone, Deserialize)]
pub struct IbgeCity {
    pub nome: String,
}

/// A `[latitude, longitude]` pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl From<[f64; 2]> for Position {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self { latitude, longitude }
    }
}

/// Image picked in the dropzone, sent as the `image` part on submit
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
