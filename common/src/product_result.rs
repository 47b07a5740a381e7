//! Records returned by the product search endpoint.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub score: f64,
    pub metadata: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub size: String,
    pub color: String,
    pub image_id: String,
}

impl Product {
    /// Second line of the product card, e.g. `Size M, blue`.
    pub fn size_and_color_label(&self) -> String {
        format!("Size {}, {}", self.size.to_uppercase(), self.color)
    }

    /// Images are served from the site root by id.
    pub fn image_path(&self) -> String {
        format!("/{}", self.image_id.trim_start_matches('/'))
    }
}
