//! Collection Model

use serde::{Deserialize, Serialize};

/// Curated product collection entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image: String,
    /// Member product references (String IDs)
    #[serde(default)]
    pub product_ids: Vec<String>,
}
