//! Banner Model

use serde::{Deserialize, Serialize};

/// Homepage banner entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub image: String,
    /// Target URL when the banner is clicked
    #[serde(default)]
    pub link: String,
    /// Display slot, ascending
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub active: bool,
}
