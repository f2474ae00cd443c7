//! Instagram Model

use serde::{Deserialize, Serialize};

/// Instagram feed tile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramPost {
    pub id: String,
    pub image: String,
    /// Post URL on Instagram
    #[serde(default)]
    pub link: String,
    /// Display slot, ascending
    #[serde(default)]
    pub position: i32,
}
