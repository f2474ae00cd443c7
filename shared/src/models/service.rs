//! Service Model

use serde::{Deserialize, Serialize};

/// Storefront service highlight entity (e.g. free delivery, certified stones)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Icon image URL
    pub icon: String,
}
