//! Review Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer review entity
///
/// Reviews are created storefront-side; the admin only moderates them, so
/// there is no create/update payload. Approval flips through a dedicated
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    /// Stars, 1 to 5
    pub rating: u8,
    #[serde(default)]
    pub body: String,
    /// Reviewed product reference (String ID)
    pub product_id: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Approval flip payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewApproval {
    pub approved: bool,
}
