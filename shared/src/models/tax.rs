//! Tax Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Tax class entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxClass {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Create tax class payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaxClassCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub description: Option<String>,
}

/// Update tax class payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaxClassUpdate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Location tax option entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxOption {
    pub id: String,
    /// Owning tax class reference (String ID)
    pub tax_class_id: String,
    /// ISO country code (e.g. "US"); "*" matches any
    pub country: String,
    /// State/province code; empty matches any
    #[serde(default)]
    pub state: String,
    /// Rate in percent (e.g. 8.25 = 8.25%)
    pub rate: Decimal,
    /// Whether shipping cost is taxed at this rate
    #[serde(default)]
    pub shipping_taxed: bool,
    /// Lower applies first when several options match
    #[serde(default)]
    pub priority: i32,
}

/// Create tax option payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaxOptionCreate {
    #[validate(length(min = 1, message = "tax class is required"))]
    pub tax_class_id: String,
    #[validate(length(min = 1, message = "country is required"))]
    pub country: String,
    pub state: Option<String>,
    pub rate: Decimal,
    pub shipping_taxed: Option<bool>,
    pub priority: Option<i32>,
}

/// Update tax option payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaxOptionUpdate {
    #[validate(length(min = 1, message = "country is required"))]
    pub country: Option<String>,
    pub state: Option<String>,
    pub rate: Option<Decimal>,
    pub shipping_taxed: Option<bool>,
    pub priority: Option<i32>,
}
