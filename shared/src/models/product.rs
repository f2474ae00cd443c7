//! Product Model

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product gender audience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Women,
    Men,
    #[default]
    Both,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Women => "women",
            Gender::Men => "men",
            Gender::Both => "both",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stock availability state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
    OnBackorder,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::OutOfStock => "out_of_stock",
            StockStatus::OnBackorder => "on_backorder",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form name/value pair (product and variant custom attributes)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AttributePair {
    pub name: String,
    pub value: String,
}

/// Uploaded product image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    #[serde(default)]
    pub featured: bool,
}

/// Server-side product variant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryDetail {
    pub id: String,
    pub size: String,
    /// Metal/color name (e.g. "yellow gold")
    pub color: String,
    pub shape: Option<String>,
    pub carat: Option<String>,
    /// Added on top of the product regular price
    #[serde(default)]
    pub additional_price: Option<Decimal>,
    #[serde(default)]
    pub extra_cost: Option<Decimal>,
    #[serde(default)]
    pub stock_count: i64,
    #[serde(default)]
    pub sku: String,
    pub image: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributePair>,
}

/// Product entity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    /// Category reference (String ID)
    pub category_id: String,
    #[serde(default, rename = "categoryName")]
    pub category_name: String,
    pub subcategory_id: Option<String>,
    #[serde(default, rename = "subcategoryName")]
    pub subcategory_name: Option<String>,
    #[serde(default)]
    pub gender: Gender,
    pub regular_price: Option<Decimal>,
    pub sale_price: Option<Decimal>,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub stock_quantity: i64,
    pub low_stock_threshold: Option<i64>,
    #[serde(default)]
    pub stock_status: StockStatus,
    #[serde(default)]
    pub manage_stock: bool,
    /// Tax class reference (String ID)
    pub tax_class: Option<String>,
    pub delivery_days: Option<i32>,
    #[serde(default)]
    pub free_shipping: bool,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Variants, in display order
    #[serde(default, rename = "inventoryDetails")]
    pub inventory_details: Vec<InventoryDetail>,
    #[serde(default)]
    pub attributes: Vec<AttributePair>,
    /// Selected term per category property title
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}
