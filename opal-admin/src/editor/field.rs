//! Editor field changes
//!
//! Every edit the UI can make is one of these values, applied through
//! `ProductEditor::apply`. Nothing else mutates the draft.

use rust_decimal::Decimal;
use shared::models::{Gender, StockStatus};

use super::images::PendingUpload;
use super::variants::VariantKey;

/// A single edit to the product draft
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    Name(String),
    Slug(String),
    ShortDescription(String),
    Description(String),
    /// Picking a category also resets the subcategory and refetches properties
    Category { id: String, name: String },
    Subcategory { id: String, name: String },
    Gender(Option<Gender>),
    RegularPrice(Option<Decimal>),
    SalePrice(Option<Decimal>),
    TaxClass(String),
    Sku(String),
    StockQuantity(String),
    LowStockThreshold(String),
    StockStatus(StockStatus),
    ManageStock(bool),
    DeliveryDays(String),
    FreeShipping(bool),

    AddImage(PendingUpload),
    RemoveImage(usize),
    SetFeaturedImage(usize),

    /// Select a term for a category property by title
    Property { title: String, value: String },

    AddAttribute,
    RemoveAttribute(usize),
    AttributeName(usize, String),
    AttributeValue(usize, String),

    AddVariant,
    RemoveVariant(VariantKey),
    Variant(VariantKey, VariantField),
}

/// An edit scoped to one variant row
#[derive(Debug, Clone, PartialEq)]
pub enum VariantField {
    Size(String),
    Color(String),
    Shape(String),
    Carat(String),
    AdditionalPrice(Option<Decimal>),
    ExtraCost(Option<Decimal>),
    StockCount(String),
    Sku(String),
    /// `None` clears the variant image
    Image(Option<PendingUpload>),
    AddAttribute,
    RemoveAttribute(usize),
    AttributeName(usize, String),
    AttributeValue(usize, String),
}
