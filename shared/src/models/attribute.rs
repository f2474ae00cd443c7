//! Attribute Model
//!
//! Category-scoped property schema. Each definition drives one dropdown in
//! the product editor; terms are the selectable values.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Attribute term (embedded in AttributeDefinition)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeTerm {
    pub value: String,
    /// Swatch image URL, when the term is visual
    pub image: Option<String>,
}

/// Attribute definition entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub id: Option<String>,

    // 所属分类
    /// Owning category reference (String ID)
    #[serde(default)]
    pub category_id: String,

    /// Dropdown label shown in the editor
    pub title: String,

    /// Embedded terms, in display order
    #[serde(default)]
    pub terms: Vec<AttributeTerm>,
}

/// Create attribute definition payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AttributeDefinitionCreate {
    #[validate(length(min = 1, message = "category is required"))]
    pub category_id: String,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub terms: Option<Vec<AttributeTerm>>,
}

/// Update attribute definition payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AttributeDefinitionUpdate {
    pub category_id: Option<String>,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: Option<String>,
    pub terms: Option<Vec<AttributeTerm>>,
}
