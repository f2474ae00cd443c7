//! Category Model
//!
//! Category forms carry an image, so create/update travel as multipart built
//! by the panel rather than a JSON payload.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::product::Gender;

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Image URL under the upload root
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub gender: Gender,
}

/// Subcategory entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    /// Parent category reference (String ID)
    pub category_id: String,
    #[serde(default, rename = "categoryName")]
    pub category_name: String,
}

/// Create subcategory payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubcategoryCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category_id: String,
}

/// Update subcategory payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubcategoryUpdate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    pub category_id: Option<String>,
}
