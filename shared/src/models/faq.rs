//! FAQ Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// FAQ entry entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    /// Display slot, ascending
    #[serde(default)]
    pub position: i32,
}

/// Create FAQ payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FaqCreate {
    #[validate(length(min = 1, message = "question is required"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer is required"))]
    pub answer: String,
    pub position: Option<i32>,
}

/// Update FAQ payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FaqUpdate {
    #[validate(length(min = 1, message = "question is required"))]
    pub question: Option<String>,
    #[validate(length(min = 1, message = "answer is required"))]
    pub answer: Option<String>,
    pub position: Option<i32>,
}
