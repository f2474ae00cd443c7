//! Auth types shared between the gateway and the panels
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

// Re-export ApiResponse from response module
pub use crate::response::ApiResponse;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminInfo,
}

/// Admin account information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Current admin response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdminResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}
