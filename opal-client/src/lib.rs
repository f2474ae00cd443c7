//! Opal Client - HTTP client for the Opal storefront backend
//!
//! Provides network-based HTTP calls to the admin REST API.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod multipart;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{AdminInfo, ApiResponse, CurrentAdminResponse, LoginResponse};
