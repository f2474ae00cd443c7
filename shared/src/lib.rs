//! Shared types for the Opal admin suite
//!
//! Domain models, the API response envelope, pagination and list-query
//! types, and the multipart payload description used by both the submission
//! encoders and the gateway client.

pub mod client;
pub mod models;
pub mod multipart;
pub mod query;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use multipart::{MultipartPart, MultipartPayload};
pub use query::ListQuery;
pub use response::{ApiResponse, PaginatedData, Pagination};
