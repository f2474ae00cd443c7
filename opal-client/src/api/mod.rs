//! API surface
//!
//! Endpoint wrappers grouped by feature area, all implemented on
//! [`HttpClient`](crate::HttpClient). Every wrapper unwraps the response
//! envelope; error statuses are already mapped by the transport layer.

pub mod auth;
pub mod catalog;
pub mod content;
pub mod products;
pub mod tax;

use crate::{ClientError, ClientResult};
use shared::ApiResponse;

/// Unwrap envelope data, failing when the backend omitted it
pub(crate) fn require_data<T>(response: ApiResponse<T>, what: &str) -> ClientResult<T> {
    response
        .data
        .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {what} data")))
}
