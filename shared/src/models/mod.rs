//! Data models
//!
//! Shared between the admin panels and the API client. Entities mirror the
//! backend wire shapes; relation and timestamp fields keep their camelCase
//! wire names via serde renames. All IDs are `String`.

pub mod attribute;
pub mod banner;
pub mod category;
pub mod collection;
pub mod faq;
pub mod instagram;
pub mod product;
pub mod review;
pub mod service;
pub mod tax;

// Re-exports
pub use attribute::*;
pub use banner::*;
pub use category::*;
pub use collection::*;
pub use faq::*;
pub use instagram::*;
pub use product::*;
pub use review::*;
pub use service::*;
pub use tax::*;
