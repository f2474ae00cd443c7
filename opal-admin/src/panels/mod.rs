//! Admin panels
//!
//! One panel per feature area, mirroring the gateway's API groups. A panel
//! owns its list state and validates its own form drafts; network calls
//! borrow the workspace HTTP client so a login swap reaches every panel.

pub mod catalog;
pub mod content;
pub mod products;
pub mod tax;

pub use catalog::{
    AttributeForm, AttributesPanel, CategoriesPanel, CategoryForm, SubcategoriesPanel,
    SubcategoryForm,
};
pub use content::{
    BannerForm, BannersPanel, CollectionForm, CollectionsPanel, FaqForm, FaqsPanel, InstagramForm,
    InstagramPanel, ReviewsPanel, ServiceForm, ServicesPanel,
};
pub use products::ProductsPanel;
pub use tax::{TaxClassForm, TaxClassesPanel, TaxOptionForm, TaxOptionsPanel};

use shared::MultipartPayload;

use crate::editor::ImageSource;

/// Append an image field: pending uploads as the file, kept URLs as text
pub(crate) fn image_field(payload: &mut MultipartPayload, name: &str, source: &ImageSource) {
    match source {
        ImageSource::Pending(upload) => {
            payload.file(name, upload.file_name.as_str(), upload.bytes.clone());
        }
        ImageSource::Existing(url) => {
            payload.text(name, url.as_str());
        }
    }
}
