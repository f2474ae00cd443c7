//! Image attachments
//!
//! Files are validated when picked, then held in memory until submit.
//! Preview handles are session tokens; replacing or clearing an attachment
//! drops the old handle with it.

use thiserror::Error;
use uuid::Uuid;

/// 支持的图片格式
pub const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// 最大文件大小 (5MB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Unsupported format '{0}'. Supported: png, jpg, jpeg, webp")]
    UnsupportedFormat(String),

    #[error("File too large. Maximum size is {0}MB")]
    TooLarge(usize),

    #[error("Invalid image: {0}")]
    Invalid(String),
}

/// A file picked for upload, validated and held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Session preview token
    pub preview: String,
}

impl PendingUpload {
    /// Validate picked file bytes and mint a preview handle
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ImageError> {
        let file_name = file_name.into();

        let ext = std::path::Path::new(&file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();
        if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
            return Err(ImageError::UnsupportedFormat(ext));
        }

        if bytes.len() > MAX_FILE_SIZE {
            return Err(ImageError::TooLarge(MAX_FILE_SIZE / 1024 / 1024));
        }

        // Reject files whose content is not actually an image
        image::load_from_memory(&bytes).map_err(|e| ImageError::Invalid(e.to_string()))?;

        Ok(Self {
            file_name,
            bytes,
            preview: Uuid::new_v4().to_string(),
        })
    }
}

/// Where an image slot's data lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Picked this session, not yet uploaded
    Pending(PendingUpload),
    /// Already on the server, referenced by URL
    Existing(String),
}

/// One entry of the product image list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    pub source: ImageSource,
    pub featured: bool,
}

impl ImageSlot {
    pub fn pending(upload: PendingUpload) -> Self {
        Self {
            source: ImageSource::Pending(upload),
            featured: false,
        }
    }

    pub fn existing(url: impl Into<String>, featured: bool) -> Self {
        Self {
            source: ImageSource::Existing(url.into()),
            featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 RGBA PNG
    pub(crate) const TINY_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
        0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
        0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78,
        0x9C, 0x63, 0xF8, 0xCF, 0xC0, 0xF0, 0x1F, 0x00, 0x05, 0x00, 0x01, 0xFF, 0x89, 0x99,
        0x3D, 0x1D, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn accepts_valid_png_and_mints_preview() {
        let upload = PendingUpload::new("ring.png", TINY_PNG.to_vec()).unwrap();
        assert_eq!(upload.file_name, "ring.png");
        assert!(!upload.preview.is_empty());
    }

    #[test]
    fn distinct_uploads_get_distinct_previews() {
        let a = PendingUpload::new("a.png", TINY_PNG.to_vec()).unwrap();
        let b = PendingUpload::new("b.png", TINY_PNG.to_vec()).unwrap();
        assert_ne!(a.preview, b.preview);
    }

    #[test]
    fn rejects_unsupported_extension() {
        let err = PendingUpload::new("ring.gif", TINY_PNG.to_vec()).unwrap_err();
        assert!(matches!(err, ImageError::UnsupportedFormat(ext) if ext == "gif"));
    }

    #[test]
    fn rejects_oversized_file() {
        let err = PendingUpload::new("big.png", vec![0u8; MAX_FILE_SIZE + 1]).unwrap_err();
        assert!(matches!(err, ImageError::TooLarge(5)));
    }

    #[test]
    fn rejects_non_image_bytes() {
        let err = PendingUpload::new("fake.png", b"not an image".to_vec()).unwrap_err();
        assert!(matches!(err, ImageError::Invalid(_)));
    }
}
