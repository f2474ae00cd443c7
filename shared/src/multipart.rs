//! Multipart payload description
//!
//! Submission encoders produce an ordered list of named parts; the gateway
//! turns it into an HTTP multipart body. Keeping the payload as plain data
//! makes encoders pure functions that tests can inspect field by field.

/// One field of a multipart submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultipartPart {
    /// Plain text field
    Text { name: String, value: String },
    /// Binary file field
    File {
        name: String,
        file_name: String,
        bytes: Vec<u8>,
    },
}

impl MultipartPart {
    /// Field name of this part
    pub fn name(&self) -> &str {
        match self {
            MultipartPart::Text { name, .. } => name,
            MultipartPart::File { name, .. } => name,
        }
    }

    /// Text value, when this is a text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MultipartPart::Text { value, .. } => Some(value),
            MultipartPart::File { .. } => None,
        }
    }
}

/// Ordered multipart submission body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    parts: Vec<MultipartPart>,
}

impl MultipartPayload {
    /// Empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field
    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.parts.push(MultipartPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append a binary file field
    pub fn file(
        &mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> &mut Self {
        self.parts.push(MultipartPart::File {
            name: name.into(),
            file_name: file_name.into(),
            bytes,
        });
        self
    }

    /// All parts in emission order
    pub fn parts(&self) -> &[MultipartPart] {
        &self.parts
    }

    /// Consume into the part list
    pub fn into_parts(self) -> Vec<MultipartPart> {
        self.parts
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the payload has no parts
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// First text value under `name`
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts
            .iter()
            .find(|p| p.name() == name)
            .and_then(|p| p.as_text())
    }

    /// Every text value under `name`, in order (repeated fields)
    pub fn text_values(&self, name: &str) -> Vec<&str> {
        self.parts
            .iter()
            .filter(|p| p.name() == name)
            .filter_map(|p| p.as_text())
            .collect()
    }

    /// Whether a file part named `name` exists
    pub fn has_file(&self, name: &str) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, MultipartPart::File { .. }) && p.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_keep_insertion_order() {
        let mut payload = MultipartPayload::new();
        payload
            .text("name", "Solitaire Ring")
            .file("images[0]", "ring.jpg", vec![0xFF, 0xD8])
            .text("existingImages", "/uploads/a.jpg")
            .text("existingImages", "/uploads/b.jpg");

        let names: Vec<&str> = payload.parts().iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec!["name", "images[0]", "existingImages", "existingImages"]
        );
        assert_eq!(
            payload.text_values("existingImages"),
            vec!["/uploads/a.jpg", "/uploads/b.jpg"]
        );
        assert!(payload.has_file("images[0]"));
        assert_eq!(payload.text_value("name"), Some("Solitaire Ring"));
    }

    #[test]
    fn file_parts_have_no_text_value() {
        let mut payload = MultipartPayload::new();
        payload.file("images[0]", "a.png", vec![1, 2, 3]);
        assert_eq!(payload.text_value("images[0]"), None);
        assert_eq!(payload.len(), 1);
    }
}
