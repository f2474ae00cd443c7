//! Product editor
//!
//! Owns the draft being created or edited. Every mutation flows through
//! [`ProductEditor::apply`], so the draft has exactly one writer; section
//! views hold no state of their own. Edits that need the network hand an
//! [`EditorEffect`] back to the caller instead of performing I/O here.

pub mod draft;
pub mod encode;
pub mod field;
pub mod images;
pub mod properties;
pub mod sections;
pub mod variants;

pub use draft::ProductDraft;
pub use encode::EncodeMode;
pub use field::{FieldChange, VariantField};
pub use images::{ImageError, ImageSlot, ImageSource, PendingUpload};
pub use sections::EditorSection;
pub use variants::{Variant, VariantKey};

use shared::models::{AttributeDefinition, Product};
use shared::MultipartPayload;

/// Whether the editor creates a new product or updates an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit { product_id: String },
}

/// Asynchronous work requested by an edit, to be run by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEffect {
    /// Fetch attribute definitions for the picked category. The response
    /// must come back through `merge_property_definitions` with the same
    /// generation so late answers for an older category are dropped.
    FetchProperties { category_id: String, generation: u64 },
}

/// State owner for the product form
#[derive(Debug, Clone)]
pub struct ProductEditor {
    draft: ProductDraft,
    mode: EditorMode,
    /// Next client-local variant number, never reused within the session
    next_draft_key: u64,
    /// Bumped per category change; stale property responses carry an older one
    property_generation: u64,
    last_error: Option<String>,
}

impl Default for ProductEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductEditor {
    /// Editor for a new, empty product
    pub fn new() -> Self {
        Self {
            draft: ProductDraft::default(),
            mode: EditorMode::Create,
            next_draft_key: 1,
            property_generation: 0,
            last_error: None,
        }
    }

    /// Editor hydrated from a fetched product, with the initial effects to run
    pub fn from_product(product: Product) -> (Self, Vec<EditorEffect>) {
        let mut editor = Self::new();
        let effects = editor.hydrate(product);
        (editor, effects)
    }

    /// Replace the draft from a fresh server record (edit flow). Re-requests
    /// category properties so the rendered set matches the product.
    pub fn hydrate(&mut self, product: Product) -> Vec<EditorEffect> {
        self.mode = EditorMode::Edit {
            product_id: product.id.clone(),
        };
        self.draft = ProductDraft::from_product(product);
        self.last_error = None;
        self.request_properties()
    }

    /// Clear back to an empty create form. Draft variant numbering keeps
    /// counting so identifiers stay unique across resets.
    pub fn reset(&mut self) {
        self.draft = ProductDraft::default();
        self.mode = EditorMode::Create;
        self.last_error = None;
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Encode the draft for whichever endpoint this editor targets
    pub fn payload(&self) -> MultipartPayload {
        let mode = match self.mode {
            EditorMode::Create => EncodeMode::Create,
            EditorMode::Edit { .. } => EncodeMode::Update,
        };
        encode::encode(&self.draft, mode)
    }

    /// Apply one edit. Returns the effects the caller must run.
    pub fn apply(&mut self, change: FieldChange) -> Vec<EditorEffect> {
        match change {
            FieldChange::Name(v) => self.draft.name = v,
            FieldChange::Slug(v) => self.draft.slug = v,
            FieldChange::ShortDescription(v) => self.draft.short_description = v,
            FieldChange::Description(v) => self.draft.description = v,
            FieldChange::Category { id, name } => {
                self.draft.category_id = id;
                self.draft.category_name = name;
                // a subcategory is only valid under its parent category
                self.draft.subcategory_id.clear();
                self.draft.subcategory_name.clear();
                return self.request_properties();
            }
            FieldChange::Subcategory { id, name } => {
                self.draft.subcategory_id = id;
                self.draft.subcategory_name = name;
            }
            FieldChange::Gender(v) => self.draft.gender = v,
            FieldChange::RegularPrice(v) => self.draft.regular_price = v,
            FieldChange::SalePrice(v) => self.draft.sale_price = v,
            FieldChange::TaxClass(v) => self.draft.tax_class = v,
            FieldChange::Sku(v) => self.draft.sku = v,
            FieldChange::StockQuantity(v) => self.draft.stock_quantity = v,
            FieldChange::LowStockThreshold(v) => self.draft.low_stock_threshold = v,
            FieldChange::StockStatus(v) => self.draft.stock_status = v,
            FieldChange::ManageStock(v) => self.draft.manage_stock = v,
            FieldChange::DeliveryDays(v) => self.draft.delivery_days = v,
            FieldChange::FreeShipping(v) => self.draft.free_shipping = v,
            FieldChange::AddImage(upload) => self.draft.add_image(upload),
            FieldChange::RemoveImage(index) => self.draft.remove_image(index),
            FieldChange::SetFeaturedImage(index) => self.draft.set_featured(index),
            FieldChange::Property { title, value } => {
                self.draft.properties.insert(title, value);
            }
            FieldChange::AddAttribute => self.draft.add_attribute(),
            FieldChange::RemoveAttribute(index) => self.draft.remove_attribute(index),
            FieldChange::AttributeName(index, v) => {
                if let Some(pair) = self.draft.attributes.get_mut(index) {
                    pair.name = v;
                }
            }
            FieldChange::AttributeValue(index, v) => {
                if let Some(pair) = self.draft.attributes.get_mut(index) {
                    pair.value = v;
                }
            }
            FieldChange::AddVariant => {
                let key = VariantKey::Draft(self.next_draft_key);
                self.next_draft_key += 1;
                self.draft.add_variant(key);
            }
            FieldChange::RemoveVariant(key) => self.draft.remove_variant(&key),
            FieldChange::Variant(key, field) => {
                // missing key is a silent no-op
                if let Some(variant) = self.draft.variant_mut(&key) {
                    apply_variant(variant, field);
                }
            }
        }
        Vec::new()
    }

    /// Install a property fetch response, unless a newer category was
    /// picked while it was in flight
    pub fn merge_property_definitions(
        &mut self,
        generation: u64,
        defs: Vec<AttributeDefinition>,
    ) {
        if generation != self.property_generation {
            return;
        }
        properties::merge_definitions(&mut self.draft, defs);
        self.last_error = None;
    }

    /// Record a property fetch failure; selections stay untouched
    pub fn property_fetch_failed(&mut self, generation: u64, message: impl Into<String>) {
        if generation != self.property_generation {
            return;
        }
        self.last_error = Some(message.into());
    }

    fn request_properties(&mut self) -> Vec<EditorEffect> {
        if self.draft.category_id.is_empty() {
            return Vec::new();
        }
        self.property_generation += 1;
        vec![EditorEffect::FetchProperties {
            category_id: self.draft.category_id.clone(),
            generation: self.property_generation,
        }]
    }
}

fn apply_variant(variant: &mut Variant, field: VariantField) {
    match field {
        VariantField::Size(v) => variant.size = v,
        VariantField::Color(v) => variant.color = v,
        VariantField::Shape(v) => variant.shape = v,
        VariantField::Carat(v) => variant.carat = v,
        VariantField::AdditionalPrice(v) => variant.additional_price = v,
        VariantField::ExtraCost(v) => variant.extra_cost = v,
        VariantField::StockCount(v) => variant.stock_count = v,
        VariantField::Sku(v) => variant.sku = v,
        VariantField::Image(upload) => {
            variant.image = upload.map(ImageSource::Pending);
        }
        VariantField::AddAttribute => variant.custom.push(Default::default()),
        VariantField::RemoveAttribute(index) => {
            if index < variant.custom.len() {
                variant.custom.remove(index);
            }
        }
        VariantField::AttributeName(index, v) => {
            if let Some(pair) = variant.custom.get_mut(index) {
                pair.name = v;
            }
        }
        VariantField::AttributeValue(index, v) => {
            if let Some(pair) = variant.custom.get_mut(index) {
                pair.value = v;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defs(titles: &[&str]) -> Vec<AttributeDefinition> {
        titles
            .iter()
            .map(|t| AttributeDefinition {
                id: Some(format!("attr_{t}")),
                category_id: "cat_1".into(),
                title: (*t).into(),
                terms: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn category_change_resets_subcategory_and_fetches_once() {
        let mut editor = ProductEditor::new();
        editor.apply(FieldChange::Subcategory {
            id: "sub_1".into(),
            name: "Engagement".into(),
        });

        let effects = editor.apply(FieldChange::Category {
            id: "cat_rings".into(),
            name: "Rings".into(),
        });

        assert_eq!(
            effects,
            vec![EditorEffect::FetchProperties {
                category_id: "cat_rings".into(),
                generation: 1,
            }]
        );
        assert_eq!(editor.draft().subcategory_id, "");
        assert_eq!(editor.draft().subcategory_name, "");

        let effects = editor.apply(FieldChange::Category {
            id: "cat_earrings".into(),
            name: "Earrings".into(),
        });
        assert_eq!(
            effects,
            vec![EditorEffect::FetchProperties {
                category_id: "cat_earrings".into(),
                generation: 2,
            }]
        );
    }

    #[test]
    fn stale_property_responses_are_dropped() {
        let mut editor = ProductEditor::new();
        editor.apply(FieldChange::Category {
            id: "cat_a".into(),
            name: "A".into(),
        });
        editor.apply(FieldChange::Category {
            id: "cat_b".into(),
            name: "B".into(),
        });

        // answer for cat_a lands after cat_b was picked
        editor.merge_property_definitions(1, defs(&["Stone"]));
        assert!(editor.draft().property_defs.is_empty());

        editor.merge_property_definitions(2, defs(&["Clarity"]));
        assert_eq!(editor.draft().property_defs[0].title, "Clarity");
    }

    #[test]
    fn stale_fetch_failures_are_dropped_too() {
        let mut editor = ProductEditor::new();
        editor.apply(FieldChange::Category {
            id: "cat_a".into(),
            name: "A".into(),
        });
        editor.apply(FieldChange::Category {
            id: "cat_b".into(),
            name: "B".into(),
        });

        editor.property_fetch_failed(1, "timeout");
        assert_eq!(editor.last_error(), None);

        editor.property_fetch_failed(2, "timeout");
        assert_eq!(editor.last_error(), Some("timeout"));
    }

    #[test]
    fn variant_identifiers_stay_unique_through_add_and_remove() {
        let mut editor = ProductEditor::new();
        for _ in 0..3 {
            editor.apply(FieldChange::AddVariant);
        }
        let middle = editor.draft().variants[1].key.clone();
        editor.apply(FieldChange::RemoveVariant(middle.clone()));
        editor.apply(FieldChange::AddVariant);

        let keys: Vec<VariantKey> = editor
            .draft()
            .variants
            .iter()
            .map(|v| v.key.clone())
            .collect();
        assert_eq!(keys.len(), 3);
        assert!(!keys.contains(&middle));
        for (i, key) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(key));
        }
    }

    #[test]
    fn variant_image_set_then_clear_drops_the_preview() {
        let mut editor = ProductEditor::new();
        editor.apply(FieldChange::AddVariant);
        let key = editor.draft().variants[0].key.clone();

        let upload = PendingUpload {
            file_name: "v.png".into(),
            bytes: vec![1],
            preview: "p1".into(),
        };
        editor.apply(FieldChange::Variant(
            key.clone(),
            VariantField::Image(Some(upload)),
        ));
        assert!(editor.draft().variants[0].image.is_some());

        editor.apply(FieldChange::Variant(key, VariantField::Image(None)));
        assert_eq!(editor.draft().variants[0].image, None);
    }

    #[test]
    fn edits_to_a_removed_variant_are_ignored() {
        let mut editor = ProductEditor::new();
        editor.apply(FieldChange::Variant(
            VariantKey::Draft(99),
            VariantField::Size("6".into()),
        ));
        assert!(editor.draft().variants.is_empty());
    }

    #[test]
    fn hydrating_a_product_with_a_category_requests_properties() {
        let product = Product {
            id: "prod_1".into(),
            category_id: "cat_rings".into(),
            ..Product::default()
        };
        let (editor, effects) = ProductEditor::from_product(product);

        assert_eq!(
            editor.mode(),
            &EditorMode::Edit {
                product_id: "prod_1".into()
            }
        );
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn successful_merge_clears_a_previous_fetch_error() {
        let mut editor = ProductEditor::new();
        editor.apply(FieldChange::Category {
            id: "cat_a".into(),
            name: "A".into(),
        });
        editor.property_fetch_failed(1, "boom");
        assert!(editor.last_error().is_some());

        editor.apply(FieldChange::Category {
            id: "cat_a".into(),
            name: "A".into(),
        });
        editor.merge_property_definitions(2, defs(&["Stone"]));
        assert_eq!(editor.last_error(), None);
    }
}
