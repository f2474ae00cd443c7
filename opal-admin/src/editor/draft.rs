//! Product draft
//!
//! Editable snapshot of a product. Numeric fields are kept as the raw
//! strings the admin typed so partial input survives re-rendering; they
//! are parsed at submit time by the encoder.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::models::{AttributeDefinition, AttributePair, Gender, Product, StockStatus};

use super::images::{ImageSlot, ImageSource, PendingUpload};
use super::variants::{Variant, VariantKey, DEFAULT_LOW_STOCK_THRESHOLD};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    /// Empty string means no category picked yet
    pub category_id: String,
    pub category_name: String,
    pub subcategory_id: String,
    pub subcategory_name: String,
    pub gender: Option<Gender>,
    pub regular_price: Option<Decimal>,
    pub sale_price: Option<Decimal>,
    pub sku: String,
    pub stock_quantity: String,
    pub low_stock_threshold: String,
    pub stock_status: StockStatus,
    pub manage_stock: bool,
    pub tax_class: String,
    pub delivery_days: String,
    pub free_shipping: bool,
    pub images: Vec<ImageSlot>,
    pub variants: Vec<Variant>,
    pub attributes: Vec<AttributePair>,
    /// Values keyed by category property title, kept across category switches
    pub properties: BTreeMap<String, String>,
    /// Definitions currently rendered, replaced whole on every fetch
    pub property_defs: Vec<AttributeDefinition>,
}

impl ProductDraft {
    /// Build a draft from a server product for editing
    pub fn from_product(product: Product) -> Self {
        let images = product
            .images
            .into_iter()
            .map(|img| ImageSlot::existing(img.url, img.featured))
            .collect();

        let variants = product
            .inventory_details
            .into_iter()
            .map(|detail| Variant {
                key: VariantKey::Persisted(detail.id),
                size: detail.size,
                color: detail.color,
                shape: detail.shape.unwrap_or_default(),
                carat: detail.carat.unwrap_or_default(),
                additional_price: detail.additional_price,
                extra_cost: detail.extra_cost,
                stock_count: detail.stock_count.to_string(),
                sku: detail.sku,
                image: detail.image.map(ImageSource::Existing),
                custom: detail.attributes,
            })
            .collect();

        Self {
            name: product.name,
            slug: product.slug,
            short_description: product.short_description,
            description: product.description,
            category_id: product.category_id,
            category_name: product.category_name,
            subcategory_id: product.subcategory_id.unwrap_or_default(),
            subcategory_name: product.subcategory_name.unwrap_or_default(),
            gender: Some(product.gender),
            regular_price: product.regular_price,
            sale_price: product.sale_price,
            sku: product.sku,
            stock_quantity: product.stock_quantity.to_string(),
            low_stock_threshold: product
                .low_stock_threshold
                .map(|n| n.to_string())
                .unwrap_or_default(),
            stock_status: product.stock_status,
            manage_stock: product.manage_stock,
            tax_class: product.tax_class.unwrap_or_default(),
            delivery_days: product
                .delivery_days
                .map(|n| n.to_string())
                .unwrap_or_default(),
            free_shipping: product.free_shipping,
            images,
            variants,
            attributes: product.attributes,
            properties: product.properties,
            property_defs: Vec::new(),
        }
    }

    // ========== 图片 ==========

    pub fn add_image(&mut self, upload: PendingUpload) {
        self.images.push(ImageSlot::pending(upload));
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    /// Mark one image featured and clear the flag everywhere else
    pub fn set_featured(&mut self, index: usize) {
        if index >= self.images.len() {
            return;
        }
        for (i, slot) in self.images.iter_mut().enumerate() {
            slot.featured = i == index;
        }
    }

    // ========== 属性 ==========

    pub fn add_attribute(&mut self) {
        self.attributes.push(AttributePair::default());
    }

    pub fn remove_attribute(&mut self, index: usize) {
        if index < self.attributes.len() {
            self.attributes.remove(index);
        }
    }

    // ========== 变体 ==========

    pub fn add_variant(&mut self, key: VariantKey) {
        self.variants.push(Variant::empty(key));
    }

    pub fn remove_variant(&mut self, key: &VariantKey) {
        self.variants.retain(|v| &v.key != key);
    }

    pub fn variant_mut(&mut self, key: &VariantKey) -> Option<&mut Variant> {
        self.variants.iter_mut().find(|v| &v.key == key)
    }

    /// Sum of stock across variant rows
    pub fn total_stock(&self) -> i64 {
        self.variants.iter().map(Variant::stock).sum()
    }

    /// Variant rows at or below the low stock threshold
    pub fn low_stock_count(&self) -> usize {
        let threshold: i64 = self
            .low_stock_threshold
            .trim()
            .parse()
            .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD);
        self.variants
            .iter()
            .filter(|v| v.stock() <= threshold)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{InventoryDetail, ProductImage};

    fn server_product() -> Product {
        Product {
            id: "prod_1".into(),
            name: "Halo Ring".into(),
            slug: "halo-ring".into(),
            category_id: "cat_rings".into(),
            category_name: "Rings".into(),
            subcategory_id: Some("sub_engagement".into()),
            subcategory_name: Some("Engagement".into()),
            stock_quantity: 7,
            low_stock_threshold: Some(3),
            delivery_days: Some(4),
            images: vec![
                ProductImage {
                    url: "https://cdn.test/a.jpg".into(),
                    featured: true,
                },
                ProductImage {
                    url: "https://cdn.test/b.jpg".into(),
                    featured: false,
                },
            ],
            inventory_details: vec![InventoryDetail {
                id: "inv_1".into(),
                size: "6".into(),
                color: "gold".into(),
                stock_count: 2,
                ..InventoryDetail::default()
            }],
            ..Product::default()
        }
    }

    #[test]
    fn from_product_normalizes_numbers_to_strings() {
        let draft = ProductDraft::from_product(server_product());
        assert_eq!(draft.stock_quantity, "7");
        assert_eq!(draft.low_stock_threshold, "3");
        assert_eq!(draft.delivery_days, "4");
        assert_eq!(draft.subcategory_id, "sub_engagement");
        assert_eq!(
            draft.variants[0].key,
            VariantKey::Persisted("inv_1".into())
        );
        assert_eq!(draft.variants[0].stock_count, "2");
        assert!(draft.images[0].featured);
    }

    #[test]
    fn set_featured_clears_other_flags() {
        let mut draft = ProductDraft::from_product(server_product());
        draft.set_featured(1);
        assert!(!draft.images[0].featured);
        assert!(draft.images[1].featured);
        // out of range leaves flags alone
        draft.set_featured(9);
        assert!(draft.images[1].featured);
    }

    #[test]
    fn low_stock_uses_default_threshold_when_blank() {
        let mut draft = ProductDraft::from_product(server_product());
        draft.low_stock_threshold = String::new();
        // one variant with stock 2, default threshold 5
        assert_eq!(draft.low_stock_count(), 1);
        assert_eq!(draft.total_stock(), 2);
    }
}
