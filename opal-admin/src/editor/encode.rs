//! Submission encoder
//!
//! Flattens a product draft into the multipart field layout the backend
//! expects. Pure function of the draft, never mutates it, never fails;
//! a malformed draft comes back as a backend rejection instead.
//!
//! The backend reconstructs each variant by zipping the `item_*[i]`
//! families at the same index, so every family emits a value for every
//! variant, with empty string as the absent sentinel. Walking the
//! variant list once and emitting all of a row's fields together keeps
//! those indices aligned by construction.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::MultipartPayload;

use super::draft::ProductDraft;
use super::images::ImageSource;

/// Which product endpoint the payload is headed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeMode {
    Create,
    Update,
}

/// Variant attribute names carried by the dedicated shape/carat/color
/// fields; emitting them again as custom attributes would duplicate them
fn is_reserved_attribute(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower == "shape" || lower == "carat" || lower.contains("metal")
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn decimal_or_empty(value: &Option<Decimal>) -> String {
    value.map(|d| d.to_string()).unwrap_or_default()
}

/// Encode the draft for submission
pub fn encode(draft: &ProductDraft, mode: EncodeMode) -> MultipartPayload {
    let mut payload = MultipartPayload::new();

    // ========== 基本字段 ==========
    payload
        .text("name", draft.name.as_str())
        .text("slug", draft.slug.as_str())
        .text("short_description", draft.short_description.as_str())
        .text("description", draft.description.as_str())
        .text("category_id", draft.category_id.as_str())
        .text("subcategory_id", draft.subcategory_id.as_str())
        .text("gender", draft.gender.map(|g| g.as_str()).unwrap_or("both"))
        .text("regular_price", decimal_or_empty(&draft.regular_price))
        .text("sale_price", decimal_or_empty(&draft.sale_price))
        .text("sku", draft.sku.as_str())
        .text("stock_quantity", draft.stock_quantity.as_str())
        .text("low_stock_threshold", draft.low_stock_threshold.as_str())
        .text("stock_status", draft.stock_status.as_str())
        .text("manage_stock", flag(draft.manage_stock))
        .text("tax_class", draft.tax_class.as_str())
        .text("delivery_days", draft.delivery_days.as_str())
        .text("free_shipping", flag(draft.free_shipping));

    // ========== 变体 ==========
    for (i, variant) in draft.variants.iter().enumerate() {
        payload
            .text(format!("item_size[{i}]"), variant.size.as_str())
            .text(format!("item_color[{i}]"), variant.color.as_str())
            .text(
                format!("item_additional_price[{i}]"),
                decimal_or_empty(&variant.additional_price),
            )
            .text(format!("item_sku[{i}]"), variant.sku.as_str())
            .text(format!("item_shape[{i}]"), variant.shape.as_str())
            .text(format!("item_carat[{i}]"), variant.carat.as_str())
            .text(
                format!("item_extra_cost[{i}]"),
                decimal_or_empty(&variant.extra_cost),
            )
            .text(
                format!("item_stock_count[{i}]"),
                variant.stock_count.as_str(),
            )
            .text(format!("inventoryDetailsId[{i}]"), variant.key.server_id());

        let mut j = 0;
        for pair in &variant.custom {
            if is_reserved_attribute(&pair.name) {
                continue;
            }
            payload
                .text(format!("item_attribute_name[{i}][{j}]"), pair.name.as_str())
                .text(
                    format!("item_attribute_value[{i}][{j}]"),
                    pair.value.as_str(),
                );
            j += 1;
        }

        // Pending uploads always travel as files. An existing reference is
        // only forwarded on update, where the backend treats the URL as
        // "keep this image"; create never has one to send.
        match (&variant.image, mode) {
            (Some(ImageSource::Pending(upload)), _) => {
                payload.file(
                    format!("item_image[{i}]"),
                    upload.file_name.as_str(),
                    upload.bytes.clone(),
                );
            }
            (Some(ImageSource::Existing(url)), EncodeMode::Update) => {
                payload.text(format!("item_image[{i}]"), url.as_str());
            }
            _ => {}
        }
    }

    // ========== 商品属性 ==========
    let mut a = 0;
    for pair in &draft.attributes {
        if pair.name.is_empty() {
            continue;
        }
        payload
            .text(format!("attribute_name[{a}]"), pair.name.as_str())
            .text(format!("attribute_value[{a}]"), pair.value.as_str());
        a += 1;
    }

    // ========== 图片 ==========
    // New files are re-indexed densely; kept URLs go to a repeated field.
    let mut k = 0;
    let mut has_existing = false;
    for slot in &draft.images {
        match &slot.source {
            ImageSource::Pending(upload) => {
                payload
                    .file(
                        format!("images[{k}]"),
                        upload.file_name.as_str(),
                        upload.bytes.clone(),
                    )
                    .text(format!("images_featured[{k}]"), flag(slot.featured));
                k += 1;
            }
            ImageSource::Existing(url) => {
                payload.text("existingImages", url.as_str());
                has_existing = true;
            }
        }
    }
    // Sentinel so the backend can tell "kept none" from "field omitted"
    if !has_existing {
        payload.text("existingImages", "[]");
    }

    // ========== 分类属性 ==========
    let selected: BTreeMap<&str, &str> = draft
        .properties
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    if !selected.is_empty() {
        payload.text(
            "properties",
            serde_json::to_string(&selected).unwrap_or_default(),
        );
    }

    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::images::{ImageSlot, PendingUpload};
    use crate::editor::variants::{Variant, VariantKey};
    use shared::models::AttributePair;

    fn upload(file_name: &str) -> PendingUpload {
        PendingUpload {
            file_name: file_name.into(),
            bytes: vec![1, 2, 3],
            preview: format!("preview-{file_name}"),
        }
    }

    fn pair(name: &str, value: &str) -> AttributePair {
        AttributePair {
            name: name.into(),
            value: value.into(),
        }
    }

    #[test]
    fn create_with_two_images_and_one_new_variant() {
        let mut draft = ProductDraft::default();
        draft.name = "Halo Ring".into();
        draft.images.push(ImageSlot::pending(upload("a.png")));
        draft.images.push(ImageSlot::pending(upload("b.png")));
        draft.set_featured(0);
        draft.add_variant(VariantKey::Draft(1));

        let payload = encode(&draft, EncodeMode::Create);

        assert!(payload.has_file("images[0]"));
        assert!(payload.has_file("images[1]"));
        assert_eq!(payload.text_value("images_featured[0]"), Some("1"));
        assert_eq!(payload.text_value("images_featured[1]"), Some("0"));
        assert_eq!(payload.text_value("inventoryDetailsId[0]"), Some(""));
        assert_eq!(payload.text_value("name"), Some("Halo Ring"));
    }

    #[test]
    fn edit_with_only_existing_images_sends_urls_and_no_files() {
        let mut draft = ProductDraft::default();
        draft
            .images
            .push(ImageSlot::existing("/uploads/kept.jpg", true));

        let payload = encode(&draft, EncodeMode::Update);

        assert_eq!(payload.text_values("existingImages"), vec!["/uploads/kept.jpg"]);
        assert!(!payload.has_file("images[0]"));
        assert_eq!(payload.text_value("images_featured[0]"), None);
    }

    #[test]
    fn removing_the_featured_image_promotes_nothing() {
        let mut draft = ProductDraft::default();
        draft.images.push(ImageSlot::pending(upload("a.png")));
        draft.images.push(ImageSlot::pending(upload("b.png")));
        draft.set_featured(0);
        draft.remove_image(0);

        let payload = encode(&draft, EncodeMode::Create);

        assert!(payload.has_file("images[0]"));
        assert_eq!(payload.text_value("images_featured[0]"), Some("0"));
        assert!(!payload.has_file("images[1]"));
    }

    #[test]
    fn pending_images_reindex_densely_around_existing_ones() {
        let mut draft = ProductDraft::default();
        draft
            .images
            .push(ImageSlot::existing("/uploads/old.jpg", false));
        draft.images.push(ImageSlot::pending(upload("new.png")));

        let payload = encode(&draft, EncodeMode::Update);

        // the pending file sits at list position 1 but encodes as index 0
        assert!(payload.has_file("images[0]"));
        assert!(!payload.has_file("images[1]"));
        assert_eq!(payload.text_values("existingImages"), vec!["/uploads/old.jpg"]);
    }

    #[test]
    fn no_existing_images_sends_the_empty_array_sentinel() {
        let mut draft = ProductDraft::default();
        draft.images.push(ImageSlot::pending(upload("a.png")));

        let payload = encode(&draft, EncodeMode::Create);

        assert_eq!(payload.text_values("existingImages"), vec!["[]"]);
    }

    #[test]
    fn variant_families_stay_aligned_across_rows() {
        let mut draft = ProductDraft::default();
        for (n, id) in [("6", "inv_a"), ("7", "inv_b")] {
            let mut variant = Variant::empty(VariantKey::Persisted(id.into()));
            variant.size = n.into();
            variant.color = format!("gold-{n}");
            variant.stock_count = "4".into();
            draft.variants.push(variant);
        }
        let mut third = Variant::empty(VariantKey::Draft(1));
        third.size = "8".into();
        draft.variants.push(third);

        let payload = encode(&draft, EncodeMode::Update);

        for family in [
            "item_size",
            "item_color",
            "item_additional_price",
            "item_sku",
            "item_shape",
            "item_carat",
            "item_extra_cost",
            "item_stock_count",
            "inventoryDetailsId",
        ] {
            for i in 0..3 {
                assert!(
                    payload.text_value(&format!("{family}[{i}]")).is_some(),
                    "missing {family}[{i}]"
                );
            }
            assert_eq!(payload.text_value(&format!("{family}[3]")), None);
        }
        assert_eq!(payload.text_value("item_size[2]"), Some("8"));
        assert_eq!(payload.text_value("inventoryDetailsId[0]"), Some("inv_a"));
        assert_eq!(payload.text_value("inventoryDetailsId[2]"), Some(""));
    }

    #[test]
    fn reserved_variant_attributes_skip_and_reindex() {
        let mut draft = ProductDraft::default();
        let mut variant = Variant::empty(VariantKey::Draft(1));
        variant.custom = vec![
            pair("Shape", "round"),
            pair("Engraving", "initials"),
            pair("Metal Finish", "matte"),
            pair("carat", "1.5"),
            pair("Gift Wrap", "yes"),
        ];
        draft.variants.push(variant);

        let payload = encode(&draft, EncodeMode::Create);

        assert_eq!(
            payload.text_value("item_attribute_name[0][0]"),
            Some("Engraving")
        );
        assert_eq!(
            payload.text_value("item_attribute_name[0][1]"),
            Some("Gift Wrap")
        );
        assert_eq!(payload.text_value("item_attribute_name[0][2]"), None);
        assert_eq!(
            payload.text_value("item_attribute_value[0][1]"),
            Some("yes")
        );
    }

    #[test]
    fn variant_image_handling_differs_between_modes() {
        let mut draft = ProductDraft::default();
        let mut with_file = Variant::empty(VariantKey::Draft(1));
        with_file.image = Some(ImageSource::Pending(upload("v.png")));
        draft.variants.push(with_file);
        let mut with_url = Variant::empty(VariantKey::Persisted("inv_1".into()));
        with_url.image = Some(ImageSource::Existing("/uploads/v.jpg".into()));
        draft.variants.push(with_url);

        let created = encode(&draft, EncodeMode::Create);
        assert!(created.has_file("item_image[0]"));
        assert_eq!(created.text_value("item_image[1]"), None);
        assert!(!created.has_file("item_image[1]"));

        let updated = encode(&draft, EncodeMode::Update);
        assert!(updated.has_file("item_image[0]"));
        assert_eq!(updated.text_value("item_image[1]"), Some("/uploads/v.jpg"));
    }

    #[test]
    fn blank_top_level_attribute_rows_are_skipped() {
        let mut draft = ProductDraft::default();
        draft.attributes = vec![pair("", ""), pair("Occasion", "Wedding")];

        let payload = encode(&draft, EncodeMode::Create);

        assert_eq!(payload.text_value("attribute_name[0]"), Some("Occasion"));
        assert_eq!(payload.text_value("attribute_value[0]"), Some("Wedding"));
        assert_eq!(payload.text_value("attribute_name[1]"), None);
    }

    #[test]
    fn properties_drop_blank_selections_before_serializing() {
        let mut draft = ProductDraft::default();
        draft.properties.insert("a".into(), "".into());
        draft.properties.insert("b".into(), "x".into());
        draft.properties.insert("c".into(), "".into());

        let payload = encode(&draft, EncodeMode::Create);

        assert_eq!(payload.text_value("properties"), Some(r#"{"b":"x"}"#));
    }

    #[test]
    fn properties_field_is_omitted_when_nothing_selected() {
        let mut draft = ProductDraft::default();
        draft.properties.insert("a".into(), "".into());

        let payload = encode(&draft, EncodeMode::Create);

        assert_eq!(payload.text_value("properties"), None);
    }

    #[test]
    fn gender_falls_back_to_both() {
        let draft = ProductDraft::default();
        let payload = encode(&draft, EncodeMode::Create);
        assert_eq!(payload.text_value("gender"), Some("both"));

        let mut chosen = ProductDraft::default();
        chosen.gender = Some(shared::models::Gender::Women);
        let payload = encode(&chosen, EncodeMode::Create);
        assert_eq!(payload.text_value("gender"), Some("women"));
    }

    #[test]
    fn prices_encode_as_plain_decimals_or_empty() {
        let mut draft = ProductDraft::default();
        draft.regular_price = Some(Decimal::new(12950, 2));

        let payload = encode(&draft, EncodeMode::Create);

        assert_eq!(payload.text_value("regular_price"), Some("129.50"));
        assert_eq!(payload.text_value("sale_price"), Some(""));
    }
}
