//! Editor sections
//!
//! The form renders as titled sections. Each section knows how to
//! summarize its slice of the draft as display lines for the console UI.

use rust_decimal::Decimal;

use super::draft::ProductDraft;
use super::images::ImageSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorSection {
    GeneralInfo,
    Price,
    Images,
    Properties,
    Inventory,
    Delivery,
}

impl EditorSection {
    pub const ALL: [EditorSection; 6] = [
        EditorSection::GeneralInfo,
        EditorSection::Price,
        EditorSection::Images,
        EditorSection::Properties,
        EditorSection::Inventory,
        EditorSection::Delivery,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            EditorSection::GeneralInfo => "General Info",
            EditorSection::Price => "Price",
            EditorSection::Images => "Images",
            EditorSection::Properties => "Properties",
            EditorSection::Inventory => "Inventory",
            EditorSection::Delivery => "Delivery",
        }
    }

    /// Display lines for this section of the draft
    pub fn lines(&self, draft: &ProductDraft) -> Vec<String> {
        match self {
            EditorSection::GeneralInfo => vec![
                format!("Name: {}", or_dash(&draft.name)),
                format!("Slug: {}", or_dash(&draft.slug)),
                format!("Category: {}", or_dash(&draft.category_name)),
                format!("Subcategory: {}", or_dash(&draft.subcategory_name)),
                format!(
                    "Gender: {}",
                    draft.gender.map(|g| g.as_str()).unwrap_or("both")
                ),
            ],
            EditorSection::Price => vec![
                format!("Regular: {}", price(&draft.regular_price)),
                format!("Sale: {}", price(&draft.sale_price)),
                format!("Tax class: {}", or_dash(&draft.tax_class)),
            ],
            EditorSection::Images => {
                if draft.images.is_empty() {
                    return vec!["No images".into()];
                }
                draft
                    .images
                    .iter()
                    .map(|slot| {
                        let label = match &slot.source {
                            ImageSource::Pending(upload) => {
                                format!("{} (pending)", upload.file_name)
                            }
                            ImageSource::Existing(url) => url.clone(),
                        };
                        if slot.featured {
                            format!("* {label}")
                        } else {
                            format!("  {label}")
                        }
                    })
                    .collect()
            }
            EditorSection::Properties => {
                if draft.property_defs.is_empty() {
                    return vec!["Select a category first".into()];
                }
                draft
                    .property_defs
                    .iter()
                    .map(|def| {
                        let value = draft
                            .properties
                            .get(&def.title)
                            .map(String::as_str)
                            .unwrap_or("");
                        format!("{}: {}", def.title, or_dash(value))
                    })
                    .collect()
            }
            EditorSection::Inventory => vec![
                format!("SKU: {}", or_dash(&draft.sku)),
                format!("Status: {}", draft.stock_status.as_str()),
                format!("Variants: {}", draft.variants.len()),
                format!("Total stock: {}", draft.total_stock()),
                format!("Low stock: {}", draft.low_stock_count()),
            ],
            EditorSection::Delivery => vec![
                format!("Delivery days: {}", or_dash(&draft.delivery_days)),
                format!(
                    "Free shipping: {}",
                    if draft.free_shipping { "yes" } else { "no" }
                ),
            ],
        }
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn price(value: &Option<Decimal>) -> String {
    value.map(|d| d.to_string()).unwrap_or_else(|| "-".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::variants::{Variant, VariantKey};

    #[test]
    fn properties_section_prompts_until_a_category_is_picked() {
        let draft = ProductDraft::default();
        assert_eq!(
            EditorSection::Properties.lines(&draft),
            vec!["Select a category first".to_string()]
        );
    }

    #[test]
    fn inventory_section_reports_derived_stock() {
        let mut draft = ProductDraft::default();
        let mut variant = Variant::empty(VariantKey::Draft(1));
        variant.stock_count = "9".into();
        draft.variants.push(variant);

        let lines = EditorSection::Inventory.lines(&draft);
        assert!(lines.contains(&"Total stock: 9".to_string()));
        assert!(lines.contains(&"Variants: 1".to_string()));
    }
}
