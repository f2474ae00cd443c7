//! Category property resolution
//!
//! Each category carries attribute definitions that render as property
//! pickers on the product form. Metal definitions are excluded here
//! since metal is chosen per variant, not per product.

use shared::models::AttributeDefinition;

use super::draft::ProductDraft;

/// Whether a category attribute renders as a product property picker
pub fn is_renderable(title: &str) -> bool {
    !title.to_lowercase().contains("metal")
}

/// Install fetched definitions into the draft.
///
/// Keeps fetch order, seeds a blank selection per new title, and never
/// overwrites a value the admin has already picked. Selections for
/// titles no longer present stay in the map untouched; the encoder
/// drops blanks at submit time.
pub fn merge_definitions(draft: &mut ProductDraft, defs: Vec<AttributeDefinition>) {
    let retained: Vec<AttributeDefinition> = defs
        .into_iter()
        .filter(|def| is_renderable(&def.title))
        .collect();

    for def in &retained {
        draft.properties.entry(def.title.clone()).or_default();
    }

    draft.property_defs = retained;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(title: &str) -> AttributeDefinition {
        AttributeDefinition {
            id: Some(format!("attr_{title}")),
            category_id: "cat_rings".into(),
            title: title.into(),
            terms: Vec::new(),
        }
    }

    #[test]
    fn metal_definitions_never_render() {
        assert!(is_renderable("Stone"));
        assert!(!is_renderable("Metal"));
        assert!(!is_renderable("metal type"));
        assert!(!is_renderable("Precious Metal"));
    }

    #[test]
    fn merge_seeds_blanks_without_clobbering() {
        let mut draft = ProductDraft::default();
        draft.properties.insert("Stone".into(), "emerald".into());

        merge_definitions(&mut draft, vec![def("Stone"), def("Metal Type"), def("Clarity")]);

        assert_eq!(draft.properties["Stone"], "emerald");
        assert_eq!(draft.properties["Clarity"], "");
        assert!(!draft.properties.contains_key("Metal Type"));
        let titles: Vec<&str> = draft.property_defs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Stone", "Clarity"]);
    }

    #[test]
    fn old_selections_survive_a_category_switch() {
        let mut draft = ProductDraft::default();
        merge_definitions(&mut draft, vec![def("Stone")]);
        draft.properties.insert("Stone".into(), "ruby".into());

        merge_definitions(&mut draft, vec![def("Band Width")]);

        // rendered set follows the new category, stale value stays put
        assert_eq!(draft.property_defs.len(), 1);
        assert_eq!(draft.property_defs[0].title, "Band Width");
        assert_eq!(draft.properties["Stone"], "ruby");
        assert_eq!(draft.properties["Band Width"], "");
    }
}
