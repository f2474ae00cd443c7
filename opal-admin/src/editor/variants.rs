//! Variant rows of the product editor

use rust_decimal::Decimal;
use shared::models::AttributePair;

use super::images::ImageSource;

/// Stock threshold used when the product-level field is blank or unparseable
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Identity of a variant row across the editing session.
///
/// Rows loaded from the server keep their backend id; rows added in the
/// session get a draft number that is never reused, so removing and
/// re-adding rows cannot confuse edits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariantKey {
    Draft(u64),
    Persisted(String),
}

impl VariantKey {
    /// Backend id to submit for this row, empty for drafts
    pub fn server_id(&self) -> &str {
        match self {
            VariantKey::Draft(_) => "",
            VariantKey::Persisted(id) => id.as_str(),
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, VariantKey::Draft(_))
    }
}

/// One sellable variation of the product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub key: VariantKey,
    pub size: String,
    /// Metal choice travels as the color field on the wire
    pub color: String,
    pub shape: String,
    pub carat: String,
    pub additional_price: Option<Decimal>,
    pub extra_cost: Option<Decimal>,
    pub stock_count: String,
    pub sku: String,
    pub image: Option<ImageSource>,
    pub custom: Vec<AttributePair>,
}

impl Variant {
    pub fn empty(key: VariantKey) -> Self {
        Self {
            key,
            size: String::new(),
            color: String::new(),
            shape: String::new(),
            carat: String::new(),
            additional_price: None,
            extra_cost: None,
            stock_count: String::new(),
            sku: String::new(),
            image: None,
            custom: Vec::new(),
        }
    }

    /// Stock entered for this row, zero when blank or unparseable
    pub fn stock(&self) -> i64 {
        self.stock_count.trim().parse().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_keys_submit_empty_server_id() {
        assert_eq!(VariantKey::Draft(3).server_id(), "");
        assert_eq!(VariantKey::Persisted("inv_9".into()).server_id(), "inv_9");
    }

    #[test]
    fn blank_stock_counts_as_zero() {
        let mut variant = Variant::empty(VariantKey::Draft(1));
        assert_eq!(variant.stock(), 0);
        variant.stock_count = "12".into();
        assert_eq!(variant.stock(), 12);
        variant.stock_count = "dozen".into();
        assert_eq!(variant.stock(), 0);
    }
}
