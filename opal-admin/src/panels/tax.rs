//! Tax panels
//!
//! Tax classes and their location rate options.

use opal_client::{ClientError, ClientResult, HttpClient};
use rust_decimal::Decimal;
use shared::models::{
    TaxClass, TaxClassCreate, TaxClassUpdate, TaxOption, TaxOptionCreate, TaxOptionUpdate,
};
use validator::Validate;

use crate::core::ListState;

// ========== Tax classes ==========

/// 税类编辑表单
#[derive(Debug, Clone, Default)]
pub struct TaxClassForm {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
}

impl TaxClassForm {
    pub fn edit(class: &TaxClass) -> Self {
        Self {
            id: Some(class.id.clone()),
            name: class.name.clone(),
            description: class.description.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct TaxClassesPanel {
    pub list: ListState<TaxClass>,
}

impl TaxClassesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &HttpClient) {
        self.list.begin();
        match client.list_tax_classes(&self.list.query).await {
            Ok(page) => self.list.finish(page),
            Err(err) => self.list.fail(err.to_string()),
        }
    }

    pub async fn submit(&mut self, client: &HttpClient, form: &TaxClassForm) -> ClientResult<TaxClass> {
        let saved = match &form.id {
            Some(id) => {
                let data = TaxClassUpdate {
                    name: Some(form.name.clone()),
                    description: Some(form.description.clone()),
                };
                data.validate()
                    .map_err(|e| ClientError::Validation(e.to_string()))?;
                client.update_tax_class(id, &data).await?
            }
            None => {
                let data = TaxClassCreate {
                    name: form.name.clone(),
                    description: Some(form.description.clone()),
                };
                data.validate()
                    .map_err(|e| ClientError::Validation(e.to_string()))?;
                client.create_tax_class(&data).await?
            }
        };
        self.refresh(client).await;
        Ok(saved)
    }

    pub async fn delete(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client.delete_tax_class(id).await?;
        self.refresh(client).await;
        Ok(())
    }
}

// ========== Tax options ==========

/// 税率选项编辑表单
#[derive(Debug, Clone, Default)]
pub struct TaxOptionForm {
    pub id: Option<String>,
    pub tax_class_id: String,
    /// ISO country code; "*" matches any
    pub country: String,
    pub state: String,
    /// Raw input, parsed at submit
    pub rate: String,
    pub shipping_taxed: bool,
    pub priority: String,
}

impl TaxOptionForm {
    pub fn edit(option: &TaxOption) -> Self {
        Self {
            id: Some(option.id.clone()),
            tax_class_id: option.tax_class_id.clone(),
            country: option.country.clone(),
            state: option.state.clone(),
            rate: option.rate.to_string(),
            shipping_taxed: option.shipping_taxed,
            priority: option.priority.to_string(),
        }
    }

    /// Percent rate parsed from raw input
    pub fn rate_value(&self) -> Result<Decimal, String> {
        self.rate
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a valid tax rate", self.rate))
    }

    pub fn priority_value(&self) -> Option<i32> {
        self.priority.trim().parse().ok()
    }
}

#[derive(Debug, Default)]
pub struct TaxOptionsPanel {
    pub list: ListState<TaxOption>,
}

impl TaxOptionsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &HttpClient) {
        self.list.begin();
        match client.list_tax_options(&self.list.query).await {
            Ok(page) => self.list.finish(page),
            Err(err) => self.list.fail(err.to_string()),
        }
    }

    /// Restrict to one tax class; empty id clears the filter
    pub async fn filter_tax_class(&mut self, client: &HttpClient, tax_class_id: &str) {
        if tax_class_id.is_empty() {
            self.list.clear_filter("tax_class_id");
        } else {
            self.list.set_filter("tax_class_id", tax_class_id);
        }
        self.list.set_page(1);
        self.refresh(client).await;
    }

    /// Restrict to one country code; empty clears the filter
    pub async fn filter_country(&mut self, client: &HttpClient, country: &str) {
        if country.is_empty() {
            self.list.clear_filter("country");
        } else {
            self.list.set_filter("country", country);
        }
        self.list.set_page(1);
        self.refresh(client).await;
    }

    pub async fn submit(
        &mut self,
        client: &HttpClient,
        form: &TaxOptionForm,
    ) -> ClientResult<TaxOption> {
        let rate = form.rate_value().map_err(ClientError::Validation)?;
        let saved = match &form.id {
            Some(id) => {
                let data = TaxOptionUpdate {
                    country: Some(form.country.clone()),
                    state: Some(form.state.clone()),
                    rate: Some(rate),
                    shipping_taxed: Some(form.shipping_taxed),
                    priority: form.priority_value(),
                };
                data.validate()
                    .map_err(|e| ClientError::Validation(e.to_string()))?;
                client.update_tax_option(id, &data).await?
            }
            None => {
                let data = TaxOptionCreate {
                    tax_class_id: form.tax_class_id.clone(),
                    country: form.country.clone(),
                    state: Some(form.state.clone()),
                    rate,
                    shipping_taxed: Some(form.shipping_taxed),
                    priority: form.priority_value(),
                };
                data.validate()
                    .map_err(|e| ClientError::Validation(e.to_string()))?;
                client.create_tax_option(&data).await?
            }
        };
        self.refresh(client).await;
        Ok(saved)
    }

    pub async fn delete(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client.delete_tax_option(id).await?;
        self.refresh(client).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_parses_decimals_and_rejects_text() {
        let mut form = TaxOptionForm {
            rate: " 8.25 ".into(),
            ..TaxOptionForm::default()
        };
        assert_eq!(form.rate_value().unwrap(), Decimal::new(825, 2));

        form.rate = "eight".into();
        assert!(form.rate_value().is_err());
    }

    #[test]
    fn edit_form_round_trips_the_option() {
        let option = TaxOption {
            id: "opt_1".into(),
            tax_class_id: "tc_1".into(),
            country: "US".into(),
            state: "CA".into(),
            rate: Decimal::new(725, 2),
            shipping_taxed: true,
            priority: 1,
        };
        let form = TaxOptionForm::edit(&option);
        assert_eq!(form.rate, "7.25");
        assert_eq!(form.priority_value(), Some(1));
        assert!(form.shipping_taxed);
    }
}
