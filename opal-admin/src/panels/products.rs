//! Products panel
//!
//! List view over the catalog. Creating and editing go through the
//! product editor; this panel handles browsing, filtering and deletion.

use opal_client::{ClientResult, HttpClient};
use shared::models::{Product, StockStatus};

use crate::core::ListState;

/// 商品列表面板
#[derive(Debug, Default)]
pub struct ProductsPanel {
    pub list: ListState<Product>,
}

impl ProductsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload the current page
    pub async fn refresh(&mut self, client: &HttpClient) {
        self.list.begin();
        match client.list_products(&self.list.query).await {
            Ok(page) => self.list.finish(page),
            Err(err) => self.list.fail(err.to_string()),
        }
    }

    /// Search by name or sku, back on page 1
    pub async fn search(&mut self, client: &HttpClient, term: impl Into<String>) {
        self.list.set_search(term);
        self.list.set_page(1);
        self.refresh(client).await;
    }

    /// Restrict to one category; empty id clears the filter
    pub async fn filter_category(&mut self, client: &HttpClient, category_id: &str) {
        if category_id.is_empty() {
            self.list.clear_filter("category_id");
        } else {
            self.list.set_filter("category_id", category_id);
        }
        self.list.set_page(1);
        self.refresh(client).await;
    }

    /// Restrict to one stock status; `None` clears the filter
    pub async fn filter_stock_status(&mut self, client: &HttpClient, status: Option<StockStatus>) {
        match status {
            Some(status) => self.list.set_filter("stock_status", status.as_str()),
            None => self.list.clear_filter("stock_status"),
        }
        self.list.set_page(1);
        self.refresh(client).await;
    }

    pub async fn go_to_page(&mut self, client: &HttpClient, page: u32) {
        self.list.set_page(page);
        self.refresh(client).await;
    }

    /// 删除商品并刷新列表
    pub async fn delete(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client.delete_product(id).await?;
        self.refresh(client).await;
        Ok(())
    }
}
