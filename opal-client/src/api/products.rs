//! Product API

use shared::models::Product;
use shared::{ApiResponse, ListQuery, MultipartPayload, PaginatedData};

use super::require_data;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// GET /api/products - 获取商品列表
    pub async fn list_products(&self, query: &ListQuery) -> ClientResult<PaginatedData<Product>> {
        let response = self
            .get_with_query::<ApiResponse<PaginatedData<Product>>>(
                "/api/products",
                &query.to_params(),
            )
            .await?;
        require_data(response, "product list")
    }

    /// GET /api/products/:id - 获取单个商品
    pub async fn get_product(&self, id: &str) -> ClientResult<Product> {
        let response = self
            .get::<ApiResponse<Product>>(&format!("/api/products/{id}"))
            .await?;
        require_data(response, "product")
    }

    /// POST /api/products - multipart create built by the submission encoder
    pub async fn create_product(&self, payload: MultipartPayload) -> ClientResult<Product> {
        let response = self
            .post_multipart::<ApiResponse<Product>>("/api/products", payload)
            .await?;
        require_data(response, "product")
    }

    /// PUT /api/products/:id - multipart update built by the submission encoder
    pub async fn update_product(
        &self,
        id: &str,
        payload: MultipartPayload,
    ) -> ClientResult<Product> {
        let response = self
            .put_multipart::<ApiResponse<Product>>(&format!("/api/products/{id}"), payload)
            .await?;
        require_data(response, "product")
    }

    /// DELETE /api/products/:id - 删除商品
    pub async fn delete_product(&self, id: &str) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("/api/products/{id}"))
            .await?;
        Ok(())
    }
}
