//! Tax API 模块
//!
//! 税类与地区税率配置。

use shared::models::{
    TaxClass, TaxClassCreate, TaxClassUpdate, TaxOption, TaxOptionCreate, TaxOptionUpdate,
};
use shared::{ApiResponse, ListQuery, PaginatedData};

use super::require_data;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    // ========== Tax classes ==========

    /// GET /api/tax-classes - 获取税类列表
    pub async fn list_tax_classes(
        &self,
        query: &ListQuery,
    ) -> ClientResult<PaginatedData<TaxClass>> {
        let response = self
            .get_with_query::<ApiResponse<PaginatedData<TaxClass>>>(
                "/api/tax-classes",
                &query.to_params(),
            )
            .await?;
        require_data(response, "tax class list")
    }

    /// GET /api/tax-classes/:id - 获取单个税类
    pub async fn get_tax_class(&self, id: &str) -> ClientResult<TaxClass> {
        let response = self
            .get::<ApiResponse<TaxClass>>(&format!("/api/tax-classes/{id}"))
            .await?;
        require_data(response, "tax class")
    }

    /// POST /api/tax-classes - 创建税类
    pub async fn create_tax_class(&self, data: &TaxClassCreate) -> ClientResult<TaxClass> {
        let response = self
            .post::<ApiResponse<TaxClass>, _>("/api/tax-classes", data)
            .await?;
        require_data(response, "tax class")
    }

    /// PUT /api/tax-classes/:id - 更新税类
    pub async fn update_tax_class(
        &self,
        id: &str,
        data: &TaxClassUpdate,
    ) -> ClientResult<TaxClass> {
        let response = self
            .put::<ApiResponse<TaxClass>, _>(&format!("/api/tax-classes/{id}"), data)
            .await?;
        require_data(response, "tax class")
    }

    /// DELETE /api/tax-classes/:id - 删除税类
    pub async fn delete_tax_class(&self, id: &str) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("/api/tax-classes/{id}"))
            .await?;
        Ok(())
    }

    // ========== Tax options ==========

    /// GET /api/tax-options - 获取税率选项列表
    pub async fn list_tax_options(
        &self,
        query: &ListQuery,
    ) -> ClientResult<PaginatedData<TaxOption>> {
        let response = self
            .get_with_query::<ApiResponse<PaginatedData<TaxOption>>>(
                "/api/tax-options",
                &query.to_params(),
            )
            .await?;
        require_data(response, "tax option list")
    }

    /// GET /api/tax-options/:id - 获取单个税率选项
    pub async fn get_tax_option(&self, id: &str) -> ClientResult<TaxOption> {
        let response = self
            .get::<ApiResponse<TaxOption>>(&format!("/api/tax-options/{id}"))
            .await?;
        require_data(response, "tax option")
    }

    /// POST /api/tax-options - 创建税率选项
    pub async fn create_tax_option(&self, data: &TaxOptionCreate) -> ClientResult<TaxOption> {
        let response = self
            .post::<ApiResponse<TaxOption>, _>("/api/tax-options", data)
            .await?;
        require_data(response, "tax option")
    }

    /// PUT /api/tax-options/:id - 更新税率选项
    pub async fn update_tax_option(
        &self,
        id: &str,
        data: &TaxOptionUpdate,
    ) -> ClientResult<TaxOption> {
        let response = self
            .put::<ApiResponse<TaxOption>, _>(&format!("/api/tax-options/{id}"), data)
            .await?;
        require_data(response, "tax option")
    }

    /// DELETE /api/tax-options/:id - 删除税率选项
    pub async fn delete_tax_option(&self, id: &str) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("/api/tax-options/{id}"))
            .await?;
        Ok(())
    }
}
