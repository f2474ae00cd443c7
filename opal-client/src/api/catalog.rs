//! Catalog API 模块
//!
//! 分类、子分类与分类属性定义。Category forms carry an image, so category
//! create/update travel as multipart; the rest are JSON payloads.

use shared::models::{
    AttributeDefinition, AttributeDefinitionCreate, AttributeDefinitionUpdate, Category,
    Subcategory, SubcategoryCreate, SubcategoryUpdate,
};
use shared::{ApiResponse, ListQuery, MultipartPayload, PaginatedData};

use super::require_data;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    // ========== Categories ==========

    /// GET /api/categories - 获取分类列表
    pub async fn list_categories(&self, query: &ListQuery) -> ClientResult<PaginatedData<Category>> {
        let response = self
            .get_with_query::<ApiResponse<PaginatedData<Category>>>(
                "/api/categories",
                &query.to_params(),
            )
            .await?;
        require_data(response, "category list")
    }

    /// GET /api/categories/:id - 获取单个分类
    pub async fn get_category(&self, id: &str) -> ClientResult<Category> {
        let response = self
            .get::<ApiResponse<Category>>(&format!("/api/categories/{id}"))
            .await?;
        require_data(response, "category")
    }

    /// POST /api/categories - 创建分类 (multipart)
    pub async fn create_category(&self, payload: MultipartPayload) -> ClientResult<Category> {
        let response = self
            .post_multipart::<ApiResponse<Category>>("/api/categories", payload)
            .await?;
        require_data(response, "category")
    }

    /// PUT /api/categories/:id - 更新分类 (multipart)
    pub async fn update_category(
        &self,
        id: &str,
        payload: MultipartPayload,
    ) -> ClientResult<Category> {
        let response = self
            .put_multipart::<ApiResponse<Category>>(&format!("/api/categories/{id}"), payload)
            .await?;
        require_data(response, "category")
    }

    /// DELETE /api/categories/:id - 删除分类
    pub async fn delete_category(&self, id: &str) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("/api/categories/{id}"))
            .await?;
        Ok(())
    }

    /// GET /api/categories/:id/attributes - 获取分类下的属性定义
    ///
    /// Drives the property dropdowns in the product editor.
    pub async fn category_attributes(
        &self,
        category_id: &str,
    ) -> ClientResult<Vec<AttributeDefinition>> {
        let response = self
            .get::<ApiResponse<Vec<AttributeDefinition>>>(&format!(
                "/api/categories/{category_id}/attributes"
            ))
            .await?;
        require_data(response, "category attributes")
    }

    // ========== Subcategories ==========

    /// GET /api/subcategories - 获取子分类列表
    pub async fn list_subcategories(
        &self,
        query: &ListQuery,
    ) -> ClientResult<PaginatedData<Subcategory>> {
        let response = self
            .get_with_query::<ApiResponse<PaginatedData<Subcategory>>>(
                "/api/subcategories",
                &query.to_params(),
            )
            .await?;
        require_data(response, "subcategory list")
    }

    /// GET /api/subcategories/:id - 获取单个子分类
    pub async fn get_subcategory(&self, id: &str) -> ClientResult<Subcategory> {
        let response = self
            .get::<ApiResponse<Subcategory>>(&format!("/api/subcategories/{id}"))
            .await?;
        require_data(response, "subcategory")
    }

    /// POST /api/subcategories - 创建子分类
    pub async fn create_subcategory(&self, data: &SubcategoryCreate) -> ClientResult<Subcategory> {
        let response = self
            .post::<ApiResponse<Subcategory>, _>("/api/subcategories", data)
            .await?;
        require_data(response, "subcategory")
    }

    /// PUT /api/subcategories/:id - 更新子分类
    pub async fn update_subcategory(
        &self,
        id: &str,
        data: &SubcategoryUpdate,
    ) -> ClientResult<Subcategory> {
        let response = self
            .put::<ApiResponse<Subcategory>, _>(&format!("/api/subcategories/{id}"), data)
            .await?;
        require_data(response, "subcategory")
    }

    /// DELETE /api/subcategories/:id - 删除子分类
    pub async fn delete_subcategory(&self, id: &str) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("/api/subcategories/{id}"))
            .await?;
        Ok(())
    }

    // ========== Attribute definitions ==========

    /// GET /api/attributes - 获取属性定义列表
    pub async fn list_attributes(
        &self,
        query: &ListQuery,
    ) -> ClientResult<PaginatedData<AttributeDefinition>> {
        let response = self
            .get_with_query::<ApiResponse<PaginatedData<AttributeDefinition>>>(
                "/api/attributes",
                &query.to_params(),
            )
            .await?;
        require_data(response, "attribute list")
    }

    /// GET /api/attributes/:id - 获取单个属性定义
    pub async fn get_attribute(&self, id: &str) -> ClientResult<AttributeDefinition> {
        let response = self
            .get::<ApiResponse<AttributeDefinition>>(&format!("/api/attributes/{id}"))
            .await?;
        require_data(response, "attribute")
    }

    /// POST /api/attributes - 创建属性定义
    pub async fn create_attribute(
        &self,
        data: &AttributeDefinitionCreate,
    ) -> ClientResult<AttributeDefinition> {
        let response = self
            .post::<ApiResponse<AttributeDefinition>, _>("/api/attributes", data)
            .await?;
        require_data(response, "attribute")
    }

    /// PUT /api/attributes/:id - 更新属性定义
    pub async fn update_attribute(
        &self,
        id: &str,
        data: &AttributeDefinitionUpdate,
    ) -> ClientResult<AttributeDefinition> {
        let response = self
            .put::<ApiResponse<AttributeDefinition>, _>(&format!("/api/attributes/{id}"), data)
            .await?;
        require_data(response, "attribute")
    }

    /// DELETE /api/attributes/:id - 删除属性定义
    pub async fn delete_attribute(&self, id: &str) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("/api/attributes/{id}"))
            .await?;
        Ok(())
    }
}
