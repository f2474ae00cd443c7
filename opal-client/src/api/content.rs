//! Content API 模块
//!
//! 首页内容：banner、合集、服务、FAQ、Instagram、评论。Image-carrying
//! entities travel as multipart; FAQ and review moderation are JSON.

use shared::models::{
    Banner, Collection, Faq, FaqCreate, FaqUpdate, InstagramPost, Review, ReviewApproval, Service,
};
use shared::{ApiResponse, ListQuery, MultipartPayload, PaginatedData};

use super::require_data;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    // ========== Banners ==========

    /// GET /api/banners - 获取 banner 列表
    pub async fn list_banners(&self, query: &ListQuery) -> ClientResult<PaginatedData<Banner>> {
        let response = self
            .get_with_query::<ApiResponse<PaginatedData<Banner>>>(
                "/api/banners",
                &query.to_params(),
            )
            .await?;
        require_data(response, "banner list")
    }

    /// GET /api/banners/:id - 获取单个 banner
    pub async fn get_banner(&self, id: &str) -> ClientResult<Banner> {
        let response = self
            .get::<ApiResponse<Banner>>(&format!("/api/banners/{id}"))
            .await?;
        require_data(response, "banner")
    }

    /// POST /api/banners - 创建 banner (multipart)
    pub async fn create_banner(&self, payload: MultipartPayload) -> ClientResult<Banner> {
        let response = self
            .post_multipart::<ApiResponse<Banner>>("/api/banners", payload)
            .await?;
        require_data(response, "banner")
    }

    /// PUT /api/banners/:id - 更新 banner (multipart)
    pub async fn update_banner(&self, id: &str, payload: MultipartPayload) -> ClientResult<Banner> {
        let response = self
            .put_multipart::<ApiResponse<Banner>>(&format!("/api/banners/{id}"), payload)
            .await?;
        require_data(response, "banner")
    }

    /// DELETE /api/banners/:id - 删除 banner
    pub async fn delete_banner(&self, id: &str) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("/api/banners/{id}"))
            .await?;
        Ok(())
    }

    // ========== Collections ==========

    /// GET /api/collections - 获取合集列表
    pub async fn list_collections(
        &self,
        query: &ListQuery,
    ) -> ClientResult<PaginatedData<Collection>> {
        let response = self
            .get_with_query::<ApiResponse<PaginatedData<Collection>>>(
                "/api/collections",
                &query.to_params(),
            )
            .await?;
        require_data(response, "collection list")
    }

    /// GET /api/collections/:id - 获取单个合集
    pub async fn get_collection(&self, id: &str) -> ClientResult<Collection> {
        let response = self
            .get::<ApiResponse<Collection>>(&format!("/api/collections/{id}"))
            .await?;
        require_data(response, "collection")
    }

    /// POST /api/collections - 创建合集 (multipart)
    pub async fn create_collection(&self, payload: MultipartPayload) -> ClientResult<Collection> {
        let response = self
            .post_multipart::<ApiResponse<Collection>>("/api/collections", payload)
            .await?;
        require_data(response, "collection")
    }

    /// PUT /api/collections/:id - 更新合集 (multipart)
    pub async fn update_collection(
        &self,
        id: &str,
        payload: MultipartPayload,
    ) -> ClientResult<Collection> {
        let response = self
            .put_multipart::<ApiResponse<Collection>>(&format!("/api/collections/{id}"), payload)
            .await?;
        require_data(response, "collection")
    }

    /// DELETE /api/collections/:id - 删除合集
    pub async fn delete_collection(&self, id: &str) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("/api/collections/{id}"))
            .await?;
        Ok(())
    }

    // ========== Services ==========

    /// GET /api/services - 获取服务列表
    pub async fn list_services(&self, query: &ListQuery) -> ClientResult<PaginatedData<Service>> {
        let response = self
            .get_with_query::<ApiResponse<PaginatedData<Service>>>(
                "/api/services",
                &query.to_params(),
            )
            .await?;
        require_data(response, "service list")
    }

    /// GET /api/services/:id - 获取单个服务
    pub async fn get_service(&self, id: &str) -> ClientResult<Service> {
        let response = self
            .get::<ApiResponse<Service>>(&format!("/api/services/{id}"))
            .await?;
        require_data(response, "service")
    }

    /// POST /api/services - 创建服务 (multipart)
    pub async fn create_service(&self, payload: MultipartPayload) -> ClientResult<Service> {
        let response = self
            .post_multipart::<ApiResponse<Service>>("/api/services", payload)
            .await?;
        require_data(response, "service")
    }

    /// PUT /api/services/:id - 更新服务 (multipart)
    pub async fn update_service(
        &self,
        id: &str,
        payload: MultipartPayload,
    ) -> ClientResult<Service> {
        let response = self
            .put_multipart::<ApiResponse<Service>>(&format!("/api/services/{id}"), payload)
            .await?;
        require_data(response, "service")
    }

    /// DELETE /api/services/:id - 删除服务
    pub async fn delete_service(&self, id: &str) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("/api/services/{id}"))
            .await?;
        Ok(())
    }

    // ========== FAQs ==========

    /// GET /api/faqs - 获取 FAQ 列表
    pub async fn list_faqs(&self, query: &ListQuery) -> ClientResult<PaginatedData<Faq>> {
        let response = self
            .get_with_query::<ApiResponse<PaginatedData<Faq>>>("/api/faqs", &query.to_params())
            .await?;
        require_data(response, "faq list")
    }

    /// GET /api/faqs/:id - 获取单个 FAQ
    pub async fn get_faq(&self, id: &str) -> ClientResult<Faq> {
        let response = self
            .get::<ApiResponse<Faq>>(&format!("/api/faqs/{id}"))
            .await?;
        require_data(response, "faq")
    }

    /// POST /api/faqs - 创建 FAQ
    pub async fn create_faq(&self, data: &FaqCreate) -> ClientResult<Faq> {
        let response = self
            .post::<ApiResponse<Faq>, _>("/api/faqs", data)
            .await?;
        require_data(response, "faq")
    }

    /// PUT /api/faqs/:id - 更新 FAQ
    pub async fn update_faq(&self, id: &str, data: &FaqUpdate) -> ClientResult<Faq> {
        let response = self
            .put::<ApiResponse<Faq>, _>(&format!("/api/faqs/{id}"), data)
            .await?;
        require_data(response, "faq")
    }

    /// DELETE /api/faqs/:id - 删除 FAQ
    pub async fn delete_faq(&self, id: &str) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("/api/faqs/{id}"))
            .await?;
        Ok(())
    }

    // ========== Instagram ==========

    /// GET /api/instagram - 获取 Instagram 贴列表
    pub async fn list_instagram_posts(
        &self,
        query: &ListQuery,
    ) -> ClientResult<PaginatedData<InstagramPost>> {
        let response = self
            .get_with_query::<ApiResponse<PaginatedData<InstagramPost>>>(
                "/api/instagram",
                &query.to_params(),
            )
            .await?;
        require_data(response, "instagram list")
    }

    /// POST /api/instagram - 创建 Instagram 贴 (multipart)
    pub async fn create_instagram_post(
        &self,
        payload: MultipartPayload,
    ) -> ClientResult<InstagramPost> {
        let response = self
            .post_multipart::<ApiResponse<InstagramPost>>("/api/instagram", payload)
            .await?;
        require_data(response, "instagram post")
    }

    /// PUT /api/instagram/:id - 更新 Instagram 贴 (multipart)
    pub async fn update_instagram_post(
        &self,
        id: &str,
        payload: MultipartPayload,
    ) -> ClientResult<InstagramPost> {
        let response = self
            .put_multipart::<ApiResponse<InstagramPost>>(&format!("/api/instagram/{id}"), payload)
            .await?;
        require_data(response, "instagram post")
    }

    /// DELETE /api/instagram/:id - 删除 Instagram 贴
    pub async fn delete_instagram_post(&self, id: &str) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("/api/instagram/{id}"))
            .await?;
        Ok(())
    }

    // ========== Reviews ==========

    /// GET /api/reviews - 获取评论列表
    pub async fn list_reviews(&self, query: &ListQuery) -> ClientResult<PaginatedData<Review>> {
        let response = self
            .get_with_query::<ApiResponse<PaginatedData<Review>>>(
                "/api/reviews",
                &query.to_params(),
            )
            .await?;
        require_data(response, "review list")
    }

    /// PUT /api/reviews/:id/approval - 审核/取消审核评论
    pub async fn set_review_approval(&self, id: &str, approved: bool) -> ClientResult<Review> {
        let response = self
            .put::<ApiResponse<Review>, _>(
                &format!("/api/reviews/{id}/approval"),
                &ReviewApproval { approved },
            )
            .await?;
        require_data(response, "review")
    }

    /// DELETE /api/reviews/:id - 删除评论
    pub async fn delete_review(&self, id: &str) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("/api/reviews/{id}"))
            .await?;
        Ok(())
    }
}
