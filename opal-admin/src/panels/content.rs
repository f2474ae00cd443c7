//! Content panels
//!
//! Homepage merchandising: banners, collections, services, FAQs, the
//! Instagram feed and review moderation. Image-carrying forms submit as
//! multipart like the product editor does.

use opal_client::{ClientError, ClientResult, HttpClient};
use shared::models::{
    Banner, Collection, Faq, FaqCreate, FaqUpdate, InstagramPost, Review, Service,
};
use shared::MultipartPayload;
use validator::Validate;

use super::image_field;
use crate::core::ListState;
use crate::editor::ImageSource;

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

// ========== Banners ==========

/// Banner 编辑表单
#[derive(Debug, Clone, Default)]
pub struct BannerForm {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub link: String,
    /// Raw input, forwarded as typed
    pub position: String,
    pub active: bool,
    pub image: Option<ImageSource>,
}

impl BannerForm {
    pub fn edit(banner: &Banner) -> Self {
        Self {
            id: Some(banner.id.clone()),
            title: banner.title.clone(),
            subtitle: banner.subtitle.clone(),
            link: banner.link.clone(),
            position: banner.position.to_string(),
            active: banner.active,
            image: Some(ImageSource::Existing(banner.image.clone())),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Banner title is required".into());
        }
        if self.image.is_none() {
            return Err("Banner image is required".into());
        }
        Ok(())
    }

    pub fn to_payload(&self) -> MultipartPayload {
        let mut payload = MultipartPayload::new();
        payload
            .text("title", self.title.as_str())
            .text("subtitle", self.subtitle.as_str())
            .text("link", self.link.as_str())
            .text("position", self.position.as_str())
            .text("active", flag(self.active));
        if let Some(image) = &self.image {
            image_field(&mut payload, "image", image);
        }
        payload
    }
}

#[derive(Debug, Default)]
pub struct BannersPanel {
    pub list: ListState<Banner>,
}

impl BannersPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &HttpClient) {
        self.list.begin();
        match client.list_banners(&self.list.query).await {
            Ok(page) => self.list.finish(page),
            Err(err) => self.list.fail(err.to_string()),
        }
    }

    pub async fn submit(&mut self, client: &HttpClient, form: &BannerForm) -> ClientResult<Banner> {
        form.validate().map_err(ClientError::Validation)?;
        let saved = match &form.id {
            Some(id) => client.update_banner(id, form.to_payload()).await?,
            None => client.create_banner(form.to_payload()).await?,
        };
        self.refresh(client).await;
        Ok(saved)
    }

    pub async fn delete(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client.delete_banner(id).await?;
        self.refresh(client).await;
        Ok(())
    }
}

// ========== Collections ==========

/// 合集编辑表单
#[derive(Debug, Clone, Default)]
pub struct CollectionForm {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub product_ids: Vec<String>,
    pub image: Option<ImageSource>,
}

impl CollectionForm {
    pub fn edit(collection: &Collection) -> Self {
        Self {
            id: Some(collection.id.clone()),
            name: collection.name.clone(),
            description: collection.description.clone(),
            product_ids: collection.product_ids.clone(),
            image: Some(ImageSource::Existing(collection.image.clone())),
        }
    }

    /// Add a product once; duplicates are ignored
    pub fn add_product(&mut self, product_id: impl Into<String>) {
        let product_id = product_id.into();
        if !self.product_ids.contains(&product_id) {
            self.product_ids.push(product_id);
        }
    }

    pub fn remove_product(&mut self, product_id: &str) {
        self.product_ids.retain(|id| id != product_id);
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Collection name is required".into());
        }
        if self.image.is_none() {
            return Err("Collection image is required".into());
        }
        Ok(())
    }

    pub fn to_payload(&self) -> MultipartPayload {
        let mut payload = MultipartPayload::new();
        payload
            .text("name", self.name.as_str())
            .text("description", self.description.as_str());
        // repeated field, one value per member product
        for product_id in &self.product_ids {
            payload.text("product_ids", product_id.as_str());
        }
        if let Some(image) = &self.image {
            image_field(&mut payload, "image", image);
        }
        payload
    }
}

#[derive(Debug, Default)]
pub struct CollectionsPanel {
    pub list: ListState<Collection>,
}

impl CollectionsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &HttpClient) {
        self.list.begin();
        match client.list_collections(&self.list.query).await {
            Ok(page) => self.list.finish(page),
            Err(err) => self.list.fail(err.to_string()),
        }
    }

    pub async fn submit(
        &mut self,
        client: &HttpClient,
        form: &CollectionForm,
    ) -> ClientResult<Collection> {
        form.validate().map_err(ClientError::Validation)?;
        let saved = match &form.id {
            Some(id) => client.update_collection(id, form.to_payload()).await?,
            None => client.create_collection(form.to_payload()).await?,
        };
        self.refresh(client).await;
        Ok(saved)
    }

    pub async fn delete(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client.delete_collection(id).await?;
        self.refresh(client).await;
        Ok(())
    }
}

// ========== Services ==========

/// 服务项编辑表单
#[derive(Debug, Clone, Default)]
pub struct ServiceForm {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub icon: Option<ImageSource>,
}

impl ServiceForm {
    pub fn edit(service: &Service) -> Self {
        Self {
            id: Some(service.id.clone()),
            title: service.title.clone(),
            description: service.description.clone(),
            icon: Some(ImageSource::Existing(service.icon.clone())),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Service title is required".into());
        }
        if self.icon.is_none() {
            return Err("Service icon is required".into());
        }
        Ok(())
    }

    pub fn to_payload(&self) -> MultipartPayload {
        let mut payload = MultipartPayload::new();
        payload
            .text("title", self.title.as_str())
            .text("description", self.description.as_str());
        if let Some(icon) = &self.icon {
            image_field(&mut payload, "icon", icon);
        }
        payload
    }
}

#[derive(Debug, Default)]
pub struct ServicesPanel {
    pub list: ListState<Service>,
}

impl ServicesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &HttpClient) {
        self.list.begin();
        match client.list_services(&self.list.query).await {
            Ok(page) => self.list.finish(page),
            Err(err) => self.list.fail(err.to_string()),
        }
    }

    pub async fn submit(&mut self, client: &HttpClient, form: &ServiceForm) -> ClientResult<Service> {
        form.validate().map_err(ClientError::Validation)?;
        let saved = match &form.id {
            Some(id) => client.update_service(id, form.to_payload()).await?,
            None => client.create_service(form.to_payload()).await?,
        };
        self.refresh(client).await;
        Ok(saved)
    }

    pub async fn delete(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client.delete_service(id).await?;
        self.refresh(client).await;
        Ok(())
    }
}

// ========== FAQs ==========

/// FAQ 编辑表单
#[derive(Debug, Clone, Default)]
pub struct FaqForm {
    pub id: Option<String>,
    pub question: String,
    pub answer: String,
    pub position: String,
}

impl FaqForm {
    pub fn edit(faq: &Faq) -> Self {
        Self {
            id: Some(faq.id.clone()),
            question: faq.question.clone(),
            answer: faq.answer.clone(),
            position: faq.position.to_string(),
        }
    }

    /// Display slot parsed from raw input, `None` when blank or invalid
    pub fn position_value(&self) -> Option<i32> {
        self.position.trim().parse().ok()
    }
}

#[derive(Debug, Default)]
pub struct FaqsPanel {
    pub list: ListState<Faq>,
}

impl FaqsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &HttpClient) {
        self.list.begin();
        match client.list_faqs(&self.list.query).await {
            Ok(page) => self.list.finish(page),
            Err(err) => self.list.fail(err.to_string()),
        }
    }

    pub async fn submit(&mut self, client: &HttpClient, form: &FaqForm) -> ClientResult<Faq> {
        let saved = match &form.id {
            Some(id) => {
                let data = FaqUpdate {
                    question: Some(form.question.clone()),
                    answer: Some(form.answer.clone()),
                    position: form.position_value(),
                };
                data.validate()
                    .map_err(|e| ClientError::Validation(e.to_string()))?;
                client.update_faq(id, &data).await?
            }
            None => {
                let data = FaqCreate {
                    question: form.question.clone(),
                    answer: form.answer.clone(),
                    position: form.position_value(),
                };
                data.validate()
                    .map_err(|e| ClientError::Validation(e.to_string()))?;
                client.create_faq(&data).await?
            }
        };
        self.refresh(client).await;
        Ok(saved)
    }

    pub async fn delete(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client.delete_faq(id).await?;
        self.refresh(client).await;
        Ok(())
    }
}

// ========== Instagram ==========

/// Instagram 贴编辑表单
#[derive(Debug, Clone, Default)]
pub struct InstagramForm {
    pub id: Option<String>,
    pub link: String,
    pub position: String,
    pub image: Option<ImageSource>,
}

impl InstagramForm {
    pub fn edit(post: &InstagramPost) -> Self {
        Self {
            id: Some(post.id.clone()),
            link: post.link.clone(),
            position: post.position.to_string(),
            image: Some(ImageSource::Existing(post.image.clone())),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.image.is_none() {
            return Err("Post image is required".into());
        }
        Ok(())
    }

    pub fn to_payload(&self) -> MultipartPayload {
        let mut payload = MultipartPayload::new();
        payload
            .text("link", self.link.as_str())
            .text("position", self.position.as_str());
        if let Some(image) = &self.image {
            image_field(&mut payload, "image", image);
        }
        payload
    }
}

#[derive(Debug, Default)]
pub struct InstagramPanel {
    pub list: ListState<InstagramPost>,
}

impl InstagramPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &HttpClient) {
        self.list.begin();
        match client.list_instagram_posts(&self.list.query).await {
            Ok(page) => self.list.finish(page),
            Err(err) => self.list.fail(err.to_string()),
        }
    }

    pub async fn submit(
        &mut self,
        client: &HttpClient,
        form: &InstagramForm,
    ) -> ClientResult<InstagramPost> {
        form.validate().map_err(ClientError::Validation)?;
        let saved = match &form.id {
            Some(id) => client.update_instagram_post(id, form.to_payload()).await?,
            None => client.create_instagram_post(form.to_payload()).await?,
        };
        self.refresh(client).await;
        Ok(saved)
    }

    pub async fn delete(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client.delete_instagram_post(id).await?;
        self.refresh(client).await;
        Ok(())
    }
}

// ========== Reviews ==========

/// 评论审核面板
///
/// Reviews are written storefront-side; here they are only approved,
/// unapproved or removed.
#[derive(Debug, Default)]
pub struct ReviewsPanel {
    pub list: ListState<Review>,
}

impl ReviewsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &HttpClient) {
        self.list.begin();
        match client.list_reviews(&self.list.query).await {
            Ok(page) => self.list.finish(page),
            Err(err) => self.list.fail(err.to_string()),
        }
    }

    /// Restrict to one product; empty id clears the filter
    pub async fn filter_product(&mut self, client: &HttpClient, product_id: &str) {
        if product_id.is_empty() {
            self.list.clear_filter("product_id");
        } else {
            self.list.set_filter("product_id", product_id);
        }
        self.list.set_page(1);
        self.refresh(client).await;
    }

    /// Restrict to approved or pending reviews; `None` clears the filter
    pub async fn filter_approved(&mut self, client: &HttpClient, approved: Option<bool>) {
        match approved {
            Some(value) => self.list.set_filter("approved", flag(value)),
            None => self.list.clear_filter("approved"),
        }
        self.list.set_page(1);
        self.refresh(client).await;
    }

    /// 审核/取消审核
    pub async fn set_approval(
        &mut self,
        client: &HttpClient,
        id: &str,
        approved: bool,
    ) -> ClientResult<Review> {
        let review = client.set_review_approval(id, approved).await?;
        self.refresh(client).await;
        Ok(review)
    }

    pub async fn delete(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client.delete_review(id).await?;
        self.refresh(client).await;
        Ok(())
    }
}
