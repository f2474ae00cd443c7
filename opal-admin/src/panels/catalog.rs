//! Catalog panels
//!
//! Categories, subcategories and attribute definitions. The category form
//! carries an image so it submits as multipart; the other two are JSON
//! payloads validated before they leave the panel.

use opal_client::{ClientError, ClientResult, HttpClient};
use shared::models::{
    AttributeDefinition, AttributeDefinitionCreate, AttributeDefinitionUpdate, AttributeTerm,
    Category, Gender, Subcategory, SubcategoryCreate, SubcategoryUpdate,
};
use shared::MultipartPayload;
use validator::Validate;

use super::image_field;
use crate::core::ListState;
use crate::editor::ImageSource;

// ========== Categories ==========

/// 分类编辑表单
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    /// Present when editing an existing category
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub gender: Option<Gender>,
    pub image: Option<ImageSource>,
}

impl CategoryForm {
    pub fn edit(category: &Category) -> Self {
        let image = if category.image.is_empty() {
            None
        } else {
            Some(ImageSource::Existing(category.image.clone()))
        };
        Self {
            id: Some(category.id.clone()),
            name: category.name.clone(),
            slug: category.slug.clone(),
            gender: Some(category.gender),
            image,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Category name is required".into());
        }
        if self.image.is_none() {
            return Err("Category image is required".into());
        }
        Ok(())
    }

    pub fn to_payload(&self) -> MultipartPayload {
        let mut payload = MultipartPayload::new();
        payload
            .text("name", self.name.as_str())
            .text("slug", self.slug.as_str())
            .text("gender", self.gender.map(|g| g.as_str()).unwrap_or("both"));
        if let Some(image) = &self.image {
            image_field(&mut payload, "image", image);
        }
        payload
    }
}

#[derive(Debug, Default)]
pub struct CategoriesPanel {
    pub list: ListState<Category>,
}

impl CategoriesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &HttpClient) {
        self.list.begin();
        match client.list_categories(&self.list.query).await {
            Ok(page) => self.list.finish(page),
            Err(err) => self.list.fail(err.to_string()),
        }
    }

    /// Create or update depending on whether the form carries an id
    pub async fn submit(&mut self, client: &HttpClient, form: &CategoryForm) -> ClientResult<Category> {
        form.validate().map_err(ClientError::Validation)?;
        let saved = match &form.id {
            Some(id) => client.update_category(id, form.to_payload()).await?,
            None => client.create_category(form.to_payload()).await?,
        };
        self.refresh(client).await;
        Ok(saved)
    }

    pub async fn delete(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client.delete_category(id).await?;
        self.refresh(client).await;
        Ok(())
    }
}

// ========== Subcategories ==========

/// 子分类编辑表单
#[derive(Debug, Clone, Default)]
pub struct SubcategoryForm {
    pub id: Option<String>,
    pub name: String,
    pub category_id: String,
}

impl SubcategoryForm {
    pub fn edit(subcategory: &Subcategory) -> Self {
        Self {
            id: Some(subcategory.id.clone()),
            name: subcategory.name.clone(),
            category_id: subcategory.category_id.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SubcategoriesPanel {
    pub list: ListState<Subcategory>,
}

impl SubcategoriesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &HttpClient) {
        self.list.begin();
        match client.list_subcategories(&self.list.query).await {
            Ok(page) => self.list.finish(page),
            Err(err) => self.list.fail(err.to_string()),
        }
    }

    /// Restrict to one parent category; empty id clears the filter
    pub async fn filter_category(&mut self, client: &HttpClient, category_id: &str) {
        if category_id.is_empty() {
            self.list.clear_filter("category_id");
        } else {
            self.list.set_filter("category_id", category_id);
        }
        self.list.set_page(1);
        self.refresh(client).await;
    }

    pub async fn submit(
        &mut self,
        client: &HttpClient,
        form: &SubcategoryForm,
    ) -> ClientResult<Subcategory> {
        let saved = match &form.id {
            Some(id) => {
                let data = SubcategoryUpdate {
                    name: Some(form.name.clone()),
                    category_id: Some(form.category_id.clone()),
                };
                data.validate()
                    .map_err(|e| ClientError::Validation(e.to_string()))?;
                client.update_subcategory(id, &data).await?
            }
            None => {
                let data = SubcategoryCreate {
                    name: form.name.clone(),
                    category_id: form.category_id.clone(),
                };
                data.validate()
                    .map_err(|e| ClientError::Validation(e.to_string()))?;
                client.create_subcategory(&data).await?
            }
        };
        self.refresh(client).await;
        Ok(saved)
    }

    pub async fn delete(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client.delete_subcategory(id).await?;
        self.refresh(client).await;
        Ok(())
    }
}

// ========== Attribute definitions ==========

/// 属性定义编辑表单
#[derive(Debug, Clone, Default)]
pub struct AttributeForm {
    pub id: Option<String>,
    pub category_id: String,
    pub title: String,
    pub terms: Vec<AttributeTerm>,
}

impl AttributeForm {
    pub fn edit(definition: &AttributeDefinition) -> Self {
        Self {
            id: definition.id.clone(),
            category_id: definition.category_id.clone(),
            title: definition.title.clone(),
            terms: definition.terms.clone(),
        }
    }

    pub fn add_term(&mut self, value: impl Into<String>) {
        self.terms.push(AttributeTerm {
            value: value.into(),
            image: None,
        });
    }

    pub fn remove_term(&mut self, index: usize) {
        if index < self.terms.len() {
            self.terms.remove(index);
        }
    }
}

#[derive(Debug, Default)]
pub struct AttributesPanel {
    pub list: ListState<AttributeDefinition>,
}

impl AttributesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &HttpClient) {
        self.list.begin();
        match client.list_attributes(&self.list.query).await {
            Ok(page) => self.list.finish(page),
            Err(err) => self.list.fail(err.to_string()),
        }
    }

    pub async fn filter_category(&mut self, client: &HttpClient, category_id: &str) {
        if category_id.is_empty() {
            self.list.clear_filter("category_id");
        } else {
            self.list.set_filter("category_id", category_id);
        }
        self.list.set_page(1);
        self.refresh(client).await;
    }

    pub async fn submit(
        &mut self,
        client: &HttpClient,
        form: &AttributeForm,
    ) -> ClientResult<AttributeDefinition> {
        let saved = match &form.id {
            Some(id) => {
                let data = AttributeDefinitionUpdate {
                    category_id: Some(form.category_id.clone()),
                    title: Some(form.title.clone()),
                    terms: Some(form.terms.clone()),
                };
                data.validate()
                    .map_err(|e| ClientError::Validation(e.to_string()))?;
                client.update_attribute(id, &data).await?
            }
            None => {
                let data = AttributeDefinitionCreate {
                    category_id: form.category_id.clone(),
                    title: form.title.clone(),
                    terms: Some(form.terms.clone()),
                };
                data.validate()
                    .map_err(|e| ClientError::Validation(e.to_string()))?;
                client.create_attribute(&data).await?
            }
        };
        self.refresh(client).await;
        Ok(saved)
    }

    pub async fn delete(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client.delete_attribute(id).await?;
        self.refresh(client).await;
        Ok(())
    }
}
